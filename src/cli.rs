// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI options of a [`FailureReporter`], to be flattened into a host's CLI.
//!
//! [`FailureReporter`]: crate::FailureReporter

/// CLI options of a [`FailureReporter`].
///
/// [`FailureReporter`]: crate::FailureReporter
#[derive(Clone, Debug, Default, clap::Args)]
#[group(skip)]
pub struct Cli {
    /// Name of the directory inside a module's build directory to write
    /// build failure reports into.
    #[arg(long = "failure-reports-dir", value_name = "NAME", global = true)]
    pub reports_dir: Option<String>,

    /// Disables JUnit XML reports of build failures.
    #[arg(long = "no-failure-reports", global = true)]
    pub disabled: bool,
}
