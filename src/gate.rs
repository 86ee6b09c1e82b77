// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Deciding whether a failure report may be written into a build output
//! directory.

use std::{
    fs, iter,
    path::{Path, PathBuf},
};

use crate::{config::Config, error};

/// Outcome of checking a build output directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Gate {
    /// Reports directory has been created, and a report may be written into
    /// it.
    Open(PathBuf),

    /// Test reports directory already exists, so genuine test reports take
    /// precedence over a failure report.
    Closed {
        /// Already existing reports directory.
        existing: PathBuf,
    },
}

/// Checks the provided build `output_dir` for already existing reports
/// directories, and creates the one to write a failure report into if there
/// are none.
///
/// # Errors
///
/// If the reports directory fails to be created.
pub fn open(output_dir: &Path, config: &Config) -> error::Result<Gate> {
    let existing = iter::once(&config.reports_dir)
        .chain(&config.guarded_dirs)
        .map(|name| output_dir.join(name))
        .find(|dir| dir.is_dir());
    if let Some(existing) = existing {
        return Ok(Gate::Closed { existing });
    }

    let dir = output_dir.join(&config.reports_dir);
    fs::create_dir_all(&dir).map_err(|e| error::Error::io(&dir, e))?;
    Ok(Gate::Open(dir))
}
