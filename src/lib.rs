// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Synthesizing [JUnit XML reports][1] out of build failures.
//!
//! CI systems often surface only test results, so a build failing before (or
//! instead of) running its tests may look green there. [`FailureReporter`]
//! listens to build lifecycle [`Notification`]s and, for every failed project,
//! writes a report with a single errored test case:
//!
//! ```xml
//! <testsuite name="{groupId}.modules.{artifactId}" tests="1" errors="1" skipped="0" failures="0">
//!   <testcase classname="{groupId}.modules.{artifactId}" name="failedMavenPhase">
//!     <error message="{errorMessage}" type="{errorType}">{errorStacktrace}</error>
//!   </testcase>
//! </testsuite>
//! ```
//!
//! into `{outputDirectory}/surefire-reports/TEST-{groupId}.modules.{artifactId}.xml`,
//! unless the output directory already has `surefire-reports` or
//! `failsafe-reports` in it.
//!
//! ```rust
//! use build_failure_junit::{
//!     event::{BuildError, ProjectFailed},
//!     Config, FailureReporter, Notification, Project, TracingLogger,
//! };
//!
//! # let tmp = tempfile::TempDir::new().unwrap();
//! # let target = tmp.path().join("target");
//! let mut reporter = FailureReporter::new(Config::default(), TracingLogger);
//! let written = reporter.on_event(Notification::ProjectFailed(ProjectFailed {
//!     project: Project::new("org.x", "core").with_build_directory(&target),
//!     exception: BuildError::new("java.lang.IllegalStateException", "boom"),
//! }));
//!
//! assert_eq!(
//!     written,
//!     [target.join("surefire-reports/TEST-org.x.modules.core.xml")],
//! );
//! ```
//!
//! [1]: https://llg.cubic.org/docs/junit

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(missing_debug_implementations, missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod extract;
pub mod gate;
pub mod identity;
pub mod log;
pub mod report;
mod reporter;
pub mod sanitize;
#[cfg(test)]
mod test_utils;

#[doc(inline)]
pub use self::{
    cli::Cli,
    config::Config,
    error::{Error, Result},
    event::{BuildError, Notification, Project},
    extract::FailureRecord,
    identity::ProjectIdentity,
    log::{Logger, TracingLogger},
    reporter::FailureReporter,
};
