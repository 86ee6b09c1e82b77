// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`FailureReporter`] turning build failures into JUnit XML reports.

use std::path::PathBuf;

use crate::{
    config::Config,
    error,
    event::Notification,
    extract::{Extractor, FailureRecord},
    gate::{self, Gate},
    log::{Logger, TracingLogger},
    report::FailureReport,
};

/// Reporter of build failures as [JUnit XML reports][1].
///
/// Fed with build lifecycle [`Notification`]s in their delivery order, it
/// writes a report for every failure into
/// `<outputDirectory>/surefire-reports/TEST-<groupId>.modules.<artifactId>.xml`,
/// unless the build output directory already contains test reports.
///
/// Never fails: any error is logged into its [`Logger`] and swallowed, so a
/// host build is never affected.
///
/// [1]: https://llg.cubic.org/docs/junit
#[derive(Debug)]
pub struct FailureReporter<L = TracingLogger> {
    /// [`Config`] of this [`FailureReporter`].
    config: Config,

    /// [`Logger`] to report progress and errors into.
    logger: L,

    /// [`Extractor`] of [`FailureRecord`]s, remembering the default build
    /// output directory.
    extractor: Extractor,
}

impl Default for FailureReporter {
    fn default() -> Self {
        Self::new(Config::default(), TracingLogger)
    }
}

impl<L: Logger> FailureReporter<L> {
    /// Creates a new [`FailureReporter`] with the provided [`Config`] and
    /// [`Logger`].
    #[must_use]
    pub fn new(config: Config, logger: L) -> Self {
        logger.info("Build failure JUnit reporter loaded.");
        let extractor = Extractor::new(config.target_dir.clone());
        Self {
            config,
            logger,
            extractor,
        }
    }

    /// Returns the [`Config`] of this [`FailureReporter`].
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the [`Logger`] of this [`FailureReporter`].
    #[must_use]
    pub const fn logger(&self) -> &L {
        &self.logger
    }

    /// Handles a single [`Notification`], writing a report for every failure
    /// it carries.
    ///
    /// Returns paths of the written reports.
    pub fn on_event(&mut self, notification: Notification) -> Vec<PathBuf> {
        if !self.config.enabled {
            return vec![];
        }
        self.extractor
            .extract(notification, &self.logger)
            .iter()
            .filter_map(|rec| self.report(rec))
            .collect()
    }

    /// Handles the provided [`Notification`]s one by one, in their order.
    ///
    /// Returns paths of all the written reports.
    pub fn on_events(
        &mut self,
        notifications: impl IntoIterator<Item = Notification>,
    ) -> Vec<PathBuf> {
        notifications
            .into_iter()
            .flat_map(|n| self.on_event(n))
            .collect()
    }

    /// Writes a report of the provided [`FailureRecord`].
    ///
    /// Returns [`None`] if the report was skipped or failed to be written.
    pub fn report(&self, record: &FailureRecord) -> Option<PathBuf> {
        self.try_report(record).unwrap_or_else(|e| {
            self.logger.error("Failed to create XML report.", &e);
            None
        })
    }

    fn try_report(&self, record: &FailureRecord) -> error::Result<Option<PathBuf>> {
        let folder = match gate::open(&record.output_directory, &self.config)? {
            Gate::Open(folder) => folder,
            Gate::Closed { existing } => {
                self.logger.debug(&format!(
                    "`{}` already exists, skipping failure report of `{}`",
                    existing.display(),
                    record.identity.full_name(),
                ));
                return Ok(None);
            }
        };

        let path = FailureReport::new(record, &self.config.test_case_name)
            .write_into(&folder)?;
        self.logger.info(&format!(
            "Build failure of `{}` reported into `{}`",
            record.identity.full_name(),
            path.display(),
        ));
        Ok(Some(path))
    }
}
