// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration of a [`FailureReporter`].
//!
//! [`FailureReporter`]: crate::FailureReporter

use smart_default::SmartDefault;

use crate::cli::Cli;

/// Configuration of a [`FailureReporter`].
///
/// Defaults follow the conventional layout of a Maven build.
///
/// [`FailureReporter`]: crate::FailureReporter
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct Config {
    /// Whether failure reports are generated at all.
    #[default = true]
    pub enabled: bool,

    /// Name of the build output directory inside a base directory, used for
    /// failures not attributed to any module.
    #[default = "target"]
    pub target_dir: String,

    /// Name of the directory inside a build output directory to write
    /// reports into.
    #[default = "surefire-reports"]
    pub reports_dir: String,

    /// Names of directories inside a build output directory, presence of
    /// which means genuine test reports exist, so no failure report should
    /// be written.
    #[default(_code = r#"vec!["surefire-reports".into(), "failsafe-reports".into()]"#)]
    pub guarded_dirs: Vec<String>,

    /// Name of the single `testcase` of a failure report.
    #[default = "failedMavenPhase"]
    pub test_case_name: String,
}

impl Config {
    /// Applies the provided [`Cli`] options on top of this [`Config`].
    pub fn apply_cli(&mut self, cli: &Cli) {
        if cli.disabled {
            self.enabled = false;
        }
        if let Some(dir) = &cli.reports_dir {
            self.reports_dir.clone_from(dir);
        }
    }

    /// Returns this [`Config`] with the provided [`Cli`] options applied.
    #[must_use]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        self.apply_cli(cli);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_maven_layout() {
        let cfg = Config::default();

        assert!(cfg.enabled);
        assert_eq!(cfg.target_dir, "target");
        assert_eq!(cfg.reports_dir, "surefire-reports");
        assert_eq!(cfg.guarded_dirs, ["surefire-reports", "failsafe-reports"]);
        assert_eq!(cfg.test_case_name, "failedMavenPhase");
    }

    #[test]
    fn default_cli_changes_nothing() {
        assert_eq!(Config::default().with_cli(&Cli::default()), Config::default());
    }

    #[test]
    fn cli_overrides() {
        let cli = Cli {
            reports_dir: Some("build-failures".into()),
            disabled: true,
        };
        let cfg = Config::default().with_cli(&cli);

        assert!(!cfg.enabled);
        assert_eq!(cfg.reports_dir, "build-failures");
        assert_eq!(cfg.guarded_dirs, Config::default().guarded_dirs);
    }
}
