// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Classification of [`Notification`]s into [`FailureRecord`]s.

use std::path::{self, Path, PathBuf};

use crate::{
    event::{BuildError, FailureCause, Notification, Project},
    identity::ProjectIdentity,
    log::Logger,
};

/// Single build failure to be reported.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FailureRecord {
    /// Identity of the failed project.
    pub identity: ProjectIdentity,

    /// Build output directory of the failed project.
    pub output_directory: PathBuf,

    /// [`BuildError`] the project has failed with, as received.
    pub error: BuildError,
}

impl FailureRecord {
    /// Returns the type name of the root cause of this failure.
    #[must_use]
    pub fn error_type(&self) -> &str {
        &self.error.root_cause().type_name
    }
}

/// Extractor of [`FailureRecord`]s from a stream of [`Notification`]s.
///
/// Remembers the build output directory of the last seen
/// [`Notification::ExecutionRequest`] and uses it for failures not
/// attributed to any module.
#[derive(Clone, Debug)]
pub struct Extractor {
    /// Name of the build output directory inside a base directory.
    target_dir: String,

    /// Default build output directory, if an execution request was seen.
    default_output: Option<PathBuf>,
}

impl Extractor {
    /// Creates a new [`Extractor`] resolving default build output
    /// directories as `target_dir` inside a base directory.
    #[must_use]
    pub fn new(target_dir: impl Into<String>) -> Self {
        Self {
            target_dir: target_dir.into(),
            default_output: None,
        }
    }

    /// Returns the build output directory for failures not attributed to any
    /// module.
    ///
    /// Until an execution request is seen, the current working directory is
    /// considered the base one.
    #[must_use]
    pub fn default_output_directory(&self) -> PathBuf {
        self.default_output
            .clone()
            .unwrap_or_else(|| absolute(Path::new(&self.target_dir)))
    }

    /// Extracts [`FailureRecord`]s out of the provided [`Notification`].
    ///
    /// Doesn't touch the file system.
    pub fn extract<L: Logger + ?Sized>(
        &mut self,
        notification: Notification,
        logger: &L,
    ) -> Vec<FailureRecord> {
        match notification {
            Notification::ExecutionRequest(req) => {
                let dir = absolute(&req.base_directory.join(&self.target_dir));
                logger.debug(&format!(
                    "Default build output directory is `{}`",
                    dir.display(),
                ));
                self.default_output = Some(dir);
                vec![]
            }
            Notification::ExecutionResult(res) => {
                let default = self.default_output_directory();
                res.exceptions
                    .into_iter()
                    .map(|cause| {
                        Self::from_cause(cause, res.project.as_ref(), &default)
                    })
                    .collect()
            }
            Notification::ProjectFailed(ev) => {
                let Some(dir) = ev.project.build_directory.clone() else {
                    logger.warn(&format!(
                        "Project `{}` has failed without a build directory, \
                         so no failure report will be written",
                        ProjectIdentity::from(&ev.project).full_name(),
                    ));
                    return vec![];
                };
                vec![FailureRecord {
                    identity: ProjectIdentity::from(&ev.project),
                    output_directory: dir,
                    error: ev.exception,
                }]
            }
            Notification::Other => vec![],
        }
    }

    /// Forms a [`FailureRecord`] out of a single [`FailureCause`] of an
    /// execution result.
    fn from_cause(
        cause: FailureCause,
        top: Option<&Project>,
        default_output: &Path,
    ) -> FailureRecord {
        let (module, error) = match cause {
            FailureCause::LifecycleExecution { project, error } => {
                (project, error)
            }
            FailureCause::Other(error) => (None, error),
        };

        let output_directory = module
            .as_ref()
            .and_then(|p| p.build_directory.clone())
            .unwrap_or_else(|| default_output.to_owned());
        let identity = ProjectIdentity::unresolved()
            .or_from(module.as_ref())
            .or_from(top);

        FailureRecord {
            identity,
            output_directory,
            error,
        }
    }
}

fn absolute(p: &Path) -> PathBuf {
    path::absolute(p).unwrap_or_else(|_| p.to_owned())
}

#[cfg(test)]
mod tests {
    use std::env;

    use crate::{
        event::{ExecutionRequest, ExecutionResult, ProjectFailed},
        test_utils::{Captured, Level},
    };

    use super::*;

    fn lifecycle(project: Option<Project>) -> FailureCause {
        FailureCause::LifecycleExecution {
            project,
            error: BuildError::new(
                "org.apache.maven.lifecycle.LifecycleExecutionException",
                "bad config",
            )
            .caused_by(BuildError::new(
                "java.lang.IllegalStateException",
                "bad config",
            )),
        }
    }

    fn request(base: &str) -> Notification {
        Notification::ExecutionRequest(ExecutionRequest {
            base_directory: base.into(),
        })
    }

    #[test]
    fn request_emits_nothing_and_seeds_default() {
        let log = Captured::default();
        let mut extractor = Extractor::new("target");

        assert!(extractor.extract(request("/repo"), &log).is_empty());
        assert_eq!(
            extractor.default_output_directory(),
            PathBuf::from("/repo/target"),
        );
        assert_eq!(log.lines(Level::Debug).len(), 1);
    }

    #[test]
    fn default_is_cwd_target_without_request() {
        let extractor = Extractor::new("target");

        assert_eq!(
            extractor.default_output_directory(),
            env::current_dir().unwrap().join("target"),
        );
    }

    #[test]
    fn lifecycle_failure_uses_module() {
        let mut extractor = Extractor::new("target");
        let module = Project::new("com.acme", "widgets")
            .with_build_directory("/repo/widgets/target");

        let records = extractor.extract(
            Notification::ExecutionResult(ExecutionResult {
                project: Some(Project::new("com.acme", "parent")),
                exceptions: vec![lifecycle(Some(module))],
            }),
            &Captured::default(),
        );

        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.identity.full_name(), "com.acme.modules.widgets");
        assert_eq!(rec.output_directory, PathBuf::from("/repo/widgets/target"));
        assert_eq!(rec.error_type(), "java.lang.IllegalStateException");
        assert_eq!(
            rec.error.type_name,
            "org.apache.maven.lifecycle.LifecycleExecutionException",
        );
    }

    #[test]
    fn missing_module_falls_back_to_top_project() {
        let mut extractor = Extractor::new("target");
        let log = Captured::default();
        drop(extractor.extract(request("/repo"), &log));

        let records = extractor.extract(
            Notification::ExecutionResult(ExecutionResult {
                project: Some(Project {
                    group_id: Some("org.y".into()),
                    ..Project::default()
                }),
                exceptions: vec![lifecycle(None)],
            }),
            &log,
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identity.full_name(), "org.y.modules.unknown");
        assert_eq!(records[0].output_directory, PathBuf::from("/repo/target"));
    }

    #[test]
    fn module_without_build_directory_uses_default() {
        let mut extractor = Extractor::new("target");
        let log = Captured::default();
        drop(extractor.extract(request("/repo"), &log));

        let records = extractor.extract(
            Notification::ExecutionResult(ExecutionResult {
                project: None,
                exceptions: vec![lifecycle(Some(Project::new("org.z", "m")))],
            }),
            &log,
        );

        assert_eq!(records[0].identity.full_name(), "org.z.modules.m");
        assert_eq!(records[0].output_directory, PathBuf::from("/repo/target"));
    }

    #[test]
    fn one_record_per_cause_in_order() {
        let mut extractor = Extractor::new("target");
        let log = Captured::default();
        drop(extractor.extract(request("/repo"), &log));

        let records = extractor.extract(
            Notification::ExecutionResult(ExecutionResult {
                project: Some(Project::new("org.top", "top")),
                exceptions: vec![
                    lifecycle(Some(
                        Project::new("org.top", "a")
                            .with_build_directory("/repo/a/target"),
                    )),
                    FailureCause::Other(BuildError::new(
                        "org.apache.maven.project.ProjectBuildingException",
                        "broken pom",
                    )),
                ],
            }),
            &log,
        );

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].identity.full_name(), "org.top.modules.a");
        assert_eq!(records[0].output_directory, PathBuf::from("/repo/a/target"));
        assert_eq!(records[1].identity.full_name(), "org.top.modules.top");
        assert_eq!(records[1].output_directory, PathBuf::from("/repo/target"));
    }

    #[test]
    fn project_failed_ignores_default() {
        let mut extractor = Extractor::new("target");
        let log = Captured::default();
        drop(extractor.extract(request("/elsewhere"), &log));

        let records = extractor.extract(
            Notification::ProjectFailed(ProjectFailed {
                project: Project::new("org.x", "core")
                    .with_build_directory("/repo/target"),
                exception: BuildError::new("java.lang.RuntimeException", "boom"),
            }),
            &log,
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identity.full_name(), "org.x.modules.core");
        assert_eq!(records[0].output_directory, PathBuf::from("/repo/target"));
    }

    #[test]
    fn project_failed_without_directory_is_skipped() {
        let mut extractor = Extractor::new("target");
        let log = Captured::default();

        let records = extractor.extract(
            Notification::ProjectFailed(ProjectFailed {
                project: Project::new("org.x", "core"),
                exception: BuildError::new("java.lang.RuntimeException", "boom"),
            }),
            &log,
        );

        assert!(records.is_empty());
        assert_eq!(log.lines(Level::Warn).len(), 1);
        assert!(log.lines(Level::Warn)[0].contains("org.x.modules.core"));
    }

    #[test]
    fn ignores_other_notifications() {
        let mut extractor = Extractor::new("target");

        assert!(extractor
            .extract(Notification::Other, &Captured::default())
            .is_empty());
        assert!(extractor
            .extract(
                Notification::ExecutionResult(ExecutionResult::default()),
                &Captured::default(),
            )
            .is_empty());
    }
}
