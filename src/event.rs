// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Build lifecycle [`Notification`]s a [`FailureReporter`] reacts on.
//!
//! [`FailureReporter`]: crate::FailureReporter

use std::{fmt, path::PathBuf};

/// Notification delivered by a build tool during its lifecycle.
#[derive(Clone, Debug)]
pub enum Notification {
    /// Build execution has been requested.
    ///
    /// Seeds the default output directory for failures not attributed to
    /// any specific module.
    ExecutionRequest(ExecutionRequest),

    /// Whole build execution has finished.
    ExecutionResult(ExecutionResult),

    /// Single [`Project`] of the build has failed.
    ProjectFailed(ProjectFailed),

    /// Any other notification, ignored.
    Other,
}

/// Request of a build execution.
#[derive(Clone, Debug)]
pub struct ExecutionRequest {
    /// Directory the build was started in.
    pub base_directory: PathBuf,
}

/// Result of a build execution.
#[derive(Clone, Debug, Default)]
pub struct ExecutionResult {
    /// Top-level [`Project`] of the build, if resolved.
    pub project: Option<Project>,

    /// Causes the build has failed with, in the order reported by the host.
    pub exceptions: Vec<FailureCause>,
}

/// Failure of the currently building [`Project`].
#[derive(Clone, Debug)]
pub struct ProjectFailed {
    /// [`Project`] which has failed.
    pub project: Project,

    /// [`BuildError`] the [`Project`] has failed with.
    pub exception: BuildError,
}

/// Single cause of a failed [`ExecutionResult`].
#[derive(Clone, Debug)]
pub enum FailureCause {
    /// Failure of a lifecycle phase execution, optionally attributed to the
    /// reactor module it happened in.
    LifecycleExecution {
        /// Module the failed phase was executed for.
        project: Option<Project>,

        /// Failure itself.
        error: BuildError,
    },

    /// Any other failure (project building, dependency resolution, etc.).
    Other(BuildError),
}

impl FailureCause {
    /// Returns the [`BuildError`] of this [`FailureCause`].
    #[must_use]
    pub const fn error(&self) -> &BuildError {
        match self {
            Self::LifecycleExecution { error, .. } | Self::Other(error) => {
                error
            }
        }
    }

    /// Returns the reactor module this [`FailureCause`] is attributed to, if
    /// any.
    #[must_use]
    pub const fn project(&self) -> Option<&Project> {
        match self {
            Self::LifecycleExecution { project, .. } => project.as_ref(),
            Self::Other(_) => None,
        }
    }
}

/// Project (or reactor module) being built.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Project {
    /// Group ID of this [`Project`].
    pub group_id: Option<String>,

    /// Artifact ID of this [`Project`].
    pub artifact_id: Option<String>,

    /// Directory this [`Project`] outputs its build artifacts into.
    pub build_directory: Option<PathBuf>,
}

impl Project {
    /// Creates a new [`Project`] with the provided coordinates and no build
    /// directory.
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
    ) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            build_directory: None,
        }
    }

    /// Sets the build output directory of this [`Project`].
    #[must_use]
    pub fn with_build_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.build_directory = Some(dir.into());
        self
    }
}

/// Error a build has failed with, along with the chain of its causes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuildError {
    /// Fully qualified name of this error's type.
    pub type_name: String,

    /// Message of this error.
    pub message: Option<String>,

    /// Stack trace as printed by the host, if it has one.
    pub stack_trace: Option<String>,

    /// Error this one wraps.
    pub cause: Option<Box<BuildError>>,
}

impl BuildError {
    /// Creates a new [`BuildError`] of the provided type with the provided
    /// message.
    #[must_use]
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: Some(message.into()),
            stack_trace: None,
            cause: None,
        }
    }

    /// Sets the [`BuildError`] this one wraps.
    #[must_use]
    pub fn caused_by(mut self, cause: Self) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Sets the host-printed stack trace of this [`BuildError`].
    #[must_use]
    pub fn with_stack_trace(mut self, trace: impl Into<String>) -> Self {
        self.stack_trace = Some(trace.into());
        self
    }

    /// Returns the deepest [`BuildError`] in the chain of causes, or this one
    /// if it has no cause.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Some(cause) = current.cause.as_deref() {
            current = cause;
        }
        current
    }

    /// Iterates over this [`BuildError`] and all its causes, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |e| e.cause.as_deref())
    }

    /// Returns the stack trace of this [`BuildError`].
    ///
    /// If the host didn't provide one, the chain of causes is rendered
    /// instead, one error per line.
    #[must_use]
    pub fn stack_trace_text(&self) -> String {
        if let Some(trace) = &self.stack_trace {
            return trace.clone();
        }
        self.chain()
            .enumerate()
            .map(|(n, e)| {
                if n == 0 {
                    e.to_string()
                } else {
                    format!("Caused by: {e}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {msg}", self.type_name),
            None => write!(f, "{}", self.type_name),
        }
    }
}
