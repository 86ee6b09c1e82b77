// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Resolution of a failed project's identity.

use crate::event::Project;

/// Placeholder used for identity fields which couldn't be resolved.
pub const UNKNOWN: &str = "unknown";

/// Group and artifact IDs identifying a failed project.
///
/// Both fields are resolved independently: each one is taken from the first
/// [`Project`] having it non-empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProjectIdentity {
    group_id: Option<String>,
    artifact_id: Option<String>,
}

impl ProjectIdentity {
    /// Creates a new unresolved [`ProjectIdentity`].
    #[must_use]
    pub const fn unresolved() -> Self {
        Self { group_id: None, artifact_id: None }
    }

    /// Fills the still missing fields of this [`ProjectIdentity`] from the
    /// provided [`Project`], if any.
    ///
    /// Empty strings are treated as missing.
    #[must_use]
    pub fn or_from(self, project: Option<&Project>) -> Self {
        let Some(project) = project else {
            return self;
        };
        Self {
            group_id: self
                .group_id
                .or_else(|| non_empty(project.group_id.as_deref())),
            artifact_id: self
                .artifact_id
                .or_else(|| non_empty(project.artifact_id.as_deref())),
        }
    }

    /// Returns the group ID, or [`UNKNOWN`] if it wasn't resolved.
    #[must_use]
    pub fn group_id(&self) -> &str {
        self.group_id.as_deref().unwrap_or(UNKNOWN)
    }

    /// Returns the artifact ID, or [`UNKNOWN`] if it wasn't resolved.
    #[must_use]
    pub fn artifact_id(&self) -> &str {
        self.artifact_id.as_deref().unwrap_or(UNKNOWN)
    }

    /// Returns the name used for the report's `testsuite` and `testcase`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.modules.{}", self.group_id(), self.artifact_id())
    }
}

impl From<&Project> for ProjectIdentity {
    fn from(project: &Project) -> Self {
        Self::unresolved().or_from(Some(project))
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(ToOwned::to_owned)
}
