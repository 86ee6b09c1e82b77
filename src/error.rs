// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of failure reports generation.

use std::{
    io,
    path::{Path, PathBuf},
};

use derive_more::{Display, Error};

/// Error of generating a failure report.
///
/// Never escapes a [`FailureReporter`], which only logs it.
///
/// [`FailureReporter`]: crate::FailureReporter
#[derive(Debug, Display, Error)]
pub enum Error {
    /// I/O operation on a file or directory has failed.
    #[display("I/O operation on `{}` failed: {source}", path.display())]
    Io {
        /// Path the operation has failed on.
        path: PathBuf,

        /// Underlying I/O error.
        source: io::Error,
    },

    /// Serializing XML document has failed.
    #[display("XML generation failed: {_0}")]
    Xml(quick_xml::Error),
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new [`Error::Io`] happened on the provided `path`.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_owned(),
            source,
        }
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err)
    }
}
