// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Logging collaborator of a [`FailureReporter`].
//!
//! [`FailureReporter`]: crate::FailureReporter

use std::error::Error as StdError;

/// Sink of messages emitted while reporting build failures.
///
/// Passed explicitly to a [`FailureReporter`], so hosts may route messages
/// into their own logging facilities. [`TracingLogger`] is used by default.
///
/// [`FailureReporter`]: crate::FailureReporter
pub trait Logger {
    /// Logs a diagnostic message.
    fn debug(&self, message: &str);

    /// Logs an informational message.
    fn info(&self, message: &str);

    /// Logs a message about something unexpected, but recoverable.
    fn warn(&self, message: &str);

    /// Logs a failure along with the `error` caused it.
    fn error(&self, message: &str, error: &dyn StdError);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn debug(&self, message: &str) {
        (**self).debug(message);
    }

    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }

    fn error(&self, message: &str, error: &dyn StdError) {
        (**self).error(message, error);
    }
}

/// [`Logger`] forwarding messages into [`tracing`] events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str, error: &dyn StdError) {
        tracing::error!(error = %error, "{message}");
    }
}
