// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Helpers shared by unit tests.

use std::{cell::RefCell, error::Error as StdError};

use crate::Logger;

/// Level of a [`Captured`] log line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// [`Logger`] remembering every line logged into it.
#[derive(Debug, Default)]
pub(crate) struct Captured(RefCell<Vec<(Level, String)>>);

impl Captured {
    pub(crate) fn lines(&self, level: Level) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    fn push(&self, level: Level, message: String) {
        self.0.borrow_mut().push((level, message));
    }
}

impl Logger for Captured {
    fn debug(&self, message: &str) {
        self.push(Level::Debug, message.into());
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message.into());
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message.into());
    }

    fn error(&self, message: &str, error: &dyn StdError) {
        self.push(Level::Error, format!("{message} {error}"));
    }
}
