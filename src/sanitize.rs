// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sanitizing text to be placed into an XML document.

use std::borrow::Cow;

use lazy_regex::regex;

/// Strips ASCII control characters not allowed in XML 1.0 from the provided
/// `text`.
///
/// Tab, line feed and carriage return are kept, everything else is left
/// intact, as escaping is up to the XML writer.
#[must_use]
pub fn strip_control_chars(text: &str) -> Cow<'_, str> {
    regex!(r"[\x00-\x08\x0B\x0C\x0E-\x1F]").replace_all(text, "")
}
