// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [JUnit XML report][1] of a single build failure.
//!
//! [1]: https://llg.cubic.org/docs/junit

use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use quick_xml::{
    escape::escape,
    events::{
        attributes::Attribute, BytesDecl, BytesEnd, BytesStart, BytesText,
        Event,
    },
    name::QName,
    Writer,
};

use crate::{error, extract::FailureRecord, sanitize::strip_control_chars};

/// [JUnit XML report][1] describing a single [`FailureRecord`] as a
/// `testsuite` with a single errored `testcase`.
///
/// [1]: https://llg.cubic.org/docs/junit
#[derive(Clone, Debug)]
pub struct FailureReport<'a> {
    /// `<groupId>.modules.<artifactId>` name of the failed project.
    full_name: String,

    /// Name of the `testcase`.
    test_case_name: &'a str,

    /// Type name of the failure's root cause.
    error_type: &'a str,

    /// Sanitized message of the failure.
    message: Cow<'a, str>,

    /// Sanitized stack trace of the failure.
    stack_trace: String,
}

impl<'a> FailureReport<'a> {
    /// Creates a new [`FailureReport`] out of the provided [`FailureRecord`].
    #[must_use]
    pub fn new(record: &'a FailureRecord, test_case_name: &'a str) -> Self {
        let message = record.error.message.as_deref().unwrap_or_default();
        Self {
            full_name: record.identity.full_name(),
            test_case_name,
            error_type: record.error_type(),
            message: strip_control_chars(message),
            stack_trace: strip_control_chars(&record.error.stack_trace_text())
                .into_owned(),
        }
    }

    /// Returns the name of the file this [`FailureReport`] is written into.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("TEST-{}.xml", self.full_name)
    }

    /// Serializes this [`FailureReport`] into an XML document.
    ///
    /// # Errors
    ///
    /// If the XML writer fails.
    pub fn to_xml(&self) -> error::Result<Vec<u8>> {
        let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);

        w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        w.write_event(Event::Start(BytesStart::new("testsuite").with_attributes([
            ("name", self.full_name.as_str()),
            ("tests", "1"),
            ("errors", "1"),
            ("skipped", "0"),
            ("failures", "0"),
        ])))?;
        w.write_event(Event::Start(BytesStart::new("testcase").with_attributes([
            ("classname", self.full_name.as_str()),
            ("name", self.test_case_name),
        ])))?;
        w.write_event(Event::Start(BytesStart::new("error").with_attributes([
            attribute("message", &self.message),
            attribute("type", self.error_type),
        ])))?;
        w.write_event(Event::Text(BytesText::new(&self.stack_trace)))?;
        w.write_event(Event::End(BytesEnd::new("error")))?;
        w.write_event(Event::End(BytesEnd::new("testcase")))?;
        w.write_event(Event::End(BytesEnd::new("testsuite")))?;

        Ok(w.into_inner())
    }

    /// Writes this [`FailureReport`] into the provided `folder`, overwriting
    /// any existing report of the same project.
    ///
    /// # Errors
    ///
    /// If serializing or writing the file fails.
    pub fn write_into(&self, folder: &Path) -> error::Result<PathBuf> {
        let xml = self.to_xml()?;
        let path = folder.join(self.file_name());
        fs::write(&path, xml).map_err(|e| error::Error::io(&path, e))?;
        Ok(path)
    }
}

/// Creates an [`Attribute`] with the provided `value` escaped, including
/// whitespace an XML parser would otherwise normalize into spaces.
fn attribute<'a>(key: &'a str, value: &str) -> Attribute<'a> {
    let escaped = escape(value)
        .replace('\t', "&#9;")
        .replace('\n', "&#10;")
        .replace('\r', "&#13;");
    Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(escaped.into_bytes()),
    }
}
