use serde_json::Value;

use crate::record::ErrorRecord;

/// A single field value extracted from a log line, ready to be rendered.
///
/// Values are borrowed from the caller and never held past a render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Plain text, already unquoted
    Text(&'a str),

    /// Undecoded JSON text as it appeared in the log line
    Raw(&'a [u8]),

    /// Structured error (message + stack) recognised by the caller
    Error(&'a ErrorRecord),

    /// Any other already-decoded JSON value
    Decoded(&'a Value),
}

impl<'a> FieldValue<'a> {
    pub fn text(s: &'a str) -> Self {
        FieldValue::Text(s)
    }

    pub fn raw(bytes: &'a [u8]) -> Self {
        FieldValue::Raw(bytes)
    }

    /// Returns the undecoded JSON span, if this value is one.
    pub fn as_raw(&self) -> Option<&'a [u8]> {
        match *self {
            FieldValue::Raw(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(s: &'a str) -> Self {
        FieldValue::Text(s)
    }
}

impl<'a> From<&'a [u8]> for FieldValue<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        FieldValue::Raw(bytes)
    }
}

impl<'a> From<&'a ErrorRecord> for FieldValue<'a> {
    fn from(record: &'a ErrorRecord) -> Self {
        FieldValue::Error(record)
    }
}

impl<'a> From<&'a Value> for FieldValue<'a> {
    fn from(value: &'a Value) -> Self {
        FieldValue::Decoded(value)
    }
}
