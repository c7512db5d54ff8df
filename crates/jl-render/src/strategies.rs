use jl_types::{ExceptionRecord, ExtraRecord, FieldValue};
use serde_json::{Value, json};

use crate::context::RenderContext;
use crate::decode::{decode, decode_or_default, describe, field_or_default};

/// Generic fallback for any field.
///
/// Text passes through, raw JSON is decoded and described (or returned as-is
/// when it does not parse), and decoded values are described.
pub fn render_default(_ctx: &RenderContext, value: &FieldValue<'_>) -> String {
    match value {
        FieldValue::Text(s) => s.to_string(),
        FieldValue::Raw(raw) => match decode::<Value>(raw) {
            Some(decoded) => describe(&decoded),
            None => String::from_utf8_lossy(raw).into_owned(),
        },
        FieldValue::Error(record) => {
            describe(&json!({"error": record.error, "stack": record.stack}))
        }
        FieldValue::Decoded(decoded) => describe(decoded),
    }
}

/// Multiline rendering of a structured error: the message on its own
/// indented line, then each stack line indented by a tab.
pub fn render_error(ctx: &RenderContext, value: &FieldValue<'_>) -> String {
    let FieldValue::Error(record) = value else {
        return render_default(ctx, value);
    };

    let mut out = String::with_capacity(record.error.len() + record.stack.len() + 8);
    out.push_str("\n  ");
    out.push_str(&record.error);
    out.push('\n');
    out.push('\t');
    out.push_str(&record.stack.split('\n').collect::<Vec<_>>().join("\n\t"));
    out
}

/// A JSON array of trace lines, each emitted on a new line.
pub fn render_trace(_ctx: &RenderContext, value: &FieldValue<'_>) -> String {
    let Some(raw) = value.as_raw() else {
        return String::new();
    };

    let lines: Vec<String> = decode_or_default(raw);
    push_lines(String::new(), &lines)
}

/// An exception record: the file name followed by its trace lines.
///
/// Each key decodes on its own, so a mistyped `trace` still keeps `file`.
pub fn render_exception(_ctx: &RenderContext, value: &FieldValue<'_>) -> String {
    let Some(raw) = value.as_raw() else {
        return String::new();
    };

    let fields: Value = decode_or_default(raw);
    let exception = ExceptionRecord {
        file: field_or_default(&fields, "file"),
        trace: field_or_default(&fields, "trace"),
    };
    push_lines(exception.file, &exception.trace)
}

/// `class:line` for an extra record, or the bare string when the field is
/// just a class name.
pub fn render_extra(_ctx: &RenderContext, value: &FieldValue<'_>) -> String {
    let Some(raw) = value.as_raw() else {
        return String::new();
    };

    if let Some(extra) = decode::<Option<ExtraRecord>>(raw) {
        let extra = extra.unwrap_or_default();
        return format!("{}:{}", extra.class, extra.line);
    }
    decode_or_default(raw)
}

/// Severity name with the long spellings shortened.
pub fn render_level(_ctx: &RenderContext, value: &FieldValue<'_>) -> String {
    let Some(raw) = value.as_raw() else {
        return String::new();
    };

    let level: String = decode_or_default(raw);
    match level.as_str() {
        "WARNING" => "WARN".to_string(),
        "CRITICAL" => "CRIT".to_string(),
        _ => level,
    }
}

fn push_lines(mut out: String, lines: &[String]) -> String {
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out
}
