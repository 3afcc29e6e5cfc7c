use crate::presentation::encoding::OutputEncoding;
use chrono::{NaiveDateTime, Timelike};
use std::borrow::Cow;
use tasktree_types::FieldValue;

/// Marker appended to values that were shortened.
pub const TRUNCATION_MARKER: &str = " [...]";

/// Single-line display text for a field value.
///
/// Timestamps are ISO-8601 with a space between date and time, text is shown
/// as-is, bytes are decoded as UTF-8 with replacement, and everything else
/// uses its literal representation. The result is passed through `encoding`.
pub fn format_value(value: &FieldValue, encoding: OutputEncoding) -> String {
    let text: Cow<'_, str> = match value {
        FieldValue::Timestamp(dt) => Cow::Owned(format_timestamp(dt)),
        FieldValue::Text(s) => Cow::Borrowed(s),
        FieldValue::Bytes(bytes) => String::from_utf8_lossy(bytes),
        FieldValue::Mapping(_) | FieldValue::Other(_) => Cow::Owned(repr(value)),
    };
    encoding.normalize(&text).into_owned()
}

/// `YYYY-MM-DD HH:MM:SS[.ffffff]`; the fraction is omitted when zero.
pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    let base = dt.format("%Y-%m-%d %H:%M:%S").to_string();
    let micros = dt.nanosecond() / 1_000;
    if micros == 0 {
        base
    } else {
        format!("{}.{:06}", base, micros)
    }
}

/// Keep only the first line, cutting it to `limit` characters.
///
/// The marker is added when the line is too long or when later lines were
/// dropped, even if the first line is short.
pub fn truncate_value(value: &str, limit: usize) -> String {
    let mut lines = value.split('\n');
    let first = lines.next().unwrap_or_default();
    let multi_line = lines.next().is_some();

    if multi_line || first.chars().count() > limit {
        let kept: String = first.chars().take(limit).collect();
        format!("{}{}", kept, TRUNCATION_MARKER)
    } else {
        first.to_string()
    }
}

fn repr(value: &FieldValue) -> String {
    match value {
        FieldValue::Timestamp(dt) => format_timestamp(dt),
        FieldValue::Text(s) => quote(s),
        FieldValue::Bytes(bytes) => quote(&String::from_utf8_lossy(bytes)),
        FieldValue::Mapping(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", quote(k), repr(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        FieldValue::Other(json) => json.to_string(),
    }
}

fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
