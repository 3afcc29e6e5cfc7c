use anyhow::{Result, bail};
use tasktree_engine::TaskFilter;
use tasktree_types::{FieldValue, Task};

/// Parse a `KEY=VALUE` selector into a message filter.
///
/// A message matches when its top-level field `KEY` is text equal to
/// `VALUE`, or a non-text scalar whose literal form equals `VALUE`
/// (so `code=200` and `ok=true` work).
pub fn select_filter(expr: &str) -> Result<TaskFilter> {
    let Some((key, expected)) = expr.split_once('=') else {
        bail!("Invalid selector '{}': expected KEY=VALUE", expr);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("Invalid selector '{}': key is empty", expr);
    }

    let key = key.to_string();
    let expected = expected.to_string();
    Ok(Box::new(move |task: &Task| {
        task.get(&key).is_some_and(|value| matches_value(value, &expected))
    }))
}

fn matches_value(value: &FieldValue, expected: &str) -> bool {
    match value {
        FieldValue::Text(s) => s == expected,
        FieldValue::Other(json) => json.to_string() == expected,
        FieldValue::Bytes(bytes) => bytes.as_slice() == expected.as_bytes(),
        FieldValue::Timestamp(_) | FieldValue::Mapping(_) => false,
    }
}
