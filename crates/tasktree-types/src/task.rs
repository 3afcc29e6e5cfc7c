use crate::value::{FieldMap, FieldValue};
use crate::{Error, Result};
use serde_json::Value;

pub const TASK_UUID: &str = "task_uuid";
pub const TASK_LEVEL: &str = "task_level";
pub const TIMESTAMP: &str = "timestamp";
pub const MESSAGE_TYPE: &str = "message_type";
pub const ACTION_TYPE: &str = "action_type";
pub const ACTION_STATUS: &str = "action_status";

/// One logged message: a flat mapping of field names to values.
///
/// Every message belongs to a task (`task_uuid`) and sits at a position
/// within it (`task_level`). Messages are either plain messages
/// (`message_type`) or action start/end markers (`action_type` plus
/// `action_status`).
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    fields: FieldMap,
}

impl Task {
    pub fn new(fields: FieldMap) -> Self {
        Self { fields }
    }

    /// Parse a decoded JSON message.
    pub fn from_json(value: Value) -> Result<Self> {
        match FieldValue::from_json(value) {
            FieldValue::Mapping(fields) => Ok(Self { fields }),
            FieldValue::Text(_) => Err(Error::NotAnObject("a string".to_string())),
            FieldValue::Other(other) => Err(Error::NotAnObject(json_kind(&other).to_string())),
            FieldValue::Timestamp(_) | FieldValue::Bytes(_) => {
                Err(Error::NotAnObject("a scalar".to_string()))
            }
        }
    }

    /// Parse one line of JSON text.
    pub fn from_json_str(line: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(line)?;
        Self::from_json(value)
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn task_uuid(&self) -> Result<&str> {
        self.required_str(TASK_UUID)
    }

    pub fn task_level(&self) -> Result<Vec<u64>> {
        let value = self.fields.get(TASK_LEVEL).ok_or(Error::MissingField(TASK_LEVEL))?;
        let invalid = |reason: &str| Error::InvalidField {
            key: TASK_LEVEL,
            reason: reason.to_string(),
        };

        let FieldValue::Other(Value::Array(items)) = value else {
            return Err(invalid("expected a list of integers"));
        };
        if items.is_empty() {
            return Err(invalid("level is empty"));
        }
        items
            .iter()
            .map(|item| item.as_u64().ok_or_else(|| invalid("expected a list of integers")))
            .collect()
    }

    pub fn message_type(&self) -> Option<&str> {
        self.fields.get(MESSAGE_TYPE).and_then(FieldValue::as_str)
    }

    pub fn action_type(&self) -> Result<&str> {
        self.required_str(ACTION_TYPE)
    }

    pub fn action_status(&self) -> Result<&str> {
        self.required_str(ACTION_STATUS)
    }

    pub fn timestamp(&self) -> Option<&FieldValue> {
        self.fields.get(TIMESTAMP)
    }

    /// Replace a numeric `timestamp` (seconds since the epoch) with a
    /// [`FieldValue::Timestamp`]. Anything else is left as-is.
    pub fn with_human_readable_timestamp(mut self) -> Self {
        let converted = match self.fields.get(TIMESTAMP) {
            Some(FieldValue::Other(Value::Number(n))) => {
                n.as_f64().and_then(FieldValue::timestamp_from_epoch)
            }
            _ => None,
        };
        if let Some(ts) = converted {
            self.fields.insert(TIMESTAMP, ts);
        }
        self
    }

    fn required_str(&self, key: &'static str) -> Result<&str> {
        match self.fields.get(key) {
            Some(FieldValue::Text(s)) => Ok(s),
            Some(_) => Err(Error::InvalidField {
                key,
                reason: "expected a string".to_string(),
            }),
            None => Err(Error::MissingField(key)),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
