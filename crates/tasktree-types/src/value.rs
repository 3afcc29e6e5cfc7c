use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

/// A single field value carried by a task message.
///
/// Mapping-shaped values are kept apart from every scalar shape so that
/// callers can dispatch on the variant instead of probing the value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Point in time (UTC, no offset attached)
    Timestamp(NaiveDateTime),
    /// Native text
    Text(String),
    /// Raw bytes, assumed to be UTF-8 but not guaranteed
    Bytes(Vec<u8>),
    /// Nested key/value collection
    Mapping(FieldMap),
    /// Anything else: numbers, booleans, null, lists
    Other(Value),
}

impl FieldValue {
    /// Convert a decoded JSON value, keeping object key order.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Object(map) => FieldValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, FieldValue::from_json(v)))
                    .collect(),
            ),
            other => FieldValue::Other(other),
        }
    }

    /// Build a timestamp from fractional seconds since the Unix epoch.
    ///
    /// Precision is rounded to whole microseconds.
    pub fn timestamp_from_epoch(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }
        let micros = (seconds * 1_000_000.0).round();
        if micros < i64::MIN as f64 || micros > i64::MAX as f64 {
            return None;
        }
        DateTime::from_timestamp_micros(micros as i64)
            .map(|dt| FieldValue::Timestamp(dt.naive_utc()))
    }

    pub fn as_mapping(&self) -> Option<&FieldMap> {
        match self {
            FieldValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Seconds since the epoch, for values that denote a point in time.
    ///
    /// Both converted timestamps and raw numeric timestamps qualify.
    pub fn epoch_seconds(&self) -> Option<f64> {
        match self {
            FieldValue::Timestamp(dt) => {
                let utc = dt.and_utc();
                Some(utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_micros()) / 1e6)
            }
            FieldValue::Other(Value::Number(n)) => n.as_f64(),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(bytes: Vec<u8>) -> Self {
        FieldValue::Bytes(bytes)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(dt: NaiveDateTime) -> Self {
        FieldValue::Timestamp(dt)
    }
}

impl From<FieldMap> for FieldValue {
    fn from(map: FieldMap) -> Self {
        FieldValue::Mapping(map)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::from_json(value)
    }
}

/// Insertion-ordered collection of named field values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    entries: Vec<(String, FieldValue)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Insert a value, replacing in place when the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_object_order() {
        let value = FieldValue::from_json(json!({"zeta": 1, "alpha": {"b": "x", "a": "y"}}));
        let map = value.as_mapping().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);

        let nested = map.get("alpha").and_then(FieldValue::as_mapping).unwrap();
        assert_eq!(nested.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(FieldValue::from_json(json!("hi")), FieldValue::Text("hi".into()));
        assert_eq!(FieldValue::from_json(json!(1.5)), FieldValue::Other(json!(1.5)));
        assert_eq!(FieldValue::from_json(json!([1, 2])), FieldValue::Other(json!([1, 2])));
        assert!(FieldValue::from_json(json!(null)).as_mapping().is_none());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = FieldMap::new().with("a", "1").with("b", "2");
        map.insert("a", "3");
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get("a").and_then(FieldValue::as_str), Some("3"));
    }

    #[test]
    fn test_timestamp_from_epoch() {
        let value = FieldValue::timestamp_from_epoch(1_425_356_936.5).unwrap();
        let FieldValue::Timestamp(dt) = &value else {
            panic!("expected timestamp");
        };
        assert_eq!(dt.to_string(), "2015-03-03 04:28:56.500");
        assert_eq!(value.epoch_seconds(), Some(1_425_356_936.5));

        assert!(FieldValue::timestamp_from_epoch(f64::NAN).is_none());
    }
}
