//! Fixtures for sample log generation.
//!
//! Provides utilities to:
//! - Build Eliot-style messages for a single task with consistent UUID,
//!   levels and timestamps
//! - Serialize them as JSON lines for CLI input
//! - Convert them into parsed `Task`s for library tests

use serde_json::{Map, Value, json};
use tasktree_types::Task;
use uuid::Uuid;

/// Builder for the messages of one task.
///
/// Every message gets the task's UUID and a timestamp one second after the
/// previous message. Fields appear in the order Eliot writes them:
/// `timestamp`, `task_uuid`, `task_level`, the type fields, then extras.
#[derive(Debug, Clone)]
pub struct TaskLog {
    uuid: String,
    start: f64,
    messages: Vec<Value>,
}

impl TaskLog {
    /// Start a task with a random UUID.
    pub fn new(start: f64) -> Self {
        Self::with_uuid(Uuid::new_v4().to_string(), start)
    }

    pub fn with_uuid(uuid: impl Into<String>, start: f64) -> Self {
        Self {
            uuid: uuid.into(),
            start,
            messages: Vec::new(),
        }
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Append an action start or end marker.
    pub fn action(self, level: &[u64], action_type: &str, status: &str, extra: Value) -> Self {
        self.push(
            level,
            [
                ("action_type", json!(action_type)),
                ("action_status", json!(status)),
            ],
            extra,
        )
    }

    /// Append a plain message.
    pub fn message(self, level: &[u64], message_type: &str, extra: Value) -> Self {
        self.push(level, [("message_type", json!(message_type))], extra)
    }

    pub fn messages(&self) -> &[Value] {
        &self.messages
    }

    /// Parsed tasks, in the order they were appended.
    pub fn tasks(&self) -> Vec<Task> {
        self.messages
            .iter()
            .map(|m| Task::from_json(m.clone()).expect("fixture messages are objects"))
            .collect()
    }

    /// One JSON document per line, newline terminated.
    pub fn to_json_lines(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("{}\n", m))
            .collect()
    }

    fn push<const N: usize>(
        mut self,
        level: &[u64],
        kind: [(&str, Value); N],
        extra: Value,
    ) -> Self {
        let mut message = Map::new();
        message.insert(
            "timestamp".to_string(),
            json!(self.start + self.messages.len() as f64),
        );
        message.insert("task_uuid".to_string(), json!(self.uuid));
        message.insert("task_level".to_string(), json!(level));
        for (key, value) in kind {
            message.insert(key.to_string(), value);
        }
        if let Value::Object(extra) = extra {
            message.extend(extra);
        }
        self.messages.push(Value::Object(message));
        self
    }
}

/// A small HTTP request task: an action with a nested mapping field, a
/// multi-line log message, and a successful end marker.
pub fn http_request_task(start: f64) -> TaskLog {
    TaskLog::with_uuid("8c668cde-235b-4872-af4e-caea524bd1c0", start)
        .action(
            &[1],
            "app:soap:client:request",
            "started",
            json!({
                "dump": "/home/user/dump_files",
                "soapAction": "urn:namespace",
                "headers": {"Content-Type": "text/xml", "task_uuid": "nested-uuid"}
            }),
        )
        .message(
            &[2],
            "app:soap:client:response",
            json!({"body": "<xml>\n  <ok/>\n</xml>", "code": 200}),
        )
        .action(&[3], "app:soap:client:request", "succeeded", json!({}))
}

/// Concatenate the JSON lines of several tasks.
pub fn json_lines(logs: &[&TaskLog]) -> String {
    logs.iter().map(|log| log.to_json_lines()).collect()
}
