use std::fmt;

/// Result type for tasktree-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building task trees
#[derive(Debug)]
pub enum Error {
    /// A message is missing required fields or has malformed ones
    Task(tasktree_types::Error),

    /// Two messages claim the same position within a task
    DuplicateTaskLevel { task_uuid: String, level: Vec<u64> },

    /// A top-level node has no messages to order it by
    EmptyTask(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Task(err) => write!(f, "Task error: {}", err),
            Error::DuplicateTaskLevel { task_uuid, level } => write!(
                f,
                "Duplicate task level {} in task {}",
                join_level(level),
                task_uuid
            ),
            Error::EmptyTask(uuid) => write!(f, "Task {} has no messages", uuid),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Task(err) => Some(err),
            Error::DuplicateTaskLevel { .. } | Error::EmptyTask(_) => None,
        }
    }
}

impl From<tasktree_types::Error> for Error {
    fn from(err: tasktree_types::Error) -> Self {
        Error::Task(err)
    }
}

pub(crate) fn join_level(level: &[u64]) -> String {
    level
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
