use std::fmt;

/// Result type for tasktree-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when reading task messages
#[derive(Debug)]
pub enum Error {
    /// Message is valid JSON but not a JSON object
    NotAnObject(String),

    /// A required field is absent from the message
    MissingField(&'static str),

    /// A field is present but has the wrong shape
    InvalidField { key: &'static str, reason: String },

    /// JSON decoding failed
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotAnObject(kind) => write!(f, "Expected a JSON object, found {}", kind),
            Error::MissingField(key) => write!(f, "Missing field: {}", key),
            Error::InvalidField { key, reason } => {
                write!(f, "Invalid field '{}': {}", key, reason)
            }
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::NotAnObject(_) | Error::MissingField(_) | Error::InvalidField { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
