// Error handling for uritemplate

use std::fmt;

/// Errors raised while building a [`Context`](crate::Context).
///
/// Expansion itself never fails; anything the engine cannot use is rejected
/// here, before a template ever sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    Parse(String),
    NotAnObject(String),
    UnsupportedValue { name: String, kind: String },
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextError::Parse(msg) => write!(f, "Context parse error: {}", msg),
            ContextError::NotAnObject(kind) => {
                write!(f, "Context must be an object of variables, found {}", kind)
            }
            ContextError::UnsupportedValue { name, kind } => {
                write!(f, "Unsupported value for variable '{}': {}", name, kind)
            }
        }
    }
}

impl std::error::Error for ContextError {}

impl From<serde_json::Error> for ContextError {
    fn from(err: serde_json::Error) -> Self {
        ContextError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for ContextError {
    fn from(err: serde_yaml::Error) -> Self {
        ContextError::Parse(err.to_string())
    }
}
