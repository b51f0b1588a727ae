use std::fmt::{self, Display};

/// Errors produced by model constructors and parsers.
#[derive(Debug)]
pub enum ModelError {
    InvalidId { kind: &'static str, source: uuid::Error },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidId { kind, source } => {
                write!(f, "invalid {kind} id: {source}")
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::InvalidId { source, .. } => Some(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
