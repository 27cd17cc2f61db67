use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TreeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),
}

// serde_json::Error is stringified so it works with Serialize/Deserialize
impl From<serde_json::Error> for TreeError {
    fn from(e: serde_json::Error) -> Self {
        TreeError::InvalidArgument(e.to_string())
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
