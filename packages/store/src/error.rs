use std::fmt;

use thiserror::Error;

/// The remote operation a [`FetchError`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::List => "fetch users",
            Operation::Create => "create user",
            Operation::Update => "update user",
            Operation::Delete => "delete user",
        })
    }
}

/// Failure of a single call against the user collection.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Failed to {operation}: server responded with status {status}")]
    Status { operation: Operation, status: u16 },

    #[error("Failed to {operation}: {message}")]
    Transport { operation: Operation, message: String },

    #[error("Failed to {operation}: invalid response body: {message}")]
    Decode { operation: Operation, message: String },
}

impl FetchError {
    pub fn operation(&self) -> Operation {
        match self {
            FetchError::Status { operation, .. }
            | FetchError::Transport { operation, .. }
            | FetchError::Decode { operation, .. } => *operation,
        }
    }
}
