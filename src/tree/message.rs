use super::SharedError;
use std::sync::Arc;
use thiserror::Error;

/// An error that is nothing but its message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct MessageError {
    message: String,
}

impl MessageError {
    /// Create a message error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Create a new message error ready to be stored in a tree.
    ///
    /// Every call yields a distinct error, even for equal messages.
    pub fn shared(message: impl Into<String>) -> SharedError {
        Arc::new(Self::new(message))
    }

    /// The message this error renders as
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for MessageError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for MessageError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
