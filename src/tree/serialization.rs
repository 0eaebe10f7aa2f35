use super::{ErrorTree, MessageError, SharedError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Serializable snapshot of an error tree for JSON output
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SerializableError {
    /// An [`ErrorTree`]
    Tree {
        /// Root message
        message: String,
        /// Rendered text of the original error, if any
        #[serde(default, skip_serializing_if = "Option::is_none")]
        original: Option<String>,
        /// Child errors in order
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<SerializableError>,
    },
    /// Any other error, captured by its rendered text
    Leaf { message: String },
}

impl From<&ErrorTree> for SerializableError {
    fn from(tree: &ErrorTree) -> Self {
        Self::Tree {
            message: tree.message().to_string(),
            original: tree.original().map(|err| err.to_string()),
            children: tree.children().iter().map(Self::from).collect(),
        }
    }
}

impl From<&SharedError> for SerializableError {
    fn from(err: &SharedError) -> Self {
        match err.downcast_ref::<ErrorTree>() {
            Some(tree) => tree.into(),
            None => Self::Leaf {
                message: err.to_string(),
            },
        }
    }
}

impl From<SerializableError> for SharedError {
    fn from(err: SerializableError) -> Self {
        match err {
            SerializableError::Leaf { message } => Arc::new(MessageError::new(message)),
            tree @ SerializableError::Tree { .. } => Arc::new(ErrorTree::from(tree)),
        }
    }
}

/// Rebuilds a tree that renders like the snapshot. Leaves and the original
/// come back as [`MessageError`]s.
impl From<SerializableError> for ErrorTree {
    fn from(err: SerializableError) -> Self {
        match err {
            SerializableError::Tree {
                message,
                original,
                children,
            } => ErrorTree {
                message,
                original: original.map(MessageError::shared),
                children: children.into_iter().map(SharedError::from).collect(),
            },
            SerializableError::Leaf { message } => MessageError::new(message).into(),
        }
    }
}

impl ErrorTree {
    /// Convert the tree to a JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(SerializableError::from(self))
            .unwrap_or_else(|_| serde_json::json!({ "error": "Serialization failed" }))
    }

    /// Convert the tree to a JSON string
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(&SerializableError::from(self))
            .unwrap_or_else(|_| r#"{"error":"Serialization failed"}"#.to_string())
    }

    /// Convert the tree to a pretty-printed JSON string
    pub fn to_json_string_pretty(&self) -> String {
        serde_json::to_string_pretty(&SerializableError::from(self))
            .unwrap_or_else(|_| r#"{"error":"Serialization failed"}"#.to_string())
    }

    /// Rebuild a tree from JSON produced by [`ErrorTree::to_json_string`]
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<SerializableError>(json).map(Self::from)
    }
}
