//! Node Data Structures
//!
//! This module defines the `Node` struct stored in the hierarchy forest.
//!
//! # Architecture
//!
//! - **Flat record**: a node only knows its own id, name and parent id
//! - **String parent reference**: an empty `parent_id` marks a root node
//! - **Immutable after insert**: the store never rewrites a node once added
//!
//! # Examples
//!
//! ```rust
//! use hierarchy_core::models::Node;
//!
//! let root = Node::new("1", "raiiform-italicize", "");
//! assert!(root.is_root());
//!
//! let child = Node::new("2", "epiploic-ruffianlike", "1");
//! assert_eq!(child.parent(), Some("1"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for Node input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// A single entry in the hierarchy forest.
///
/// # Fields
///
/// - `id`: Unique identifier across the whole forest
/// - `name`: Human-readable label, not required to be unique
/// - `parent_id`: Id of the parent node, or empty for a root
///
/// The parent reference is kept verbatim even when no node with that id
/// exists (yet); see [`crate::services::HierarchyStore::add_node`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: String,

    /// Human-readable label
    pub name: String,

    /// Parent node ID (empty means this node is a root)
    #[serde(default)]
    pub parent_id: String,
}

impl Node {
    /// Create a new Node from its three wire fields
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: parent_id.into(),
        }
    }

    /// A node without a parent reference is a root
    pub fn is_root(&self) -> bool {
        self.parent_id.is_empty()
    }

    /// Parent id, or `None` for roots
    pub fn parent(&self) -> Option<&str> {
        if self.parent_id.is_empty() {
            None
        } else {
            Some(self.parent_id.as_str())
        }
    }

    /// Validate the node's required fields
    ///
    /// Both `id` and `name` must be non-empty. Parent existence is a store
    /// concern and is not checked here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("id", &self.id)?;
        require_non_empty("name", &self.name)
    }
}

/// Fail with `MissingField(field)` when `value` is empty
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field.to_string()));
    }
    Ok(())
}
