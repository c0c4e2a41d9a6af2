//! Store Error Types
//!
//! This module defines error types for hierarchy store operations. Every
//! variant is raised before the forest is touched, so a failed operation
//! never leaves a partial mutation behind.

use crate::models::ValidationError;
use thiserror::Error;

/// Hierarchy store operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A node with this id is already in the forest
    #[error("Node with id '{id}' already exists")]
    DuplicateId { id: String },

    /// Validation failed for node input
    #[error("Node validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Create a duplicate id error
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }
}
