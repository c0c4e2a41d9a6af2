//! Data Models
//!
//! This module contains the core data structures of the hierarchy store:
//!
//! - `Node` - A single forest entry with id, name and optional parent id
//! - `ValidationError` - Field-level validation failures for node input

mod node;

pub use node::{require_non_empty, Node, ValidationError};

#[cfg(test)]
mod node_test;
