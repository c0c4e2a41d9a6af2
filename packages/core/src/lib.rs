//! Hierarchy Store Core
//!
//! This crate provides the in-memory forest of uniquely identified nodes and the
//! line-oriented JSON protocol used to drive it over stdin/stdout.
//!
//! # Architecture
//!
//! - **Explicit store**: the forest is owned by a `HierarchyStore` value, never a global
//! - **Permissive parents**: a `parent_id` may point at a node that does not exist yet
//! - **Insertion order**: queries enumerate nodes in the order they were added
//! - **One line, one command**: every request line yields exactly one response line
//!
//! # Modules
//!
//! - [`models`] - Data structures (Node, ValidationError)
//! - [`services`] - The hierarchy store, its query type and errors
//! - [`protocol`] - Request/response types, dispatcher and stdio server loop
//! - [`config`] - Runtime configuration loaded from the environment

pub mod config;
pub mod models;
pub mod protocol;
pub mod services;

// Re-export commonly used types
pub use config::ServerConfig;
pub use models::*;
pub use services::*;
