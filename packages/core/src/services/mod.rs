//! Store Services
//!
//! This module contains the hierarchy store and the types around it:
//!
//! - `HierarchyStore` - The forest, its add operation and read-only queries
//! - `NodeQuery` - Selection parameters for queries
//! - `StoreError` - Errors raised by store mutations

pub mod error;
pub mod hierarchy_store;
pub mod node_query;

pub use error::StoreError;
pub use hierarchy_store::{HierarchyStore, DEFAULT_AUTO_ID_PREFIX};
pub use node_query::NodeQuery;
