//! Line Protocol
//!
//! Newline-delimited JSON request/response protocol over stdin/stdout.
//!
//! # Architecture
//!
//! - **types**: request envelope, wire errors and response lines
//! - **handlers**: one function per command, wrapping `HierarchyStore`
//! - **dispatcher**: routes a request to its handler, owns the store
//! - **transport**: pull-based request stream and flushing response sink
//! - **server**: the async loop tying transport and dispatcher together
//!
//! # Usage
//!
//! A client writes one command per line and reads one response per line:
//!
//! ```json
//! {"add_node": {"name": "epiploic-ruffianlike", "id": "", "parent_id": "1"}}
//! {"query": {}}
//! ```

pub mod dispatcher;
pub mod handlers;
pub mod server;
pub mod transport;
pub mod types;

pub use dispatcher::Dispatcher;
pub use server::{run_stdio_server, serve};
pub use transport::{RequestStream, ResponseSink};
pub use types::{ErrorKind, ProtocolError, Request, Response, ResponseError};

#[cfg(test)]
mod types_test;
