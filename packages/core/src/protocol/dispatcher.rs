//! Request Dispatcher
//!
//! Routes decoded requests to their handlers and turns every outcome,
//! success or failure, into exactly one [`Response`].

use crate::protocol::handlers::nodes;
use crate::protocol::types::{ProtocolError, Request, Response, ResponseError, ADD_NODE, QUERY};
use crate::services::HierarchyStore;
use tracing::{debug, instrument, warn};

/// Owns the hierarchy store and answers requests against it
#[derive(Debug, Default)]
pub struct Dispatcher {
    store: HierarchyStore,
}

impl Dispatcher {
    pub fn new(store: HierarchyStore) -> Self {
        Self { store }
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &HierarchyStore {
        &self.store
    }

    pub fn into_store(self) -> HierarchyStore {
        self.store
    }

    /// Decode and handle a single request line
    pub fn handle_line(&mut self, line: &str) -> Response {
        match Request::parse(line) {
            Ok(request) => self.handle_request(request),
            Err(error) => self.reject(error),
        }
    }

    /// Handle a decoded request
    #[instrument(skip(self, request), fields(command = %request.command))]
    pub fn handle_request(&mut self, request: Request) -> Response {
        let command = request.command.as_str();
        let result = match command {
            ADD_NODE => nodes::handle_add_node(&mut self.store, request.params),
            QUERY => nodes::handle_query(&self.store, request.params),
            _ => return self.reject(ProtocolError::UnknownCommand(command.to_string())),
        };

        match result {
            Ok(payload) => {
                debug!("✅ {} succeeded", command);
                Response::success(command, payload)
            }
            Err(error) => {
                warn!("❌ {} failed: {}", command, error.message);
                Response::failure(command, error)
            }
        }
    }

    /// Response for a line that never reached a handler
    pub fn reject(&self, error: ProtocolError) -> Response {
        warn!("❌ Rejected request: {}", error);
        Response::protocol_error(ResponseError::from(error))
    }
}
