//! Line Protocol Types
//!
//! Request and response shapes for the newline-delimited JSON protocol.
//!
//! Every request line is an object with exactly one key naming the command;
//! its value holds the command's named parameters:
//!
//! ```json
//! {"add_node": {"name": "raiiform-italicize", "id": "1", "parent_id": ""}}
//! ```
//!
//! Responses mirror the command key:
//!
//! ```json
//! {"add_node": {"ok": true, "node": {"id": "1", "name": "raiiform-italicize", "parent_id": ""}}}
//! {"add_node": {"ok": false, "error": {"kind": "duplicate_id", "message": "..."}}}
//! {"error": {"kind": "protocol_error", "message": "Invalid JSON: ..."}}
//! ```

use crate::services::StoreError;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};
use thiserror::Error;

/// Command name for adding a node
pub const ADD_NODE: &str = "add_node";

/// Command name for querying names and ids
pub const QUERY: &str = "query";

/// Response key used when no command could be identified
pub const ERROR_KEY: &str = "error";

/// A decoded request line: the command key and its raw parameters
///
/// Parameters stay untyped here; each handler deserializes its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Command name (the single top-level key)
    pub command: String,

    /// Command parameters (the value under that key)
    pub params: Value,
}

impl Request {
    /// Decode one request line
    pub fn parse(line: &str) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_str(line)
            .map_err(|e| ProtocolError::InvalidJson(e.to_string()))?;

        let Value::Object(object) = value else {
            return Err(ProtocolError::NotAnObject);
        };

        if object.len() > 1 {
            return Err(ProtocolError::MultipleCommands(object.len()));
        }

        match object.into_iter().next() {
            Some((command, params)) => Ok(Self { command, params }),
            None => Err(ProtocolError::EmptyRequest),
        }
    }
}

/// Errors in the shape of a request line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Request line is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Request must be a JSON object")]
    NotAnObject,

    #[error("Request object has no command")]
    EmptyRequest,

    #[error("Request must contain exactly one command, found {0}")]
    MultipleCommands(usize),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid parameters for {command}: {message}")]
    InvalidParams { command: String, message: String },
}

impl ProtocolError {
    /// Create an invalid params error for `command`
    pub fn invalid_params(command: &str, message: impl Into<String>) -> Self {
        Self::InvalidParams {
            command: command.to_string(),
            message: message.into(),
        }
    }
}

/// Error kind reported on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ProtocolError,
    DuplicateId,
    ValidationError,
    InternalError,
}

/// Error payload carried by a failed response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseError {
    /// Machine-readable error kind
    pub kind: ErrorKind,

    /// Human-readable error message
    pub message: String,
}

impl ResponseError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalError, message)
    }
}

impl From<ProtocolError> for ResponseError {
    fn from(error: ProtocolError) -> Self {
        Self::new(ErrorKind::ProtocolError, error.to_string())
    }
}

impl From<StoreError> for ResponseError {
    fn from(error: StoreError) -> Self {
        let kind = match error {
            StoreError::DuplicateId { .. } => ErrorKind::DuplicateId,
            StoreError::Validation(_) => ErrorKind::ValidationError,
        };
        Self::new(kind, error.to_string())
    }
}

/// One response line: a single key mapped to its body
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Command key the response mirrors, or [`ERROR_KEY`]
    pub key: String,

    pub body: Value,
}

impl Response {
    /// Successful response for `command`; `ok: true` is added to `payload`
    pub fn success(command: &str, payload: Map<String, Value>) -> Self {
        let mut body = Map::with_capacity(payload.len() + 1);
        body.insert("ok".to_string(), Value::Bool(true));
        body.extend(payload);

        Self {
            key: command.to_string(),
            body: Value::Object(body),
        }
    }

    /// Failed response for a recognized `command`
    pub fn failure(command: &str, error: ResponseError) -> Self {
        Self {
            key: command.to_string(),
            body: json!({ "ok": false, "error": error }),
        }
    }

    /// Failed response for a line whose command could not be identified
    pub fn protocol_error(error: ResponseError) -> Self {
        Self {
            key: ERROR_KEY.to_string(),
            body: json!(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.body.get("ok").and_then(Value::as_bool).unwrap_or(false)
    }

    /// Render the response as a single JSON line (without the newline)
    ///
    /// A serialization failure is rendered as an `internal_error` line.
    pub fn to_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            let error = ResponseError::internal_error(format!("Failed to encode response: {}", e));
            json!({ ERROR_KEY: error }).to_string()
        })
    }
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.body)?;
        map.end()
    }
}
