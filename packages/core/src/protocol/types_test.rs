//! Tests for protocol types module
//!
//! Verifies request envelope decoding and response line encoding.

#[cfg(test)]
mod tests {
    use crate::protocol::types::{
        ErrorKind, ProtocolError, Request, Response, ResponseError, ADD_NODE, QUERY,
    };
    use crate::models::ValidationError;
    use crate::services::StoreError;
    use serde_json::{json, Map, Value};

    #[test]
    fn test_parse_add_node_request() {
        let line = r#"{"add_node":{"name":"tortulous-bilipurpurin","id":"1","parent_id":"0"}}"#;

        let request = Request::parse(line).unwrap();

        assert_eq!(request.command, ADD_NODE);
        assert_eq!(request.params["name"], "tortulous-bilipurpurin");
        assert_eq!(request.params["parent_id"], "0");
    }

    #[test]
    fn test_parse_query_request_without_params() {
        let request = Request::parse(r#"{"query":{}}"#).unwrap();

        assert_eq!(request.command, QUERY);
        assert!(request.params.is_object());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = Request::parse(r#"{"add_node": "#);
        assert!(matches!(result, Err(ProtocolError::InvalidJson(_))));
    }

    #[test]
    fn test_parse_non_object() {
        assert_eq!(Request::parse("[1, 2]"), Err(ProtocolError::NotAnObject));
        assert_eq!(Request::parse("\"add_node\""), Err(ProtocolError::NotAnObject));
    }

    #[test]
    fn test_parse_empty_object() {
        assert_eq!(Request::parse("{}"), Err(ProtocolError::EmptyRequest));
    }

    #[test]
    fn test_invalid_utf8_is_a_protocol_error() {
        let error = std::str::from_utf8(b"\xff\xfe").unwrap_err();

        let response = ResponseError::from(ProtocolError::InvalidUtf8(error.to_string()));

        assert_eq!(response.kind, ErrorKind::ProtocolError);
        assert!(response.message.starts_with("Request line is not valid UTF-8"));
    }

    #[test]
    fn test_parse_multiple_commands() {
        let result = Request::parse(r#"{"add_node":{},"query":{}}"#);
        assert_eq!(result, Err(ProtocolError::MultipleCommands(2)));
    }

    #[test]
    fn test_store_errors_map_to_kinds() {
        let error = ResponseError::from(StoreError::duplicate_id("1"));
        assert_eq!(error.kind, ErrorKind::DuplicateId);
        assert!(error.message.contains("'1'"));

        let error = ResponseError::from(StoreError::from(ValidationError::MissingField(
            "name".to_string(),
        )));
        assert_eq!(error.kind, ErrorKind::ValidationError);
    }

    #[test]
    fn test_error_kind_serialization() {
        assert_eq!(json!(ErrorKind::DuplicateId), json!("duplicate_id"));
        assert_eq!(json!(ErrorKind::ProtocolError), json!("protocol_error"));
        assert_eq!(json!(ErrorKind::InternalError), json!("internal_error"));
    }

    #[test]
    fn test_success_response_mirrors_command() {
        let mut payload = Map::new();
        payload.insert("nodes".to_string(), json!([]));

        let response = Response::success(QUERY, payload);
        let value: Value = serde_json::from_str(&response.to_line()).unwrap();

        assert!(response.is_success());
        assert_eq!(value, json!({"query": {"ok": true, "nodes": []}}));
    }

    #[test]
    fn test_failure_response_mirrors_command() {
        let response = Response::failure(ADD_NODE, StoreError::duplicate_id("1").into());
        let value: Value = serde_json::from_str(&response.to_line()).unwrap();

        assert!(!response.is_success());
        assert_eq!(value["add_node"]["ok"], false);
        assert_eq!(value["add_node"]["error"]["kind"], "duplicate_id");
        assert_eq!(
            value["add_node"]["error"]["message"],
            "Node with id '1' already exists"
        );
    }

    #[test]
    fn test_protocol_error_response() {
        let response = Response::protocol_error(ProtocolError::NotAnObject.into());
        let line = response.to_line();

        assert!(!line.contains('\n'));
        assert_eq!(
            serde_json::from_str::<Value>(&line).unwrap(),
            json!({"error": {"kind": "protocol_error", "message": "Request must be a JSON object"}})
        );
    }
}
