//! Tests for the Node model

#[cfg(test)]
mod tests {
    use crate::models::{Node, ValidationError};
    use serde_json::json;

    #[test]
    fn test_root_node() {
        let node = Node::new("1", "raiiform-italicize", "");

        assert!(node.is_root());
        assert_eq!(node.parent(), None);
        assert!(node.validate().is_ok());
    }

    #[test]
    fn test_child_node_keeps_parent_reference() {
        let node = Node::new("1", "tortulous-bilipurpurin", "0");

        assert!(!node.is_root());
        assert_eq!(node.parent(), Some("0"));
    }

    #[test]
    fn test_validation_rejects_empty_id() {
        let node = Node::new("", "name", "");
        assert_eq!(
            node.validate(),
            Err(ValidationError::MissingField("id".to_string()))
        );
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let node = Node::new("1", "", "");
        let err = node.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: name");
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let node = Node::new("7", "leaf", "3");
        let value = serde_json::to_value(&node).unwrap();

        assert_eq!(value, json!({"id": "7", "name": "leaf", "parent_id": "3"}));
    }

    #[test]
    fn test_deserializes_without_parent_as_root() {
        let node: Node = serde_json::from_value(json!({"id": "9", "name": "orphan"})).unwrap();
        assert!(node.is_root());
    }
}
