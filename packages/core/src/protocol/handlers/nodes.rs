//! Node Command Handlers
//!
//! Wraps `HierarchyStore` operations for line protocol access.

use crate::models::Node;
use crate::protocol::types::{ProtocolError, ResponseError, ADD_NODE, QUERY};
use crate::services::{HierarchyStore, NodeQuery};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Parameters for the add_node command
#[derive(Debug, Deserialize)]
pub struct AddNodeParams {
    pub name: String,
    /// Empty or absent means "assign an id"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    /// Empty or absent means "root"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parent_id: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Handle add_node request
pub fn handle_add_node(
    store: &mut HierarchyStore,
    params: Value,
) -> Result<Map<String, Value>, ResponseError> {
    let params: AddNodeParams = serde_json::from_value(params)
        .map_err(|e| ProtocolError::invalid_params(ADD_NODE, e.to_string()))?;

    let node = store.add_node(params.name, params.id, params.parent_id)?;

    let mut result = Map::new();
    result.insert("node".to_string(), node_to_value(node)?);
    Ok(result)
}

/// Handle query request
///
/// `null` parameters are treated like `{}` and select the whole forest.
pub fn handle_query(
    store: &HierarchyStore,
    params: Value,
) -> Result<Map<String, Value>, ResponseError> {
    let query: NodeQuery = if params.is_null() {
        NodeQuery::all()
    } else {
        serde_json::from_value(params)
            .map_err(|e| ProtocolError::invalid_params(QUERY, e.to_string()))?
    };

    let nodes = store
        .query(&query)
        .into_iter()
        .map(node_to_value)
        .collect::<Result<Vec<_>, _>>()?;

    let mut result = Map::new();
    result.insert("nodes".to_string(), Value::Array(nodes));
    Ok(result)
}

fn node_to_value(node: &Node) -> Result<Value, ResponseError> {
    serde_json::to_value(node)
        .map_err(|e| ResponseError::internal_error(format!("Failed to serialize node: {}", e)))
}
