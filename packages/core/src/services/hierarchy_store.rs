//! Hierarchy Store
//!
//! Owns the forest and enforces its invariants on every mutation.
//!
//! # Architecture
//!
//! - **Insertion-ordered arena**: nodes live in a `Vec` in the order they were added
//! - **Id index**: `id → position` for constant-time lookup and duplicate detection
//! - **Children index**: `parent_id → [positions]`, also kept for parents that do
//!   not exist yet, so a forward reference resolves the moment its parent arrives
//!
//! # Parent policy
//!
//! A `parent_id` naming a node that is not in the forest is accepted and stored
//! verbatim. Such a node behaves as a tree top until the parent is added.
//!
//! Forward references can close a parent cycle (a node naming itself, or two
//! nodes naming each other). Such adds succeed; depth and subtree walks stop at
//! the first node they revisit.

use crate::models::{require_non_empty, Node};
use crate::services::error::StoreError;
use crate::services::node_query::NodeQuery;
use std::collections::{HashMap, HashSet};

/// Prefix used for ids assigned to nodes added without one
pub const DEFAULT_AUTO_ID_PREFIX: &str = "auto-";

/// In-memory forest of uniquely identified nodes
#[derive(Debug, Clone)]
pub struct HierarchyStore {
    /// Nodes in insertion order
    nodes: Vec<Node>,

    /// Map: id → position in `nodes`
    index: HashMap<String, usize>,

    /// Map: parent_id → positions of its children, in insertion order
    children: HashMap<String, Vec<usize>>,

    /// Next counter value tried for an auto-assigned id
    next_auto_id: u64,

    auto_id_prefix: String,
}

impl Default for HierarchyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyStore {
    /// Create an empty store using the default auto-id prefix
    pub fn new() -> Self {
        Self::with_auto_id_prefix(DEFAULT_AUTO_ID_PREFIX)
    }

    /// Create an empty store that prefixes auto-assigned ids with `prefix`
    pub fn with_auto_id_prefix(prefix: impl Into<String>) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            children: HashMap::new(),
            next_auto_id: 1,
            auto_id_prefix: prefix.into(),
        }
    }

    /// Add a node to the forest
    ///
    /// # Arguments
    ///
    /// * `name` - Label of the node, must be non-empty
    /// * `id` - Requested id; empty means "assign one"
    /// * `parent_id` - Parent reference; empty means root. The parent does not
    ///   have to exist.
    ///
    /// # Errors
    ///
    /// * `Validation` - `name` is empty
    /// * `DuplicateId` - `id` is already taken
    ///
    /// Nothing is mutated when an error is returned.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        id: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Result<&Node, StoreError> {
        let name = name.into();
        let id = id.into();
        let parent_id = parent_id.into();

        require_non_empty("name", &name)?;

        let id = if id.is_empty() {
            self.assign_id(&parent_id)
        } else {
            if self.index.contains_key(&id) {
                return Err(StoreError::duplicate_id(id));
            }
            id
        };

        let node = Node::new(id, name, parent_id);
        node.validate()?;

        let position = self.nodes.len();
        if !node.parent_id.is_empty() {
            self.children
                .entry(node.parent_id.clone())
                .or_default()
                .push(position);
        }
        self.index.insert(node.id.clone(), position);
        self.nodes.push(node);

        Ok(&self.nodes[position])
    }

    /// Query the forest
    ///
    /// Read-only; repeated calls return identical results until the next add.
    /// See [`NodeQuery`] for how selectors combine.
    pub fn query(&self, query: &NodeQuery) -> Vec<&Node> {
        if self.nodes.is_empty() || query.is_empty_range() {
            return Vec::new();
        }

        if query.has_filters() {
            let ids: HashSet<&str> = query.ids.iter().map(String::as_str).collect();
            let names: HashSet<&str> = query.names.iter().map(String::as_str).collect();

            return self
                .nodes
                .iter()
                .filter(|node| ids.is_empty() || ids.contains(node.id.as_str()))
                .filter(|node| names.is_empty() || names.contains(node.name.as_str()))
                .collect();
        }

        if !query.root_ids.is_empty() {
            let mut seen = HashSet::new();
            let mut result = Vec::new();

            for root_id in &query.root_ids {
                if !seen.insert(root_id.as_str()) {
                    continue;
                }
                if let Some(&position) = self.index.get(root_id) {
                    self.walk_subtree(position, query, &mut result);
                }
            }

            return result;
        }

        if !query.has_depth_range() {
            return self.nodes.iter().collect();
        }

        self.nodes
            .iter()
            .filter(|node| query.depth_in_range(self.depth_at(node)))
            .collect()
    }

    /// Get a node by id
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&position| &self.nodes[position])
    }

    /// Whether a node with `id` is in the forest
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of nodes in the forest
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the forest holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes whose `parent_id` equals `id`, in insertion order
    ///
    /// Works for ids that are not in the forest as well, returning the nodes
    /// waiting on that parent.
    pub fn children_of(&self, id: &str) -> impl Iterator<Item = &Node> + '_ {
        self.children
            .get(id)
            .into_iter()
            .flatten()
            .map(|&position| &self.nodes[position])
    }

    /// Number of ancestors of `id` that are present in the forest
    ///
    /// Roots and nodes with a dangling parent have depth 0. On a parent cycle
    /// each ancestor is counted once.
    pub fn depth_of(&self, id: &str) -> Option<usize> {
        self.get(id).map(|node| self.depth_at(node))
    }

    fn depth_at(&self, node: &Node) -> usize {
        let mut visited = HashSet::from([node.id.as_str()]);
        let mut current = node.parent_id.as_str();

        while let Some(parent) = self.get(current) {
            if !visited.insert(parent.id.as_str()) {
                break;
            }
            current = parent.parent_id.as_str();
        }

        visited.len() - 1
    }

    /// Pre-order walk of the subtree at `position`, depths relative to it
    fn walk_subtree<'a>(
        &'a self,
        position: usize,
        query: &NodeQuery,
        out: &mut Vec<&'a Node>,
    ) {
        let mut visited = HashSet::new();
        let mut stack = vec![(position, 0usize)];

        while let Some((position, depth)) = stack.pop() {
            if !visited.insert(position) {
                continue;
            }

            let node = &self.nodes[position];
            if query.depth_in_range(depth) {
                out.push(node);
            }

            if query.max_bound().map_or(false, |max| depth >= max) {
                continue;
            }

            if let Some(children) = self.children.get(&node.id) {
                stack.extend(children.iter().rev().map(|&child| (child, depth + 1)));
            }
        }
    }

    /// Next counter-based id that is neither taken nor awaited as a parent
    ///
    /// Skipping awaited ids keeps an auto-assigned node from silently adopting
    /// children that were added with a forward reference, and skipping
    /// `parent_id` keeps it from becoming its own parent.
    fn assign_id(&mut self, parent_id: &str) -> String {
        loop {
            let candidate = format!("{}{}", self.auto_id_prefix, self.next_auto_id);
            self.next_auto_id += 1;

            if candidate != parent_id
                && !self.index.contains_key(&candidate)
                && !self.children.contains_key(&candidate)
            {
                return candidate;
            }
        }
    }
}
