//! Node Query Definition
//!
//! Selection parameters for [`HierarchyStore::query`](super::HierarchyStore::query).
//! An empty query selects the whole forest.
//!
//! # Selector precedence
//!
//! - `ids` and `names` filter the forest in insertion order and narrow each other
//! - `root_ids` is only consulted when neither `ids` nor `names` is given; each
//!   listed subtree is walked in pre-order, in the order the roots were listed
//! - `min_depth` / `max_depth` apply to whole-forest and `root_ids` queries only.
//!   Under `root_ids` they are relative to each subtree root.
//! - A `max_depth` of 0 means no upper bound, the same as leaving it out

use serde::{Deserialize, Deserializer};

/// Selection parameters for a forest query
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NodeQuery {
    /// Only nodes with one of these ids
    #[serde(deserialize_with = "null_as_default")]
    pub ids: Vec<String>,

    /// Only nodes with one of these names
    #[serde(deserialize_with = "null_as_default")]
    pub names: Vec<String>,

    /// Subtrees to walk
    #[serde(deserialize_with = "null_as_default")]
    pub root_ids: Vec<String>,

    /// Minimum depth to include
    #[serde(deserialize_with = "null_as_default")]
    pub min_depth: usize,

    /// Maximum depth to include (unbounded when absent or 0)
    pub max_depth: Option<usize>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl NodeQuery {
    /// Query selecting every node in the forest
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_root_ids<I, S>(mut self, root_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.root_ids = root_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_depth_range(mut self, min_depth: usize, max_depth: Option<usize>) -> Self {
        self.min_depth = min_depth;
        self.max_depth = max_depth;
        self
    }

    /// Whether `ids` or `names` narrow the result
    pub fn has_filters(&self) -> bool {
        !self.ids.is_empty() || !self.names.is_empty()
    }

    /// Effective upper depth bound; `None` when unbounded
    pub fn max_bound(&self) -> Option<usize> {
        self.max_depth.filter(|&max| max > 0)
    }

    /// Whether a depth bound has been requested
    pub fn has_depth_range(&self) -> bool {
        self.min_depth > 0 || self.max_bound().is_some()
    }

    /// True when `max_depth < min_depth`, which can never match
    pub fn is_empty_range(&self) -> bool {
        matches!(self.max_bound(), Some(max) if max < self.min_depth)
    }

    /// Whether a node at `depth` falls inside the requested range
    pub fn depth_in_range(&self, depth: usize) -> bool {
        depth >= self.min_depth && self.max_bound().map_or(true, |max| depth <= max)
    }
}
