// SPDX-License-Identifier: MIT OR Apache-2.0
//! Edge (connection) definitions for the recipe graph.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// Unique identifier for an edge.
///
/// Derived deterministically from the endpoint pair, so at most one edge
/// can ever exist between a given source and target. Connecting the same
/// pair twice computes the same id and becomes a no-op in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub String);

impl EdgeId {
    /// Compute the id for an edge from `source` to `target`.
    pub fn between(source: &NodeId, target: &NodeId) -> Self {
        Self(format!("edge-{source}-{target}"))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A directed "feeds into" connection between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique edge id, see [`EdgeId::between`].
    pub id: EdgeId,
    /// Node the edge starts at.
    pub source: NodeId,
    /// Node the edge ends at.
    pub target: NodeId,
}

impl Edge {
    /// Create an edge from `source` to `target` with its derived id.
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            id: EdgeId::between(&source, &target),
            source,
            target,
        }
    }

    /// Check if this edge starts or ends at the given node.
    pub fn involves_node(&self, node_id: &NodeId) -> bool {
        self.source == *node_id || self.target == *node_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id_deterministic() {
        let a = NodeId::from("ing-1");
        let b = NodeId::from("step-2");
        assert_eq!(EdgeId::between(&a, &b), EdgeId::between(&a, &b));
        assert_eq!(EdgeId::between(&a, &b).as_str(), "edge-ing-1-step-2");
    }

    #[test]
    fn test_edge_id_directional() {
        let a = NodeId::from("ing-1");
        let b = NodeId::from("step-2");
        assert_ne!(EdgeId::between(&a, &b), EdgeId::between(&b, &a));
    }

    #[test]
    fn test_involves_node() {
        let edge = Edge::new(NodeId::from("ing-1"), NodeId::from("step-2"));
        assert!(edge.involves_node(&NodeId::from("ing-1")));
        assert!(edge.involves_node(&NodeId::from("step-2")));
        assert!(!edge.involves_node(&NodeId::from("dish-3")));
    }
}
