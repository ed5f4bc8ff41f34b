// SPDX-License-Identifier: MIT OR Apache-2.0
//! The portable recipe document: serialized form of the full graph.
//!
//! The on-disk shape mirrors the in-memory views: the canonical `nodes`
//! and `edges` arrays plus the three category groupings. The groupings are
//! written on export for readability but treated as advisory on import;
//! the index is always recomputed from `nodes`, so hand-edited or stale
//! files stay loadable.

use crate::edge::{Edge, EdgeId};
use crate::node::{Node, NodeId};
use crate::store::GraphStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The file-portable representation of a full recipe graph.
///
/// Exchanged as UTF-8 JSON. Field order is not significant and unknown
/// extra fields are ignored on import, so newer writers stay readable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeDocument {
    /// Every node of the graph. The canonical set.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Every edge of the graph.
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// Ingredient nodes; advisory on import.
    #[serde(default)]
    pub ingredients: Vec<Node>,
    /// Step nodes; advisory on import.
    #[serde(default)]
    pub steps: Vec<Node>,
    /// The final dish, if any; advisory on import.
    #[serde(default, rename = "finalDish")]
    pub final_dish: Option<Node>,
}

impl RecipeDocument {
    /// Assemble a document from the live graph.
    ///
    /// The result is pure data and re-importable without external context;
    /// the model carries no UI callbacks or transient flags to strip.
    pub fn from_store(store: &GraphStore) -> Self {
        Self {
            nodes: store.nodes().cloned().collect(),
            edges: store.edges().cloned().collect(),
            ingredients: store.ingredients().cloned().collect(),
            steps: store.steps().cloned().collect(),
            final_dish: store.final_dish().cloned(),
        }
    }

    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON, ready to be written to a file.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the document and build a fresh store from it.
    ///
    /// The category index is recomputed from `nodes`; the embedded
    /// `ingredients`/`steps`/`finalDish` groupings are ignored. Building
    /// into a new store is what makes import all-or-nothing: on error the
    /// caller's current graph is simply never replaced.
    pub fn to_store(&self) -> Result<GraphStore, DocumentError> {
        let mut node_ids = HashSet::new();
        let mut final_dishes = 0usize;
        for node in &self.nodes {
            if node.id.as_str().is_empty() {
                return Err(DocumentError::EmptyNodeId);
            }
            if !node_ids.insert(node.id.clone()) {
                return Err(DocumentError::DuplicateNodeId(node.id.clone()));
            }
            if node.kind == crate::node::NodeKind::FinalDish {
                final_dishes += 1;
                if final_dishes > 1 {
                    return Err(DocumentError::MultipleFinalDishes);
                }
            }
        }

        let mut edge_pairs = HashSet::new();
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !node_ids.contains(endpoint) {
                    return Err(DocumentError::UnknownEndpoint {
                        edge: edge.id.clone(),
                        node: endpoint.clone(),
                    });
                }
            }
            if edge.source == edge.target {
                return Err(DocumentError::SelfLoop(edge.id.clone()));
            }
            if !edge_pairs.insert((edge.source.clone(), edge.target.clone())) {
                return Err(DocumentError::DuplicateEdge(edge.id.clone()));
            }
        }

        let mut store = GraphStore::new();
        for node in &self.nodes {
            store.insert_node(node.clone());
        }
        for edge in &self.edges {
            store.insert_edge(edge.clone());
        }
        Ok(store)
    }
}

/// Parse and validate JSON text into a fresh store in one call.
pub fn import_json(json: &str) -> Result<GraphStore, DocumentError> {
    RecipeDocument::from_json(json)?.to_store()
}

/// Why a document failed to import. The previous graph is left untouched.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The payload is not the expected JSON shape.
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    /// A node carries an empty id.
    #[error("malformed document: node with empty id")]
    EmptyNodeId,

    /// Two nodes share an id.
    #[error("malformed document: duplicate node id {0}")]
    DuplicateNodeId(NodeId),

    /// More than one final dish node.
    #[error("malformed document: more than one final dish")]
    MultipleFinalDishes,

    /// An edge references a node the document does not contain.
    #[error("malformed document: edge {edge} references unknown node {node}")]
    UnknownEndpoint {
        /// The offending edge.
        edge: EdgeId,
        /// The missing endpoint.
        node: NodeId,
    },

    /// An edge connects a node to itself.
    #[error("malformed document: edge {0} is a self-loop")]
    SelfLoop(EdgeId),

    /// Two edges connect the same ordered node pair.
    #[error("malformed document: duplicate edge {0}")]
    DuplicateEdge(EdgeId),
}
