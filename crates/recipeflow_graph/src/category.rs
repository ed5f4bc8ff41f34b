// SPDX-License-Identifier: MIT OR Apache-2.0
//! Category views derived from the node set.

use crate::node::{Node, NodeId, NodeKind};

/// The three labeled views of the node set, grouped by kind.
///
/// This is a materialized view, not a second source of truth: the store
/// rebuilds it after every mutation that adds, removes or relabels a node,
/// so it always equals a filter of the live node set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryIndex {
    /// Ingredient node ids in insertion order.
    pub ingredients: Vec<NodeId>,
    /// Step node ids in insertion order.
    pub steps: Vec<NodeId>,
    /// The final dish, if one exists. Never more than one.
    pub final_dish: Option<NodeId>,
}

impl CategoryIndex {
    /// Derive the index from a node sequence, preserving insertion order.
    pub fn derive<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Self {
        let mut index = Self::default();
        for node in nodes {
            match node.kind {
                NodeKind::Ingredient => index.ingredients.push(node.id.clone()),
                NodeKind::Step => index.steps.push(node.id.clone()),
                NodeKind::FinalDish => index.final_dish = Some(node.id.clone()),
            }
        }
        index
    }

    /// Whether a final dish is present.
    pub fn has_final_dish(&self) -> bool {
        self.final_dish.is_some()
    }

    /// How many nodes of the given kind the view holds.
    pub fn count(&self, kind: NodeKind) -> usize {
        match kind {
            NodeKind::Ingredient => self.ingredients.len(),
            NodeKind::Step => self.steps.len(),
            NodeKind::FinalDish => usize::from(self.final_dish.is_some()),
        }
    }
}
