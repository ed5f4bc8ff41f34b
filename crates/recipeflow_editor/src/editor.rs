// SPDX-License-Identifier: MIT OR Apache-2.0
//! The intent-driven editor facade.

use crate::coordinator::LayoutCoordinator;
use crate::demo;
use recipeflow_graph::{
    step_label, DocumentError, Edge, EdgeId, GraphError, GraphStore, Node, NodeId, NodeKind,
    Position, RecipeDocument,
};

/// Error surfaced to the UI collaborator for a rejected intent.
///
/// Everything here is recoverable: the requested change did not happen and
/// the graph is exactly as it was.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// A store operation was rejected.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// An imported document failed validation.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Owns the canonical graph and coordinates layout around every intent.
///
/// The rendering collaborator holds one of these and calls intent methods;
/// it never reaches into node data for mutation hooks. Every intent leaves
/// the store fully laid out, so the views below are always current and
/// snapped when the next render reads them.
#[derive(Debug, Default)]
pub struct RecipeEditor {
    store: GraphStore,
    coordinator: LayoutCoordinator,
}

impl RecipeEditor {
    /// Create an editor with an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient node.
    pub fn add_ingredient(&mut self, label: &str) -> Result<NodeId, EditorError> {
        self.add_node(NodeKind::Ingredient, label.to_owned())
    }

    /// Add a step node labeled `"<description> (<minutes> min)"`.
    pub fn add_step(&mut self, description: &str, minutes: u32) -> Result<NodeId, EditorError> {
        self.add_node(NodeKind::Step, step_label(description, minutes))
    }

    /// Add the final dish node. At most one may exist.
    pub fn add_final_dish(&mut self, label: &str) -> Result<NodeId, EditorError> {
        self.add_node(NodeKind::FinalDish, label.to_owned())
    }

    fn add_node(&mut self, kind: NodeKind, label: String) -> Result<NodeId, EditorError> {
        let id = self.store.add_node(kind, label)?;
        tracing::debug!(node = %id, ?kind, "node added");
        // Column populations changed; re-snap siblings before the next read.
        self.coordinator.mark_dirty();
        self.coordinator.flush(&mut self.store);
        Ok(id)
    }

    /// Commit a drag-end event: snap the raw position and move the node.
    pub fn drag_end(&mut self, id: &NodeId, raw: Position) -> Result<(), EditorError> {
        self.coordinator.drag_ended(&mut self.store, id, raw)?;
        Ok(())
    }

    /// Connect two nodes. Idempotent for an already connected pair.
    pub fn connect(&mut self, source: &NodeId, target: &NodeId) -> Result<EdgeId, EditorError> {
        let id = self.store.connect(source, target)?;
        tracing::debug!(edge = %id, "connected");
        Ok(id)
    }

    /// Change a node's label.
    pub fn edit_label(&mut self, id: &NodeId, label: &str) -> Result<(), EditorError> {
        self.store.edit_label(id, label)?;
        Ok(())
    }

    /// Delete a node and every edge incident to it.
    pub fn delete_node(&mut self, id: &NodeId) -> Result<(), EditorError> {
        self.store.delete_node(id)?;
        tracing::debug!(node = %id, "node deleted");
        self.coordinator.mark_dirty();
        self.coordinator.flush(&mut self.store);
        Ok(())
    }

    /// Delete an edge. Absent edges are ignored.
    pub fn delete_edge(&mut self, id: &EdgeId) {
        if self.store.disconnect(id).is_some() {
            tracing::debug!(edge = %id, "edge deleted");
        }
    }

    /// Replace the whole graph with an imported document.
    ///
    /// All-or-nothing: the incoming JSON is validated into a fresh store
    /// first, so on failure the current graph is untouched. On success the
    /// imported geometry gets one full snap pass.
    pub fn import_json(&mut self, json: &str) -> Result<(), EditorError> {
        let imported = recipeflow_graph::document::import_json(json).inspect_err(|err| {
            tracing::warn!(%err, "import rejected");
        })?;
        self.store = imported;
        self.coordinator.mark_dirty();
        self.coordinator.flush(&mut self.store);
        tracing::info!(
            nodes = self.store.node_count(),
            edges = self.store.edge_count(),
            "recipe imported"
        );
        Ok(())
    }

    /// Export the current graph as a pretty-printed JSON document.
    pub fn export_json(&self) -> Result<String, EditorError> {
        Ok(RecipeDocument::from_store(&self.store).to_json()?)
    }

    /// Load the built-in demo recipe through the normal import path.
    pub fn load_demo(&mut self) -> Result<(), EditorError> {
        self.import_json(demo::DEMO_RECIPE_JSON)
    }

    /// The canonical store, for read access beyond the views below.
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Live node list.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.store.nodes()
    }

    /// Live edge list.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.store.edges()
    }

    /// Ingredients view, insertion ordered.
    pub fn ingredients(&self) -> impl Iterator<Item = &Node> {
        self.store.ingredients()
    }

    /// Steps view, insertion ordered.
    pub fn steps(&self) -> impl Iterator<Item = &Node> {
        self.store.steps()
    }

    /// The final dish, if present.
    pub fn final_dish(&self) -> Option<&Node> {
        self.store.final_dish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flour_butter_melt_scenario() {
        let mut editor = RecipeEditor::new();
        editor.add_ingredient("Flour").unwrap();
        let butter = editor.add_ingredient("Butter").unwrap();
        let melt = editor.add_step("Melt", 2).unwrap();

        assert_eq!(
            editor.steps().map(|n| n.label.clone()).collect::<Vec<_>>(),
            vec!["Melt (2 min)"]
        );

        editor.connect(&butter, &melt).unwrap();
        assert!(matches!(
            editor.connect(&melt, &butter),
            Err(EditorError::Graph(GraphError::InvalidEndpoint(_)))
        ));
        assert_eq!(editor.edges().count(), 1);
    }

    #[test]
    fn test_second_final_dish_leaves_graph_unchanged() {
        let mut editor = RecipeEditor::new();
        editor.add_final_dish("Soup").unwrap();
        assert!(matches!(
            editor.add_final_dish("Stew"),
            Err(EditorError::Graph(GraphError::DuplicateSingleton))
        ));
        assert_eq!(editor.nodes().count(), 1);
        assert_eq!(editor.final_dish().unwrap().label, "Soup");
    }

    #[test]
    fn test_views_are_snapped_after_every_intent() {
        let mut editor = RecipeEditor::new();
        let flour = editor.add_ingredient("Flour").unwrap();
        // Initial placement is row 0; the flush that follows the add
        // center-aligns the 50-high node onto the row line.
        assert_eq!(
            editor.store().node(&flour).unwrap().position,
            Position::new(0.0, -25.0)
        );

        editor.drag_end(&flour, Position::new(310.0, 110.0)).unwrap();
        assert_eq!(
            editor.store().node(&flour).unwrap().position,
            Position::new(300.0, 75.0)
        );
    }

    #[test]
    fn test_failed_import_keeps_previous_graph() {
        let mut editor = RecipeEditor::new();
        let flour = editor.add_ingredient("Flour").unwrap();

        let bad = r#"{
            "nodes": [{"id": "ing-1", "kind": "ingredient", "label": "Sugar",
                       "position": {"x": 0.0, "y": 0.0}}],
            "edges": [{"id": "e", "source": "ing-1", "target": "step-404"}]
        }"#;
        assert!(editor.import_json(bad).is_err());

        assert_eq!(editor.nodes().count(), 1);
        assert_eq!(editor.store().node(&flour).unwrap().label, "Flour");
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut editor = RecipeEditor::new();
        let flour = editor.add_ingredient("Flour").unwrap();
        let melt = editor.add_step("Melt", 2).unwrap();
        let dish = editor.add_final_dish("Roux").unwrap();
        editor.connect(&flour, &melt).unwrap();
        editor.connect(&melt, &dish).unwrap();

        let json = editor.export_json().unwrap();
        let mut other = RecipeEditor::new();
        other.import_json(&json).unwrap();

        assert_eq!(
            editor.nodes().collect::<Vec<_>>(),
            other.nodes().collect::<Vec<_>>()
        );
        assert_eq!(
            editor.edges().collect::<Vec<_>>(),
            other.edges().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_delete_edge_absent_is_noop() {
        let mut editor = RecipeEditor::new();
        editor.delete_edge(&EdgeId("edge-ing-1-step-2".to_owned()));
        assert_eq!(editor.edges().count(), 0);
    }
}
