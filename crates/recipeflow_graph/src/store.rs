// SPDX-License-Identifier: MIT OR Apache-2.0
//! Canonical graph store: nodes, edges and the derived category index.

use crate::category::CategoryIndex;
use crate::edge::{Edge, EdgeId};
use crate::node::{Node, NodeId, NodeKind, Position};
use crate::snap::{snap_position, Column, GridSpec};
use indexmap::IndexMap;

/// The single source of truth for the recipe graph.
///
/// All mutation goes through the operations below; each one either applies
/// fully or rejects with a [`GraphError`] leaving the store untouched. The
/// category index is rebuilt inside every node mutation, so readers never
/// observe a view older than the latest completed operation.
#[derive(Debug, Clone)]
pub struct GraphStore {
    nodes: IndexMap<NodeId, Node>,
    edges: IndexMap<EdgeId, Edge>,
    category: CategoryIndex,
    grid: GridSpec,
    next_seq: u64,
}

impl GraphStore {
    /// Create an empty store with the default grid.
    pub fn new() -> Self {
        Self::with_grid(GridSpec::default())
    }

    /// Create an empty store with explicit grid constants.
    pub fn with_grid(grid: GridSpec) -> Self {
        Self {
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
            category: CategoryIndex::default(),
            grid,
            next_seq: 1,
        }
    }

    /// The grid constants this store lays out against.
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Add a node of the given kind.
    ///
    /// The node starts at the next free slot of its home column: x on the
    /// column line for its kind, y one row per existing same-kind node.
    /// Rejects an empty label, and a second final dish while one exists.
    pub fn add_node(
        &mut self,
        kind: NodeKind,
        label: impl Into<String>,
    ) -> Result<NodeId, GraphError> {
        let label = label.into();
        if label.is_empty() {
            return Err(GraphError::EmptyLabel);
        }
        if kind == NodeKind::FinalDish && self.category.has_final_dish() {
            return Err(GraphError::DuplicateSingleton);
        }

        let id = self.alloc_id(kind);
        let column = Column::for_kind(kind);
        let position = Position::new(
            column.origin_x(&self.grid),
            self.category.count(kind) as f32 * self.grid.row_height,
        );

        let mut node = Node::new(id.clone(), kind, label);
        node.position = position;
        self.nodes.insert(id.clone(), node);
        self.rebuild_category();
        Ok(id)
    }

    /// Insert a fully formed node, for document import. The caller is
    /// responsible for id uniqueness and the final-dish singleton.
    pub(crate) fn insert_node(&mut self, node: Node) {
        self.nodes.insert(node.id.clone(), node);
        self.rebuild_category();
    }

    /// Insert a validated edge, for document import.
    pub(crate) fn insert_edge(&mut self, edge: Edge) {
        self.edges.insert(edge.id.clone(), edge);
    }

    /// Update a node's position.
    pub fn move_node(&mut self, id: &NodeId, position: Position) -> Result<(), GraphError> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::NotFound(id.clone()))?;
        node.position = position;
        Ok(())
    }

    /// Update a node's label. An unchanged label is an Ok no-op.
    pub fn edit_label(&mut self, id: &NodeId, label: impl Into<String>) -> Result<(), GraphError> {
        let label = label.into();
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::NotFound(id.clone()))?;
        if node.label == label {
            return Ok(());
        }
        node.label = label;
        self.rebuild_category();
        Ok(())
    }

    /// Remove a node and every edge incident to it, in one operation.
    ///
    /// An absent id is an error, not a silent no-op. No intermediate state
    /// with a dangling edge is ever observable.
    pub fn delete_node(&mut self, id: &NodeId) -> Result<Node, GraphError> {
        // shift_remove keeps insertion order for the remaining nodes, which
        // the category views rely on.
        let Some(node) = self.nodes.shift_remove(id) else {
            return Err(GraphError::NotFound(id.clone()));
        };
        self.edges.retain(|_, edge| !edge.involves_node(id));
        self.rebuild_category();
        Ok(node)
    }

    /// Connect `source` to `target` with a directed edge.
    ///
    /// Rejects absent endpoints, self-loops and kind violations (a final
    /// dish never feeds out, an ingredient is never fed into). Connecting
    /// an already connected pair is idempotent: the existing edge id comes
    /// back and nothing changes.
    pub fn connect(&mut self, source: &NodeId, target: &NodeId) -> Result<EdgeId, GraphError> {
        let source_node = self.nodes.get(source).ok_or_else(|| {
            GraphError::InvalidEndpoint(EndpointViolation::UnknownNode(source.clone()))
        })?;
        let target_node = self.nodes.get(target).ok_or_else(|| {
            GraphError::InvalidEndpoint(EndpointViolation::UnknownNode(target.clone()))
        })?;

        if source == target {
            return Err(GraphError::InvalidEndpoint(EndpointViolation::SelfLoop));
        }
        if !source_node.kind.can_be_source() {
            return Err(GraphError::InvalidEndpoint(
                EndpointViolation::KindCannotBeSource(source_node.kind),
            ));
        }
        if !target_node.kind.can_be_target() {
            return Err(GraphError::InvalidEndpoint(
                EndpointViolation::KindCannotBeTarget(target_node.kind),
            ));
        }

        // Duplicate detection goes by the endpoint pair, not the derived
        // id: imported documents may carry edges under arbitrary ids, and
        // those must count too or a parallel edge could slip in.
        if let Some(existing) = self
            .edges
            .values()
            .find(|e| e.source == *source && e.target == *target)
        {
            return Ok(existing.id.clone());
        }

        let edge = Edge::new(source.clone(), target.clone());
        let id = edge.id.clone();
        self.edges.insert(id.clone(), edge);
        Ok(id)
    }

    /// Remove an edge. Returns the edge, or `None` if it was absent.
    pub fn disconnect(&mut self, edge_id: &EdgeId) -> Option<Edge> {
        self.edges.shift_remove(edge_id)
    }

    /// Snap every node's position onto the grid in place.
    ///
    /// Used after bulk import and after structural changes that may have
    /// shifted column populations.
    pub fn snap_all(&mut self) {
        let grid = self.grid;
        for node in self.nodes.values_mut() {
            node.position = snap_position(node.position, node.size, &grid);
        }
    }

    /// Get a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Get an edge by id.
    pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The derived category index, current as of the latest mutation.
    pub fn category(&self) -> &CategoryIndex {
        &self.category
    }

    /// Ingredient nodes in insertion order.
    pub fn ingredients(&self) -> impl Iterator<Item = &Node> {
        self.nodes
            .values()
            .filter(|n| n.kind == NodeKind::Ingredient)
    }

    /// Step nodes in insertion order.
    pub fn steps(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(|n| n.kind == NodeKind::Step)
    }

    /// The final dish node, if one exists.
    pub fn final_dish(&self) -> Option<&Node> {
        self.category
            .final_dish
            .as_ref()
            .and_then(|id| self.nodes.get(id))
    }

    fn rebuild_category(&mut self) {
        self.category = CategoryIndex::derive(self.nodes.values());
    }

    /// Allocate a fresh kind-prefixed id, skipping any id already present
    /// (imported documents may occupy arbitrary ids).
    fn alloc_id(&mut self, kind: NodeKind) -> NodeId {
        let prefix = match kind {
            NodeKind::Ingredient => "ing",
            NodeKind::Step => "step",
            NodeKind::FinalDish => "dish",
        };
        loop {
            let id = NodeId::new(format!("{prefix}-{}", self.next_seq));
            self.next_seq += 1;
            if !self.nodes.contains_key(&id) {
                return id;
            }
        }
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a connect request was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EndpointViolation {
    /// An endpoint id is absent from the store.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    /// Source and target are the same node.
    #[error("a node cannot feed into itself")]
    SelfLoop,

    /// The source node's kind never feeds out.
    #[error("{} nodes cannot be an edge source", .0.display_name())]
    KindCannotBeSource(NodeKind),

    /// The target node's kind is never fed into.
    #[error("{} nodes cannot be an edge target", .0.display_name())]
    KindCannotBeTarget(NodeKind),
}

/// Error from a store operation. The store is unchanged on every error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Operation referenced a node absent from the store.
    #[error("node not found: {0}")]
    NotFound(NodeId),

    /// Connect request violated the endpoint rules.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(EndpointViolation),

    /// A second final dish was attempted while one exists.
    #[error("the recipe already has a final dish")]
    DuplicateSingleton,

    /// A node label may not be empty.
    #[error("node label may not be empty")]
    EmptyLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_basics() -> (GraphStore, NodeId, NodeId, NodeId) {
        let mut store = GraphStore::new();
        let flour = store.add_node(NodeKind::Ingredient, "Flour").unwrap();
        let butter = store.add_node(NodeKind::Ingredient, "Butter").unwrap();
        let melt = store
            .add_node(NodeKind::Step, crate::node::step_label("Melt", 2))
            .unwrap();
        (store, flour, butter, melt)
    }

    #[test]
    fn test_add_node_places_in_column() {
        let (store, flour, butter, melt) = store_with_basics();
        assert_eq!(store.node(&flour).unwrap().position, Position::new(0.0, 0.0));
        assert_eq!(
            store.node(&butter).unwrap().position,
            Position::new(0.0, 100.0)
        );
        assert_eq!(
            store.node(&melt).unwrap().position,
            Position::new(300.0, 0.0)
        );
    }

    #[test]
    fn test_add_node_rejects_empty_label() {
        let mut store = GraphStore::new();
        assert_eq!(
            store.add_node(NodeKind::Ingredient, ""),
            Err(GraphError::EmptyLabel)
        );
        assert_eq!(store.node_count(), 0);
        // Whitespace-only labels pass the emptiness guard.
        assert!(store.add_node(NodeKind::Ingredient, " ").is_ok());
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn test_final_dish_is_singleton() {
        let mut store = GraphStore::new();
        store.add_node(NodeKind::FinalDish, "Soup").unwrap();
        assert_eq!(
            store.add_node(NodeKind::FinalDish, "Stew"),
            Err(GraphError::DuplicateSingleton)
        );
        assert_eq!(store.node_count(), 1);
        assert_eq!(store.final_dish().unwrap().label, "Soup");
    }

    #[test]
    fn test_category_views_track_mutations() {
        let (mut store, flour, _, melt) = store_with_basics();
        assert_eq!(
            store.steps().map(|n| n.label.clone()).collect::<Vec<_>>(),
            vec!["Melt (2 min)"]
        );
        assert_eq!(store.category().ingredients.len(), 2);

        store.delete_node(&flour).unwrap();
        assert_eq!(store.category().ingredients.len(), 1);

        store.edit_label(&melt, "Brown (3 min)").unwrap();
        assert_eq!(store.steps().next().unwrap().label, "Brown (3 min)");
    }

    #[test]
    fn test_connect_validates_direction() {
        let (mut store, _, butter, melt) = store_with_basics();
        assert!(store.connect(&butter, &melt).is_ok());
        // A step can never feed back into an ingredient.
        assert_eq!(
            store.connect(&melt, &butter),
            Err(GraphError::InvalidEndpoint(
                EndpointViolation::KindCannotBeTarget(NodeKind::Ingredient)
            ))
        );
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_connect_rejects_final_dish_source_and_self_loop() {
        let mut store = GraphStore::new();
        let dish = store.add_node(NodeKind::FinalDish, "Soup").unwrap();
        let step = store.add_node(NodeKind::Step, "Simmer (10 min)").unwrap();
        assert_eq!(
            store.connect(&dish, &step),
            Err(GraphError::InvalidEndpoint(
                EndpointViolation::KindCannotBeSource(NodeKind::FinalDish)
            ))
        );
        assert_eq!(
            store.connect(&step, &step),
            Err(GraphError::InvalidEndpoint(EndpointViolation::SelfLoop))
        );
    }

    #[test]
    fn test_connect_unknown_endpoint() {
        let (mut store, flour, ..) = store_with_basics();
        let ghost = NodeId::from("step-999");
        assert_eq!(
            store.connect(&flour, &ghost),
            Err(GraphError::InvalidEndpoint(EndpointViolation::UnknownNode(
                ghost
            )))
        );
    }

    #[test]
    fn test_connect_idempotent() {
        let (mut store, _, butter, melt) = store_with_basics();
        let first = store.connect(&butter, &melt).unwrap();
        let second = store.connect(&butter, &melt).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_connect_idempotent_over_foreign_edge_id() {
        // An imported edge may sit under an id other than the derived one;
        // connecting the same pair must still be a no-op, not a parallel
        // edge.
        let (mut store, _, butter, melt) = store_with_basics();
        store.insert_edge(Edge {
            id: EdgeId("edge-a".to_owned()),
            source: butter.clone(),
            target: melt.clone(),
        });

        let id = store.connect(&butter, &melt).unwrap();
        assert_eq!(id, EdgeId("edge-a".to_owned()));
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_delete_node_removes_incident_edges() {
        let (mut store, flour, butter, melt) = store_with_basics();
        store.connect(&flour, &melt).unwrap();
        store.connect(&butter, &melt).unwrap();
        assert_eq!(store.edge_count(), 2);

        store.delete_node(&melt).unwrap();
        assert_eq!(store.edge_count(), 0);
        assert!(store.edges().all(|e| !e.involves_node(&melt)));
    }

    #[test]
    fn test_delete_absent_node_is_error() {
        let mut store = GraphStore::new();
        let ghost = NodeId::from("ing-1");
        assert_eq!(
            store.delete_node(&ghost),
            Err(GraphError::NotFound(ghost))
        );
    }

    #[test]
    fn test_move_and_edit_not_found() {
        let mut store = GraphStore::new();
        let ghost = NodeId::from("ing-1");
        assert!(matches!(
            store.move_node(&ghost, Position::new(1.0, 2.0)),
            Err(GraphError::NotFound(_))
        ));
        assert!(matches!(
            store.edit_label(&ghost, "x"),
            Err(GraphError::NotFound(_))
        ));
    }

    #[test]
    fn test_disconnect_absent_is_noop() {
        let (mut store, _, butter, melt) = store_with_basics();
        let id = store.connect(&butter, &melt).unwrap();
        assert!(store.disconnect(&id).is_some());
        assert!(store.disconnect(&id).is_none());
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_snap_all_idempotent() {
        let (mut store, flour, ..) = store_with_basics();
        store.move_node(&flour, Position::new(412.0, 133.0)).unwrap();
        store.snap_all();
        let once = store.node(&flour).unwrap().position;
        store.snap_all();
        assert_eq!(store.node(&flour).unwrap().position, once);
        assert_eq!(once.x, 300.0);
    }

    #[test]
    fn test_alloc_id_skips_taken_ids() {
        let mut store = GraphStore::new();
        store.insert_node(Node::new(
            NodeId::from("ing-1"),
            NodeKind::Ingredient,
            "Imported",
        ));
        let fresh = store.add_node(NodeKind::Ingredient, "Flour").unwrap();
        assert_ne!(fresh, NodeId::from("ing-1"));
        assert_eq!(store.node_count(), 2);
    }
}
