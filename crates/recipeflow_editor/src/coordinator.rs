// SPDX-License-Identifier: MIT OR Apache-2.0
//! Layout coordination between user events and the grid snapper.

use recipeflow_graph::{snap_position, GraphError, GraphStore, NodeId, Position};

/// Re-applies snapped geometry to the store in response to edit events.
///
/// Drag-end positions are snapped and committed immediately. Structural
/// changes (anything that shifts how many nodes occupy a column) only mark
/// a full re-layout as pending; [`flush`](Self::flush) runs it once, so any
/// number of rapid additions collapse into a single `snap_all` pass. Flush
/// is idempotent and must happen before the next user-visible read, which
/// [`crate::RecipeEditor`] guarantees by flushing at the end of every
/// intent.
#[derive(Debug, Default)]
pub struct LayoutCoordinator {
    relayout_pending: bool,
}

impl LayoutCoordinator {
    /// Create a coordinator with no pending work.
    pub fn new() -> Self {
        Self::default()
    }

    /// Note a structural change; the next [`flush`](Self::flush) re-snaps
    /// the whole graph. Repeated calls coalesce.
    pub fn mark_dirty(&mut self) {
        self.relayout_pending = true;
    }

    /// Whether a re-layout pass is scheduled.
    pub fn is_pending(&self) -> bool {
        self.relayout_pending
    }

    /// Snap a drag-end position and commit it to the store.
    pub fn drag_ended(
        &self,
        store: &mut GraphStore,
        id: &NodeId,
        raw: Position,
    ) -> Result<(), GraphError> {
        let node = store
            .node(id)
            .ok_or_else(|| GraphError::NotFound(id.clone()))?;
        let snapped = snap_position(raw, node.size, store.grid());
        tracing::debug!(node = %id, x = snapped.x, y = snapped.y, "drag-end snapped");
        store.move_node(id, snapped)
    }

    /// Run the pending re-layout, if any. Idempotent.
    pub fn flush(&mut self, store: &mut GraphStore) {
        if self.relayout_pending {
            store.snap_all();
            self.relayout_pending = false;
            tracing::debug!(nodes = store.node_count(), "re-layout pass applied");
        }
    }
}
