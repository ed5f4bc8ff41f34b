// SPDX-License-Identifier: MIT OR Apache-2.0
//! Column-snapped grid layout.
//!
//! The diagram is organized into three fixed lanes: ingredients, steps and
//! the final dish. [`snap_position`] quantizes a raw position onto the
//! grid; [`Column`] maps node kinds to their home lane for initial
//! placement.

use crate::node::{NodeKind, Position, Size};

/// Grid constants for the column layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Horizontal spacing between column lines.
    pub column_width: f32,
    /// Vertical spacing between row lines.
    pub row_height: f32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            column_width: 300.0,
            row_height: 100.0,
        }
    }
}

/// One of the three semantic lanes of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Leftmost lane, ingredient nodes.
    Ingredients,
    /// Middle lane, step nodes.
    Steps,
    /// Rightmost lane, the final dish.
    FinalDish,
}

impl Column {
    /// The lane a node kind is created in.
    pub fn for_kind(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Ingredient => Column::Ingredients,
            NodeKind::Step => Column::Steps,
            NodeKind::FinalDish => Column::FinalDish,
        }
    }

    /// Zero-based lane index, left to right.
    pub fn index(self) -> usize {
        match self {
            Column::Ingredients => 0,
            Column::Steps => 1,
            Column::FinalDish => 2,
        }
    }

    /// X coordinate of this lane's column line.
    pub fn origin_x(self, grid: &GridSpec) -> f32 {
        self.index() as f32 * grid.column_width
    }
}

/// Snap a raw position onto the layout grid.
///
/// The x coordinate rounds to the nearest column line regardless of which
/// lane the node belongs to, so a node dragged across lanes lands on
/// whichever boundary is closest. The y coordinate is center-aligned: the
/// node's vertical center rounds to the nearest row line and the top-left
/// y is recovered from it, which keeps nodes of differing heights visually
/// aligned on the same row.
///
/// Pure and idempotent: snapping an already snapped position is a no-op.
pub fn snap_position(position: Position, size: Size, grid: &GridSpec) -> Position {
    let x = (position.x / grid.column_width).round() * grid.column_width;
    let center_y = position.y + size.height / 2.0;
    let snapped_center_y = (center_y / grid.row_height).round() * grid.row_height;
    Position::new(x, snapped_center_y - size.height / 2.0)
}
