// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the recipe graph.

use serde::{Deserialize, Serialize};

/// Default node width used when a document does not carry a size.
pub const DEFAULT_NODE_WIDTH: f32 = 200.0;
/// Default node height used when a document does not carry a size.
pub const DEFAULT_NODE_HEIGHT: f32 = 50.0;

/// Unique identifier for a node.
///
/// Ids are plain strings so documents written by other tools (or by hand)
/// remain importable. The store allocates its own ids from a kind-prefixed
/// counter, see [`crate::store::GraphStore::add_node`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a node ID from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// What a node represents in the recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// A raw ingredient; may only feed into steps.
    Ingredient,
    /// A preparation step; may consume and produce.
    Step,
    /// The finished dish; at most one per graph, only ever a target.
    FinalDish,
}

impl NodeKind {
    /// Whether a node of this kind may be the source of an edge.
    pub fn can_be_source(self) -> bool {
        !matches!(self, NodeKind::FinalDish)
    }

    /// Whether a node of this kind may be the target of an edge.
    pub fn can_be_target(self) -> bool {
        !matches!(self, NodeKind::Ingredient)
    }

    /// Display name for this kind.
    pub fn display_name(self) -> &'static str {
        match self {
            NodeKind::Ingredient => "Ingredient",
            NodeKind::Step => "Step",
            NodeKind::FinalDish => "Final Dish",
        }
    }
}

/// A position in continuous layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Position {
    /// Create a position.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Node dimensions in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Node width.
    pub width: f32,
    /// Node height.
    pub height: f32,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: DEFAULT_NODE_WIDTH,
            height: DEFAULT_NODE_HEIGHT,
        }
    }
}

/// A node in the recipe graph.
///
/// Pure data: rendering concerns (colors, selection, edit/delete handlers)
/// belong to the UI collaborator and are never stored or serialized here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique id.
    pub id: NodeId,
    /// What the node represents.
    pub kind: NodeKind,
    /// Display text. Step labels are conventionally
    /// `"<description> (<minutes> min)"`.
    pub label: String,
    /// Top-left corner in layout units.
    pub position: Position,
    /// Node dimensions; defaulted when a document omits them.
    #[serde(default)]
    pub size: Size,
}

impl Node {
    /// Create a node at the origin with the default size.
    pub fn new(id: NodeId, kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            position: Position::default(),
            size: Size::default(),
        }
    }

    /// Set the position.
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Position::new(x, y);
        self
    }
}

/// Compose the conventional step label from a description and a duration
/// in minutes.
pub fn step_label(description: &str, minutes: u32) -> String {
    format!("{description} ({minutes} min)")
}
