// SPDX-License-Identifier: MIT OR Apache-2.0
//! Recipe graph core for `RecipeFlow`.
//!
//! This crate provides the data model behind the recipe diagram:
//! - Ingredient, step and final-dish nodes with directed "feeds into" edges
//! - A canonical store with validated CRUD and connection operations
//! - Category views (ingredients, steps, final dish) derived from the store
//! - Column-snapped grid layout
//! - The portable JSON document format for save/reload
//!
//! ## Architecture
//!
//! [`GraphStore`] is the single source of truth. The [`CategoryIndex`] is a
//! materialized view the store recomputes after every node mutation, and
//! [`RecipeDocument`] is the serialized shape of both. Rendering lives in a
//! separate collaborator that issues intents against the store; nothing in
//! this crate holds UI state or callbacks.

pub mod category;
pub mod document;
pub mod edge;
pub mod node;
pub mod snap;
pub mod store;

pub use category::CategoryIndex;
pub use document::{DocumentError, RecipeDocument};
pub use edge::{Edge, EdgeId};
pub use node::{step_label, Node, NodeId, NodeKind, Position, Size};
pub use snap::{snap_position, Column, GridSpec};
pub use store::{GraphError, GraphStore};
