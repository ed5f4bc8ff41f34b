// SPDX-License-Identifier: MIT OR Apache-2.0
//! Headless editor shell for `RecipeFlow`.
//!
//! This crate sits between the graph core and whatever renders it:
//! - [`RecipeEditor`] receives user intents (add, move, connect, edit,
//!   delete, import/export) and exposes the live views a renderer reads
//! - [`LayoutCoordinator`] keeps geometry snapped to the column grid,
//!   coalescing re-layout work across rapid edits
//! - [`demo`] ships a built-in recipe fed through the normal import path
//!
//! Rendering itself (windows, widgets, drag capture, path drawing) is a
//! separate collaborator that holds a `RecipeEditor` and issues intents.

pub mod coordinator;
pub mod demo;
pub mod editor;

pub use coordinator::LayoutCoordinator;
pub use editor::{EditorError, RecipeEditor};
