// SPDX-License-Identifier: MIT OR Apache-2.0
//! Built-in demo recipe.
//!
//! A small pancake recipe kept as a literal document so the "load demo"
//! trigger exercises exactly the same import path as a user-selected file.

/// The demo recipe document. Positions are already grid-aligned.
pub const DEMO_RECIPE_JSON: &str = r#"{
  "nodes": [
    {"id": "ing-1", "kind": "ingredient", "label": "Flour",
     "position": {"x": 0.0, "y": -25.0}},
    {"id": "ing-2", "kind": "ingredient", "label": "Milk",
     "position": {"x": 0.0, "y": 75.0}},
    {"id": "ing-3", "kind": "ingredient", "label": "Egg",
     "position": {"x": 0.0, "y": 175.0}},
    {"id": "step-4", "kind": "step", "label": "Whisk into a batter (3 min)",
     "position": {"x": 300.0, "y": -25.0}},
    {"id": "step-5", "kind": "step", "label": "Fry per side (10 min)",
     "position": {"x": 300.0, "y": 75.0}},
    {"id": "dish-6", "kind": "finalDish", "label": "Pancakes",
     "position": {"x": 600.0, "y": -25.0}}
  ],
  "edges": [
    {"id": "edge-ing-1-step-4", "source": "ing-1", "target": "step-4"},
    {"id": "edge-ing-2-step-4", "source": "ing-2", "target": "step-4"},
    {"id": "edge-ing-3-step-4", "source": "ing-3", "target": "step-4"},
    {"id": "edge-step-4-step-5", "source": "step-4", "target": "step-5"},
    {"id": "edge-step-5-dish-6", "source": "step-5", "target": "dish-6"}
  ],
  "ingredients": [],
  "steps": [],
  "finalDish": null
}"#;
