// SPDX-License-Identifier: MIT OR Apache-2.0
//! `RecipeFlow` headless demo driver.
//!
//! Loads the built-in demo recipe (or a JSON file given as the first
//! argument) through the editor's import path, logs a summary and prints
//! the re-exported document to stdout. Useful for poking at the document
//! format without a rendering frontend.

use recipeflow_editor::RecipeEditor;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("recipeflow_editor=debug,recipeflow_graph=debug")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut editor = RecipeEditor::new();
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            editor.import_json(&json)?;
            tracing::info!(%path, "recipe loaded from file");
        }
        None => {
            editor.load_demo()?;
            tracing::info!("built-in demo recipe loaded");
        }
    }

    tracing::info!(
        ingredients = editor.ingredients().count(),
        steps = editor.steps().count(),
        final_dish = editor.final_dish().map(|n| n.label.as_str()),
        "recipe summary"
    );

    println!("{}", editor.export_json()?);
    Ok(())
}
