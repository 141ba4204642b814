//! Recipe book loader for the `ptny` CLI.
//!
//! Reads `recipes.toml` and overlays its recipes onto the built-in book.
//! Falls back to the built-ins alone when the file is missing or malformed,
//! so the CLI always has a working catalogue.

use std::path::Path;

use patternity_core::construction::recipes::{builtin_book, validate_recipe};
use patternity_types::recipe::RecipeBook;

/// Load the recipe book from the given path.
///
/// - If the file does not exist, returns the built-in book.
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the built-ins.
/// - Recipes that parse but fail structural validation are skipped with a
///   warning; the rest overlay the built-ins by name (whole-recipe
///   replacement).
pub fn load_recipe_book(path: &Path) -> RecipeBook {
    let mut book = builtin_book();

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No recipe book at {}, using built-ins", path.display());
            return book;
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using built-ins", path.display());
            return book;
        }
    };

    let loaded = match toml::from_str::<RecipeBook>(&content) {
        Ok(loaded) => loaded,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using built-ins", path.display());
            return book;
        }
    };

    let mut accepted = RecipeBook::new();
    for recipe in loaded {
        match validate_recipe(&recipe) {
            Ok(()) => {
                if book.get(recipe.name()).is_some() {
                    tracing::debug!("Recipe '{}' overrides a built-in", recipe.name());
                }
                accepted.replace(recipe);
            }
            Err(err) => {
                tracing::warn!("Skipping recipe '{}': {err}", recipe.name());
            }
        }
    }

    book.merge(accepted);
    book
}
