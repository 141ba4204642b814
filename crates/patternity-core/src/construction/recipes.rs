//! Built-in recipe catalogue and structural validation.
//!
//! The canonical assembly sequences live here in core, beside the director
//! that interprets them; the types crate stays a pure data layer. Callers
//! overlay user catalogues on top of [`builtin_book`] by whole-recipe
//! replacement.

use patternity_types::error::RecipeError;
use patternity_types::recipe::{BuildStep, Recipe, RecipeBook};

/// The two-seater: 2 seats, sport engine, no GPS.
pub fn sports_car() -> Recipe {
    Recipe::new(
        "sports_car",
        vec![
            BuildStep::Reset,
            BuildStep::SetSeats { seats: 2 },
            BuildStep::SetEngine {
                engine: "sport_engine".to_string(),
            },
            BuildStep::SetGps { gps: false },
        ],
    )
}

/// The six-seater: 6 seats, SUV engine, GPS installed.
pub fn suv() -> Recipe {
    Recipe::new(
        "suv",
        vec![
            BuildStep::Reset,
            BuildStep::SetSeats { seats: 6 },
            BuildStep::SetEngine {
                engine: "suv_engine".to_string(),
            },
            BuildStep::SetGps { gps: true },
        ],
    )
}

/// The built-in catalogue, in listing order.
pub fn builtin_book() -> RecipeBook {
    let mut book = RecipeBook::new();
    book.replace(sports_car());
    book.replace(suv());
    book
}

/// Validate catalogue-level structure of a recipe.
///
/// Checks:
/// - Name is non-empty and contains only alphanumeric characters, hyphens
///   and underscores
/// - At least one step exists
///
/// Literal argument domains are a separate, opt-in concern
/// (`Recipe::validate`); a structurally valid recipe may still carry
/// out-of-domain literals under the base contract.
pub fn validate_recipe(recipe: &Recipe) -> Result<(), RecipeError> {
    if recipe.name().is_empty()
        || !recipe
            .name()
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(RecipeError::InvalidName(recipe.name().to_string()));
    }

    if recipe.steps().is_empty() {
        return Err(RecipeError::NoSteps(recipe.name().to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sports_car_literals_match_catalogue() {
        let recipe = sports_car();
        assert_eq!(recipe.name(), "sports_car");
        assert_eq!(
            recipe.steps(),
            &[
                BuildStep::Reset,
                BuildStep::SetSeats { seats: 2 },
                BuildStep::SetEngine {
                    engine: "sport_engine".to_string()
                },
                BuildStep::SetGps { gps: false },
            ]
        );
    }

    #[test]
    fn suv_literals_match_catalogue() {
        let recipe = suv();
        assert_eq!(recipe.name(), "suv");
        assert_eq!(
            recipe.steps(),
            &[
                BuildStep::Reset,
                BuildStep::SetSeats { seats: 6 },
                BuildStep::SetEngine {
                    engine: "suv_engine".to_string()
                },
                BuildStep::SetGps { gps: true },
            ]
        );
    }

    #[test]
    fn builtin_book_lists_both_recipes() {
        let book = builtin_book();
        assert_eq!(book.names(), vec!["sports_car", "suv"]);
    }

    #[test]
    fn builtins_pass_both_validations() {
        for recipe in builtin_book().iter() {
            validate_recipe(recipe).expect("structurally valid");
            recipe.validate().expect("in-domain literals");
        }
    }

    #[test]
    fn validate_recipe_rejects_empty_name() {
        let recipe = Recipe::new("", vec![BuildStep::Reset]);
        let err = validate_recipe(&recipe).unwrap_err();
        assert!(matches!(err, RecipeError::InvalidName(_)));
    }

    #[test]
    fn validate_recipe_rejects_invalid_characters() {
        let recipe = Recipe::new("has spaces!", vec![BuildStep::Reset]);
        let err = validate_recipe(&recipe).unwrap_err();
        assert!(matches!(err, RecipeError::InvalidName(_)));
    }

    #[test]
    fn validate_recipe_rejects_empty_steps() {
        let recipe = Recipe::new("hollow", vec![]);
        let err = validate_recipe(&recipe).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("has no steps"), "got: {msg}");
    }

    #[test]
    fn validate_recipe_accepts_hyphens_and_underscores() {
        let recipe = Recipe::new("city-runabout_v2", vec![BuildStep::Reset]);
        assert!(validate_recipe(&recipe).is_ok());
    }
}
