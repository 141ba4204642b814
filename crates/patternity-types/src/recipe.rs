//! Recipe domain types for Patternity.
//!
//! A recipe is the data form of a director's assembly sequence: a named,
//! ordered, immutable list of build steps with literal arguments. Recipe
//! files, the built-in catalogue, and the CLI all share `Recipe` as the
//! single source of truth for an assembly sequence. This module also
//! contains the `RecipeBook` catalogue type used for lookup and overlay.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Build steps
// ---------------------------------------------------------------------------

/// A single construction step paired with its literal argument.
///
/// Internally tagged by `op` to match the recipe file structure:
/// ```toml
/// steps = [
///     { op = "reset" },
///     { op = "set_seats", seats = 2 },
///     { op = "set_engine", engine = "sport_engine" },
///     { op = "set_gps", gps = false },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BuildStep {
    /// Discard the in-progress product and start from default values.
    Reset,
    /// Overwrite the seat count slot.
    SetSeats { seats: i32 },
    /// Overwrite the engine designation slot.
    SetEngine { engine: String },
    /// Overwrite the GPS slot.
    SetGps { gps: bool },
}

// ---------------------------------------------------------------------------
// Recipe
// ---------------------------------------------------------------------------

/// A named, fixed assembly sequence.
///
/// Immutable after construction: fields are private and no mutators exist,
/// so a recipe is versioned only by full replacement in a [`RecipeBook`].
/// A recipe never extracts -- materializing the product stays with the
/// caller, which is what lets one recipe drive interchangeable builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Catalogue name (e.g. "sports_car"). Unique within a book.
    name: String,
    /// Ordered step list, applied front to back.
    steps: Vec<BuildStep>,
}

impl Recipe {
    /// Create a recipe from a name and an ordered step list.
    pub fn new(name: &str, steps: Vec<BuildStep>) -> Self {
        Self {
            name: name.to_string(),
            steps,
        }
    }

    /// Catalogue name of this recipe.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered step list.
    pub fn steps(&self) -> &[BuildStep] {
        &self.steps
    }

    /// Check every literal argument against its attribute slot's domain.
    ///
    /// The base construction contract is deliberately total: builders accept
    /// and store out-of-domain values (a negative seat count) verbatim. This
    /// method is the documented stricter alternative -- callers that opt in
    /// (e.g. via `Director::apply_checked`) get an all-or-nothing check of
    /// the recipe's literals before any step touches a builder.
    ///
    /// Checks, in step order, first failure wins:
    /// - `set_seats`: seat count must not be negative
    /// - `set_engine`: engine name must not be empty
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (index, step) in self.steps.iter().enumerate() {
            match step {
                BuildStep::SetSeats { seats } if *seats < 0 => {
                    return Err(ValidationError::NegativeSeats {
                        index,
                        seats: *seats,
                    });
                }
                BuildStep::SetEngine { engine } if engine.is_empty() => {
                    return Err(ValidationError::EmptyEngine { index });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Recipe book
// ---------------------------------------------------------------------------

/// A named collection of recipes with lookup and whole-recipe replacement.
///
/// Doubles as the `recipes.toml` file shape: a list of `[[recipes]]` tables.
/// Insertion order is preserved so catalogue listings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeBook {
    #[serde(default)]
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a recipe by name.
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name() == name)
    }

    /// Recipe names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.recipes.iter().map(|r| r.name()).collect()
    }

    /// Insert a recipe, replacing any existing recipe with the same name.
    ///
    /// Replacement is whole-recipe: there is no way to edit individual steps
    /// of a catalogued recipe. Returns the displaced recipe, if any.
    pub fn replace(&mut self, recipe: Recipe) -> Option<Recipe> {
        match self.recipes.iter().position(|r| r.name() == recipe.name()) {
            Some(pos) => Some(std::mem::replace(&mut self.recipes[pos], recipe)),
            None => {
                self.recipes.push(recipe);
                None
            }
        }
    }

    /// Overlay another book onto this one, recipe by recipe.
    ///
    /// Recipes from `other` win on name collision (whole-recipe replacement).
    pub fn merge(&mut self, other: RecipeBook) {
        for recipe in other.recipes {
            self.replace(recipe);
        }
    }

    /// Iterate recipes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Number of recipes in the book.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the book holds no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl IntoIterator for RecipeBook {
    type Item = Recipe;
    type IntoIter = std::vec::IntoIter<Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.into_iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sports_car() -> Recipe {
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

    #[test]
    fn test_build_step_tag_format() {
        let cases = [
            (BuildStep::Reset, "\"op\":\"reset\""),
            (BuildStep::SetSeats { seats: 2 }, "\"op\":\"set_seats\""),
            (
                BuildStep::SetEngine {
                    engine: "v8".to_string(),
                },
                "\"op\":\"set_engine\"",
            ),
            (BuildStep::SetGps { gps: true }, "\"op\":\"set_gps\""),
        ];
        for (step, tag) in cases {
            let json = serde_json::to_string(&step).unwrap();
            assert!(json.contains(tag), "missing {tag} in {json}");
            let parsed: BuildStep = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, step);
        }
    }

    #[test]
    fn test_recipe_preserves_step_order() {
        let recipe = sports_car();
        assert_eq!(recipe.name(), "sports_car");
        assert_eq!(recipe.steps().len(), 4);
        assert_eq!(recipe.steps()[0], BuildStep::Reset);
        assert_eq!(recipe.steps()[1], BuildStep::SetSeats { seats: 2 });
        assert_eq!(recipe.steps()[3], BuildStep::SetGps { gps: false });
    }

    #[test]
    fn test_recipe_json_roundtrip() {
        let recipe = sports_car();
        let json = serde_json::to_string_pretty(&recipe).unwrap();
        let parsed: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, recipe);
    }

    #[test]
    fn test_parse_realistic_toml_book() {
        let toml_src = r#"
[[recipes]]
name = "convertible"
steps = [
    { op = "reset" },
    { op = "set_seats", seats = 2 },
    { op = "set_engine", engine = "v8_engine" },
    { op = "set_gps", gps = false },
]

[[recipes]]
name = "family_van"
steps = [
    { op = "set_seats", seats = 7 },
    { op = "set_engine", engine = "diesel_engine" },
    { op = "set_gps", gps = true },
]
"#;
        let book: RecipeBook = toml::from_str(toml_src).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.names(), vec!["convertible", "family_van"]);

        let van = book.get("family_van").unwrap();
        // No leading reset in the data; the director resets regardless.
        assert_eq!(van.steps()[0], BuildStep::SetSeats { seats: 7 });
        assert_eq!(
            van.steps()[1],
            BuildStep::SetEngine {
                engine: "diesel_engine".to_string()
            }
        );
    }

    #[test]
    fn test_parse_empty_toml_book() {
        let book: RecipeBook = toml::from_str("").unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_validate_accepts_in_domain_literals() {
        assert!(sports_car().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_seats() {
        let recipe = Recipe::new(
            "clown_car",
            vec![BuildStep::Reset, BuildStep::SetSeats { seats: -1 }],
        );
        let err = recipe.validate().unwrap_err();
        assert!(
            matches!(
                err,
                ValidationError::NegativeSeats { index: 1, seats: -1 }
            ),
            "got: {err}"
        );
    }

    #[test]
    fn test_validate_rejects_empty_engine() {
        let recipe = Recipe::new(
            "ghost",
            vec![BuildStep::SetEngine {
                engine: String::new(),
            }],
        );
        let err = recipe.validate().unwrap_err();
        assert!(matches!(err, ValidationError::EmptyEngine { index: 0 }));
    }

    #[test]
    fn test_validate_first_failure_wins() {
        let recipe = Recipe::new(
            "doubly_bad",
            vec![
                BuildStep::SetEngine {
                    engine: String::new(),
                },
                BuildStep::SetSeats { seats: -5 },
            ],
        );
        let err = recipe.validate().unwrap_err();
        assert!(matches!(err, ValidationError::EmptyEngine { index: 0 }));
    }

    #[test]
    fn test_book_get_unknown_returns_none() {
        let mut book = RecipeBook::new();
        book.replace(sports_car());
        assert!(book.get("hovercraft").is_none());
        assert!(book.get("sports_car").is_some());
    }

    #[test]
    fn test_book_replace_displaces_by_name() {
        let mut book = RecipeBook::new();
        assert!(book.replace(sports_car()).is_none());

        let altered = Recipe::new("sports_car", vec![BuildStep::SetSeats { seats: 4 }]);
        let displaced = book.replace(altered).expect("should displace original");
        assert_eq!(displaced.steps().len(), 4);

        // Whole-recipe replacement: the new step list fully supersedes.
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("sports_car").unwrap().steps().len(), 1);
    }

    #[test]
    fn test_book_merge_overlays_by_name() {
        let mut base = RecipeBook::new();
        base.replace(sports_car());
        base.replace(Recipe::new("suv", vec![BuildStep::SetSeats { seats: 6 }]));

        let mut overlay = RecipeBook::new();
        overlay.replace(Recipe::new(
            "suv",
            vec![BuildStep::SetSeats { seats: 8 }],
        ));
        overlay.replace(Recipe::new(
            "roadster",
            vec![BuildStep::SetSeats { seats: 2 }],
        ));

        base.merge(overlay);

        assert_eq!(base.len(), 3);
        assert_eq!(base.names(), vec!["sports_car", "suv", "roadster"]);
        assert_eq!(
            base.get("suv").unwrap().steps()[0],
            BuildStep::SetSeats { seats: 8 }
        );
    }
}
