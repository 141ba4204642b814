//! Build CLI command: apply a recipe to a builder variant.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use console::style;

use patternity_core::construction::builder::Builder;
use patternity_core::construction::car::CarBuilder;
use patternity_core::construction::director::Director;
use patternity_core::construction::manual::CarManualBuilder;
use patternity_types::error::RecipeError;
use patternity_types::recipe::{Recipe, RecipeBook};
use patternity_types::report::AssemblyReport;

/// The builder variants the CLI can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderVariant {
    Car,
    Manual,
}

impl fmt::Display for BuilderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderVariant::Car => write!(f, "car"),
            BuilderVariant::Manual => write!(f, "manual"),
        }
    }
}

impl FromStr for BuilderVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "car" => Ok(BuilderVariant::Car),
            "manual" => Ok(BuilderVariant::Manual),
            other => Err(format!("invalid builder variant: '{other}'")),
        }
    }
}

/// Apply a recipe to a fresh builder and print the extracted product.
///
/// # Examples
///
/// ```bash
/// # Built-in sports car through the car builder
/// ptny build sports-car
///
/// # Same recipe through the manual builder, validated first
/// ptny build sports-car --variant manual --checked
/// ```
pub fn build(
    book: &RecipeBook,
    name: &str,
    variant: &str,
    checked: bool,
    json: bool,
) -> Result<()> {
    let recipe = book
        .get(name)
        .ok_or_else(|| RecipeError::NotFound(name.to_string()))?;

    let variant = variant
        .parse::<BuilderVariant>()
        .map_err(|e| anyhow::anyhow!(e))?;

    match variant {
        BuilderVariant::Car => {
            let (car, report) = run::<CarBuilder>(recipe, checked)?;
            if json {
                print_json(variant, &serde_json::to_value(&car)?, &report)?;
            } else {
                print_product(variant, recipe, car.seats, &car.engine, car.gps, &report);
            }
        }
        BuilderVariant::Manual => {
            let (manual, report) = run::<CarManualBuilder>(recipe, checked)?;
            if json {
                print_json(variant, &serde_json::to_value(&manual)?, &report)?;
            } else {
                print_product(
                    variant,
                    recipe,
                    manual.seats,
                    &manual.engine,
                    manual.gps,
                    &report,
                );
            }
        }
    }

    Ok(())
}

/// Run one recipe against a fresh builder of type `B`.
fn run<B>(recipe: &Recipe, checked: bool) -> Result<(B::Product, AssemblyReport)>
where
    B: Builder + Default,
{
    let director = Director;
    let mut builder = B::default();

    let report = if checked {
        director.apply_checked(recipe, &mut builder)?
    } else {
        director.apply(recipe, &mut builder)
    };

    Ok((builder.extract(), report))
}

// --- Output helpers ---

fn print_json(
    variant: BuilderVariant,
    product: &serde_json::Value,
    report: &AssemblyReport,
) -> Result<()> {
    let out = serde_json::json!({
        "variant": variant.to_string(),
        "product": product,
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn print_product(
    variant: BuilderVariant,
    recipe: &Recipe,
    seats: i32,
    engine: &str,
    gps: bool,
    report: &AssemblyReport,
) {
    println!();
    println!(
        "  {} Assembled '{}' with the {} builder",
        style("✓").green().bold(),
        style(recipe.name()).cyan(),
        variant
    );
    println!();
    println!("  {}   {}", style("Seats:").bold(), seats);
    println!("  {}  {}", style("Engine:").bold(), engine);
    println!("  {}     {}", style("GPS:").bold(), gps);
    println!();
    println!(
        "  {} step{} applied, run {}",
        style(report.steps_applied).bold(),
        if report.steps_applied == 1 { "" } else { "s" },
        style(report.run_id.to_string()).dim()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use patternity_core::construction::recipes;
    use patternity_types::recipe::BuildStep;

    #[test]
    fn test_variant_parse_roundtrip() {
        for variant in [BuilderVariant::Car, BuilderVariant::Manual] {
            let parsed: BuilderVariant = variant.to_string().parse().unwrap();
            assert_eq!(parsed, variant);
        }
    }

    #[test]
    fn test_variant_parse_rejects_unknown() {
        let err = "truck".parse::<BuilderVariant>().unwrap_err();
        assert_eq!(err, "invalid builder variant: 'truck'");
    }

    #[test]
    fn test_run_assembles_the_builtin_sports_car() {
        let (car, report) = run::<CarBuilder>(&recipes::sports_car(), false).unwrap();
        assert_eq!(car.seats, 2);
        assert_eq!(car.engine, "sport_engine");
        assert!(!car.gps);
        assert_eq!(report.steps_applied, 4);
    }

    #[test]
    fn test_run_checked_rejects_invalid_arguments() {
        let recipe = Recipe::new("bad", vec![BuildStep::SetSeats { seats: -1 }]);
        assert!(run::<CarBuilder>(&recipe, true).is_err());
    }
}
