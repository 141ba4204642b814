//! Recipe book CLI commands: list, show.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use patternity_types::error::RecipeError;
use patternity_types::recipe::{BuildStep, Recipe, RecipeBook};

/// List all recipes in a table, with the product each would assemble.
pub fn list_recipes(book: &RecipeBook, json: bool) -> Result<()> {
    if json {
        let recipes: Vec<&Recipe> = book.iter().collect();
        println!("{}", serde_json::to_string_pretty(&recipes)?);
        return Ok(());
    }

    if book.is_empty() {
        println!();
        println!(
            "  {} No recipes in the book. Add some to: {}",
            style("i").blue().bold(),
            style("recipes.toml").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("Steps").fg(Color::White),
        Cell::new("Seats").fg(Color::White),
        Cell::new("Engine").fg(Color::White),
        Cell::new("GPS").fg(Color::White),
    ]);

    for recipe in book.iter() {
        let summary = RecipeSummary::of(recipe);
        table.add_row(vec![
            Cell::new(recipe.name()).fg(Color::Cyan),
            Cell::new(recipe.steps().len()),
            Cell::new(summary.seats_display()),
            Cell::new(summary.engine_display()),
            Cell::new(summary.gps_display()),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} recipe{}",
        style(book.len()).bold(),
        if book.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Show the full step sequence of one recipe.
pub fn show_recipe(book: &RecipeBook, name: &str, json: bool) -> Result<()> {
    let recipe = book
        .get(name)
        .ok_or_else(|| RecipeError::NotFound(name.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(recipe)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(recipe.name()).cyan().bold());
    println!();

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Step").fg(Color::White),
        Cell::new("Argument").fg(Color::White),
    ]);

    for (index, step) in recipe.steps().iter().enumerate() {
        let (op, argument) = step_cells(step);
        table.add_row(vec![
            Cell::new(index + 1).fg(Color::DarkGrey),
            Cell::new(op).fg(Color::Cyan),
            Cell::new(argument),
        ]);
    }

    println!("{table}");
    println!();

    let summary = RecipeSummary::of(recipe);
    println!(
        "  {} seats={} engine={} gps={}",
        style("Produces:").bold(),
        summary.seats_display(),
        summary.engine_display(),
        summary.gps_display()
    );
    println!();

    Ok(())
}

// --- Formatting helpers ---

/// The product a recipe would leave in a builder: each slot holds the last
/// literal written since the most recent reset, or stays unset.
#[derive(Debug, Default, PartialEq)]
struct RecipeSummary {
    seats: Option<i32>,
    engine: Option<String>,
    gps: Option<bool>,
}

impl RecipeSummary {
    fn of(recipe: &Recipe) -> Self {
        let mut summary = RecipeSummary::default();
        for step in recipe.steps() {
            match step {
                BuildStep::Reset => summary = RecipeSummary::default(),
                BuildStep::SetSeats { seats } => summary.seats = Some(*seats),
                BuildStep::SetEngine { engine } => summary.engine = Some(engine.clone()),
                BuildStep::SetGps { gps } => summary.gps = Some(*gps),
            }
        }
        summary
    }

    fn seats_display(&self) -> String {
        self.seats.map_or_else(|| "-".to_string(), |s| s.to_string())
    }

    fn engine_display(&self) -> String {
        self.engine.clone().unwrap_or_else(|| "-".to_string())
    }

    fn gps_display(&self) -> String {
        self.gps.map_or_else(|| "-".to_string(), |g| g.to_string())
    }
}

fn step_cells(step: &BuildStep) -> (&'static str, String) {
    match step {
        BuildStep::Reset => ("reset", String::new()),
        BuildStep::SetSeats { seats } => ("set_seats", seats.to_string()),
        BuildStep::SetEngine { engine } => ("set_engine", engine.clone()),
        BuildStep::SetGps { gps } => ("set_gps", gps.to_string()),
    }
}
