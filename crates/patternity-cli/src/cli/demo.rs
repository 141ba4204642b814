//! Demo CLI command: run the pattern catalog demonstrations.

use anyhow::Result;
use console::style;

use patternity_core::catalog::abstract_factory::FurnitureStyle;
use patternity_core::catalog::factory_method::{CatFeeder, DogFeeder, Feeder};

/// Run the feeder and furniture demonstrations and print their transcripts.
pub fn demo(json: bool) -> Result<()> {
    let feeders: Vec<(&str, Box<dyn Feeder>)> = vec![
        ("cat", Box::new(CatFeeder)),
        ("dog", Box::new(DogFeeder)),
    ];

    let styles = [FurnitureStyle::Victorian, FurnitureStyle::Modern];

    if json {
        let feeders_json: serde_json::Map<String, serde_json::Value> = feeders
            .iter()
            .map(|(name, feeder)| ((*name).to_string(), serde_json::json!(feeder.feed())))
            .collect();

        let furniture_json: Vec<serde_json::Value> = styles
            .iter()
            .map(|furniture_style| {
                let factory = furniture_style.factory();
                serde_json::json!({
                    "style": furniture_style.to_string(),
                    "chair": factory.create_chair().sit_on(),
                    "sofa_bed": factory.create_sofa().is_sofa_bed(),
                })
            })
            .collect();

        let out = serde_json::json!({
            "feeders": feeders_json,
            "furniture": furniture_json,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("  {}", style("── Factory method: animal feeders ──").dim());
    println!();
    for (name, feeder) in &feeders {
        println!("  {} feeder:", style(name).cyan().bold());
        for line in feeder.feed() {
            println!("    {line}");
        }
        println!();
    }

    println!(
        "  {}",
        style("── Abstract factory: furniture families ──").dim()
    );
    println!();
    for furniture_style in styles {
        let factory = furniture_style.factory();
        let chair = factory.create_chair();
        let sofa = factory.create_sofa();

        println!("  {}:", style(furniture_style).cyan().bold());
        println!("    {}", chair.sit_on());
        println!(
            "    Is this a sofa bed? {}.",
            if sofa.is_sofa_bed() { "Yes" } else { "No" }
        );
        println!();
    }

    Ok(())
}
