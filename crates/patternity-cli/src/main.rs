//! Patternity CLI entry point.
//!
//! Binary name: `ptny`
//!
//! Parses CLI arguments, loads the recipe book, then dispatches to the
//! appropriate command handler.

mod cli;
mod config;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,patternity_core=debug,patternity_cli=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need a recipe book
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "ptny", &mut std::io::stdout());
        return Ok(());
    }

    let book = config::load_recipe_book(&cli.recipes);

    match cli.command {
        Commands::List => {
            cli::recipe::list_recipes(&book, cli.json)?;
        }

        Commands::Show { recipe } => {
            cli::recipe::show_recipe(&book, &recipe, cli.json)?;
        }

        Commands::Build {
            recipe,
            variant,
            checked,
        } => {
            cli::build::build(&book, &recipe, &variant, checked, cli.json)?;
        }

        Commands::Demo => {
            cli::demo::demo(cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
