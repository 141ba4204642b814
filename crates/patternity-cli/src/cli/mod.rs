//! CLI command definitions and dispatch for the `ptny` binary.
//!
//! Uses clap derive macros for argument parsing. Commands operate on the
//! recipe book loaded from `recipes.toml` (built-in recipes plus any
//! user-defined ones).

pub mod build;
pub mod demo;
pub mod recipe;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Drive car builders through named recipes.
#[derive(Parser)]
#[command(name = "ptny", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the recipe book (missing file falls back to built-ins).
    #[arg(long, global = true, default_value = "recipes.toml")]
    pub recipes: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all recipes in the book.
    #[command(alias = "ls")]
    List,

    /// Show the steps of one recipe.
    Show {
        /// Recipe name to display.
        recipe: String,
    },

    /// Apply a recipe to a builder and print the product.
    Build {
        /// Recipe name to apply.
        recipe: String,

        /// Builder variant to drive (car, manual).
        #[arg(long, default_value = "car")]
        variant: String,

        /// Validate step arguments before applying.
        #[arg(long)]
        checked: bool,
    },

    /// Run the pattern catalog demonstrations.
    Demo,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
