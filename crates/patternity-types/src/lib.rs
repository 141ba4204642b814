//! Shared domain types for Patternity.
//!
//! This crate contains the core domain types used across the Patternity
//! catalogue: Product aggregates (Car, CarManual), recipe data (BuildStep,
//! Recipe, RecipeBook), assembly reports, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod error;
pub mod product;
pub mod recipe;
pub mod report;
