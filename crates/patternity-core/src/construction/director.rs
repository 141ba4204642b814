//! The stateless director and its recipe interpreter.

use chrono::Utc;
use uuid::Uuid;

use patternity_types::error::ValidationError;
use patternity_types::recipe::{BuildStep, Recipe};
use patternity_types::report::AssemblyReport;

use crate::construction::builder::Builder;
use crate::construction::recipes;

/// Drives any [`Builder`] through named or caller-supplied recipes.
///
/// Holds no state and no builder reference between calls: each application
/// is a pure sequence of calls against the builder passed in, so behavior
/// depends only on call arguments and one director serves arbitrarily many
/// callers and builder variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct Director;

impl Director {
    /// Interpret a recipe against a builder.
    ///
    /// Always begins with `reset()`, so the extracted product is independent
    /// of whatever the builder held before -- even when the recipe data
    /// omits a leading reset step. A leading reset in the data is the
    /// conventional form and costs nothing (reset is idempotent).
    ///
    /// The recipe never extracts; the caller decides when to materialize
    /// the product and may reuse the builder for a different recipe after.
    pub fn apply<B>(&self, recipe: &Recipe, builder: &mut B) -> AssemblyReport
    where
        B: Builder + ?Sized,
    {
        let run_id = Uuid::now_v7();
        let started_at = Utc::now();
        tracing::debug!(recipe = recipe.name(), %run_id, "applying recipe");

        builder.reset();
        for step in recipe.steps() {
            match step {
                BuildStep::Reset => builder.reset(),
                BuildStep::SetSeats { seats } => builder.set_seats(*seats),
                BuildStep::SetEngine { engine } => builder.set_engine(engine),
                BuildStep::SetGps { gps } => builder.set_gps(*gps),
            }
            tracing::trace!(?step, "applied build step");
        }

        AssemblyReport {
            run_id,
            recipe: recipe.name().to_string(),
            steps_applied: recipe.steps().len(),
            started_at,
            finished_at: Utc::now(),
        }
    }

    /// Interpret a recipe under the stricter, opt-in contract.
    ///
    /// Divergence from the base contract, by design: every literal argument
    /// is checked against its attribute slot's domain before any step runs,
    /// all-or-nothing, and on failure the builder is left untouched (not
    /// even the leading reset happens). Success behaves exactly like
    /// [`Director::apply`].
    pub fn apply_checked<B>(
        &self,
        recipe: &Recipe,
        builder: &mut B,
    ) -> Result<AssemblyReport, ValidationError>
    where
        B: Builder + ?Sized,
    {
        recipe.validate()?;
        Ok(self.apply(recipe, builder))
    }

    /// Apply the built-in sports car recipe (2 seats, sport engine, no GPS).
    pub fn construct_sports_car<B>(&self, builder: &mut B) -> AssemblyReport
    where
        B: Builder + ?Sized,
    {
        self.apply(&recipes::sports_car(), builder)
    }

    /// Apply the built-in SUV recipe (6 seats, SUV engine, GPS installed).
    pub fn construct_suv<B>(&self, builder: &mut B) -> AssemblyReport
    where
        B: Builder + ?Sized,
    {
        self.apply(&recipes::suv(), builder)
    }
}
