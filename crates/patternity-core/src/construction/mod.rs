//! Staged construction: step-based assembly behind a capability trait.
//!
//! Defines the `Builder` step protocol, the two concrete builders that
//! satisfy it (`CarBuilder`, `CarManualBuilder`), the stateless `Director`
//! that interprets recipe data against any conforming builder, and the
//! built-in recipe catalogue.
//!
//! The lifecycle per builder instance is reset -> mutate -> extract, and
//! the cycle repeats for the builder's full lifetime. Recipes never
//! extract; materializing the product stays with the caller.

pub mod builder;
pub mod car;
pub mod director;
pub mod manual;
pub mod recipes;
