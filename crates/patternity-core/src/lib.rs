//! Construction logic and the pattern catalogue for Patternity.
//!
//! This crate holds the staged-construction subsystem (builder capability
//! trait, interchangeable concrete builders, a stateless director driving
//! data recipes) plus the independent catalogue modules. No file IO and no
//! terminal dependencies; loading recipe files is the CLI's concern.

pub mod catalog;
pub mod construction;
