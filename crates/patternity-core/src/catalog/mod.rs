//! Self-contained pattern demonstrations.
//!
//! Each module reproduces one catalogue entry as an independent unit with
//! no dependency on the construction core: abstract factory (furniture
//! families), factory method (animal feeders), prototype (shape cloning),
//! singleton (process-wide database), adapter (square pegs in round holes).

pub mod abstract_factory;
pub mod adapter;
pub mod factory_method;
pub mod prototype;
pub mod singleton;
