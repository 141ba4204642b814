//! Product value aggregates assembled by the construction subsystem.
//!
//! `Car` and `CarManual` share the same attribute slots but are deliberately
//! independent types: interchangeable builders produce structurally analogous
//! products without any type-level relationship between them. Both are plain
//! values -- no behavior, no identity beyond their field values.

use serde::{Deserialize, Serialize};

/// A car assembled step by step by a car builder.
///
/// Created with default (zero/empty) values by the owning builder's reset,
/// mutated only through that builder's step operations, and detached by
/// extraction. After extraction it is an independent, caller-owned value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Number of seats. Signed so out-of-domain values (negative counts)
    /// are representable and stored verbatim under the unvalidated contract.
    pub seats: i32,
    /// Engine designation (e.g. "sport_engine").
    pub engine: String,
    /// Whether a GPS unit is installed.
    pub gps: bool,
}

/// The owner's manual counterpart of [`Car`].
///
/// Same attribute slots, independent identity: a manual describing two seats
/// is not a car with two seats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarManual {
    /// Number of seats documented by the manual.
    pub seats: i32,
    /// Engine designation documented by the manual.
    pub engine: String,
    /// Whether the manual covers the GPS unit.
    pub gps: bool,
}
