//! Concrete builder for [`CarManual`] products.

use patternity_types::product::CarManual;

use crate::construction::builder::Builder;

/// Assembles a [`CarManual`] through the same step protocol as `CarBuilder`.
///
/// The point of the second variant: one director recipe drives both, yet
/// the extracted products are unrelated types.
#[derive(Debug, Default)]
pub struct CarManualBuilder {
    manual: CarManual,
}

impl CarManualBuilder {
    /// Create a fresh builder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Builder for CarManualBuilder {
    type Product = CarManual;

    fn reset(&mut self) {
        self.manual = CarManual::default();
    }

    fn set_seats(&mut self, seats: i32) {
        self.manual.seats = seats;
    }

    fn set_engine(&mut self, engine: &str) {
        self.manual.engine = engine.to_string();
    }

    fn set_gps(&mut self, gps: bool) {
        self.manual.gps = gps;
    }

    fn extract(&mut self) -> CarManual {
        std::mem::take(&mut self.manual)
    }
}
