//! Concrete builder for [`Car`] products.

use patternity_types::product::Car;

use crate::construction::builder::Builder;

/// Assembles a [`Car`] step by step.
///
/// Owns exactly one in-progress car at a time. Construction leaves the
/// builder fresh (default-valued product), so a recipe can be applied
/// immediately.
#[derive(Debug, Default)]
pub struct CarBuilder {
    car: Car,
}

impl CarBuilder {
    /// Create a fresh builder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Builder for CarBuilder {
    type Product = Car;

    fn reset(&mut self) {
        self.car = Car::default();
    }

    fn set_seats(&mut self, seats: i32) {
        self.car.seats = seats;
    }

    fn set_engine(&mut self, engine: &str) {
        self.car.engine = engine.to_string();
    }

    fn set_gps(&mut self, gps: bool) {
        self.car.gps = gps;
    }

    fn extract(&mut self) -> Car {
        // take() hands the car out and leaves a fresh default in place, so
        // extraction and the implicit reset are a single atomic move.
        std::mem::take(&mut self.car)
    }
}
