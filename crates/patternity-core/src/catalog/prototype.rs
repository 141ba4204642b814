//! Prototype: cloning shapes through a trait object.
//!
//! `Clone` alone is not dyn-compatible, so [`Shape`] carries a
//! `clone_box` method that every concrete shape implements by boxing its
//! derived `Clone`. Callers copy a mixed list of shapes without ever
//! naming the concrete types.

/// A shape that can produce an independent copy of itself.
pub trait Shape {
    /// Clones this shape behind a fresh box.
    fn clone_box(&self) -> Box<dyn Shape>;

    /// The shape's fill color.
    fn color(&self) -> &str;

    /// The shape's position as `(x, y)`.
    fn position(&self) -> (i32, i32);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub color: String,
    pub radius: i32,
}

impl Circle {
    pub fn new(x: i32, y: i32, color: &str, radius: i32) -> Self {
        Self {
            x,
            y,
            color: color.to_string(),
            radius,
        }
    }
}

impl Shape for Circle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub color: String,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, color: &str, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            color: color.to_string(),
            width,
            height,
        }
    }
}

impl Shape for Rectangle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
