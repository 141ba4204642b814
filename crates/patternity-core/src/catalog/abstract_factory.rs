//! Abstract factory: furniture families.
//!
//! A factory produces a whole family of related products (chair and sofa)
//! so that the pieces handed to a caller are always style-consistent. The
//! caller works against [`FurnitureFactory`] and the product traits only
//! and never names a concrete piece.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Abstract products
// ---------------------------------------------------------------------------

/// A chair, whatever its style.
pub trait Chair {
    /// Whether this chair stands on legs.
    fn has_legs(&self) -> bool;

    /// What sitting down on it feels like.
    fn sit_on(&self) -> &'static str;
}

/// A sofa, whatever its style.
pub trait Sofa {
    /// Whether the sofa folds out into a bed.
    fn is_sofa_bed(&self) -> bool;
}

// ---------------------------------------------------------------------------
// Concrete products
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct VictorianChair;

impl Chair for VictorianChair {
    fn has_legs(&self) -> bool {
        true
    }

    fn sit_on(&self) -> &'static str {
        "This is quite comfortable..."
    }
}

#[derive(Debug, Default)]
pub struct ModernChair;

impl Chair for ModernChair {
    fn has_legs(&self) -> bool {
        false
    }

    fn sit_on(&self) -> &'static str {
        "This is nice but not really comfortable..."
    }
}

#[derive(Debug, Default)]
pub struct VictorianSofa;

impl Sofa for VictorianSofa {
    fn is_sofa_bed(&self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
pub struct ModernSofa;

impl Sofa for ModernSofa {
    fn is_sofa_bed(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Factories
// ---------------------------------------------------------------------------

/// Produces a chair and a sofa of one consistent style.
pub trait FurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair>;

    fn create_sofa(&self) -> Box<dyn Sofa>;
}

#[derive(Debug, Default)]
pub struct VictorianFurnitureFactory;

impl FurnitureFactory for VictorianFurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(VictorianChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(VictorianSofa)
    }
}

#[derive(Debug, Default)]
pub struct ModernFurnitureFactory;

impl FurnitureFactory for ModernFurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ModernChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(ModernSofa)
    }
}

/// The styles a furniture factory can be selected by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FurnitureStyle {
    Victorian,
    Modern,
}

impl FurnitureStyle {
    /// Returns the factory for this style.
    pub fn factory(self) -> Box<dyn FurnitureFactory> {
        match self {
            FurnitureStyle::Victorian => Box::new(VictorianFurnitureFactory),
            FurnitureStyle::Modern => Box::new(ModernFurnitureFactory),
        }
    }
}

impl fmt::Display for FurnitureStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FurnitureStyle::Victorian => write!(f, "victorian"),
            FurnitureStyle::Modern => write!(f, "modern"),
        }
    }
}

impl FromStr for FurnitureStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "victorian" => Ok(FurnitureStyle::Victorian),
            "modern" => Ok(FurnitureStyle::Modern),
            other => Err(format!("invalid furniture style: '{other}'")),
        }
    }
}
