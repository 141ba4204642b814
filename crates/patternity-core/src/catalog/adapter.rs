//! Adapter: fitting square pegs into round holes.
//!
//! [`RoundHole`] only talks to [`RoundPeg`]s. [`SquarePegAdapter`] wraps a
//! [`SquarePeg`] and reports the circumradius of its square as the peg
//! radius, so the hole's fit check works unchanged on adapted pegs.

/// The interface round holes understand.
pub trait RoundPeg {
    fn radius(&self) -> f64;
}

/// A peg that is round to begin with.
#[derive(Debug, Clone, Copy)]
pub struct PlainRoundPeg {
    radius: f64,
}

impl PlainRoundPeg {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl RoundPeg for PlainRoundPeg {
    fn radius(&self) -> f64 {
        self.radius
    }
}

/// A round hole that accepts any peg no wider than itself.
#[derive(Debug, Clone, Copy)]
pub struct RoundHole {
    radius: f64,
}

impl RoundHole {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Whether the given peg fits into this hole.
    pub fn fits(&self, peg: &dyn RoundPeg) -> bool {
        self.radius >= peg.radius()
    }
}

/// The incompatible service type: knows its width, not any radius.
#[derive(Debug, Clone, Copy)]
pub struct SquarePeg {
    width: i32,
}

impl SquarePeg {
    pub fn new(width: i32) -> Self {
        Self { width }
    }

    pub fn width(&self) -> i32 {
        self.width
    }
}

/// Lets a [`SquarePeg`] pass as a [`RoundPeg`].
///
/// The reported radius is the circumradius of the square, `width * √2 / 2`,
/// the radius of the smallest hole the square slips through.
#[derive(Debug, Clone, Copy)]
pub struct SquarePegAdapter {
    peg: SquarePeg,
}

impl SquarePegAdapter {
    pub fn new(peg: SquarePeg) -> Self {
        Self { peg }
    }
}

impl RoundPeg for SquarePegAdapter {
    fn radius(&self) -> f64 {
        f64::from(self.peg.width()) * std::f64::consts::SQRT_2 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_peg_of_equal_radius_fits() {
        let hole = RoundHole::new(5.0);
        let peg = PlainRoundPeg::new(5.0);
        assert!(hole.fits(&peg));
    }

    #[test]
    fn adapter_reports_the_circumradius() {
        let adapter = SquarePegAdapter::new(SquarePeg::new(2));
        assert!((adapter.radius() - std::f64::consts::SQRT_2).abs() < f64::EPSILON);
    }

    #[test]
    fn adapted_square_pegs_fit_by_circumradius() {
        let hole = RoundHole::new(5.0);

        // width 2 -> radius ~1.41, width 5 -> ~3.54: both pass.
        assert!(hole.fits(&SquarePegAdapter::new(SquarePeg::new(2))));
        assert!(hole.fits(&SquarePegAdapter::new(SquarePeg::new(5))));

        // width 8 -> radius ~5.66: too wide.
        assert!(!hole.fits(&SquarePegAdapter::new(SquarePeg::new(8))));
    }
}
