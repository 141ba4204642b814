//! The builder capability trait.
//!
//! A capability trait rather than a base class with shared state: each
//! concrete builder owns its own in-progress product, and the trait fixes
//! only the behavior contract. The in-progress product always reflects
//! exactly the steps invoked since the last reset (implicit or explicit).

/// Step protocol for assembling a product attribute by attribute.
///
/// Every operation is total -- there is no failure path in the base
/// contract, and out-of-domain arguments (a negative seat count) are
/// stored verbatim. The stricter, opt-in alternative lives at the recipe
/// level (`Recipe::validate` / `Director::apply_checked`) and leaves this
/// trait untouched.
///
/// A builder moves between two states: fresh (post-reset, product at
/// default values) and in-progress (one or more steps since the last
/// reset). Any setter moves it to in-progress; `reset` and `extract` move
/// it back to fresh. There is no terminal state.
pub trait Builder {
    /// The product this builder variant assembles. An associated type so
    /// each variant determines what it produces while sharing one step
    /// protocol -- the director never inspects variant identity.
    type Product;

    /// Discard the in-progress product and start from default values.
    ///
    /// Idempotent: calling twice in a row is equivalent to calling once.
    fn reset(&mut self);

    /// Overwrite the seat count slot. Last write wins.
    fn set_seats(&mut self, seats: i32);

    /// Overwrite the engine designation slot. Last write wins.
    fn set_engine(&mut self, engine: &str);

    /// Overwrite the GPS slot. Last write wins.
    fn set_gps(&mut self, gps: bool);

    /// Hand the in-progress product to the caller.
    ///
    /// Ownership transfer with an implicit reset as a postcondition: the
    /// builder is immediately ready for a new assembly cycle, and mutating
    /// it afterwards can never change the value already handed out.
    fn extract(&mut self) -> Self::Product;
}
