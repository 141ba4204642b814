//! Factory method: animal feeders.
//!
//! The [`Feeder`] trait owns the feeding routine and defers only the
//! creation of the animal to its implementors. Adding a new animal means
//! one product type and one feeder, with the routine untouched.

/// An animal produced by a feeder's factory method.
pub trait Animal {
    /// What this animal eats.
    fn food(&self) -> &'static str;

    /// The noise it makes.
    fn talk(&self) -> &'static str;
}

#[derive(Debug, Default)]
pub struct Cat;

impl Animal for Cat {
    fn food(&self) -> &'static str {
        "fish"
    }

    fn talk(&self) -> &'static str {
        "miaouuu!"
    }
}

#[derive(Debug, Default)]
pub struct Dog;

impl Animal for Dog {
    fn food(&self) -> &'static str {
        "dry food"
    }

    fn talk(&self) -> &'static str {
        "wouaff!"
    }
}

/// A feeder that runs a fixed routine around whatever animal it creates.
///
/// `create_animal` is the factory method; `feed` is the template that
/// calls it and returns the feeding transcript line by line.
pub trait Feeder {
    fn create_animal(&self) -> Box<dyn Animal>;

    fn feed(&self) -> Vec<String> {
        let animal = self.create_animal();
        vec![
            animal.talk().to_string(),
            format!("Giving some {} to the animal.", animal.food()),
            animal.talk().to_string(),
        ]
    }
}

#[derive(Debug, Default)]
pub struct CatFeeder;

impl Feeder for CatFeeder {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Cat)
    }
}

#[derive(Debug, Default)]
pub struct DogFeeder;

impl Feeder for DogFeeder {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Dog)
    }
}
