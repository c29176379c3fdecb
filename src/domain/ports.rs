use crate::domain::model::Pet;
use crate::utils::error::Result;
use chrono::NaiveDateTime;

/// Durable copy of the pet collection. Implementations do raw I/O only;
/// age reconciliation and timestamping live in the manager.
pub trait PetStore {
    /// A store with nothing saved yet returns an empty collection.
    fn load(&self) -> Result<Vec<Pet>>;
    fn save(&self, pets: &[Pet]) -> Result<()>;
}

/// Operator-facing activity log. Recording never fails the caller.
pub trait ActivityLog {
    fn record(&mut self, message: &str);
}

/// Uniform random source for the engine.
pub trait Dice {
    /// Uniform integer in `0..sides`.
    fn roll(&mut self, sides: u32) -> u32;
}

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}
