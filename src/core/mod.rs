pub mod engine;
pub mod manager;
pub mod reconcile;

pub use crate::domain::model::{Action, ActionReport, Pet, RandomEvent, StatusWarning};
pub use crate::domain::ports::{ActivityLog, Clock, Dice, PetStore};
pub use crate::utils::error::Result;
