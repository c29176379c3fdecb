// Adapters layer: concrete implementations of the domain ports (files, clock, randomness).

pub mod activity_log;
pub mod clock;
pub mod dice;
pub mod storage;

pub use activity_log::{FileActivityLog, MemoryLog};
pub use clock::{FixedClock, SystemClock};
pub use dice::{RandDice, ScriptedDice};
pub use storage::JsonFileStore;
