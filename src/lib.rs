pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{FileActivityLog, JsonFileStore, RandDice, SystemClock};
pub use app::Menu;
pub use crate::core::{engine::PetEngine, manager::PetManager};
pub use utils::error::{PetError, Result};
