use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};

pub const STAT_MIN: i32 = 0;
pub const STAT_MAX: i32 = 100;
pub const INITIAL_STAT: i32 = 50;

/// How far past `[STAT_MIN, STAT_MAX]` a saved stat may sit. Unclamped random
/// events can stack on a stat the following actions don't touch.
pub const STAT_DRIFT_LIMIT: i32 = 1_000;

/// Constrain a status value into `[STAT_MIN, STAT_MAX]`.
pub fn clamp_stat(value: i32) -> i32 {
    value.clamp(STAT_MIN, STAT_MAX)
}

/// One persisted pet. Field names are the on-disk JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    name: String,
    species: String,
    pub hunger: i32,
    pub happiness: i32,
    pub energy: i32,
    pub age: u32,
    pub last_updated: NaiveDateTime,
}

impl Pet {
    pub fn new(name: &str, species: &str, now: NaiveDateTime) -> Result<Self> {
        validate_non_empty_string("Name", name)?;

        Ok(Self {
            name: name.trim().to_string(),
            species: species.trim().to_string(),
            hunger: INITIAL_STAT,
            happiness: INITIAL_STAT,
            energy: INITIAL_STAT,
            age: 0,
            last_updated: now,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &str {
        &self.species
    }
}

impl Validate for Pet {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("Name", &self.name)?;

        let min = STAT_MIN - STAT_DRIFT_LIMIT;
        let max = STAT_MAX + STAT_DRIFT_LIMIT;
        validate_range("hunger", self.hunger, min, max)?;
        validate_range("happiness", self.happiness, min, max)?;
        validate_range("energy", self.energy, min, max)?;
        Ok(())
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.species)?;
        writeln!(f, "Age:       {} days", self.age)?;
        writeln!(f, "Hunger:    {}/{}", self.hunger, STAT_MAX)?;
        writeln!(f, "Happiness: {}/{}", self.happiness, STAT_MAX)?;
        write!(f, "Energy:    {}/{}", self.energy, STAT_MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Feed,
    Play,
    Sleep,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Feed, Action::Play, Action::Sleep];

    /// Activity log line written once the action has been persisted.
    pub fn log_message(&self, pet_name: &str) -> String {
        match self {
            Action::Feed => format!("{} fed.", pet_name),
            Action::Play => format!("{} played.", pet_name),
            Action::Sleep => format!("{} slept.", pet_name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusWarning {
    Starving,
    Depressed,
}

impl StatusWarning {
    pub fn message(&self, pet_name: &str) -> String {
        match self {
            StatusWarning::Starving => format!("{} is starving! Feed them right away!", pet_name),
            StatusWarning::Depressed => format!("{} is depressed! Play with them!", pet_name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomEvent {
    Illness,
    FoundToy,
    Birthday,
}

impl RandomEvent {
    pub fn message(&self, pet_name: &str) -> String {
        match self {
            RandomEvent::Illness => format!("{} fell ill!", pet_name),
            RandomEvent::FoundToy => format!("{} found a toy!", pet_name),
            RandomEvent::Birthday => format!("{} is celebrating a birthday!", pet_name),
        }
    }
}

/// What an engine action did beyond its fixed attribute changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionReport {
    pub warnings: Vec<StatusWarning>,
    pub event: Option<RandomEvent>,
}
