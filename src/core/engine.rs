//! Pet state-update rules
//!
//! Every action applies its fixed attribute changes, clamps them, runs the
//! status check and finally rolls for a random event. Persisting and logging
//! the action itself is left to the caller.

use crate::domain::model::{clamp_stat, Action, ActionReport, Pet, RandomEvent, StatusWarning};
use crate::domain::ports::{ActivityLog, Dice};

/// Chance (out of 100) that an action triggers a random event.
pub const EVENT_CHANCE_PERCENT: u32 = 30;

const FEED_HUNGER: i32 = -25;
const FEED_HAPPINESS: i32 = -10;
const PLAY_HAPPINESS: i32 = 30;
const PLAY_ENERGY: i32 = -20;
const SLEEP_ENERGY: i32 = 50;
const SLEEP_HUNGER: i32 = 15;

const ILLNESS_ENERGY: i32 = -20;
const TOY_HAPPINESS: i32 = 25;

pub struct PetEngine<D: Dice> {
    dice: D,
    clamp_random_events: bool,
}

impl<D: Dice> PetEngine<D> {
    pub fn new(dice: D) -> Self {
        Self {
            dice,
            clamp_random_events: false,
        }
    }

    /// Random-event effects are left unclamped unless this is enabled; the
    /// next action's clamp brings them back into range.
    pub fn with_event_clamping(mut self, enabled: bool) -> Self {
        self.clamp_random_events = enabled;
        self
    }

    pub fn apply(
        &mut self,
        action: Action,
        pet: &mut Pet,
        log: &mut dyn ActivityLog,
    ) -> ActionReport {
        match action {
            Action::Feed => {
                pet.hunger = clamp_stat(pet.hunger.saturating_add(FEED_HUNGER));
                pet.happiness = clamp_stat(pet.happiness.saturating_add(FEED_HAPPINESS));
            }
            Action::Play => {
                pet.happiness = clamp_stat(pet.happiness.saturating_add(PLAY_HAPPINESS));
                pet.energy = clamp_stat(pet.energy.saturating_add(PLAY_ENERGY));
            }
            Action::Sleep => {
                pet.energy = clamp_stat(pet.energy.saturating_add(SLEEP_ENERGY));
                pet.hunger = clamp_stat(pet.hunger.saturating_add(SLEEP_HUNGER));
            }
        }

        let warnings = check_status(pet, log);
        let event = self.random_event(pet, log);

        ActionReport { warnings, event }
    }

    pub fn feed(&mut self, pet: &mut Pet, log: &mut dyn ActivityLog) -> ActionReport {
        self.apply(Action::Feed, pet, log)
    }

    pub fn play(&mut self, pet: &mut Pet, log: &mut dyn ActivityLog) -> ActionReport {
        self.apply(Action::Play, pet, log)
    }

    pub fn sleep(&mut self, pet: &mut Pet, log: &mut dyn ActivityLog) -> ActionReport {
        self.apply(Action::Sleep, pet, log)
    }

    fn random_event(&mut self, pet: &mut Pet, log: &mut dyn ActivityLog) -> Option<RandomEvent> {
        if self.dice.roll(100) >= EVENT_CHANCE_PERCENT {
            return None;
        }

        let event = match self.dice.roll(3) {
            0 => {
                pet.energy = pet.energy.saturating_add(ILLNESS_ENERGY);
                if self.clamp_random_events {
                    pet.energy = clamp_stat(pet.energy);
                }
                RandomEvent::Illness
            }
            1 => {
                pet.happiness = pet.happiness.saturating_add(TOY_HAPPINESS);
                if self.clamp_random_events {
                    pet.happiness = clamp_stat(pet.happiness);
                }
                RandomEvent::FoundToy
            }
            _ => {
                pet.age = pet.age.saturating_add(1);
                RandomEvent::Birthday
            }
        };

        tracing::debug!("Random event {:?} for {}", event, pet.name());
        log.record(&event.message(pet.name()));
        Some(event)
    }
}

/// Threshold warnings; read-only. Both may fire for the same pet.
pub fn check_status(pet: &Pet, log: &mut dyn ActivityLog) -> Vec<StatusWarning> {
    let mut warnings = Vec::new();

    if pet.hunger >= 100 {
        warnings.push(StatusWarning::Starving);
    }
    if pet.happiness <= 0 {
        warnings.push(StatusWarning::Depressed);
    }

    for warning in &warnings {
        log.record(&warning.message(pet.name()));
    }
    warnings
}
