use crate::core::engine::PetEngine;
use crate::core::reconcile::{reconcile_ages, stamp_for_save};
use crate::domain::model::{Action, ActionReport, Pet};
use crate::domain::ports::{ActivityLog, Clock, Dice, PetStore};
use crate::utils::error::{PetError, Result};

/// Owns the pet collection for the session and commits every change to the store.
pub struct PetManager<S: PetStore, L: ActivityLog, D: Dice> {
    pets: Vec<Pet>,
    store: S,
    log: L,
    engine: PetEngine<D>,
    clock: Box<dyn Clock>,
}

impl<S: PetStore, L: ActivityLog, D: Dice> PetManager<S, L, D> {
    /// Load the saved collection and age it by the days spent away.
    /// An unreadable store starts an empty collection.
    pub fn open(store: S, mut log: L, engine: PetEngine<D>, clock: Box<dyn Clock>) -> Self {
        let pets = match store.load() {
            Ok(mut pets) => {
                reconcile_ages(&mut pets, clock.now());
                tracing::debug!("Loaded {} pet(s)", pets.len());
                pets
            }
            Err(e) => {
                tracing::warn!("Pet store unreadable, starting empty: {}", e);
                log.record(&format!("Failed to load pets: {}", e));
                Vec::new()
            }
        };

        Self {
            pets,
            store,
            log,
            engine,
            clock,
        }
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn pet(&self, index: usize) -> Result<&Pet> {
        self.pets.get(index).ok_or(PetError::PetNotFound {
            index,
            count: self.pets.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Create a pet with default stats, append it and save. Returns its position.
    pub fn add_pet(&mut self, name: &str, species: &str) -> Result<usize> {
        let pet = Pet::new(name, species, self.clock.now())?;
        let created = format!("Created new pet: {}", pet.name());

        self.pets.push(pet);
        self.save();
        self.log.record(&created);

        Ok(self.pets.len() - 1)
    }

    /// Run an action on the pet at `index`, save, then log the action.
    pub fn act(&mut self, index: usize, action: Action) -> Result<ActionReport> {
        let count = self.pets.len();
        let pet = self
            .pets
            .get_mut(index)
            .ok_or(PetError::PetNotFound { index, count })?;

        let report = self.engine.apply(action, pet, &mut self.log);
        let done = action.log_message(pet.name());

        self.save();
        self.log.record(&done);

        Ok(report)
    }

    pub fn feed(&mut self, index: usize) -> Result<ActionReport> {
        self.act(index, Action::Feed)
    }

    pub fn play(&mut self, index: usize) -> Result<ActionReport> {
        self.act(index, Action::Play)
    }

    pub fn sleep(&mut self, index: usize) -> Result<ActionReport> {
        self.act(index, Action::Sleep)
    }

    /// Write the whole collection. Failures are logged, the in-memory state stays.
    pub fn save(&mut self) {
        stamp_for_save(&mut self.pets, self.clock.now());

        match self.store.save(&self.pets) {
            Ok(()) => tracing::debug!("Saved {} pet(s)", self.pets.len()),
            Err(e) => {
                tracing::warn!("Saving pets failed: {}", e);
                self.log.record(&format!("Failed to save pets: {}", e));
            }
        }
    }
}
