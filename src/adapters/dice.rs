use crate::core::Dice;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// `rand`-backed dice. Seed it for reproducible sessions.
pub struct RandDice<R: Rng = StdRng> {
    rng: R,
}

impl RandDice<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> Dice for RandDice<R> {
    fn roll(&mut self, sides: u32) -> u32 {
        self.rng.gen_range(0..sides)
    }
}

/// Replays a fixed list of rolls. Once the list runs out every roll is the
/// highest face, which never triggers a random event.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new(rolls: Vec<u32>) -> Self {
        Self {
            rolls: rolls.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, sides: u32) -> u32 {
        match self.rolls.pop_front() {
            Some(value) => value % sides,
            None => sides - 1,
        }
    }
}
