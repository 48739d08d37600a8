//! Dice module - uniform die rolls behind an injectable source
//!
//! Everything that needs randomness goes through [`DieRoller`], so callers can
//! swap the OS-seeded generator for a fixed seed or a scripted sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of die rolls.
pub trait DieRoller {
    /// Roll one die, returning a value uniformly distributed over `[1, sides]`.
    ///
    /// `sides == 0` is treated as a one-sided die.
    fn roll(&mut self, sides: u32) -> u32;
}

impl<R: DieRoller + ?Sized> DieRoller for &mut R {
    fn roll(&mut self, sides: u32) -> u32 {
        (**self).roll(sides)
    }
}

/// Die roller backed by the standard RNG.
#[derive(Debug, Clone)]
pub struct StdRoller {
    rng: StdRng,
}

impl StdRoller {
    /// Seed from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed deterministically; the same seed always produces the same rolls.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DieRoller for StdRoller {
    fn roll(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides.max(1))
    }
}

/// Replays a fixed list of rolls, wrapping around at the end.
///
/// Values are returned as-is, without clamping to `sides`.
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    values: Vec<u32>,
    next: usize,
    drawn: usize,
}

impl ScriptedRolls {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
            drawn: 0,
        }
    }

    /// Total number of rolls handed out so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl DieRoller for ScriptedRolls {
    fn roll(&mut self, _sides: u32) -> u32 {
        self.drawn += 1;
        if self.values.is_empty() {
            return 1;
        }
        let v = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        v
    }
}
