//! Stat rounds: roll, drop the lowest dice, total the rest.

use arrayvec::ArrayVec;
use log::debug;
use serde::Serialize;

use crate::config::RollConfig;
use crate::dice::DieRoller;
use crate::error::ConfigError;
use crate::types::STAT_COUNT;

/// One ability score: the dice rolled for it, which of them were dropped, and what is left.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StatRound {
    pub rolls: Vec<u32>,
    /// Indices into `rolls`, in the order they were extracted (lowest first).
    pub dropped: Vec<usize>,
    pub total: u64,
}

impl StatRound {
    /// Build a round from already-rolled dice.
    ///
    /// Fails when `ndrops` exceeds the number of dice, so a round always drops exactly `ndrops`.
    pub fn from_rolls(rolls: Vec<u32>, ndrops: u32) -> Result<Self, ConfigError> {
        let nrolls = u32::try_from(rolls.len()).unwrap_or(u32::MAX);
        if nrolls < ndrops {
            return Err(ConfigError::TooManyDrops { nrolls, ndrops });
        }
        Ok(Self::reduce(rolls, ndrops as usize))
    }

    fn reduce(rolls: Vec<u32>, ndrops: usize) -> Self {
        let dropped = lowest_indices(&rolls, ndrops);
        let total = rolls
            .iter()
            .enumerate()
            .filter(|(i, _)| !dropped.contains(i))
            .map(|(_, v)| u64::from(*v))
            .sum();
        Self {
            rolls,
            dropped,
            total,
        }
    }

    pub fn is_dropped(&self, index: usize) -> bool {
        self.dropped.contains(&index)
    }
}

/// The six rounds produced by one invocation, together with the configuration that made them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatSheet {
    pub config: RollConfig,
    pub rounds: ArrayVec<StatRound, STAT_COUNT>,
}

impl StatSheet {
    pub fn totals(&self) -> [u64; STAT_COUNT] {
        let mut out = [0u64; STAT_COUNT];
        for (slot, round) in out.iter_mut().zip(self.rounds.iter()) {
            *slot = round.total;
        }
        out
    }

    /// Number of grid columns: every die, the `=` separator and the total.
    pub fn columns(&self) -> usize {
        self.config.nrolls as usize + 2
    }
}

/// Positions of the `ndrops` lowest values in `rolls`.
///
/// Extraction is sequential: each pass picks the first position holding the minimum among the
/// positions not yet taken, so equal values are dropped left to right. `ndrops` larger than
/// `rolls.len()` is capped at the length.
pub fn lowest_indices(rolls: &[u32], ndrops: usize) -> Vec<usize> {
    let mut remaining: Vec<Option<u32>> = rolls.iter().copied().map(Some).collect();
    let mut out = Vec::with_capacity(ndrops.min(rolls.len()));

    for _ in 0..ndrops {
        let mut best: Option<(usize, u32)> = None;
        for (i, v) in remaining.iter().enumerate() {
            let Some(v) = *v else { continue };
            match best {
                Some((_, b)) if b <= v => {}
                _ => best = Some((i, v)),
            }
        }
        let Some((i, _)) = best else { break };
        remaining[i] = None;
        out.push(i);
    }

    out
}

/// Validate `config`, then roll a single stat.
///
/// On a validation error no die is rolled.
pub fn roll_stat<R: DieRoller>(
    config: &RollConfig,
    roller: &mut R,
) -> Result<StatRound, ConfigError> {
    config.validate()?;
    Ok(roll_round(config, roller))
}

fn roll_round<R: DieRoller>(config: &RollConfig, roller: &mut R) -> StatRound {
    let rolls: Vec<u32> = (0..config.nrolls)
        .map(|_| roller.roll(config.dice_sides))
        .collect();
    StatRound::reduce(rolls, config.ndrops as usize)
}

/// Validate `config`, then roll all six stats.
///
/// On a validation error no die is rolled.
pub fn roll_stat_sheet<R: DieRoller>(
    config: &RollConfig,
    roller: &mut R,
) -> Result<StatSheet, ConfigError> {
    config.validate()?;

    let mut rounds = ArrayVec::new();
    for i in 0..STAT_COUNT {
        let round = roll_round(config, roller);
        debug!(
            "stat {}: rolls={:?} dropped={:?} total={}",
            i + 1,
            round.rolls,
            round.dropped,
            round.total
        );
        rounds.push(round);
    }

    Ok(StatSheet {
        config: *config,
        rounds,
    })
}
