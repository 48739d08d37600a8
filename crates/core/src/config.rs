//! Roll parameters and environment-driven run configuration.

use log::warn;
use serde::Serialize;

use crate::error::ConfigError;
use crate::types::{DEFAULT_DICE_SIDES, DEFAULT_NDROPS, DEFAULT_NROLLS};

/// How many dice to roll per stat, how many to drop, and how many faces they have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RollConfig {
    pub nrolls: u32,
    pub ndrops: u32,
    pub dice_sides: u32,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            nrolls: DEFAULT_NROLLS,
            ndrops: DEFAULT_NDROPS,
            dice_sides: DEFAULT_DICE_SIDES,
        }
    }
}

impl RollConfig {
    pub fn new(nrolls: u32, ndrops: u32, dice_sides: u32) -> Self {
        Self {
            nrolls,
            ndrops,
            dice_sides,
        }
    }

    /// Check the configuration before anything is rolled.
    ///
    /// Dropping exactly as many dice as are rolled is allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nrolls < self.ndrops {
            return Err(ConfigError::TooManyDrops {
                nrolls: self.nrolls,
                ndrops: self.ndrops,
            });
        }
        if self.dice_sides == 0 {
            return Err(ConfigError::ZeroSidedDie);
        }
        Ok(())
    }
}

/// Where a rolled sheet goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Interactive grid in the terminal.
    #[default]
    Terminal,
    /// One JSON document on stdout.
    Json,
}

impl OutputMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "term" | "terminal" => Some(OutputMode::Terminal),
            "json" => Some(OutputMode::Json),
            _ => None,
        }
    }
}

/// Everything the binary needs to know before rolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfig {
    pub roll: RollConfig,
    /// Fixed seed for reproducible sheets. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub output: OutputMode,
}

impl RunConfig {
    /// Create from environment variables.
    ///
    /// - `STAT_ROLLER_NROLLS`: dice per stat (default 4)
    /// - `STAT_ROLLER_NDROPS`: lowest dice dropped per stat (default 1)
    /// - `STAT_ROLLER_DICE_SIDES`: faces per die (default 6)
    /// - `STAT_ROLLER_SEED`: fixed RNG seed (default: OS entropy)
    /// - `STAT_ROLLER_OUTPUT`: `term` or `json` (default `term`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = RollConfig::default();

        let roll = RollConfig {
            nrolls: parse_var(&lookup, "STAT_ROLLER_NROLLS").unwrap_or(defaults.nrolls),
            ndrops: parse_var(&lookup, "STAT_ROLLER_NDROPS").unwrap_or(defaults.ndrops),
            dice_sides: parse_var(&lookup, "STAT_ROLLER_DICE_SIDES")
                .unwrap_or(defaults.dice_sides),
        };

        let seed = parse_var(&lookup, "STAT_ROLLER_SEED");

        let output = match lookup("STAT_ROLLER_OUTPUT") {
            Some(raw) => OutputMode::from_str(&raw).unwrap_or_else(|| {
                warn!("ignoring STAT_ROLLER_OUTPUT={:?}; expected term or json", raw);
                OutputMode::default()
            }),
            None => OutputMode::default(),
        };

        Self { roll, seed, output }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring {}={:?}; not a non-negative integer", key, raw);
            None
        }
    }
}
