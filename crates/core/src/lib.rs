//! Core stat-rolling logic - pure, deterministic when seeded, and testable
//!
//! This crate rolls ability scores and nothing else. It has no dependency on a
//! terminal or any other output, which keeps it:
//!
//! - **Deterministic**: a seeded or scripted [`DieRoller`] reproduces a sheet exactly
//! - **Testable**: every rule is checked without drawing anything
//! - **Portable**: the same sheet can go to a terminal grid or to JSON
//!
//! # Module Structure
//!
//! - [`config`]: roll parameters, validation, environment-driven run configuration
//! - [`dice`]: the [`DieRoller`] seam with OS-seeded, fixed-seed and scripted sources
//! - [`error`]: the invalid-configuration error
//! - [`present`]: the [`Presenter`] seam and a JSON presenter
//! - [`stats`]: drop-lowest reduction and six-stat sheets
//!
//! # Rules
//!
//! - Each stat rolls `nrolls` dice with `dice_sides` faces
//! - The `ndrops` lowest dice are dropped, ties resolved left to right
//! - The stat is the sum of the remaining dice
//! - A sheet always holds six stats
//! - `nrolls < ndrops` is rejected before any die is rolled
//!
//! # Example
//!
//! ```
//! use stat_roller_core::{roll_stat_sheet, RollConfig, ScriptedRolls};
//!
//! let mut roller = ScriptedRolls::new(vec![3, 5, 2, 6]);
//! let sheet = roll_stat_sheet(&RollConfig::default(), &mut roller).unwrap();
//!
//! assert_eq!(sheet.rounds.len(), 6);
//! assert_eq!(sheet.rounds[0].dropped, vec![2]);
//! assert_eq!(sheet.rounds[0].total, 14);
//! ```

pub mod config;
pub mod dice;
pub mod error;
pub mod present;
pub mod stats;

pub use stat_roller_types as types;

pub use config::{OutputMode, RollConfig, RunConfig};
pub use dice::{DieRoller, ScriptedRolls, StdRoller};
pub use error::ConfigError;
pub use present::{roll_and_present, JsonPresentError, JsonPresenter, Presenter};
pub use stats::{lowest_indices, roll_stat, roll_stat_sheet, StatRound, StatSheet};
