//! Stat roller (workspace facade crate).
//!
//! Re-exports the workspace crates under short paths:
//! `stat_roller::{core, input, term, types}`.

pub use stat_roller_core as core;
pub use stat_roller_input as input;
pub use stat_roller_term as term;
pub use stat_roller_types as types;
