//! Terminal input mapping for the sheet viewer.
//!
//! Independent of any UI framework beyond `crossterm` key events: keys map to
//! [`crate::types::ViewerAction`] and the caller decides what to do with them.

pub mod map;

pub use stat_roller_types as types;

pub use map::{handle_key_event, should_quit};
