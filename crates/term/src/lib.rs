//! Terminal rendering for stat sheets.
//!
//! A small rendering layer that avoids widget/layout libraries and instead
//! renders into a framebuffer that can be flushed to a terminal backend.
//!
//! - [`SheetView`] is pure: sheet in, framebuffer out
//! - [`TerminalRenderer`] is the only part that touches the terminal

pub mod fb;
pub mod renderer;
pub mod sheet_view;

pub use stat_roller_core as core;
pub use stat_roller_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sheet_view::{SheetView, TileSize, Viewport};
