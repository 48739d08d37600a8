//! Shared constants and small value types.
//!
//! Everything here is plain data with no dependencies, so the core, the
//! terminal view and the input mapping can all agree on the same numbers.
//!
//! # Defaults
//!
//! The defaults describe the standard ability-score roll for 5th edition
//! character creation: roll four six-sided dice, drop the lowest one, sum the
//! remaining three. Six such rolls make one character.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `STAT_COUNT` | 6 | Ability scores per sheet |
//! | `DEFAULT_NROLLS` | 4 | Dice rolled per stat |
//! | `DEFAULT_NDROPS` | 1 | Lowest dice discarded per stat |
//! | `DEFAULT_DICE_SIDES` | 6 | Faces per die |
//!
//! # Examples
//!
//! ```
//! use stat_roller_types::{ViewerAction, DEFAULT_NDROPS, DEFAULT_NROLLS, STAT_COUNT};
//!
//! assert_eq!(STAT_COUNT, 6);
//! assert!(DEFAULT_NROLLS >= DEFAULT_NDROPS);
//!
//! let action = ViewerAction::from_str("reroll").unwrap();
//! assert_eq!(action, ViewerAction::Reroll);
//! ```

/// Number of ability scores rolled per sheet.
pub const STAT_COUNT: usize = 6;

/// Dice rolled per stat.
pub const DEFAULT_NROLLS: u32 = 4;

/// Lowest dice discarded per stat.
pub const DEFAULT_NDROPS: u32 = 1;

/// Faces per die.
pub const DEFAULT_DICE_SIDES: u32 = 6;

/// Figure title drawn above the grid.
pub const SHEET_TITLE: &str = "Pray to DND RNGesus";

/// Separator drawn between the dice and the total.
pub const EQUALS_GLYPH: &str = "=";

/// What the viewer wants to happen after a sheet has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerAction {
    /// Stop showing sheets and exit.
    Close,
    /// Roll a fresh sheet with the same configuration and show it.
    Reroll,
}

impl ViewerAction {
    /// Parse an action name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use stat_roller_types::ViewerAction;
    ///
    /// assert_eq!(ViewerAction::from_str("Close"), Some(ViewerAction::Close));
    /// assert_eq!(ViewerAction::from_str("REROLL"), Some(ViewerAction::Reroll));
    /// assert_eq!(ViewerAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "close" => Some(ViewerAction::Close),
            "reroll" => Some(ViewerAction::Reroll),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewerAction::Close => "close",
            ViewerAction::Reroll => "reroll",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_fifth_edition_defaults() {
        assert_eq!(STAT_COUNT, 6);
        assert_eq!(DEFAULT_NROLLS, 4);
        assert_eq!(DEFAULT_NDROPS, 1);
        assert_eq!(DEFAULT_DICE_SIDES, 6);
    }

    #[test]
    fn viewer_action_names_round_trip() {
        for action in [ViewerAction::Close, ViewerAction::Reroll] {
            assert_eq!(ViewerAction::from_str(action.as_str()), Some(action));
        }
    }
}
