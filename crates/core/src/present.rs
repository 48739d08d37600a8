//! Presenter seam between rolling and showing a sheet.
//!
//! The core stops at a finished [`StatSheet`]. Whatever draws it (a terminal grid, a JSON
//! writer, a test recorder) implements [`Presenter`].

use std::io::Write;

use log::info;

use crate::config::RollConfig;
use crate::dice::DieRoller;
use crate::error::ConfigError;
use crate::stats::{roll_stat_sheet, StatSheet};
use crate::types::ViewerAction;

/// Shows a rolled sheet and reports what the viewer wants next.
///
/// `present` blocks until the sheet has been shown (and, for interactive presenters, dismissed).
pub trait Presenter {
    type Error: From<ConfigError>;

    fn present(&mut self, sheet: &StatSheet) -> Result<ViewerAction, Self::Error>;
}

/// Validate, roll six stats, and hand them to `presenter`.
///
/// An invalid configuration returns before the roller or the presenter is touched.
pub fn roll_and_present<R, P>(
    config: &RollConfig,
    roller: &mut R,
    presenter: &mut P,
) -> Result<ViewerAction, P::Error>
where
    R: DieRoller,
    P: Presenter,
{
    let sheet = roll_stat_sheet(config, roller)?;
    info!("rolled sheet totals={:?}", sheet.totals());
    presenter.present(&sheet)
}

/// Error from [`JsonPresenter`].
#[derive(Debug)]
pub enum JsonPresentError {
    Config(ConfigError),
    Encode(serde_json::Error),
    Io(std::io::Error),
}

impl From<ConfigError> for JsonPresentError {
    fn from(value: ConfigError) -> Self {
        JsonPresentError::Config(value)
    }
}

impl From<serde_json::Error> for JsonPresentError {
    fn from(value: serde_json::Error) -> Self {
        JsonPresentError::Encode(value)
    }
}

impl From<std::io::Error> for JsonPresentError {
    fn from(value: std::io::Error) -> Self {
        JsonPresentError::Io(value)
    }
}

impl std::fmt::Display for JsonPresentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonPresentError::Config(e) => write!(f, "{}", e),
            JsonPresentError::Encode(e) => write!(f, "encode sheet: {}", e),
            JsonPresentError::Io(e) => write!(f, "write sheet: {}", e),
        }
    }
}

impl std::error::Error for JsonPresentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JsonPresentError::Config(e) => Some(e),
            JsonPresentError::Encode(e) => Some(e),
            JsonPresentError::Io(e) => Some(e),
        }
    }
}

/// Writes each sheet as a single line of JSON.
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    type Error = JsonPresentError;

    fn present(&mut self, sheet: &StatSheet) -> Result<ViewerAction, Self::Error> {
        serde_json::to_writer(&mut self.out, sheet)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(ViewerAction::Close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;

    #[derive(Default)]
    struct Recorder {
        sheets: Vec<StatSheet>,
    }

    impl Presenter for Recorder {
        type Error = ConfigError;

        fn present(&mut self, sheet: &StatSheet) -> Result<ViewerAction, Self::Error> {
            self.sheets.push(sheet.clone());
            Ok(ViewerAction::Close)
        }
    }

    #[test]
    fn presents_exactly_one_sheet() {
        let mut roller = ScriptedRolls::new(vec![3, 5, 2, 6]);
        let mut recorder = Recorder::default();
        let action =
            roll_and_present(&RollConfig::default(), &mut roller, &mut recorder).unwrap();
        assert_eq!(action, ViewerAction::Close);
        assert_eq!(recorder.sheets.len(), 1);
        assert_eq!(recorder.sheets[0].rounds[0].total, 14);
    }

    #[test]
    fn invalid_config_never_reaches_presenter() {
        let mut roller = ScriptedRolls::new(vec![1]);
        let mut recorder = Recorder::default();
        let err = roll_and_present(&RollConfig::new(3, 4, 6), &mut roller, &mut recorder)
            .unwrap_err();
        assert!(matches!(err, ConfigError::TooManyDrops { .. }));
        assert!(recorder.sheets.is_empty());
        assert_eq!(roller.drawn(), 0);
    }

    #[test]
    fn json_presenter_writes_one_line() {
        let mut roller = ScriptedRolls::new(vec![3, 5, 2, 6]);
        let mut json = JsonPresenter::new(Vec::new());
        roll_and_present(&RollConfig::default(), &mut roller, &mut json).unwrap();

        let out = String::from_utf8(json.into_inner()).unwrap();
        assert!(out.ends_with('\n'));
        assert_eq!(out.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["config"]["nrolls"], 4);
        assert_eq!(value["rounds"].as_array().unwrap().len(), 6);
        assert_eq!(value["rounds"][0]["dropped"][0], 2);
        assert_eq!(value["rounds"][0]["total"], 14);
    }
}
