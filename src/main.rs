//! Stat roller (default binary).
//!
//! Rolls six ability scores and shows them as a grid in the terminal, or as
//! JSON on stdout when `STAT_ROLLER_OUTPUT=json`. Configuration comes from
//! `STAT_ROLLER_*` environment variables; see `RunConfig::from_env`.

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info, warn};

use stat_roller::core::{
    roll_and_present, DieRoller, JsonPresenter, OutputMode, Presenter, RollConfig, RunConfig,
    StatSheet, StdRoller,
};
use stat_roller::input::handle_key_event;
use stat_roller::term::{FrameBuffer, SheetView, TerminalRenderer, Viewport};
use stat_roller::types::ViewerAction;

fn main() -> Result<()> {
    env_logger::init();

    let config = RunConfig::from_env();
    info!(
        "nrolls={} ndrops={} dice_sides={} seed={:?} output={:?}",
        config.roll.nrolls, config.roll.ndrops, config.roll.dice_sides, config.seed, config.output
    );

    let mut roller = match config.seed {
        Some(seed) => StdRoller::from_seed(seed),
        None => StdRoller::from_entropy(),
    };

    match config.output {
        OutputMode::Json => {
            let mut presenter = JsonPresenter::new(io::stdout().lock());
            roll_and_present(&config.roll, &mut roller, &mut presenter)?;
            Ok(())
        }
        OutputMode::Terminal => {
            let mut viewer = TerminalViewer::new();
            let result = run(&config.roll, &mut roller, &mut viewer);

            // Always try to restore terminal state.
            let _ = viewer.close();
            result
        }
    }
}

/// Present sheets until the viewer asks to close; every reroll rolls a fresh sheet.
fn run<R, P>(config: &RollConfig, roller: &mut R, viewer: &mut P) -> Result<()>
where
    R: DieRoller,
    P: Presenter<Error = anyhow::Error>,
{
    loop {
        match roll_and_present(config, roller, viewer)? {
            ViewerAction::Close => return Ok(()),
            ViewerAction::Reroll => debug!("reroll requested"),
        }
    }
}

/// Shows a sheet in the alternate screen and blocks until a mapped key is pressed.
///
/// The terminal is only taken over on the first sheet, so a configuration error
/// never leaves the screen switched.
struct TerminalViewer {
    term: TerminalRenderer,
    view: SheetView,
    fb: FrameBuffer,
    entered: bool,
}

impl TerminalViewer {
    fn new() -> Self {
        Self {
            term: TerminalRenderer::new(),
            view: SheetView::default(),
            fb: FrameBuffer::new(0, 0),
            entered: false,
        }
    }

    fn redraw(&mut self, sheet: &StatSheet) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or_else(|err| {
            warn!("terminal size unavailable ({}); assuming 80x24", err);
            (80, 24)
        });
        self.view.render_into(sheet, Viewport::new(w, h), &mut self.fb);
        self.term.draw(&self.fb)
    }

    fn close(&mut self) -> Result<()> {
        self.entered = false;
        self.term.exit()
    }
}

impl Presenter for TerminalViewer {
    type Error = anyhow::Error;

    fn present(&mut self, sheet: &StatSheet) -> Result<ViewerAction> {
        if !self.entered {
            self.term.enter()?;
            self.entered = true;
        }
        self.redraw(sheet)?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = handle_key_event(key) {
                        return Ok(action);
                    }
                }
                Event::Resize(_, _) => {
                    self.term.invalidate();
                    self.redraw(sheet)?;
                }
                _ => {}
            }
        }
    }
}
