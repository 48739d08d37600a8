//! SheetView: maps a rolled `StatSheet` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: the title, a blank row, one row of tiles per stat, a blank row and a
//! key hint. Each stat row holds one tile per die, an `=` tile and the total tile. Dropped dice
//! get a red frame and a red cross.

use crate::core::{StatRound, StatSheet};
use crate::fb::{digit_count, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{EQUALS_GLYPH, SHEET_TITLE, STAT_COUNT};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Tile height preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSize {
    /// Three inner rows; the cross is drawn as corner diagonals.
    Large,
    /// One inner row; the cross is drawn at both inner edges.
    Compact,
}

impl TileSize {
    pub fn inner_height(self) -> u16 {
        match self {
            TileSize::Large => 3,
            TileSize::Compact => 1,
        }
    }

    pub fn outer_height(self) -> u16 {
        self.inner_height() + 2
    }
}

const TILE_GAP: u16 = 1;
const HEADER_ROWS: u16 = 2;
const FOOTER_ROWS: u16 = 2;
const KEY_HINT: &str = "r reroll   q quit";

const TITLE: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
const FRAME: CellStyle = CellStyle::fg(Rgb::new(120, 120, 130));
const DIE: CellStyle = CellStyle::fg(Rgb::new(230, 230, 230)).bold();
const DROPPED_FRAME: CellStyle = CellStyle::fg(Rgb::new(220, 80, 80));
const DROPPED_DIE: CellStyle = CellStyle::fg(Rgb::new(150, 150, 150)).dim();
const CROSS: CellStyle = CellStyle::fg(Rgb::new(220, 80, 80)).bold();
const EQUALS: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const TOTAL_FRAME: CellStyle = CellStyle::fg(Rgb::new(240, 220, 80));
const TOTAL: CellStyle = CellStyle::fg(Rgb::new(240, 220, 80)).bold();
const HINT: CellStyle = CellStyle::fg(Rgb::new(140, 140, 140)).dim();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Die { value: u32, dropped: bool },
    Equals,
    Total(u64),
}

/// Terminal renderer for a stat sheet.
#[derive(Debug, Clone, Copy)]
pub struct SheetView {
    /// `None` picks the largest tiles that fit the viewport height.
    tile_size: Option<TileSize>,
    show_hint: bool,
}

impl Default for SheetView {
    fn default() -> Self {
        Self {
            tile_size: None,
            show_hint: true,
        }
    }
}

impl SheetView {
    pub fn with_tile_size(mut self, tile_size: TileSize) -> Self {
        self.tile_size = Some(tile_size);
        self
    }

    pub fn with_hint(mut self, show_hint: bool) -> Self {
        self.show_hint = show_hint;
        self
    }

    /// Tile preset used for `viewport`.
    pub fn tile_size_for(&self, viewport: Viewport) -> TileSize {
        if let Some(size) = self.tile_size {
            return size;
        }
        let needed = STAT_COUNT as u16 * TileSize::Large.outer_height() + HEADER_ROWS + FOOTER_ROWS;
        if viewport.height >= needed {
            TileSize::Large
        } else {
            TileSize::Compact
        }
    }

    /// Inner tile width: wide enough for the widest value plus one column on each side.
    pub fn tile_inner_width(sheet: &StatSheet) -> u16 {
        let mut widest = u64::from(sheet.config.dice_sides);
        for round in &sheet.rounds {
            widest = widest.max(round.total);
            for &v in &round.rolls {
                widest = widest.max(u64::from(v));
            }
        }
        (digit_count(widest) + 2).max(3)
    }

    /// Render the sheet into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, sheet: &StatSheet, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let size = self.tile_size_for(viewport);
        let tile_w = Self::tile_inner_width(sheet) + 2;
        let tile_h = size.outer_height();

        let cols = sheet.columns() as u64;
        let grid_w = (cols * u64::from(tile_w + TILE_GAP) - u64::from(TILE_GAP))
            .min(u64::from(u16::MAX)) as u16;
        let grid_h = STAT_COUNT as u16 * tile_h;
        let title_w = SHEET_TITLE.chars().count() as u16;

        let block_w = grid_w.max(title_w);
        let block_h = HEADER_ROWS + grid_h + FOOTER_ROWS;
        let start_x = viewport.width.saturating_sub(block_w) / 2;
        let start_y = viewport.height.saturating_sub(block_h) / 2;

        fb.put_str(
            start_x.saturating_add((block_w - title_w) / 2),
            start_y,
            SHEET_TITLE,
            TITLE,
        );

        let grid_x = start_x.saturating_add((block_w - grid_w) / 2);
        let grid_y = start_y.saturating_add(HEADER_ROWS);
        for (row, round) in sheet.rounds.iter().enumerate() {
            let y = grid_y.saturating_add(row as u16 * tile_h);
            if y >= viewport.height {
                break;
            }
            self.draw_round(fb, grid_x, y, tile_w, size, round);
        }

        if self.show_hint {
            let hint_w = KEY_HINT.chars().count() as u16;
            let hint_x = start_x.saturating_add(block_w.saturating_sub(hint_w) / 2);
            let hint_y = grid_y.saturating_add(grid_h).saturating_add(FOOTER_ROWS - 1);
            fb.put_str(hint_x, hint_y, KEY_HINT, HINT);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, sheet: &StatSheet, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(sheet, viewport, &mut fb);
        fb
    }

    fn draw_round(
        &self,
        fb: &mut FrameBuffer,
        x0: u16,
        y: u16,
        tile_w: u16,
        size: TileSize,
        round: &StatRound,
    ) {
        let dice = round.rolls.iter().enumerate().map(|(i, &value)| Tile::Die {
            value,
            dropped: round.is_dropped(i),
        });
        let tiles = dice.chain([Tile::Equals, Tile::Total(round.total)]);

        let step = u32::from(tile_w + TILE_GAP);
        for (col, tile) in tiles.enumerate() {
            let x = u32::from(x0).saturating_add((col as u32).saturating_mul(step));
            if x >= u32::from(fb.width()) {
                break;
            }
            self.draw_tile(fb, x as u16, y, tile_w, size, tile);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        tile_w: u16,
        size: TileSize,
        tile: Tile,
    ) {
        let inner_w = tile_w - 2;
        let mid_y = y.saturating_add(1 + size.inner_height() / 2);

        match tile {
            Tile::Die {
                value,
                dropped: false,
            } => {
                fb.stroke_rect(x, y, tile_w, size.outer_height(), FRAME);
                put_centered_u64(fb, x, mid_y, inner_w, u64::from(value), DIE);
            }
            Tile::Die {
                value,
                dropped: true,
            } => {
                fb.stroke_rect(x, y, tile_w, size.outer_height(), DROPPED_FRAME);
                put_centered_u64(fb, x, mid_y, inner_w, u64::from(value), DROPPED_DIE);
                draw_cross(fb, x, y, inner_w, size);
            }
            Tile::Equals => {
                fb.stroke_rect(x, y, tile_w, size.outer_height(), FRAME);
                let eq_w = EQUALS_GLYPH.chars().count() as u16;
                let eq_x = x.saturating_add(1 + inner_w.saturating_sub(eq_w) / 2);
                fb.put_str(eq_x, mid_y, EQUALS_GLYPH, EQUALS);
            }
            Tile::Total(total) => {
                fb.stroke_rect(x, y, tile_w, size.outer_height(), TOTAL_FRAME);
                put_centered_u64(fb, x, mid_y, inner_w, total, TOTAL);
            }
        }
    }
}

fn put_centered_u64(
    fb: &mut FrameBuffer,
    tile_x: u16,
    y: u16,
    inner_w: u16,
    v: u64,
    style: CellStyle,
) {
    let offset = inner_w.saturating_sub(digit_count(v)) / 2;
    fb.put_u64(tile_x.saturating_add(1 + offset), y, v, style);
}

fn draw_cross(fb: &mut FrameBuffer, tile_x: u16, tile_y: u16, inner_w: u16, size: TileSize) {
    let left = tile_x.saturating_add(1);
    let right = tile_x.saturating_add(inner_w);
    let top = tile_y.saturating_add(1);

    match size {
        TileSize::Large => {
            let bottom = tile_y.saturating_add(size.inner_height());
            fb.put_char(left, top, '╲', CROSS);
            fb.put_char(right, top, '╱', CROSS);
            fb.put_char(left, bottom, '╱', CROSS);
            fb.put_char(right, bottom, '╲', CROSS);
        }
        TileSize::Compact => {
            fb.put_char(left, top, '╳', CROSS);
            fb.put_char(right, top, '╳', CROSS);
        }
    }
}
