//! Rasterises draw calls into a ratatui buffer.
//!
//! Field pixels are scaled onto the target `Rect`. A cell is painted when
//! its centre falls inside the sprite, and everything is clipped to the
//! target area.

use crate::config::GameConfig;
use crate::game::Point;
use crate::render::{Canvas, Sprite};
use ratatui::{
    buffer::{Buffer, Cell},
    layout::Rect,
    style::{Color, Modifier, Style},
};

const SKY: Color = Color::Rgb(173, 216, 230);
const CLOUD: Color = Color::White;
const GRASS: Color = Color::Green;
const DIRT_DARK: Color = Color::Rgb(150, 100, 55);
const DIRT_LIGHT: Color = Color::Rgb(205, 165, 105);
const PIPE: Color = Color::Green;
const PIPE_LIP: Color = Color::LightGreen;
const BIRD: Color = Color::Yellow;
const TEXT: Color = Color::Black;

/// Height of the pipe lip and the grass strip, in field pixels.
const LIP_HEIGHT: f64 = 15.0;

pub struct TerminalCanvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    config: &'a GameConfig,
    /// Field pixels per terminal column.
    cell_w: f64,
    /// Field pixels per terminal row.
    cell_h: f64,
}

impl<'a> TerminalCanvas<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect, config: &'a GameConfig) -> Self {
        let cell_w = config.field_width / f64::from(area.width.max(1));
        let cell_h = config.field_height / f64::from(area.height.max(1));
        Self {
            buf,
            area,
            config,
            cell_w,
            cell_h,
        }
    }

    /// Terminal cell holding field point `pos`, if it is inside the area.
    pub fn cell_at(&self, pos: Point) -> Option<(u16, u16)> {
        let col = (pos.x / self.cell_w).floor();
        let row = (pos.y / self.cell_h).floor();
        if col < 0.0
            || row < 0.0
            || col >= f64::from(self.area.width)
            || row >= f64::from(self.area.height)
        {
            return None;
        }
        Some((self.area.x + col as u16, self.area.y + row as u16))
    }

    /// Call `paint` for every cell whose centre lies in the given field rect,
    /// passing the cell and the centre's offset from the rect origin.
    fn fill<F>(&mut self, origin: Point, size: (f64, f64), mut paint: F)
    where
        F: FnMut(&mut Cell, f64, f64),
    {
        let cols = span(origin.x, size.0, self.cell_w, self.area.width);
        let rows = span(origin.y, size.1, self.cell_h, self.area.height);
        for row in rows {
            let local_y = (f64::from(row) + 0.5) * self.cell_h - origin.y;
            for col in cols.clone() {
                let local_x = (f64::from(col) + 0.5) * self.cell_w - origin.x;
                let cell = self.buf.get_mut(self.area.x + col, self.area.y + row);
                paint(cell, local_x, local_y);
            }
        }
    }
}

/// Cells along one axis whose centres fall in `[start, start + len)`.
fn span(start: f64, len: f64, cell: f64, cells: u16) -> std::ops::Range<u16> {
    let first = (start / cell - 0.5).ceil().max(0.0);
    let end = ((start + len) / cell - 0.5).ceil().min(f64::from(cells));
    if end <= first {
        return 0..0;
    }
    first as u16..end as u16
}

/// Glyph for the bird's beak at the given tilt.
pub fn bird_glyph(rotation: f64) -> char {
    if rotation <= -15.0 {
        '▲'
    } else if rotation >= 30.0 {
        '▼'
    } else {
        '►'
    }
}

impl Canvas for TerminalCanvas<'_> {
    fn draw_sprite(&mut self, sprite: Sprite, pos: Point, rotation: f64) {
        let size = sprite.size(self.config);
        match sprite {
            Sprite::Sky => self.fill(pos, size, |cell, x, y| {
                // Sparse clouds in the upper half, repeating every tile
                let cloud = y < size.1 / 2.0
                    && ((x / 60.0) as i64 + (y / 45.0) as i64 * 3) % 7 == 0
                    && (y / 45.0) as i64 % 2 == 0;
                cell.set_char(if cloud { '░' } else { ' ' })
                    .set_fg(CLOUD)
                    .set_bg(SKY);
            }),
            Sprite::Ground => self.fill(pos, size, |cell, x, y| {
                if y < LIP_HEIGHT {
                    cell.set_char('▄').set_fg(GRASS).set_bg(SKY);
                } else {
                    let stripe = (x / 20.0) as i64 % 2 == 0;
                    cell.set_char(if stripe { '▓' } else { '▒' })
                        .set_fg(DIRT_DARK)
                        .set_bg(DIRT_LIGHT);
                }
            }),
            Sprite::Bird => {
                let cell_w = self.cell_w;
                self.fill(pos, size, |cell, x, _| {
                    // Beak on the front-most column
                    let ch = if x + cell_w >= size.0 {
                        bird_glyph(rotation)
                    } else {
                        '█'
                    };
                    cell.set_char(ch).set_fg(BIRD).set_bg(SKY);
                });
            }
            Sprite::PipeTop => self.fill(pos, size, |cell, _, y| {
                let fg = if y >= size.1 - LIP_HEIGHT { PIPE_LIP } else { PIPE };
                cell.set_char('█').set_fg(fg);
            }),
            Sprite::PipeBottom => self.fill(pos, size, |cell, _, y| {
                let fg = if y < LIP_HEIGHT { PIPE_LIP } else { PIPE };
                cell.set_char('█').set_fg(fg);
            }),
        }
    }

    fn draw_text(&mut self, text: &str, pos: Point) {
        let Some((x, y)) = self.cell_at(pos) else {
            return;
        };
        let max_width = usize::from(self.area.right() - x);
        self.buf.set_stringn(
            x,
            y,
            text,
            max_width,
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        );
    }
}
