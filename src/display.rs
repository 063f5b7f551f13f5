/// Rendering layer — all terminal output lives here.
///
/// The game thinks in playfield pixels; this module maps them onto the
/// terminal grid and remembers what it drew so the next frame can paint the
/// sky back over it.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};
use monster_catch::entities::{Drawable, Rect, Rgb, Sprite, LIGHT_BLUE};
use monster_catch::platform::Renderer;

// ── Sprite palette ────────────────────────────────────────────────────────────

const C_MONSTER: Color = Color::Rgb { r: 128, g: 32, b: 160 };
const C_BASKET: Color = Color::Rgb { r: 139, g: 69, b: 19 };
const C_HEART: Color = Color::Rgb { r: 220, g: 20, b: 60 };

fn glyph(sprite: Sprite) -> (char, Color) {
    match sprite {
        Sprite::Monster => ('▓', C_MONSTER),
        Sprite::Basket => ('▀', C_BASKET),
        Sprite::Heart => ('♥', C_HEART),
    }
}

fn term_color(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

/// A rectangle in terminal cells, end-exclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Cells {
    col: u16,
    row: u16,
    cols: u16,
    rows: u16,
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    term_cols: u16,
    term_rows: u16,
    screen_width: i32,
    screen_depth: i32,
    /// Footprints painted by the last `draw`, for `clear` to erase.
    drawn: Vec<Cells>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, term_cols: u16, term_rows: u16, screen_width: i32, screen_depth: i32) -> Self {
        TerminalRenderer {
            out,
            term_cols: term_cols.max(1),
            term_rows: term_rows.max(1),
            screen_width,
            screen_depth,
            drawn: Vec::new(),
        }
    }

    fn col(&self, x: i32) -> i64 {
        x as i64 * self.term_cols as i64 / self.screen_width as i64
    }

    fn row(&self, y: i32) -> i64 {
        y as i64 * self.term_rows as i64 / self.screen_depth as i64
    }

    /// Map a pixel rectangle to cells.  Anything visible gets at least one
    /// cell; the result is clipped to the terminal.
    fn cells(&self, rect: Rect) -> Option<Cells> {
        let c0 = self.col(rect.x);
        let r0 = self.row(rect.y);
        let c1 = self.col(rect.right()).max(c0 + 1);
        let r1 = self.row(rect.bottom()).max(r0 + 1);

        let c0 = c0.clamp(0, self.term_cols as i64);
        let r0 = r0.clamp(0, self.term_rows as i64);
        let c1 = c1.clamp(0, self.term_cols as i64);
        let r1 = r1.clamp(0, self.term_rows as i64);
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some(Cells {
            col: c0 as u16,
            row: r0 as u16,
            cols: (c1 - c0) as u16,
            rows: (r1 - r0) as u16,
        })
    }

    fn paint(&mut self, cells: Cells, ch: char, fg: Color, bg: Color) -> std::io::Result<()> {
        let line: String = std::iter::repeat(ch).take(cells.cols as usize).collect();
        self.out.queue(style::SetForegroundColor(fg))?;
        self.out.queue(style::SetBackgroundColor(bg))?;
        for r in 0..cells.rows {
            self.out.queue(cursor::MoveTo(cells.col, cells.row + r))?;
            self.out.queue(Print(&line))?;
        }
        Ok(())
    }

    /// Pixel span of one cell, rounded up.
    fn cell_size(&self) -> (i32, i32) {
        let w = (self.screen_width + self.term_cols as i32 - 1) / self.term_cols as i32;
        let h = (self.screen_depth + self.term_rows as i32 - 1) / self.term_rows as i32;
        (w, h)
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, entities: &[&dyn Drawable]) -> std::io::Result<()> {
        for entity in entities {
            let Some(cells) = self.cells(entity.rect()) else {
                continue;
            };
            let (ch, fg) = glyph(entity.sprite());
            // Every sprite sits on the sky
            self.paint(cells, ch, fg, term_color(LIGHT_BLUE))?;
            self.drawn.push(cells);
        }
        Ok(())
    }

    fn clear(&mut self, background: Rgb) -> std::io::Result<()> {
        let drawn = std::mem::take(&mut self.drawn);
        let bg = term_color(background);
        for cells in drawn {
            self.paint(cells, ' ', bg, bg)?;
        }
        Ok(())
    }

    fn fill_region(&mut self, color: Rgb, rect: Rect) -> std::io::Result<()> {
        if let Some(cells) = self.cells(rect) {
            let c = term_color(color);
            self.paint(cells, ' ', c, c)?;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, fg: Rgb, bg: Rgb) -> std::io::Result<()> {
        let col = self.col(x).clamp(0, self.term_cols as i64 - 1) as u16;
        let row = self.row(y).clamp(0, self.term_rows as i64 - 1) as u16;
        let room = (self.term_cols - col) as usize;
        let shown: String = text.chars().take(room).collect();

        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(term_color(fg)))?;
        self.out.queue(style::SetBackgroundColor(term_color(bg)))?;
        self.out.queue(Print(shown))?;
        Ok(())
    }

    fn text_size(&self, text: &str) -> (i32, i32) {
        let (cell_w, cell_h) = self.cell_size();
        (text.chars().count() as i32 * cell_w, cell_h)
    }

    fn flip(&mut self) -> std::io::Result<()> {
        self.out.queue(style::ResetColor)?;
        // Park the cursor in the bottom-left corner
        self.out.queue(cursor::MoveTo(0, self.term_rows.saturating_sub(1)))?;
        self.out.flush()
    }
}
