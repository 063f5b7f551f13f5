/// Boundaries to the outside world.
///
/// The game loop talks to the screen, the keyboard/pointer, the speakers and
/// the wall clock only through these traits.  The binary provides terminal
/// implementations; tests provide recording fakes.

use std::io;
use std::time::Duration;

use crate::entities::{Drawable, Rect, Rgb};
use crate::sound::SoundClip;

// ── Input ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Quit,
    KeyDown(Key),
}

pub trait InputSource {
    /// Everything that arrived since the previous call.  Never blocks.
    fn poll_events(&mut self) -> io::Result<Vec<Event>>;
    /// Latest pointer column in playfield pixels.
    fn pointer_x(&self) -> i32;
}

// ── Output ────────────────────────────────────────────────────────────────────

pub trait Renderer {
    /// Paint the given entities at their current positions.
    fn draw(&mut self, entities: &[&dyn Drawable]) -> io::Result<()>;
    /// Paint the background back over every footprint drawn on the previous
    /// frame, including entities that have since been removed.
    fn clear(&mut self, background: Rgb) -> io::Result<()>;
    fn fill_region(&mut self, color: Rgb, rect: Rect) -> io::Result<()>;
    fn draw_text(&mut self, text: &str, x: i32, y: i32, fg: Rgb, bg: Rgb) -> io::Result<()>;
    /// Width and height `text` would occupy, in playfield pixels.
    fn text_size(&self, text: &str) -> (i32, i32);
    /// Make everything painted so far visible.
    fn flip(&mut self) -> io::Result<()>;
}

/// Sound output.  At most one clip is considered "playing" at a time.
pub trait AudioPlayer {
    fn play(&mut self, clip: SoundClip);
    fn stop(&mut self, clip: SoundClip);
    fn is_busy(&self) -> bool;
}

// ── Timing ────────────────────────────────────────────────────────────────────

pub trait FrameClock {
    /// Block until the next frame boundary at `target_fps`.
    fn tick(&mut self, target_fps: u32);
    /// Block for a fixed wall-clock span.
    fn hold(&mut self, duration: Duration);
}
