//! Recording fakes for the collaborator traits.
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::time::Duration;

use monster_catch::entities::{Drawable, Rect, Rgb, Sprite};
use monster_catch::platform::{AudioPlayer, Event, FrameClock, InputSource, Key, Renderer};
use monster_catch::sound::SoundClip;

/// Pixel width of one character for `RecordingRenderer::text_size`.
pub const CHAR_WIDTH: i32 = 8;
pub const LINE_HEIGHT: i32 = 16;

// ── Audio ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum AudioCall {
    Play(SoundClip),
    Stop(SoundClip),
}

/// Reports busy for `busy_polls` calls to `is_busy` after each play.
#[derive(Default)]
pub struct FakeAudio {
    pub calls: Vec<AudioCall>,
    pub busy_after_play: u32,
    pub busy_polls: Cell<u32>,
    pub always_busy: bool,
}

impl FakeAudio {
    pub fn busy_for(polls: u32) -> Self {
        FakeAudio { busy_after_play: polls, ..Default::default() }
    }

    pub fn stuck() -> Self {
        FakeAudio { always_busy: true, ..Default::default() }
    }

    pub fn played(&self) -> Vec<SoundClip> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                AudioCall::Play(clip) => Some(*clip),
                AudioCall::Stop(_) => None,
            })
            .collect()
    }
}

impl AudioPlayer for FakeAudio {
    fn play(&mut self, clip: SoundClip) {
        self.calls.push(AudioCall::Play(clip));
        self.busy_polls.set(self.busy_after_play);
    }

    fn stop(&mut self, clip: SoundClip) {
        self.calls.push(AudioCall::Stop(clip));
    }

    fn is_busy(&self) -> bool {
        if self.always_busy {
            return true;
        }
        let left = self.busy_polls.get();
        if left == 0 {
            return false;
        }
        self.busy_polls.set(left - 1);
        true
    }
}

// ── Renderer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingRenderer {
    pub fills: Vec<(Rgb, Rect)>,
    pub texts: Vec<(String, i32, i32)>,
    /// Entities passed to the most recent `draw`.
    pub last_drawn: Vec<(Rect, Sprite)>,
    pub draws: u32,
    pub clears: u32,
    pub flips: u32,
}

impl RecordingRenderer {
    pub fn texts_equal(&self, text: &str) -> usize {
        self.texts.iter().filter(|(t, _, _)| t == text).count()
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, entities: &[&dyn Drawable]) -> std::io::Result<()> {
        self.last_drawn = entities.iter().map(|e| (e.rect(), e.sprite())).collect();
        self.draws += 1;
        Ok(())
    }

    fn clear(&mut self, _background: Rgb) -> std::io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn fill_region(&mut self, color: Rgb, rect: Rect) -> std::io::Result<()> {
        self.fills.push((color, rect));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, _fg: Rgb, _bg: Rgb) -> std::io::Result<()> {
        self.texts.push((text.to_string(), x, y));
        Ok(())
    }

    fn text_size(&self, text: &str) -> (i32, i32) {
        (text.chars().count() as i32 * CHAR_WIDTH, LINE_HEIGHT)
    }

    fn flip(&mut self) -> std::io::Result<()> {
        self.flips += 1;
        Ok(())
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Hands out one batch of events per poll, then nothing.
#[derive(Default)]
pub struct ScriptedInput {
    pub batches: VecDeque<Vec<Event>>,
    pub pointer: i32,
}

impl ScriptedInput {
    pub fn new(pointer: i32) -> Self {
        ScriptedInput { batches: VecDeque::new(), pointer }
    }

    pub fn then(mut self, events: Vec<Event>) -> Self {
        self.batches.push_back(events);
        self
    }

    pub fn push(&mut self, events: Vec<Event>) {
        self.batches.push_back(events);
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> std::io::Result<Vec<Event>> {
        Ok(self.batches.pop_front().unwrap_or_default())
    }

    fn pointer_x(&self) -> i32 {
        self.pointer
    }
}

pub fn space() -> Event {
    Event::KeyDown(Key::Char(' '))
}

// ── Clock ─────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct CountingClock {
    pub ticks: u32,
    pub last_fps: u32,
    pub held: Vec<Duration>,
}

impl FrameClock for CountingClock {
    fn tick(&mut self, target_fps: u32) {
        self.ticks += 1;
        self.last_fps = target_fps;
    }

    fn hold(&mut self, duration: Duration) {
        self.held.push(duration);
    }
}
