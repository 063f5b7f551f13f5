/// Terminal-side collaborators: keyboard/mouse input, an audio stand-in and
/// the frame clock.

use std::io::{stdout, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use log::debug;
use monster_catch::platform::{AudioPlayer, Event, FrameClock, InputSource, Key};
use monster_catch::sound::SoundClip;

/// Pointer step for the arrow keys, in playfield pixels.
const ARROW_STEP: i32 = 15;

// ── Input ─────────────────────────────────────────────────────────────────────

pub struct TerminalInput {
    rx: mpsc::Receiver<TermEvent>,
    pointer_x: i32,
    term_cols: u16,
    screen_width: i32,
}

impl TerminalInput {
    /// Dedicate a thread to blocking event reads and hand them over through
    /// a channel, so polling never blocks the game loop.
    pub fn spawn(term_cols: u16, screen_width: i32, start_x: i32) -> Self {
        let (tx, rx) = mpsc::channel::<TermEvent>();
        thread::spawn(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        });
        TerminalInput {
            rx,
            pointer_x: start_x,
            term_cols: term_cols.max(1),
            screen_width,
        }
    }

    fn column_to_x(&self, column: u16) -> i32 {
        (column as i64 * self.screen_width as i64 / self.term_cols as i64) as i32
    }

    fn translate_key(&mut self, key: KeyEvent) -> Option<Event> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Event::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Event::Quit)
            }
            KeyCode::Left => {
                self.pointer_x = (self.pointer_x - ARROW_STEP).max(0);
                None
            }
            KeyCode::Right => {
                self.pointer_x = (self.pointer_x + ARROW_STEP).min(self.screen_width);
                None
            }
            KeyCode::Char(c) => Some(Event::KeyDown(Key::Char(c))),
            _ => Some(Event::KeyDown(Key::Other)),
        }
    }
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self) -> std::io::Result<Vec<Event>> {
        let mut events = Vec::new();
        while let Ok(ev) = self.rx.try_recv() {
            match ev {
                TermEvent::Key(key) => {
                    if let Some(e) = self.translate_key(key) {
                        events.push(e);
                    }
                }
                TermEvent::Mouse(MouseEvent { kind, column, .. }) => {
                    if matches!(kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
                        self.pointer_x = self.column_to_x(column);
                    }
                }
                _ => {}
            }
        }
        Ok(events)
    }

    fn pointer_x(&self) -> i32 {
        self.pointer_x
    }
}

// ── Audio ─────────────────────────────────────────────────────────────────────

/// How long each clip keeps the player busy.
fn clip_length(clip: SoundClip) -> Duration {
    match clip {
        SoundClip::Move1 | SoundClip::Move2 => Duration::from_millis(200),
        SoundClip::Caught => Duration::from_millis(350),
        SoundClip::Landed => Duration::from_millis(500),
    }
}

/// Terminals cannot play wav files.  This player keeps the timing of the
/// real clips so sequencing behaves the same, and rings the bell for event
/// sounds when enabled.
pub struct TerminalAudio {
    bell: bool,
    current: Option<(SoundClip, Instant)>,
}

impl TerminalAudio {
    pub fn new(bell: bool) -> Self {
        TerminalAudio { bell, current: None }
    }
}

impl AudioPlayer for TerminalAudio {
    fn play(&mut self, clip: SoundClip) {
        debug!("play {} at volume {}", clip.file_name(), clip.volume());
        if self.bell && matches!(clip, SoundClip::Caught | SoundClip::Landed) {
            let mut out = stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
        self.current = Some((clip, Instant::now()));
    }

    fn stop(&mut self, clip: SoundClip) {
        if matches!(self.current, Some((playing, _)) if playing == clip) {
            self.current = None;
        }
    }

    fn is_busy(&self) -> bool {
        self.current
            .map(|(clip, started)| started.elapsed() < clip_length(clip))
            .unwrap_or(false)
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

pub struct SleepClock {
    last: Instant,
}

impl SleepClock {
    pub fn new() -> Self {
        SleepClock { last: Instant::now() }
    }
}

impl Default for SleepClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SleepClock {
    fn tick(&mut self, target_fps: u32) {
        let frame = Duration::from_secs(1) / target_fps.max(1);
        let elapsed = self.last.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
        self.last = Instant::now();
    }

    fn hold(&mut self, duration: Duration) {
        thread::sleep(duration);
        self.last = Instant::now();
    }
}
