/// Sound scheduling: a cooldown-gated ambient sound plus priority event
/// sounds that cut off whatever is playing.

use std::thread;
use std::time::{Duration, Instant};

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::platform::AudioPlayer;

const BUSY_POLL: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundClip {
    /// Monster shuffling, the default ambient sound.
    Move1,
    /// Alternative shuffle, used as the secondary ambient sound.
    Move2,
    /// A monster dropped into the basket.
    Caught,
    /// A monster reached the grass.
    Landed,
}

impl SoundClip {
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundClip::Move1 => "Monster_Move1.wav",
            SoundClip::Move2 => "Monster_Move2.wav",
            SoundClip::Caught => "Monster_Died.wav",
            SoundClip::Landed => "Monster_Landed.wav",
        }
    }

    pub fn volume(&self) -> f32 {
        match self {
            SoundClip::Move1 => 0.5,
            _ => 1.0,
        }
    }
}

pub struct SoundScheduler<A: AudioPlayer> {
    player: A,
    cooldown: u32,
    counter: u32,
    primary: SoundClip,
    secondary: Option<SoundClip>,
    /// Whether the next ambient play should use the secondary clip.
    alternate: bool,
    current: Option<SoundClip>,
    wait_limit: Duration,
}

impl<A: AudioPlayer> SoundScheduler<A> {
    pub fn new(player: A, cooldown: u32, primary: SoundClip, wait_limit: Duration) -> Self {
        SoundScheduler {
            player,
            cooldown,
            counter: 0,
            primary,
            secondary: None,
            alternate: false,
            current: None,
            wait_limit,
        }
    }

    /// Alternate ambient plays between the primary clip and `clip`.
    pub fn with_secondary(mut self, clip: SoundClip) -> Self {
        self.secondary = Some(clip);
        self
    }

    /// Called once per running frame.  Plays the ambient clip every
    /// `cooldown` calls.
    pub fn maybe_play_ambient(&mut self) {
        self.counter += 1;
        if self.counter < self.cooldown {
            return;
        }
        let clip = match self.secondary {
            Some(second) if self.alternate => second,
            _ => self.primary,
        };
        if self.secondary.is_some() {
            self.alternate = !self.alternate;
        }
        trace!("ambient {:?}", clip);
        self.start(clip);
        self.counter = 0;
    }

    /// Cut off the current clip and play `clip` immediately.  With
    /// `block_until_done` the call returns only once the player goes quiet
    /// or the wait limit runs out.
    pub fn override_and_play(&mut self, block_until_done: bool, clip: SoundClip) {
        if let Some(playing) = self.current.take() {
            self.player.stop(playing);
        }
        self.start(clip);
        if block_until_done {
            self.wait_until_quiet();
        }
    }

    pub fn adjust_cooldown(&mut self, delta: i32) {
        self.cooldown = (self.cooldown as i64 + delta as i64).max(0) as u32;
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn current(&self) -> Option<SoundClip> {
        self.current
    }

    pub fn player(&self) -> &A {
        &self.player
    }

    fn start(&mut self, clip: SoundClip) {
        self.player.play(clip);
        self.current = Some(clip);
    }

    fn wait_until_quiet(&self) {
        let started = Instant::now();
        while self.player.is_busy() {
            if started.elapsed() >= self.wait_limit {
                warn!(
                    "audio still busy after {:?}; resuming without waiting",
                    self.wait_limit
                );
                return;
            }
            thread::sleep(BUSY_POLL);
        }
    }
}
