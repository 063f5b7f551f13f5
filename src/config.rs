/// Game configuration — every tunable the game reads, in one immutable value.
///
/// All geometry is in playfield pixels.  The terminal frontend scales these
/// to cells at draw time, so the simulation never sees terminal dimensions.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::sound::SoundClip;

// ── Defaults ──────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 750;
pub const SCREEN_DEPTH: i32 = 500;
pub const SKY_DEPTH: i32 = 400;

pub const MONSTER_WIDTH: i32 = 25;
pub const MONSTER_DEPTH: i32 = 25;
pub const BASKET_WIDTH: i32 = 40;
pub const BASKET_DEPTH: i32 = 10;

/// How far a monster may drift sideways per frame.
pub const WIGGLE: i32 = 3;
/// Upper bound for a monster's downward speed (pixels per frame).
pub const MAX_SPEED: i32 = 3;
pub const FRAMES_PER_SECOND: u32 = 20;
/// Frames between ambient sound plays at level 1.
pub const SOUND_DELAY: u32 = 10;
pub const INITIAL_LIVES: u32 = 5;
/// Lower bound of the bonus-spawn countdown; the upper bound is the sky depth.
pub const COUNTDOWN_MIN: u32 = 10;

pub const GAME_OVER_HOLD_MS: u64 = 5_000;
pub const SOUND_WAIT_LIMIT_MS: u64 = 3_000;

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config: {}", e),
            ConfigError::Parse(e) => write!(f, "malformed config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_depth: i32,
    /// Height of the sky; everything below it is grass (the floor).
    pub sky_depth: i32,
    pub monster_width: i32,
    pub monster_depth: i32,
    pub basket_width: i32,
    pub basket_depth: i32,
    pub wiggle: i32,
    pub max_speed: i32,
    pub frames_per_second: u32,
    pub sound_delay: u32,
    pub initial_lives: u32,
    pub countdown_min: u32,
    pub game_over_hold_ms: u64,
    /// Safety bound on how long an event sound may stall the loop.
    pub sound_wait_limit_ms: u64,
    /// Ambient plays alternate with this clip when set.
    pub secondary_sound: Option<SoundClip>,
    /// Fixed RNG seed; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: SCREEN_WIDTH,
            screen_depth: SCREEN_DEPTH,
            sky_depth: SKY_DEPTH,
            monster_width: MONSTER_WIDTH,
            monster_depth: MONSTER_DEPTH,
            basket_width: BASKET_WIDTH,
            basket_depth: BASKET_DEPTH,
            wiggle: WIGGLE,
            max_speed: MAX_SPEED,
            frames_per_second: FRAMES_PER_SECOND,
            sound_delay: SOUND_DELAY,
            initial_lives: INITIAL_LIVES,
            countdown_min: COUNTDOWN_MIN,
            game_over_hold_ms: GAME_OVER_HOLD_MS,
            sound_wait_limit_ms: SOUND_WAIT_LIMIT_MS,
            secondary_sound: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Read a JSON config file.  Fields missing from the file keep their
    /// defaults.  The result is validated before it is returned.
    pub fn load(path: &Path) -> Result<GameConfig, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<GameConfig, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.screen_width <= 0 || self.screen_depth <= 0 {
            return invalid("screen dimensions must be positive");
        }
        if self.sky_depth <= 0 || self.sky_depth > self.screen_depth {
            return invalid("sky_depth must lie within the screen");
        }
        if self.monster_width <= 0 || self.monster_width > self.screen_width {
            return invalid("monster_width must be positive and fit the screen");
        }
        if self.monster_depth <= 0 || self.monster_depth > self.sky_depth {
            return invalid("monster_depth must be positive and fit the sky");
        }
        if self.basket_width <= 0 || self.basket_depth <= 0 || self.basket_depth > self.sky_depth
        {
            return invalid("basket must be positive and fit the sky");
        }
        if self.wiggle < 0 {
            return invalid("wiggle must not be negative");
        }
        if self.max_speed < 1 {
            return invalid("max_speed must be at least 1");
        }
        if self.initial_lives == 0 {
            return invalid("initial_lives must be at least 1");
        }
        if self.frames_per_second == 0 {
            return invalid("frames_per_second must be positive");
        }
        if self.countdown_min > self.countdown_max() {
            return invalid("countdown_min must not exceed sky_depth");
        }
        Ok(())
    }

    /// Depth of the grass strip below the sky.
    pub fn grass_depth(&self) -> i32 {
        self.screen_depth - self.sky_depth
    }

    /// Largest x a monster's left edge may take.
    pub fn monster_max_x(&self) -> i32 {
        self.screen_width - self.monster_width
    }

    /// A monster whose top is below this line has landed on the grass.
    pub fn floor_line(&self) -> i32 {
        self.sky_depth - self.monster_depth
    }

    pub fn countdown_max(&self) -> u32 {
        self.sky_depth.max(0) as u32
    }

    pub fn game_over_hold(&self) -> Duration {
        Duration::from_millis(self.game_over_hold_ms)
    }

    pub fn sound_wait_limit(&self) -> Duration {
        Duration::from_millis(self.sound_wait_limit_ms)
    }
}
