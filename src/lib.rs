//! Monster Catch — falling monsters, one basket, five lives.
//!
//! Pure game logic lives in this library; the binary adds the terminal
//! renderer, input, audio stand-in and frame clock.

pub mod config;
pub mod entities;
pub mod game_loop;
pub mod lives;
pub mod platform;
pub mod score;
pub mod sound;
pub mod spawner;

pub use config::{ConfigError, GameConfig};
pub use game_loop::{Control, FrameReport, GameLoop, GameStatus, Outcome};
