//! Flappy - terminal arcade game library
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod clock;
pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
pub mod ui;

pub use config::{ConfigError, GameConfig};
pub use game::{Control, Game, GameInput, Phase, Session};
