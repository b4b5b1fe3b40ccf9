//! Skyward - a terminal gate-runner arcade game.
//!
//! This module exposes the game logic for testing and external use.

pub mod audio;
pub mod core;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;

pub use crate::core::config::{GameConfig, ScoringMode};
pub use crate::core::game_loop::{FrameControl, GameLoop};
pub use game::{EndCause, GamePhase, GameSession, RunSummary};
