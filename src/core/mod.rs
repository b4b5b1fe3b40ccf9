//! Core plumbing: constants, configuration, geometry, timing and the frame
//! loop.

pub mod clock;
pub mod config;
pub mod constants;
pub mod game_loop;
pub mod geometry;

pub use clock::{Clock, FixedClock, FrameClock};
pub use config::{GameConfig, Palette, ScoringMode};
pub use game_loop::{FrameControl, GameLoop};
pub use geometry::{Point, Rect, Rgb};
