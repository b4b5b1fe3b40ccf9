//! Gate-runner simulation.
//!
//! A player object falls under gravity and jumps through gated obstacles that
//! scroll in from the right. Passing a gate scores; touching a gate segment,
//! the ceiling or the ground ends the run. Nothing here depends on the
//! terminal: presentation goes through the traits in [`crate::ui::surface`]
//! and [`crate::audio`].

pub mod entity;
pub mod obstacle;
pub mod player;
pub mod scoring;
pub mod session;
pub mod spawner;

pub use entity::{Drawable, Updatable};
pub use obstacle::ObstaclePair;
pub use player::Player;
pub use session::{EndCause, FrameEvent, GamePhase, GameSession, PassKind, RunSummary};
pub use spawner::{Spawner, SpawnerState};
