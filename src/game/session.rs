//! All mutable state of one run, and the per-frame simulation step.

use super::entity::{Drawable, Updatable};
use super::obstacle::ObstaclePair;
use super::player::Player;
use super::scoring;
use super::spawner::Spawner;
use crate::audio::AudioSink;
use crate::core::config::GameConfig;
use crate::input::FrameInput;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    Collision,
    OutOfBounds,
}

/// Running or ended. Once ended, a run never resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Ended(EndCause),
}

/// Which pass event awarded a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// The obstacle left the screen.
    Exit,
    /// The obstacle's leading edge reached the player's center line.
    Alignment,
}

/// Something that happened during a frame. The loop logs these; the game
/// logic never touches presentation types.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    Jumped,
    Spawned { gap_offset: f64 },
    Retired,
    Scored { kind: PassKind, score: u32 },
    Ended(EndCause),
}

/// Outcome of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u32,
    pub frames: u64,
    pub obstacles_spawned: u64,
    pub end_cause: Option<EndCause>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub player: Player,
    /// The single authoritative set of active obstacles, oldest first.
    pub obstacles: Vec<ObstaclePair>,
    pub spawner: Spawner,
    pub score: u32,
    pub phase: GamePhase,
    pub frame_count: u64,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            player: Player::new(&config),
            obstacles: Vec::new(),
            spawner: Spawner::new(config.spawn_interval()),
            score: 0,
            phase: GamePhase::Running,
            frame_count: 0,
            config,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_ended(&self) -> bool {
        !self.is_running()
    }

    pub fn end_cause(&self) -> Option<EndCause> {
        match self.phase {
            GamePhase::Running => None,
            GamePhase::Ended(cause) => Some(cause),
        }
    }

    /// Move to the ended phase. Only the first call has any effect.
    pub fn end(&mut self, cause: EndCause) -> bool {
        if self.is_ended() {
            return false;
        }
        self.phase = GamePhase::Ended(cause);
        true
    }

    /// Advance the simulation by one frame.
    ///
    /// `elapsed` is the duration of the previous frame and only feeds the
    /// spawn timer; motion is per frame. After the run has ended the player
    /// keeps falling, while obstacles, spawning and scoring stay frozen.
    pub fn step<R: Rng>(
        &mut self,
        input: FrameInput,
        elapsed: Duration,
        rng: &mut R,
        audio: &mut dyn AudioSink,
    ) -> Vec<FrameEvent> {
        let mut events = Vec::new();

        if input.jump && self.is_running() {
            self.player.jump(audio);
            events.push(FrameEvent::Jumped);
        }

        self.player.update();

        if self.is_running() {
            for obstacle in &mut self.obstacles {
                obstacle.update();
            }
            if let Some(obstacle) = self.spawner.spawn_due(elapsed, &self.config, rng) {
                events.push(FrameEvent::Spawned {
                    gap_offset: obstacle.gap_offset,
                });
                self.obstacles.push(obstacle);
            }
        }

        scoring::evaluate(self, &mut events);

        self.frame_count += 1;
        events
    }

    /// Everything with a visual footprint, in draw order: obstacles first,
    /// then the player on top.
    pub fn drawables(&self) -> Vec<&dyn Drawable> {
        let mut items: Vec<&dyn Drawable> = Vec::with_capacity(self.obstacles.len() + 1);
        for obstacle in &self.obstacles {
            items.push(obstacle);
        }
        items.push(&self.player);
        items
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            score: self.score,
            frames: self.frame_count,
            obstacles_spawned: self.spawner.spawned(),
            end_cause: self.end_cause(),
        }
    }
}
