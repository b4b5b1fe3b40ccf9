//! Game configuration.
//!
//! Every tunable lives in [`GameConfig`]. The defaults come from
//! [`crate::core::constants`]; the shipped binary always runs with the
//! defaults, tests build variants to exercise edge cases.

use crate::core::constants::*;
use crate::core::geometry::Rgb;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How gate passes are turned into points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringMode {
    /// Each obstacle awards at most one point, on whichever pass event
    /// (alignment with the player or leaving the screen) happens first.
    PerGate,
    /// Both pass events award a point, so a cleared gate is worth two.
    DoubleCount,
}

/// Colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub ground: Rgb,
    pub player: Rgb,
    pub obstacle: Rgb,
    pub font: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR.into(),
            ground: GROUND_COLOR.into(),
            player: PLAYER_COLOR.into(),
            obstacle: OBSTACLE_COLOR.into(),
            font: FONT_COLOR.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub screen_width: f64,
    pub screen_height: f64,
    pub ground_height: f64,
    pub target_fps: u32,

    pub gravity: f64,
    pub jump_velocity: f64,
    pub player_width: f64,
    pub player_height: f64,

    pub obstacle_width: f64,
    pub obstacle_gap: f64,
    pub obstacle_speed: f64,
    pub spawn_interval_ms: u64,
    pub gap_offset_min: u32,
    pub gap_offset_max: u32,

    pub scoring: ScoringMode,
    pub palette: Palette,
    pub font_size: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,
            target_fps: TARGET_FPS,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_gap: OBSTACLE_GAP,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            gap_offset_min: GAP_OFFSET_MIN,
            gap_offset_max: GAP_OFFSET_MAX,
            scoring: ScoringMode::PerGate,
            palette: Palette::default(),
            font_size: FONT_SIZE,
        }
    }
}

impl GameConfig {
    /// Configuration reproducing the reference double-count scoring.
    pub fn double_count() -> Self {
        Self {
            scoring: ScoringMode::DoubleCount,
            ..Self::default()
        }
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    /// Largest gap offset that still leaves a non-negative top segment.
    pub fn effective_gap_offset_max(&self) -> u32 {
        let room = (self.screen_height - self.obstacle_gap).max(0.0) as u32;
        self.gap_offset_max.min(room).max(self.gap_offset_min.min(room))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 400.0);
        assert_eq!(config.screen_height, 600.0);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.spawn_interval(), Duration::from_millis(1500));
        assert_eq!(config.scoring, ScoringMode::PerGate);
        assert_eq!(config.palette.background, Rgb(100, 200, 255));
    }

    #[test]
    fn test_double_count_only_changes_scoring() {
        let config = GameConfig::double_count();
        assert_eq!(config.scoring, ScoringMode::DoubleCount);
        assert_eq!(config.gravity, GameConfig::default().gravity);
    }

    #[test]
    fn test_effective_gap_offset_max_is_clamped_to_screen() {
        let mut config = GameConfig::default();
        assert_eq!(config.effective_gap_offset_max(), 350);

        config.gap_offset_max = 1000;
        assert_eq!(config.effective_gap_offset_max(), 450);
    }

    #[test]
    fn test_config_serializes_to_json() {
        let json = serde_json::to_string(&GameConfig::default()).unwrap();
        assert!(json.contains("\"scoring\":\"PerGate\""));
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.gap_offset_max, 350);
    }
}
