//! The player-controlled object.

use super::entity::{Drawable, Updatable};
use crate::audio::{AudioSink, Cue};
use crate::core::config::{GameConfig, Palette};
use crate::core::geometry::Rect;
use crate::ui::surface::RenderSurface;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Left edge. Never changes during a run.
    pub x: f64,
    /// Top edge (positive = downward).
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity in px/frame (positive = downward).
    pub velocity: f64,
    gravity: f64,
    jump_velocity: f64,
}

impl Player {
    /// Place the player at the center of the screen, at rest.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.screen_width / 2.0 - config.player_width / 2.0,
            y: config.screen_height / 2.0 - config.player_height / 2.0,
            width: config.player_width,
            height: config.player_height,
            velocity: 0.0,
            gravity: config.gravity,
            jump_velocity: config.jump_velocity,
        }
    }

    /// Apply one frame of gravity. Velocity is updated before position.
    pub fn integrate(&mut self) {
        self.velocity += self.gravity;
        self.y += self.velocity;
    }

    /// Override the velocity with the jump impulse and fire the jump cue.
    pub fn jump(&mut self, audio: &mut dyn AudioSink) {
        self.velocity = self.jump_velocity;
        audio.play(Cue::Jump);
    }

    /// True once the player touches the ground line or the ceiling.
    pub fn bounds_check(&self, screen_height: f64) -> bool {
        self.y + self.height >= screen_height || self.y <= 0.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f64 {
        self.rect().center_x()
    }
}

impl Updatable for Player {
    fn update(&mut self) {
        self.integrate();
    }
}

impl Drawable for Player {
    fn draw(&self, surface: &mut dyn RenderSurface, palette: &Palette) {
        surface.fill_rect(self.rect(), palette.player);
    }
}
