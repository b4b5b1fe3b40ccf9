//! A gated obstacle: a top and a bottom segment with a passable gap between.

use super::entity::{Drawable, Updatable};
use crate::core::config::{GameConfig, Palette};
use crate::core::geometry::Rect;
use crate::ui::surface::RenderSurface;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct ObstaclePair {
    /// Left (leading) edge.
    pub x: f64,
    /// Horizontal velocity in px/frame, negative.
    pub speed: f64,
    pub width: f64,
    pub gap: f64,
    /// Height of the bottom segment, i.e. distance from the screen bottom to
    /// the lower edge of the gap.
    pub gap_offset: f64,
    pub screen_height: f64,
    /// Set once this obstacle has awarded its point.
    pub scored: bool,
}

impl ObstaclePair {
    /// Build an obstacle at `spawn_x` with a random gap placement.
    pub fn new<R: Rng>(spawn_x: f64, config: &GameConfig, rng: &mut R) -> Self {
        let max = config.effective_gap_offset_max();
        let min = config.gap_offset_min.min(max);
        let gap_offset = rng.gen_range(min..=max);
        Self::with_gap_offset(spawn_x, gap_offset as f64, config)
    }

    /// Build an obstacle with a known gap placement.
    pub fn with_gap_offset(spawn_x: f64, gap_offset: f64, config: &GameConfig) -> Self {
        Self {
            x: spawn_x,
            speed: config.obstacle_speed,
            width: config.obstacle_width,
            gap: config.obstacle_gap,
            gap_offset,
            screen_height: config.screen_height,
            scored: false,
        }
    }

    pub fn top_height(&self) -> f64 {
        self.screen_height - self.gap - self.gap_offset
    }

    pub fn bottom_height(&self) -> f64 {
        self.gap_offset
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Move one frame to the left. Motion is per frame, not per second.
    pub fn advance(&mut self) {
        self.x += self.speed;
    }

    /// True when the whole obstacle is left of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }

    /// True on the frame the leading edge reaches `line_x`.
    ///
    /// With integral speed and spawn position this is exact equality of the
    /// left edge and the line; for other speeds it fires on the single frame
    /// whose step crossed the line.
    pub fn occupies_gate_line(&self, line_x: f64) -> bool {
        let step = self.speed.abs().max(f64::EPSILON);
        self.x <= line_x && line_x < self.x + step
    }

    pub fn top_segment(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.top_height())
    }

    pub fn bottom_segment(&self) -> Rect {
        Rect::new(
            self.x,
            self.screen_height - self.bottom_height(),
            self.width,
            self.bottom_height(),
        )
    }

    /// Whether `rect` touches either solid segment. The gap is passable.
    pub fn collides_with(&self, rect: &Rect) -> bool {
        self.top_segment().overlaps(rect) || self.bottom_segment().overlaps(rect)
    }
}

impl Updatable for ObstaclePair {
    fn update(&mut self) {
        self.advance();
    }
}

impl Drawable for ObstaclePair {
    fn draw(&self, surface: &mut dyn RenderSurface, palette: &Palette) {
        surface.fill_rect(self.top_segment(), palette.obstacle);
        surface.fill_rect(self.bottom_segment(), palette.obstacle);
    }
}
