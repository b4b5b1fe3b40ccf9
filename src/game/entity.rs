//! Capabilities shared by the on-screen entities.
//!
//! The player and the obstacles are stored separately by the session but are
//! stepped and drawn through these traits, so the renderer can walk one
//! heterogeneous list of `&dyn Drawable`.

use crate::core::config::Palette;
use crate::ui::surface::RenderSurface;

/// Something that advances by one frame.
pub trait Updatable {
    fn update(&mut self);
}

/// Something with a visual footprint.
pub trait Drawable {
    fn draw(&self, surface: &mut dyn RenderSurface, palette: &Palette);
}
