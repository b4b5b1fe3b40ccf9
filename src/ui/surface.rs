//! Drawing collaborators consumed by the renderer.

use crate::core::geometry::{Point, Rect, Rgb};
use std::io;

/// A surface that can be filled with colored rectangles and then shown.
pub trait RenderSurface {
    /// Fill the whole surface with one color.
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Show everything drawn since the previous present.
    fn present(&mut self) -> io::Result<()>;
}

/// Renders text labels.
pub trait TextService {
    /// Draw `text` so that the middle of its top edge sits on `anchor`.
    fn draw_text(&mut self, text: &str, anchor: Point, color: Rgb, size: u16);
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    FillRect(Rect, Rgb),
    Text {
        text: String,
        anchor: Point,
        color: Rgb,
        size: u16,
    },
}
