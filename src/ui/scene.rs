//! Recorded frames and their rasterization into a terminal buffer.
//!
//! [`Scene`] implements the drawing collaborators by recording commands.
//! [`SceneView`] replays a recorded frame into a ratatui buffer using
//! half-block cells (`▀`, foreground = upper pixel, background = lower
//! pixel), which doubles the vertical resolution of the terminal.

use super::surface::{DrawCommand, RenderSurface, TextService};
use crate::core::geometry::{Point, Rect, Rgb};
use ratatui::{
    buffer::Buffer,
    layout::Rect as Area,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use std::io;

const HALF_BLOCK: &str = "\u{2580}";

/// Records draw commands; `present` publishes the pending frame.
#[derive(Debug, Default)]
pub struct Scene {
    pending: Vec<DrawCommand>,
    presented: Vec<DrawCommand>,
    frames: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the most recently presented frame.
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.presented
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Text of every label in the last presented frame, in draw order.
    pub fn labels(&self) -> Vec<&str> {
        self.presented
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for Scene {
    fn clear(&mut self, color: Rgb) {
        self.pending.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.pending.push(DrawCommand::FillRect(rect, color));
    }

    fn present(&mut self) -> io::Result<()> {
        self.presented = std::mem::take(&mut self.pending);
        self.frames += 1;
        Ok(())
    }
}

impl TextService for Scene {
    fn draw_text(&mut self, text: &str, anchor: Point, color: Rgb, size: u16) {
        self.pending.push(DrawCommand::Text {
            text: text.to_string(),
            anchor,
            color,
            size,
        });
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Placement of the logical screen inside a terminal area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Terminal column of the left edge.
    pub col: u16,
    /// Terminal row of the top edge.
    pub row: u16,
    /// Width in pixels (one pixel per column).
    pub px_width: u16,
    /// Height in pixels (two pixels per row).
    pub px_height: u16,
    /// Pixels per logical unit.
    pub scale: f64,
}

impl Viewport {
    /// Largest aspect-preserving fit of a `width` x `height` logical screen
    /// centered in `area`. `None` if nothing would be visible.
    pub fn fit(area: Area, width: f64, height: f64) -> Option<Self> {
        if area.width == 0 || area.height == 0 || width <= 0.0 || height <= 0.0 {
            return None;
        }
        let scale = (area.width as f64 / width).min(area.height as f64 * 2.0 / height);
        let px_width = (width * scale).floor() as u16;
        let px_height = (height * scale).floor() as u16;
        if px_width == 0 || px_height == 0 {
            return None;
        }
        let rows = px_height.div_ceil(2);
        Some(Self {
            col: area.x + (area.width - px_width) / 2,
            row: area.y + (area.height.saturating_sub(rows)) / 2,
            px_width,
            px_height,
            scale,
        })
    }

    pub fn rows(&self) -> u16 {
        self.px_height.div_ceil(2)
    }

    fn px_span(&self, start: f64, end: f64, limit: u16) -> (usize, usize) {
        let a = (start * self.scale).round().clamp(0.0, limit as f64) as usize;
        let b = (end * self.scale).round().clamp(0.0, limit as f64) as usize;
        (a, b)
    }

    /// Terminal cell holding the logical point.
    pub fn cell_of(&self, point: Point) -> (i32, i32) {
        let x = (point.x * self.scale).round() as i32;
        let y = (point.y * self.scale / 2.0).floor() as i32;
        (self.col as i32 + x, self.row as i32 + y)
    }
}

/// Pixel grid the commands are rasterized into before being packed into
/// half-block cells.
struct PixelGrid {
    width: usize,
    height: usize,
    px: Vec<Rgb>,
}

impl PixelGrid {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            px: vec![Rgb(0, 0, 0); width * height],
        }
    }

    fn fill(&mut self, x0: usize, x1: usize, y0: usize, y1: usize, color: Rgb) {
        for y in y0..y1.min(self.height) {
            let row = y * self.width;
            for x in x0..x1.min(self.width) {
                self.px[row + x] = color;
            }
        }
    }

    fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.px[y * self.width + x])
        } else {
            None
        }
    }
}

/// Widget replaying one recorded frame.
pub struct SceneView<'a> {
    commands: &'a [DrawCommand],
    width: f64,
    height: f64,
}

impl<'a> SceneView<'a> {
    /// `width` and `height` are the logical screen size the commands use.
    pub fn new(commands: &'a [DrawCommand], width: f64, height: f64) -> Self {
        Self {
            commands,
            width,
            height,
        }
    }
}

impl Widget for SceneView<'_> {
    fn render(self, area: Area, buf: &mut Buffer) {
        let Some(view) = Viewport::fit(area, self.width, self.height) else {
            return;
        };

        let mut grid = PixelGrid::new(view.px_width as usize, view.px_height as usize);
        for command in self.commands {
            match command {
                DrawCommand::Clear(color) => {
                    grid.fill(0, grid.width, 0, grid.height, *color);
                }
                DrawCommand::FillRect(rect, color) => {
                    let (x0, x1) = view.px_span(rect.left(), rect.right(), view.px_width);
                    let (y0, y1) = view.px_span(rect.top(), rect.bottom(), view.px_height);
                    grid.fill(x0, x1, y0, y1, *color);
                }
                DrawCommand::Text { .. } => {}
            }
        }

        for row in 0..view.rows() {
            for col in 0..view.px_width {
                let (x, y) = (col as usize, row as usize * 2);
                let Some(top) = grid.get(x, y) else {
                    continue;
                };
                let bottom = grid.get(x, y + 1).unwrap_or(top);
                buf.get_mut(view.col + col, view.row + row)
                    .set_symbol(HALF_BLOCK)
                    .set_fg(to_color(top))
                    .set_bg(to_color(bottom));
            }
        }

        // Labels go on top of the pixels.
        for command in self.commands {
            if let DrawCommand::Text {
                text,
                anchor,
                color,
                size,
            } = command
            {
                draw_label(buf, area, &view, text, *anchor, *color, *size);
            }
        }
    }
}

fn draw_label(
    buf: &mut Buffer,
    area: Area,
    view: &Viewport,
    text: &str,
    anchor: Point,
    color: Rgb,
    size: u16,
) {
    let (col, row) = view.cell_of(anchor);
    let width = text.chars().count() as i32;
    let start = col - width / 2;
    if row < area.top() as i32 || row >= area.bottom() as i32 {
        return;
    }

    let mut style = Style::default().fg(to_color(color));
    if size >= 24 {
        style = style.add_modifier(Modifier::BOLD);
    }
    for (i, ch) in text.chars().enumerate() {
        let x = start + i as i32;
        if x < area.left() as i32 || x >= area.right() as i32 {
            continue;
        }
        buf.get_mut(x as u16, row as u16)
            .set_char(ch)
            .set_style(style);
    }
}
