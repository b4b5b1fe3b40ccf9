//! Screen-space primitives shared by the simulation and the renderer.
//!
//! Coordinates are logical screen pixels: origin at the top-left corner,
//! x grows to the right, y grows downward.

use serde::{Deserialize, Serialize};

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

/// A point in logical screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle.
///
/// Edges follow surface semantics: a rectangle covers `[x, x + width)` and
/// `[y, y + height)`, so rectangles that only touch do not overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// AABB overlap test. Both the x-ranges and the y-ranges must intersect.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_x_overlap_alone_is_not_enough() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 50.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let empty = Rect::new(2.0, 2.0, 0.0, 5.0);
        assert!(!a.overlaps(&empty));
    }

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(175.0, 275.0, 50.0, 50.0);
        assert_eq!(r.right(), 225.0);
        assert_eq!(r.bottom(), 325.0);
        assert_eq!(r.center_x(), 200.0);
    }
}
