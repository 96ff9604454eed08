use egui::Pos2;

use crate::tools::ToolMode;

/// A pixel position on the canvas, relative to its top-left corner.
pub type Point = Pos2;

/// A committed (or previewed) drawing primitive.
///
/// Rectangles are always stored normalized: `origin` is the minimum corner and
/// `width`/`height` are never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Line { start: Point, end: Point },
    Rectangle { origin: Point, width: f32, height: f32 },
}

impl Shape {
    pub fn line(start: Point, end: Point) -> Self {
        Self::Line { start, end }
    }

    /// Builds the normalized rectangle spanned by two opposite corners.
    pub fn rectangle_from_corners(a: Point, b: Point) -> Self {
        Self::Rectangle {
            origin: Pos2::new(a.x.min(b.x), a.y.min(b.y)),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// The shape a drag from `start` to `end` produces with the given tool.
    ///
    /// Used for both the live preview and the final commit, so the two always agree.
    pub fn from_drag(tool: ToolMode, start: Point, end: Point) -> Self {
        match tool {
            ToolMode::Line => Self::line(start, end),
            ToolMode::Rectangle => Self::rectangle_from_corners(start, end),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Rectangle { .. } => "rectangle",
        }
    }
}
