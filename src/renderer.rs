use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::config::AppConfig;
use crate::shape::{Point, Shape};

/// The drawing primitives the canvas needs from the windowing toolkit.
///
/// All coordinates are canvas-local pixels.
pub trait Canvas {
    /// Size of the drawable area
    fn size(&self) -> Vec2;

    /// Draw a straight line segment
    fn line(&mut self, start: Point, end: Point, color: Color32);

    /// Draw the outline of an axis-aligned rectangle
    fn rect_outline(&mut self, origin: Point, width: f32, height: f32, color: Color32);
}

/// Colors and metrics used when painting the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub background: Color32,
    pub grid: Color32,
    pub grid_spacing: f32,
    pub shape: Color32,
    pub preview: Color32,
    pub stroke_width: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl RenderStyle {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            background: config.background_color(),
            grid: config.grid_color(),
            // A non-positive spacing would never advance the grid loop
            grid_spacing: config.grid_spacing.max(1.0),
            shape: config.shape_color(),
            preview: config.preview_color(),
            stroke_width: config.stroke_width,
        }
    }
}

/// Draws grid lines every `spacing` pixels, starting at 0 on both axes.
pub fn draw_grid(canvas: &mut impl Canvas, spacing: f32, color: Color32) {
    let size = canvas.size();

    let mut x = 0.0;
    while x < size.x {
        canvas.line(Pos2::new(x, 0.0), Pos2::new(x, size.y), color);
        x += spacing;
    }

    let mut y = 0.0;
    while y < size.y {
        canvas.line(Pos2::new(0.0, y), Pos2::new(size.x, y), color);
        y += spacing;
    }
}

pub fn draw_shape(canvas: &mut impl Canvas, shape: &Shape, color: Color32) {
    match *shape {
        Shape::Line { start, end } => canvas.line(start, end, color),
        Shape::Rectangle { origin, width, height } => {
            canvas.rect_outline(origin, width, height, color)
        }
    }
}

/// [`Canvas`] backed by an egui painter, translating canvas-local
/// coordinates into the screen rect the canvas occupies.
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
    rect: Rect,
    stroke_width: f32,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, stroke_width: f32) -> Self {
        Self {
            painter,
            rect,
            stroke_width,
        }
    }

    /// Fill the whole canvas with a solid color
    pub fn fill(&self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        self.rect.min + point.to_vec2()
    }
}

impl Canvas for PainterCanvas<'_> {
    fn size(&self) -> Vec2 {
        self.rect.size()
    }

    fn line(&mut self, start: Point, end: Point, color: Color32) {
        self.painter.line_segment(
            [self.to_screen(start), self.to_screen(end)],
            Stroke::new(self.stroke_width, color),
        );
    }

    fn rect_outline(&mut self, origin: Point, width: f32, height: f32, color: Color32) {
        let rect = Rect::from_min_size(self.to_screen(origin), Vec2::new(width, height));
        self.painter
            .rect_stroke(rect, 0.0, Stroke::new(self.stroke_width, color));
    }
}
