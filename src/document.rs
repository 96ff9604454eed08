use crate::renderer::{Canvas, RenderStyle, draw_grid, draw_shape};
use crate::shape::Shape;

/// Everything that has been drawn, plus the shape currently being dragged out.
///
/// Committed shapes are append-only and painted in insertion order. The only
/// way to remove them is [`ShapeStore::clear`], which removes all of them.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    preview: Option<Shape>,
    redraw_requested: bool,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
        self.redraw_requested = true;
    }

    /// Replace the in-progress shape (or drop it with `None`).
    pub fn set_preview(&mut self, preview: Option<Shape>) {
        self.preview = preview;
        self.redraw_requested = true;
    }

    /// Remove all committed shapes and the preview.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.preview = None;
        self.redraw_requested = true;
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn preview(&self) -> Option<&Shape> {
        self.preview.as_ref()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Mark the canvas as needing a repaint without changing any shapes.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Returns whether a redraw was requested since the last call, and resets the flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Paint back to front: grid, committed shapes, then the preview on top.
    pub fn render(&self, canvas: &mut impl Canvas, style: &RenderStyle, grid_visible: bool) {
        if grid_visible {
            draw_grid(canvas, style.grid_spacing, style.grid);
        }

        for shape in &self.shapes {
            draw_shape(canvas, shape, style.shape);
        }

        if let Some(preview) = &self.preview {
            draw_shape(canvas, preview, style.preview);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::tests::{DrawCall, RecordingCanvas};
    use egui::pos2;

    fn store_with_two_shapes() -> ShapeStore {
        let mut store = ShapeStore::new();
        store.add_shape(Shape::line(pos2(0.0, 0.0), pos2(10.0, 10.0)));
        store.add_shape(Shape::rectangle_from_corners(pos2(5.0, 5.0), pos2(15.0, 25.0)));
        store
    }

    #[test]
    fn test_add_shape_appends_in_order() {
        let store = store_with_two_shapes();
        assert_eq!(store.len(), 2);
        assert_eq!(store.shapes()[0].kind(), "line");
        assert_eq!(store.shapes()[1].kind(), "rectangle");
        assert!(store.preview().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = store_with_two_shapes();
        store.set_preview(Some(Shape::line(pos2(1.0, 1.0), pos2(2.0, 2.0))));

        store.clear();
        assert!(store.is_empty());
        assert!(store.preview().is_none());

        store.clear();
        assert!(store.is_empty());
        assert!(store.preview().is_none());
    }

    #[test]
    fn test_mutations_request_redraw() {
        let mut store = ShapeStore::new();
        assert!(!store.take_redraw_request());

        store.set_preview(None);
        assert!(store.take_redraw_request());
        assert!(!store.take_redraw_request());

        store.clear();
        assert!(store.take_redraw_request());

        store.request_redraw();
        assert!(store.take_redraw_request());
    }

    #[test]
    fn test_render_order_grid_then_shapes_then_preview() {
        let mut store = store_with_two_shapes();
        let preview = Shape::line(pos2(3.0, 3.0), pos2(4.0, 4.0));
        store.set_preview(Some(preview));

        let style = RenderStyle::default();
        let mut canvas = RecordingCanvas::new(40.0, 40.0);
        store.render(&mut canvas, &style, true);

        // 2 vertical + 2 horizontal grid lines
        let (grid, rest) = canvas.calls.split_at(4);
        assert!(
            grid.iter()
                .all(|call| matches!(call, DrawCall::Line(_, _, c) if *c == style.grid))
        );
        assert_eq!(
            rest,
            &[
                DrawCall::Line(pos2(0.0, 0.0), pos2(10.0, 10.0), style.shape),
                DrawCall::Rect(pos2(5.0, 5.0), 10.0, 20.0, style.shape),
                DrawCall::Line(pos2(3.0, 3.0), pos2(4.0, 4.0), style.preview),
            ]
        );
    }

    #[test]
    fn test_render_without_grid() {
        let store = store_with_two_shapes();
        let mut canvas = RecordingCanvas::new(40.0, 40.0);
        store.render(&mut canvas, &RenderStyle::default(), false);
        assert_eq!(canvas.calls.len(), 2);
    }
}
