use egui::{Context, PointerButton, Pos2, Rect};

use crate::shape::Point;

/// Pointer events on the drawing canvas, in canvas-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the canvas
    PointerDown(Point),
    /// Pointer moved while the button is held
    PointerMove(Point),
    /// Primary button released
    PointerUp(Point),
}

/// The parts of egui's pointer state the canvas cares about, for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSnapshot {
    /// Where the pointer is, if it is over the window
    pub hover_pos: Option<Pos2>,
    /// Last known pointer position, even after it left the window
    pub latest_pos: Option<Pos2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
}

impl PointerSnapshot {
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|i| Self {
            hover_pos: i.pointer.hover_pos(),
            latest_pos: i.pointer.latest_pos(),
            pressed: i.pointer.button_pressed(PointerButton::Primary),
            down: i.pointer.button_down(PointerButton::Primary),
            released: i.pointer.button_released(PointerButton::Primary),
        })
    }
}

/// Converts raw egui pointer input into [`InputEvent`]s for the canvas.
///
/// Only presses that start inside the canvas begin a gesture. Once a gesture
/// has started, moves and the release are reported even outside the canvas.
#[derive(Debug, Default)]
pub struct InputHandler {
    canvas_rect: Option<Rect>,
    pressed_in_canvas: bool,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the screen rect of the canvas
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        self.process_snapshot(PointerSnapshot::from_egui(ctx))
    }

    pub fn process_snapshot(&mut self, pointer: PointerSnapshot) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let Some(rect) = self.canvas_rect else {
            return events;
        };
        let to_local = |pos: Pos2| Pos2::ZERO + (pos - rect.min);

        if pointer.pressed {
            if let Some(pos) = pointer.hover_pos.filter(|pos| rect.contains(*pos)) {
                self.pressed_in_canvas = true;
                self.last_pointer_pos = Some(pos);
                events.push(InputEvent::PointerDown(to_local(pos)));
            }
        }

        if self.pressed_in_canvas && pointer.down {
            if let Some(pos) = pointer.latest_pos {
                if Some(pos) != self.last_pointer_pos {
                    self.last_pointer_pos = Some(pos);
                    events.push(InputEvent::PointerMove(to_local(pos)));
                }
            }
        }

        if self.pressed_in_canvas && pointer.released {
            if let Some(pos) = pointer.latest_pos.or(self.last_pointer_pos) {
                events.push(InputEvent::PointerUp(to_local(pos)));
            }
            self.pressed_in_canvas = false;
            self.last_pointer_pos = None;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn handler() -> InputHandler {
        let mut handler = InputHandler::new();
        handler.set_canvas_rect(Rect::from_min_size(pos2(0.0, 40.0), vec2(200.0, 100.0)));
        handler
    }

    fn press(pos: Pos2) -> PointerSnapshot {
        PointerSnapshot {
            hover_pos: Some(pos),
            latest_pos: Some(pos),
            pressed: true,
            down: true,
            released: false,
        }
    }

    fn hold(pos: Pos2) -> PointerSnapshot {
        PointerSnapshot {
            pressed: false,
            ..press(pos)
        }
    }

    fn release(pos: Pos2) -> PointerSnapshot {
        PointerSnapshot {
            hover_pos: Some(pos),
            latest_pos: Some(pos),
            pressed: false,
            down: false,
            released: true,
        }
    }

    #[test]
    fn test_drag_is_reported_in_canvas_coordinates() {
        let mut handler = handler();
        assert_eq!(
            handler.process_snapshot(press(pos2(10.0, 50.0))),
            vec![InputEvent::PointerDown(pos2(10.0, 10.0))]
        );
        assert_eq!(
            handler.process_snapshot(hold(pos2(60.0, 90.0))),
            vec![InputEvent::PointerMove(pos2(60.0, 50.0))]
        );
        // no movement, no event
        assert!(handler.process_snapshot(hold(pos2(60.0, 90.0))).is_empty());
        assert_eq!(
            handler.process_snapshot(release(pos2(60.0, 90.0))),
            vec![InputEvent::PointerUp(pos2(60.0, 50.0))]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut handler = handler();
        // toolbar area above the canvas
        assert!(handler.process_snapshot(press(pos2(10.0, 10.0))).is_empty());
        assert!(handler.process_snapshot(hold(pos2(20.0, 60.0))).is_empty());
        assert!(handler.process_snapshot(release(pos2(20.0, 60.0))).is_empty());
    }

    #[test]
    fn test_drag_may_leave_the_canvas() {
        let mut handler = handler();
        handler.process_snapshot(press(pos2(10.0, 50.0)));
        let events = handler.process_snapshot(release(pos2(250.0, 20.0)));
        assert_eq!(events, vec![InputEvent::PointerUp(pos2(250.0, -20.0))]);
    }

    #[test]
    fn test_click_within_one_frame() {
        let mut handler = handler();
        let click = PointerSnapshot {
            released: true,
            down: false,
            ..press(pos2(5.0, 45.0))
        };
        assert_eq!(
            handler.process_snapshot(click),
            vec![
                InputEvent::PointerDown(pos2(5.0, 5.0)),
                InputEvent::PointerUp(pos2(5.0, 5.0)),
            ]
        );
    }

    #[test]
    fn test_no_events_before_layout() {
        let mut handler = InputHandler::new();
        assert!(handler.process_snapshot(press(pos2(5.0, 5.0))).is_empty());
    }
}
