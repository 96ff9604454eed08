use crate::command::Command;
use crate::document::ShapeStore;
use crate::input::InputEvent;
use crate::shape::{Point, Shape};
use crate::tools::ToolMode;

/// Drag state of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SurfaceState {
    #[default]
    Idle,
    Dragging { start: Point, current: Point },
}

/// Turns press/drag/release on the canvas into shape store updates.
///
/// While dragging, the store's preview always holds the shape the drag would
/// commit if released at the current position.
#[derive(Debug, Default)]
pub struct InteractionSurface {
    state: SurfaceState,
}

impl InteractionSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SurfaceState::Dragging { .. })
    }

    /// Dispatch one input event. Returns the command to commit a shape on release.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        tool: ToolMode,
        store: &mut ShapeStore,
    ) -> Option<Command> {
        match event {
            InputEvent::PointerDown(pos) => {
                self.on_pointer_down(pos);
                None
            }
            InputEvent::PointerMove(pos) => {
                self.on_pointer_move(pos, tool, store);
                None
            }
            InputEvent::PointerUp(pos) => self.on_pointer_up(pos, tool, store),
        }
    }

    pub fn on_pointer_down(&mut self, pos: Point) {
        log::debug!("Drag started at {:?}", pos);
        self.state = SurfaceState::Dragging {
            start: pos,
            current: pos,
        };
    }

    /// Ignored unless a drag is in progress.
    pub fn on_pointer_move(&mut self, pos: Point, tool: ToolMode, store: &mut ShapeStore) {
        if let SurfaceState::Dragging { start, current } = &mut self.state {
            *current = pos;
            store.set_preview(Some(Shape::from_drag(tool, *start, pos)));
        }
    }

    /// Ends the drag and clears the preview. A release without a press does nothing.
    pub fn on_pointer_up(
        &mut self,
        pos: Point,
        tool: ToolMode,
        store: &mut ShapeStore,
    ) -> Option<Command> {
        let SurfaceState::Dragging { start, .. } = std::mem::take(&mut self.state) else {
            return None;
        };
        log::debug!("Drag ended at {:?}", pos);
        store.set_preview(None);
        Some(Command::AddShape(Shape::from_drag(tool, start, pos)))
    }
}
