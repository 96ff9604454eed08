use crate::document::ShapeStore;
use crate::shape::Shape;
use crate::state::EditorState;
use crate::tools::ToolMode;

/// The state a command is allowed to touch
pub struct CommandContext<'a> {
    pub state: &'a mut EditorState,
    pub store: &'a mut ShapeStore,
}

impl<'a> CommandContext<'a> {
    pub fn new(state: &'a mut EditorState, store: &'a mut ShapeStore) -> Self {
        Self { state, store }
    }
}

/// A user-level action: a button press or a finished drag.
///
/// Commands always succeed; there is no history to record them in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Choose which shape new drags create
    SelectTool(ToolMode),
    /// Remove every shape from the canvas
    ClearCanvas,
    /// Show or hide the background grid
    ToggleGrid,
    /// Commit a finished shape
    AddShape(Shape),
}

impl Command {
    pub fn execute(self, ctx: &mut CommandContext<'_>) {
        match self {
            Command::SelectTool(tool) => {
                log::info!("Tool selected: {}", tool.name());
                ctx.state.set_active_tool(tool);
            }
            Command::ClearCanvas => {
                log::info!("Clearing {} shapes", ctx.store.len());
                ctx.store.clear();
            }
            Command::ToggleGrid => {
                let visible = ctx.state.toggle_grid();
                log::info!("Grid visible: {}", visible);
                ctx.store.request_redraw();
            }
            Command::AddShape(shape) => {
                log::debug!("Committing {}: {:?}", shape.kind(), shape);
                ctx.store.add_shape(shape);
            }
        }
    }

    /// Short description for logs and tooltips
    pub fn name(&self) -> &'static str {
        match self {
            Command::SelectTool(_) => "Select Tool",
            Command::ClearCanvas => "Clear",
            Command::ToggleGrid => "Toggle Grid",
            Command::AddShape(_) => "Add Shape",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_toggle_grid_requests_redraw() {
        let mut state = EditorState::new();
        let mut store = ShapeStore::new();
        let mut ctx = CommandContext::new(&mut state, &mut store);

        Command::ToggleGrid.execute(&mut ctx);
        assert!(ctx.state.grid_visible());
        assert!(ctx.store.take_redraw_request());

        Command::ToggleGrid.execute(&mut ctx);
        assert!(!ctx.state.grid_visible());
    }

    #[test]
    fn test_select_tool_does_not_touch_shapes() {
        let mut state = EditorState::new();
        let mut store = ShapeStore::new();
        store.add_shape(Shape::line(pos2(0.0, 0.0), pos2(1.0, 1.0)));
        let mut ctx = CommandContext::new(&mut state, &mut store);

        Command::SelectTool(ToolMode::Rectangle).execute(&mut ctx);
        assert_eq!(state.active_tool(), ToolMode::Rectangle);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_canvas() {
        let mut state = EditorState::new();
        let mut store = ShapeStore::new();
        store.add_shape(Shape::line(pos2(0.0, 0.0), pos2(1.0, 1.0)));

        Command::ClearCanvas.execute(&mut CommandContext::new(&mut state, &mut store));
        assert!(store.is_empty());
        assert_eq!(Command::ClearCanvas.name(), "Clear");
    }
}
