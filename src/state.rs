use crate::tools::ToolMode;

/// UI flags shared by the buttons and the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorState {
    active_tool: ToolMode,
    grid_visible: bool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tool(&self) -> ToolMode {
        self.active_tool
    }

    pub fn set_active_tool(&mut self, tool: ToolMode) {
        self.active_tool = tool;
    }

    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    /// Flips grid visibility and returns the new value.
    pub fn toggle_grid(&mut self) -> bool {
        self.grid_visible = !self.grid_visible;
        self.grid_visible
    }
}
