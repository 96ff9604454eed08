use crate::command::{Command, CommandContext};
use crate::config::AppConfig;
use crate::document::ShapeStore;
use crate::input::{InputEvent, InputHandler};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::RenderStyle;
use crate::state::EditorState;
use crate::surface::InteractionSurface;

pub struct CadApp {
    state: EditorState,
    store: ShapeStore,
    surface: InteractionSurface,
    input_handler: InputHandler,
    style: RenderStyle,
}

impl Default for CadApp {
    fn default() -> Self {
        Self::with_config(&AppConfig::default())
    }
}

impl CadApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            state: EditorState::new(),
            store: ShapeStore::new(),
            surface: InteractionSurface::new(),
            input_handler: InputHandler::new(),
            style: RenderStyle::from_config(config),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn surface(&self) -> &InteractionSurface {
        &self.surface
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn execute_command(&mut self, command: Command) {
        command.execute(&mut CommandContext::new(&mut self.state, &mut self.store));
    }

    /// Feed one canvas event through the drag state machine.
    pub fn handle_event(&mut self, event: InputEvent) {
        let tool = self.state.active_tool();
        if let Some(command) = self.surface.handle_event(event, tool, &mut self.store) {
            self.execute_command(command);
        }
    }

    /// Pull this frame's pointer input for the canvas at `canvas_rect`.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input_handler.set_canvas_rect(canvas_rect);
        for event in self.input_handler.process_input(ctx) {
            self.handle_event(event);
        }
    }
}

impl eframe::App for CadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);

        if self.store.take_redraw_request() {
            ctx.request_repaint();
        }
    }
}
