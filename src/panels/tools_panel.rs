use crate::CadApp;
use crate::command::Command;
use crate::tools::ToolMode;

/// Row of buttons above the canvas
pub fn tools_panel(app: &mut CadApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let active_tool = app.state().active_tool();

            for tool in ToolMode::ALL {
                if ui
                    .selectable_label(active_tool == tool, tool.name())
                    .clicked()
                {
                    app.execute_command(Command::SelectTool(tool));
                }
            }

            ui.separator();

            if ui.button(Command::ClearCanvas.name()).clicked() {
                app.execute_command(Command::ClearCanvas);
            }

            let grid_visible = app.state().grid_visible();
            if ui
                .selectable_label(grid_visible, Command::ToggleGrid.name())
                .clicked()
            {
                app.execute_command(Command::ToggleGrid);
            }
        });
    });
}
