use crate::CadApp;
use crate::renderer::PainterCanvas;

/// The drawing canvas, filling the rest of the window
pub fn central_panel(app: &mut CadApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            app.handle_input(ctx, canvas_rect);

            let style = *app.style();
            let mut canvas = PainterCanvas::new(&painter, canvas_rect, style.stroke_width);
            canvas.fill(style.background);
            app.store()
                .render(&mut canvas, &style, app.state().grid_visible());
        });
}
