use crate::ShapeCanvasApp;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut ShapeCanvasApp, ctx: &egui::Context, frame: &mut eframe::Frame) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let canvas_rect = response.rect;

        // Shapes are anchored in canvas-local coordinates
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let command = app.place_command((pos - canvas_rect.min).to_pos2());
                app.dispatch(command, frame);
            }
        }

        let mut surface = PainterSurface::new(&painter, canvas_rect);
        app.session().redraw(&mut surface);
    });
}
