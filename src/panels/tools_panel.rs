use crate::ShapeCanvasApp;
use crate::color::PALETTE;
use crate::command::Command;
use crate::settings::EXTENT_RANGE;
use crate::shape::ShapeKind;

pub fn tools_panel(app: &mut ShapeCanvasApp, ctx: &egui::Context, frame: &mut eframe::Frame) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Shape");

            let current = app.session().selected_kind();
            let mut kind = current;
            egui::ComboBox::from_id_salt("shape_kind")
                .selected_text(kind.label())
                .show_ui(ui, |ui| {
                    for candidate in ShapeKind::ALL {
                        ui.selectable_value(&mut kind, candidate, candidate.label());
                    }
                });
            if kind != current {
                log::info!("Shape kind selected from UI: {kind}");
                app.dispatch(Command::SelectKind(kind), frame);
            }

            ui.separator();

            // Only the inputs the selected kind uses are shown
            let settings = app.settings_mut();
            if kind.uses_radius() {
                extent_input(ui, "Radius", &mut settings.radius);
            }
            if kind.uses_width() {
                extent_input(ui, "Width", &mut settings.width);
            }
            if kind.uses_height() {
                extent_input(ui, "Height", &mut settings.height);
            }

            ui.horizontal(|ui| {
                ui.label("Color:");
                egui::ComboBox::from_id_salt("shape_color")
                    .selected_text(settings.color.as_str())
                    .show_ui(ui, |ui| {
                        for (name, _) in PALETTE {
                            ui.selectable_value(&mut settings.color, (*name).to_owned(), *name);
                        }
                    });
            });

            ui.separator();

            let has_shapes = !app.session().store().is_empty();
            ui.horizontal(|ui| {
                if ui.add_enabled(has_shapes, egui::Button::new("Undo")).clicked() {
                    app.dispatch(Command::Undo, frame);
                }
                if ui.add_enabled(has_shapes, egui::Button::new("Clear")).clicked() {
                    app.dispatch(Command::Clear, frame);
                }
            });

            ui.separator();
            ui.label(format!("Shapes drawn: {}", app.session().store().len()));
        });
}

fn extent_input(ui: &mut egui::Ui, label: &str, value: &mut f32) {
    ui.horizontal(|ui| {
        ui.label(format!("{label}:"));
        ui.add(egui::DragValue::new(value).range(EXTENT_RANGE).speed(1.0));
    });
}
