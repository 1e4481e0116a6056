use egui::{Button, Context, RichText};

use crate::QuizApp;
use crate::model::LoadState;
use crate::ui::helpers::COLOR_BAD;
use crate::ui::layout::centered_panel;

/// Fallo terminal de la carga: sin banco no hay quiz. El reintento es
/// reiniciar la aplicación.
pub fn ui_load_error(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 180.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("No se pudo iniciar el quiz");
            ui.add_space(12.0);
            if let LoadState::Failed(err) = &app.load {
                ui.label(RichText::new(err.to_string()).color(COLOR_BAD));
            }
            ui.add_space(18.0);
            if ui
                .add_sized([160.0, 36.0], Button::new("❌ Salir"))
                .clicked()
            {
                app.salir_app();
            }
        });
    });
}
