use egui::{Context, Frame, RichText};

use crate::QuizApp;
use crate::ui::helpers::{COLOR_BAD, COLOR_OK, COLOR_WARN};
use crate::ui::layout::{centered_panel, two_button_row};
use crate::view_models::ResultTier;

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    // Solo se llega aquí con la sesión completada
    let Some(info) = app.results_info() else {
        return;
    };

    centered_panel(ctx, 430.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Resultados del entrenamiento");
            ui.add_space(28.0);

            let color = match info.tier() {
                ResultTier::Alto => COLOR_OK,
                ResultTier::Medio => COLOR_WARN,
                ResultTier::Bajo => COLOR_BAD,
            };

            ui.label(
                RichText::new(format!("{:.0}%", info.percentage()))
                    .size(72.0)
                    .strong()
                    .color(color),
            );
            ui.add_space(12.0);
            ui.label(RichText::new(info.label()).size(19.0));
            ui.add_space(20.0);

            Frame::group(ui.style()).show(ui, |ui| {
                ui.label(RichText::new(info.evaluation()).color(color));
            });
            ui.add_space(28.0);

            let panel_width = ui.available_width().min(420.0);
            let (reintentar, salir) =
                two_button_row(ui, panel_width, "🔄 Reintentar", "❌ Salir");
            if reintentar {
                app.reiniciar_quiz();
            }
            if salir {
                app.salir_app();
            }
        });
    });
}
