use egui::{CentralPanel, Context};

use crate::QuizApp;

pub fn ui_loading(_app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - 60.0) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.add_space(8.0);
            ui.label("Cargando preguntas…");
        });
    });
}
