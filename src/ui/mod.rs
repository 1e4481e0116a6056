pub mod helpers;
pub mod layout;
pub mod views;

use eframe::{App, Frame};
use egui::Context;

use crate::app::QuizApp;
use crate::model::{LoadState, Phase};
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_load_result();

        // BOTÓN SUPERIOR DE REINICIAR (solo con la sesión interactiva)
        if matches!(self.load, LoadState::Ready) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado de carga y fase: cargando muestra el spinner,
        // un fallo la pantalla de error, sesión completada los resultados
        // y el resto el propio quiz
        if matches!(self.load, LoadState::Loading) {
            // el resultado llega por canal; sin repaint no habría otro frame
            ctx.request_repaint();
            views::loading::ui_loading(self, ctx);
        } else if matches!(self.load, LoadState::Failed(_)) {
            views::load_error::ui_load_error(self, ctx);
        } else if self.session.phase == Phase::Completed {
            views::results::ui_results(self, ctx);
        } else {
            views::quiz::ui_quiz(self, ctx);
        }
    }
}
