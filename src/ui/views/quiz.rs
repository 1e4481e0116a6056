use egui::{Button, CentralPanel, Context, Frame, ProgressBar, RichText, ScrollArea, Vec2};

use crate::QuizApp;
use crate::ui::helpers::{COLOR_BAD, COLOR_OK, option_row};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ScrollArea::vertical().show(ui, |ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(40, 20))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("🛡 Entrenador de defensa contra ingeniería social");
                        ui.add_space(10.0);

                        let total = app.total_questions();
                        if total == 0 {
                            ui.label("El banco de preguntas está vacío.");
                            return;
                        }

                        // Clonamos la pregunta en curso para poder mutar app
                        // dentro de los manejadores de clic
                        let Some(pregunta) = app.current_question().cloned() else {
                            return;
                        };

                        // Progreso
                        ui.label(format!(
                            "Pregunta {} de {}",
                            app.session.current_index + 1,
                            total
                        ));
                        ui.add(
                            ProgressBar::new(app.progress_fraction())
                                .desired_width(panel_width),
                        );
                        ui.add_space(16.0);

                        // Enunciado
                        Frame::group(ui.style()).show(ui, |ui| {
                            ui.set_width(panel_width);
                            ui.label(RichText::new(&pregunta.prompt).size(17.0));
                        });
                        ui.add_space(12.0);

                        // Opciones; al revelar se tiñe la correcta y, si la
                        // elegida no lo era, también la elegida
                        let revelada = app.is_revealed();
                        for (i, opcion) in pregunta.options.iter().enumerate() {
                            let elegida = app.session.selected_answer == Some(i);
                            let tinte = if revelada && i == pregunta.correct {
                                Some(COLOR_OK)
                            } else if revelada && elegida {
                                Some(COLOR_BAD)
                            } else {
                                None
                            };
                            if option_row(ui, opcion, panel_width, 40.0, elegida, tinte) {
                                app.seleccionar_respuesta(i);
                            }
                            ui.add_space(4.0);
                        }

                        // Veredicto y explicación
                        if revelada {
                            ui.add_space(10.0);
                            let acierto =
                                app.session.selected_answer == Some(pregunta.correct);
                            let (veredicto, color) = if acierto {
                                ("✓ ¡Correcto!", COLOR_OK)
                            } else {
                                ("✗ Incorrecto", COLOR_BAD)
                            };
                            ui.label(RichText::new(veredicto).heading().strong().color(color));
                            ui.add_space(10.0);
                            Frame::group(ui.style()).show(ui, |ui| {
                                ui.set_width(panel_width);
                                ui.label(RichText::new("Explicación:").strong());
                                ui.add_space(4.0);
                                ui.label(&pregunta.explanation);
                            });
                        }

                        ui.add_space(16.0);

                        // Botón principal: comprobar → siguiente → resultados
                        let etiqueta = if app.is_answering() {
                            "Comprobar"
                        } else if app.is_last_question() {
                            "Ver resultados"
                        } else {
                            "Siguiente pregunta"
                        };
                        let habilitado =
                            app.session.selected_answer.is_some() || revelada;
                        let boton = ui.add_enabled(
                            habilitado,
                            Button::new(RichText::new(etiqueta).size(16.0).strong())
                                .min_size(Vec2::new(panel_width, 44.0)),
                        );
                        if boton.clicked() {
                            if app.is_answering() {
                                app.comprobar_respuesta();
                            } else {
                                app.avanzar_pregunta();
                            }
                        }

                        if !app.message.is_empty() {
                            ui.add_space(8.0);
                            ui.label(&app.message);
                        }
                    });
                });
        });
    });
}
