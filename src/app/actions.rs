use super::*;

impl QuizApp {
    /// Marca la opción elegida para la pregunta en curso. Solo en fase de
    /// respuesta; un índice fuera de rango se rechaza y queda registrado.
    pub fn seleccionar_respuesta(&mut self, idx: usize) {
        if self.session.phase != Phase::Answering {
            log::warn!("seleccionar_respuesta fuera de fase: {:?}", self.session.phase);
            return;
        }
        let num_opciones = match self.current_question() {
            Some(q) => q.options.len(),
            None => return,
        };
        if idx >= num_opciones {
            log::warn!("selección fuera de rango: {idx} (opciones: {num_opciones})");
            self.message = "⚠ Opción no válida.".into();
            return;
        }
        self.session.selected_answer = Some(idx);
        self.message.clear();
    }

    /// Compara la opción seleccionada con la correcta. Suma un punto como
    /// máximo por pregunta y pasa siempre a la fase de explicación; repetir
    /// la llamada con la explicación ya a la vista no hace nada.
    pub fn comprobar_respuesta(&mut self) {
        if self.session.phase != Phase::Answering {
            log::warn!("comprobar_respuesta fuera de fase: {:?}", self.session.phase);
            return;
        }
        let Some(seleccion) = self.session.selected_answer else {
            self.message = "⚠ Elige una opción antes de comprobar.".into();
            return;
        };
        let correcta_idx = match self.current_question() {
            Some(q) => q.correct,
            None => return,
        };
        let acierto = seleccion == correcta_idx;
        if acierto {
            self.session.score += 1;
        }
        self.session.phase = Phase::Revealed;
        self.message = if acierto {
            "✅ ¡Correcto!".into()
        } else {
            "❌ Incorrecto.".into()
        };
    }

    /// Avanza a la siguiente pregunta, o da la sesión por terminada si la
    /// actual era la última. Solo con la explicación a la vista.
    pub fn avanzar_pregunta(&mut self) {
        if self.session.phase != Phase::Revealed {
            log::warn!("avanzar_pregunta fuera de fase: {:?}", self.session.phase);
            return;
        }
        if self.session.current_index + 1 >= self.questions.len() {
            self.session.phase = Phase::Completed;
        } else {
            self.session.current_index += 1;
            self.session.selected_answer = None;
            self.session.phase = Phase::Answering;
        }
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banco_de_prueba() -> Vec<Question> {
        vec![
            Question {
                prompt: "¿Primera?".into(),
                options: vec!["A".into(), "B".into()],
                correct: 0,
                explanation: "La A.".into(),
            },
            Question {
                prompt: "¿Segunda?".into(),
                options: vec!["X".into(), "Y".into(), "Z".into()],
                correct: 2,
                explanation: "La Z.".into(),
            },
        ]
    }

    #[test]
    fn recorrido_completo_puntua_solo_los_aciertos() {
        let mut app = QuizApp::with_bank(banco_de_prueba());

        app.seleccionar_respuesta(0); // correcta
        app.comprobar_respuesta();
        assert_eq!(app.session.score, 1);
        assert_eq!(app.session.phase, Phase::Revealed);

        app.avanzar_pregunta();
        assert_eq!(app.session.current_index, 1);
        assert_eq!(app.session.phase, Phase::Answering);
        assert_eq!(app.session.selected_answer, None);

        app.seleccionar_respuesta(1); // incorrecta
        app.comprobar_respuesta();
        assert_eq!(app.session.score, 1);
        assert_eq!(app.session.phase, Phase::Revealed);

        app.avanzar_pregunta();
        assert_eq!(app.session.phase, Phase::Completed);
        assert_eq!(app.final_score(), Some((1, 2)));
    }

    #[test]
    fn comprobar_dos_veces_no_duplica_la_puntuacion() {
        let mut app = QuizApp::with_bank(banco_de_prueba());
        app.seleccionar_respuesta(0);
        app.comprobar_respuesta();
        app.comprobar_respuesta();
        assert_eq!(app.session.score, 1);
        assert_eq!(app.session.phase, Phase::Revealed);
    }

    #[test]
    fn comprobar_sin_seleccion_no_cambia_de_fase() {
        let mut app = QuizApp::with_bank(banco_de_prueba());
        app.comprobar_respuesta();
        assert_eq!(app.session.phase, Phase::Answering);
        assert_eq!(app.session.score, 0);
    }

    #[test]
    fn seleccionar_fuera_de_rango_se_rechaza() {
        let mut app = QuizApp::with_bank(banco_de_prueba());
        app.seleccionar_respuesta(7);
        assert_eq!(app.session.selected_answer, None);
    }

    #[test]
    fn seleccionar_con_la_explicacion_a_la_vista_no_cambia_nada() {
        let mut app = QuizApp::with_bank(banco_de_prueba());
        app.seleccionar_respuesta(1);
        app.comprobar_respuesta();
        app.seleccionar_respuesta(0);
        assert_eq!(app.session.selected_answer, Some(1));
    }

    #[test]
    fn avanzar_sin_haber_comprobado_no_hace_nada() {
        let mut app = QuizApp::with_bank(banco_de_prueba());
        app.seleccionar_respuesta(0);
        app.avanzar_pregunta();
        assert_eq!(app.session.current_index, 0);
        assert_eq!(app.session.phase, Phase::Answering);
    }

    #[test]
    fn una_seleccion_incorrecta_cualquiera_no_puntua() {
        let mut app = QuizApp::with_bank(banco_de_prueba());
        app.seleccionar_respuesta(1);
        app.comprobar_respuesta();
        assert_eq!(app.session.score, 0);
        assert_eq!(app.session.phase, Phase::Revealed);
    }

    #[test]
    fn con_el_banco_vacio_ninguna_operacion_revienta() {
        let mut app = QuizApp::with_bank(Vec::new());
        app.seleccionar_respuesta(0);
        app.comprobar_respuesta();
        app.avanzar_pregunta();
        assert_eq!(app.session.phase, Phase::Answering);
        assert_eq!(app.session.score, 0);
        assert!(app.current_question().is_none());
    }
}
