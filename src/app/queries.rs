use super::*;

impl QuizApp {
    /// Pregunta en curso, o None si la sesión terminó, el índice se sale del
    /// banco o el banco está vacío.
    pub fn current_question(&self) -> Option<&Question> {
        if self.session.phase == Phase::Completed {
            return None;
        }
        self.questions.get(self.session.current_index)
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Fracción de avance para la barra de progreso: (índice+1)/total, o 0.0
    /// con el banco vacío.
    pub fn progress_fraction(&self) -> f32 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.session.current_index + 1) as f32 / self.questions.len() as f32
    }

    pub fn is_answering(&self) -> bool {
        self.session.phase == Phase::Answering
    }

    pub fn is_revealed(&self) -> bool {
        self.session.phase == Phase::Revealed
    }

    pub fn is_completed(&self) -> bool {
        self.session.phase == Phase::Completed
    }

    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.session.current_index + 1 == self.questions.len()
    }

    /// Puntuación acumulada y total de preguntas; solo con la sesión
    /// completada.
    pub fn final_score(&self) -> Option<(u32, usize)> {
        match self.session.phase {
            Phase::Completed => Some((self.session.score, self.questions.len())),
            _ => None,
        }
    }

    /// Datos para la pantalla de resultados.
    pub fn results_info(&self) -> Option<ResultsInfo> {
        self.final_score()
            .map(|(score, total)| ResultsInfo { score, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banco(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                prompt: format!("¿Pregunta {}?", i + 1),
                options: vec!["a".into(), "b".into()],
                correct: 0,
                explanation: "porque sí".into(),
            })
            .collect()
    }

    fn responder_y_avanzar(app: &mut QuizApp) {
        app.seleccionar_respuesta(0);
        app.comprobar_respuesta();
        app.avanzar_pregunta();
    }

    #[test]
    fn la_fraccion_avanza_y_solo_llega_a_uno_en_la_ultima() {
        let mut app = QuizApp::with_bank(banco(4));
        assert_eq!(app.progress_fraction(), 0.25);
        responder_y_avanzar(&mut app);
        assert_eq!(app.progress_fraction(), 0.5);
        responder_y_avanzar(&mut app);
        responder_y_avanzar(&mut app);
        assert!(app.is_last_question());
        assert_eq!(app.progress_fraction(), 1.0);
    }

    #[test]
    fn banco_vacio_da_fraccion_cero() {
        let app = QuizApp::with_bank(Vec::new());
        assert_eq!(app.progress_fraction(), 0.0);
        assert!(app.current_question().is_none());
        assert_eq!(app.total_questions(), 0);
    }

    #[test]
    fn tras_completar_no_hay_pregunta_en_curso() {
        let mut app = QuizApp::with_bank(banco(1));
        assert!(app.current_question().is_some());
        app.seleccionar_respuesta(0);
        app.comprobar_respuesta();
        app.avanzar_pregunta();
        assert!(app.is_completed());
        assert!(app.current_question().is_none());
    }

    #[test]
    fn la_puntuacion_final_solo_existe_al_completar() {
        let mut app = QuizApp::with_bank(banco(2));
        assert_eq!(app.final_score(), None);
        responder_y_avanzar(&mut app);
        assert_eq!(app.final_score(), None);
        responder_y_avanzar(&mut app);
        assert_eq!(app.final_score(), Some((2, 2)));
        assert!(app.results_info().is_some());
    }
}
