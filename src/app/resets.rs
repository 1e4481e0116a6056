use super::*;

impl QuizApp {
    /// Reinicia la sesión desde cualquier estado: índice 0, puntuación 0,
    /// sin selección y en fase de respuesta. El banco no se toca.
    pub fn reiniciar_quiz(&mut self) {
        self.session = SessionState::default();
        self.message.clear();
    }

    pub fn salir_app(&self) {
        std::process::exit(0);
    }
}
