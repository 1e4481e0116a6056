use serde::{Deserialize, Serialize};

use crate::data::LoadError;

/// Una pregunta del banco. Inmutable una vez cargada; las invariantes
/// (mínimo 2 opciones, índice correcto en rango, textos no vacíos) se
/// comprueban al cargar, no aquí.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String, // Enunciado
    pub options: Vec<String>, // Opciones, en orden de presentación
    pub correct: usize,       // Índice de la opción correcta
    pub explanation: String,  // Explicación mostrada tras comprobar
}

/// Fase de la sesión respecto a la pregunta en curso.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Answering, // esperando selección y comprobación
    Revealed,  // corrección y explicación a la vista
    Completed, // no quedan preguntas
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Answering
    }
}

/// Estado mutable de la sesión. Solo lo modifica `QuizApp` a través de sus
/// operaciones; `reiniciar_quiz` lo sustituye entero por el valor por defecto.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub current_index: usize,
    pub score: u32,
    pub selected_answer: Option<usize>,
    pub phase: Phase,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_index: 0,
            score: 0,
            selected_answer: None,
            phase: Phase::Answering,
        }
    }
}

/// Estado de la carga inicial del banco. Mientras no sea `Ready` la interfaz
/// no expone ninguna operación de sesión.
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(LoadError),
}
