use std::sync::mpsc::{Receiver, channel};

use crate::data::{self, LoadError};
use crate::model::{LoadState, Phase, Question, SessionState};

// Submódulos
pub mod actions;
pub mod queries;
pub mod resets;

// Re-export de view models
pub use crate::view_models::ResultsInfo;

/// Estado completo de la aplicación: banco cargado, sesión en curso y estado
/// de la carga inicial. Las vistas solo leen; mutan a través de los métodos
/// de `actions` y `resets`.
pub struct QuizApp {
    pub questions: Vec<Question>,
    pub session: SessionState,
    pub load: LoadState,
    pub message: String,
    load_rx: Option<Receiver<Result<Vec<Question>, LoadError>>>,
}

impl QuizApp {
    /// Arranca con el banco cargándose en un hilo aparte; el resultado llega
    /// por canal y lo recoge `poll_load_result` desde el bucle de la interfaz.
    pub fn new() -> Self {
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(data::load_bank());
        });
        Self {
            questions: Vec::new(),
            session: SessionState::default(),
            load: LoadState::Loading,
            message: String::new(),
            load_rx: Some(rx),
        }
    }

    /// Construye la app directamente sobre un banco ya cargado.
    pub fn with_bank(questions: Vec<Question>) -> Self {
        Self {
            questions,
            session: SessionState::default(),
            load: LoadState::Ready,
            message: String::new(),
            load_rx: None,
        }
    }

    /// Recoge el resultado de la carga si ya ha terminado. La transición
    /// Loading → Ready/Failed ocurre una sola vez.
    pub fn poll_load_result(&mut self) {
        let resultado = self.load_rx.as_ref().and_then(|rx| rx.try_recv().ok());
        let Some(resultado) = resultado else {
            return;
        };
        self.load_rx = None;
        match resultado {
            Ok(preguntas) => {
                log::info!("banco cargado: {} preguntas", preguntas.len());
                self.questions = preguntas;
                self.load = LoadState::Ready;
            }
            Err(err) => {
                log::error!("fallo al cargar el banco: {err}");
                self.load = LoadState::Failed(err);
            }
        }
    }
}
