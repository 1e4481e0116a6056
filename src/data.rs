// src/data.rs

use thiserror::Error;

use crate::model::Question;

/// Banco de preguntas embebido en el binario.
const EMBEDDED_BANK: &str = include_str!("data/questions.yaml");

/// Variable de entorno para sustituir el banco embebido por un fichero externo.
pub const BANK_ENV_VAR: &str = "SE_TRAINER_BANK";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no se pudo leer el banco de preguntas: {0}")]
    ResourceUnavailable(String),
    #[error("banco de preguntas mal formado: {0}")]
    ParseError(String),
}

/// Carga el banco de preguntas: el YAML embebido, o el fichero apuntado por
/// `SE_TRAINER_BANK` si está definido.
pub fn load_bank() -> Result<Vec<Question>, LoadError> {
    match std::env::var(BANK_ENV_VAR) {
        Ok(path) if !path.is_empty() => {
            log::info!("cargando banco externo desde {path}");
            load_from_path(&path)
        }
        _ => parse_bank(EMBEDDED_BANK),
    }
}

/// Carga y valida un banco desde un fichero del sistema.
pub fn load_from_path(path: &str) -> Result<Vec<Question>, LoadError> {
    let contenido = std::fs::read_to_string(path)
        .map_err(|e| LoadError::ResourceUnavailable(format!("{path}: {e}")))?;
    parse_bank(&contenido)
}

/// Parsea y valida un banco completo. Un registro mal formado invalida el
/// banco entero: nunca se devuelve un banco parcial.
pub fn parse_bank(yaml: &str) -> Result<Vec<Question>, LoadError> {
    let preguntas: Vec<Question> =
        serde_yaml::from_str(yaml).map_err(|e| LoadError::ParseError(e.to_string()))?;
    for (i, pregunta) in preguntas.iter().enumerate() {
        validate_question(i, pregunta)?;
    }
    Ok(preguntas)
}

fn validate_question(idx: usize, q: &Question) -> Result<(), LoadError> {
    let numero = idx + 1;
    if q.prompt.trim().is_empty() {
        return Err(LoadError::ParseError(format!(
            "pregunta {numero}: enunciado vacío"
        )));
    }
    if q.options.len() < 2 {
        return Err(LoadError::ParseError(format!(
            "pregunta {numero}: hacen falta al menos 2 opciones (hay {})",
            q.options.len()
        )));
    }
    if q.correct >= q.options.len() {
        return Err(LoadError::ParseError(format!(
            "pregunta {numero}: índice correcto {} fuera de rango ({} opciones)",
            q.correct,
            q.options.len()
        )));
    }
    if q.explanation.trim().is_empty() {
        return Err(LoadError::ParseError(format!(
            "pregunta {numero}: explicación vacía"
        )));
    }
    Ok(())
}
