//! Errores específicos del core (simples por ahora).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errores del protocolo de sustitución.
///
/// `InvalidInput` ocurre en tiempo de construcción (normalización);
/// `Resolution` es opaco: lo producen las primitivas al resolver contra el
/// contexto y el core lo propaga sin interpretarlo.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum SubstitutionError {
    #[error("invalid substitution input: {0}")] InvalidInput(String),
    #[error("substitution failed: {0}")] Resolution(String),
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreLaunchError {
    #[error("launch already completed")] LaunchCompleted,
    #[error("invalid action index")] InvalidActionIndex,
    #[error(transparent)] Substitution(#[from] SubstitutionError),
    #[error("internal: {0}")] Internal(String),
}
