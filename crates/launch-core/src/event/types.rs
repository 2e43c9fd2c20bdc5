//! Tipos de evento del lanzamiento y estructura `LaunchEvent`.
//!
//! Rol en el flujo:
//! - Cada ejecución del `LaunchEngine` emite eventos a un `EventStore`
//!   append-only.
//! - Estos eventos permiten reconstruir el estado del run (replay) sin
//!   depender de estructuras mutables.
//! - El enum `LaunchEventKind` define el contrato observable del motor.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreLaunchError;

/// Tipos de eventos soportados.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LaunchEventKind {
    /// Emisión inicial de un run: fija la cantidad de acciones.
    /// Invariante: debe ser el primer evento de un `run_id`.
    LaunchInitialized { action_count: usize },
    /// Una acción comenzó su ejecución. No implica éxito.
    ActionStarted { action_index: usize, action: String },
    /// Una acción terminó correctamente.
    ActionFinished { action_index: usize, action: String },
    /// Señal generada por una acción para comunicar un hito ligero (no
    /// altera el estado principal).
    ActionSignal {
        action_index: usize,
        action: String,
        signal: String,
        data: serde_json::Value,
    },
    /// Una acción terminó con error terminal. El run no continúa
    /// (stop-on-failure).
    ActionFailed {
        action_index: usize,
        action: String,
        error: CoreLaunchError,
    },
    /// Evento de cierre con la lista final acumulada de archivos de
    /// parámetros visible en el alcance raíz.
    LaunchCompleted { global_params: Vec<String> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchEvent {
    pub seq: u64, // asignado por EventStore in-memory (orden append)
    pub run_id: Uuid,
    pub kind: LaunchEventKind,
    pub ts: DateTime<Utc>, // metadato de traza
}
