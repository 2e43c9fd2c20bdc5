use crate::errors::CoreLaunchError;

/// Señal ligera emitida por una acción durante su ejecución. El engine la
/// vuelca al trace de eventos sin alterar el estado principal.
#[derive(Debug, Clone)]
pub struct ActionSignal {
    pub signal: String,
    pub data: serde_json::Value,
}

/// Resultado abstracto de ejecutar una acción.
pub enum ActionRunResult {
    Success,
    SuccessWithSignals { signals: Vec<ActionSignal> },
    Failure { error: CoreLaunchError },
}
