use crate::context::LaunchContext;

use super::run_result::ActionRunResult;

/// Trait que define una Action del árbol de lanzamiento.
///
/// El engine llama `execute` de forma síncrona, en el hilo del recorrido,
/// con acceso exclusivo al contexto en ese instante. Las implementaciones
/// no deben bloquear ni suspender.
pub trait Action: std::fmt::Debug {
    /// Forma estable y legible de la acción, para trazas.
    fn describe(&self) -> String;

    /// Ejecuta la acción contra el contexto compartido.
    fn execute(&self, context: &mut LaunchContext) -> ActionRunResult;
}
