//! Definiciones relacionadas a Actions.
//!
//! Una Action es la unidad de trabajo del árbol de lanzamiento: recibe el
//! `LaunchContext` por referencia mutable y produce un `ActionRunResult`.
//! Este módulo define:
//! - `Action`: interfaz neutral usada por el engine.
//! - `ActionRunResult` y señales (`ActionSignal`).
//! - `LaunchDescription`: lista ordenada e inmutable de acciones.

mod definition;
mod description;
mod run_result;

pub use definition::Action;
pub use description::{build_launch_description, LaunchDescription};
pub use run_result::{ActionRunResult, ActionSignal};
