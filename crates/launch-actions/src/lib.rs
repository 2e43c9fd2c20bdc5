//! launch-actions: Acciones concretas sobre el núcleo (F5)
//!
//! Este crate provee:
//! - `ParameterFileDeclaration`: declara archivos de parámetros diferidos y
//!   los acumula en `global_params` al ejecutarse.
//! - `SetConfiguration`: fija una configuración de alcance ya resuelta.
//! - `GroupAction`: ejecuta hijos dentro de un alcance propio opcional.
//! - `ProcessLaunch`: el lado consumidor; compone la lista final de
//!   parámetros para un proceso a partir de lo acumulado.
//! - `registry`: despacho de entidades declarativas hacia los adaptadores
//!   `parse` de cada acción.

mod group;
mod param_files;
mod process;
pub mod registry;
mod set_configuration;

pub use group::GroupAction;
pub use param_files::ParameterFileDeclaration;
pub use process::{ProcessLaunch, PROCESS_PARAMS_SIGNAL};
pub use set_configuration::SetConfiguration;
