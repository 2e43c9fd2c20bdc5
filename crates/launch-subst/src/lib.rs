//! launch-subst: Primitivas de sustitución sobre el núcleo (F4)
//!
//! Este crate provee:
//! - Las primitivas diferidas que resuelven contra el `LaunchContext`:
//!   `EnvironmentVariable`, `ConfigurationValue` y `PathJoin`.
//! - `ExpressionParser`, la implementación del contrato
//!   `SubstitutionParser` del core para la forma textual
//!   `literal$(env NOMBRE [default])literal`.
//!
//! Nota: el core sólo conoce la capacidad "resolver contra un contexto";
//! aquí viven las semánticas concretas de búsqueda.

mod configuration;
mod environment;
mod parser;
mod path_join;

pub use configuration::ConfigurationValue;
pub use environment::EnvironmentVariable;
pub use parser::ExpressionParser;
pub use path_join::PathJoin;
