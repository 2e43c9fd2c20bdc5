//! Contexto compartido de una ejecución de lanzamiento.
//!
//! Rol en el flujo:
//! - Una única instancia de `LaunchContext` recorre todo el árbol de
//!   acciones durante una ejecución; las acciones la reciben por referencia
//!   mutable y modifican exclusivamente su frame superior.
//! - `global_params` es el punto único de acumulación de archivos de
//!   parámetros: append-only, sin deduplicación, orden de declaración.
//! - El entorno es un snapshot tomado al construir el contexto; los tests
//!   lo inyectan con `with_environment` para no depender del proceso.

use std::collections::HashMap;

use indexmap::IndexMap;

/// Estado visible dentro de un alcance (scope) del árbol.
///
/// Un grupo con alcance propio clona el frame superior al entrar y lo
/// descarta al salir; lo acumulado dentro no sobrevive fuera.
#[derive(Debug, Clone, Default)]
struct ScopeFrame {
    configurations: IndexMap<String, String>,
    global_params: Vec<String>,
}

/// Contexto de ejecución compartido por todas las acciones de un lanzamiento.
#[derive(Debug)]
pub struct LaunchContext {
    environment: HashMap<String, String>,
    // Invariante: nunca vacío. El frame raíz vive tanto como el contexto.
    frames: Vec<ScopeFrame>,
}

impl LaunchContext {
    /// Crea un contexto con snapshot del entorno del proceso.
    pub fn new() -> Self {
        Self::with_environment(std::env::vars())
    }

    /// Crea un contexto con un entorno explícito (determinista en tests).
    pub fn with_environment<I, K, V>(vars: I) -> Self
        where I: IntoIterator<Item = (K, V)>,
              K: Into<String>,
              V: Into<String>
    {
        let environment = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { environment,
               frames: vec![ScopeFrame::default()] }
    }

    /// Valor de una variable de entorno del snapshot.
    pub fn environment_value(&self, name: &str) -> Option<&str> {
        self.environment.get(name).map(|s| s.as_str())
    }

    fn top(&self) -> &ScopeFrame {
        self.frames.last().expect("scope frame stack is never empty")
    }

    fn top_mut(&mut self) -> &mut ScopeFrame {
        self.frames.last_mut().expect("scope frame stack is never empty")
    }

    /// Fija una configuración en el alcance actual.
    pub fn set_configuration(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.top_mut().configurations.insert(name.into(), value.into());
    }

    /// Lee una configuración visible en el alcance actual.
    pub fn configuration_value(&self, name: &str) -> Option<&str> {
        self.top().configurations.get(name).map(|s| s.as_str())
    }

    /// Entra a un alcance nuevo clonando el estado visible.
    pub fn push_scope(&mut self) {
        let frame = self.top().clone();
        self.frames.push(frame);
    }

    /// Sale del alcance actual. El frame raíz no se descarta.
    pub fn pop_scope(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Lista acumulada de archivos de parámetros visible en el alcance actual.
    pub fn global_params(&self) -> &[String] {
        &self.top().global_params
    }

    /// Punto único de acumulación: agrega un archivo resuelto al final de la
    /// lista. No ordena ni deduplica.
    pub fn push_global_param(&mut self, filename: impl Into<String>) {
        self.top_mut().global_params.push(filename.into());
    }
}

impl Default for LaunchContext {
    fn default() -> Self {
        Self::new()
    }
}
