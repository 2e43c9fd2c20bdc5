use crate::context::LaunchContext;
use crate::errors::SubstitutionError;

use super::Substitution;

/// Secuencia canónica de sustituciones.
///
/// El orden es el de concatenación al resolver; no es reordenable. No es
/// vacía salvo que la entrada original fuera una secuencia vacía.
#[derive(Debug)]
pub struct SubstitutionSequence {
    parts: Vec<Box<dyn Substitution>>,
}

impl SubstitutionSequence {
    pub(crate) fn from_parts(parts: Vec<Box<dyn Substitution>>) -> Self {
        Self { parts }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Forma estable de la secuencia completa, para trazas.
    pub fn describe(&self) -> String {
        self.parts.iter().map(|p| p.describe()).collect::<Vec<_>>().join(" + ")
    }

    /// Fase de ejecución: resuelve cada parte contra el contexto y concatena
    /// en orden de declaración. El primer error aborta y se propaga tal cual.
    pub fn perform(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        let mut resolved = String::new();
        for part in &self.parts {
            resolved.push_str(&part.perform(context)?);
        }
        Ok(resolved)
    }
}
