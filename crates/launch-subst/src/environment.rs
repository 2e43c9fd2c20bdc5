//! Sustitución por variable de entorno.
//!
//! - El nombre es a su vez una secuencia de sustituciones; se resuelve
//!   primero y recién entonces se consulta el snapshot del contexto.
//! - Sin valor y sin default, la resolución falla con un error opaco que el
//!   core propaga tal cual (aborta el run completo).

use launch_core::context::LaunchContext;
use launch_core::errors::SubstitutionError;
use launch_core::substitution::{normalize, Substitution, SubstitutionInput, SubstitutionSequence};

#[derive(Debug)]
pub struct EnvironmentVariable {
    name: SubstitutionSequence,
    default_value: Option<SubstitutionSequence>,
}

impl EnvironmentVariable {
    pub fn new(name: impl Into<SubstitutionInput>) -> Result<Self, SubstitutionError> {
        Ok(Self { name: normalize(name.into())?,
                  default_value: None })
    }

    /// Variante con valor por defecto, usado cuando la variable no existe.
    pub fn with_default(name: impl Into<SubstitutionInput>,
                        default_value: impl Into<SubstitutionInput>)
                        -> Result<Self, SubstitutionError> {
        Ok(Self { name: normalize(name.into())?,
                  default_value: Some(normalize(default_value.into())?) })
    }
}

impl From<EnvironmentVariable> for SubstitutionInput {
    fn from(sub: EnvironmentVariable) -> Self {
        SubstitutionInput::boxed(Box::new(sub))
    }
}

impl Substitution for EnvironmentVariable {
    fn describe(&self) -> String {
        format!("$(env {})", self.name.describe())
    }

    fn perform(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        let name = self.name.perform(context)?;
        match context.environment_value(&name) {
            Some(value) => Ok(value.to_string()),
            None => match &self.default_value {
                Some(default_value) => default_value.perform(context),
                None => Err(SubstitutionError::Resolution(format!("environment variable '{name}' is not set"))),
            },
        }
    }
}
