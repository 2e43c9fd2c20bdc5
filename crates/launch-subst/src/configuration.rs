//! Sustitución por configuración de alcance.
//!
//! Lee el mapa de configuraciones visible en el alcance actual del
//! contexto (lo que `SetConfiguration` o el CLI hayan fijado).

use launch_core::context::LaunchContext;
use launch_core::errors::SubstitutionError;
use launch_core::substitution::{normalize, Substitution, SubstitutionInput, SubstitutionSequence};

#[derive(Debug)]
pub struct ConfigurationValue {
    name: SubstitutionSequence,
    default_value: Option<SubstitutionSequence>,
}

impl ConfigurationValue {
    pub fn new(name: impl Into<SubstitutionInput>) -> Result<Self, SubstitutionError> {
        Ok(Self { name: normalize(name.into())?,
                  default_value: None })
    }

    pub fn with_default(name: impl Into<SubstitutionInput>,
                        default_value: impl Into<SubstitutionInput>)
                        -> Result<Self, SubstitutionError> {
        Ok(Self { name: normalize(name.into())?,
                  default_value: Some(normalize(default_value.into())?) })
    }
}

impl From<ConfigurationValue> for SubstitutionInput {
    fn from(sub: ConfigurationValue) -> Self {
        SubstitutionInput::boxed(Box::new(sub))
    }
}

impl Substitution for ConfigurationValue {
    fn describe(&self) -> String {
        format!("$(var {})", self.name.describe())
    }

    fn perform(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        let name = self.name.perform(context)?;
        match context.configuration_value(&name) {
            Some(value) => Ok(value.to_string()),
            None => match &self.default_value {
                Some(default_value) => default_value.perform(context),
                None => Err(SubstitutionError::Resolution(format!("configuration '{name}' is not set"))),
            },
        }
    }
}
