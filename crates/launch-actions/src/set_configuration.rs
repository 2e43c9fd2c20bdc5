//! Fija una configuración de alcance con nombre y valor diferidos.

use launch_core::action::{Action, ActionRunResult};
use launch_core::context::LaunchContext;
use launch_core::errors::CoreLaunchError;
use launch_core::frontend::{Entity, ParseError, SubstitutionParser};
use launch_core::substitution::{normalize, SubstitutionInput, SubstitutionSequence};

#[derive(Debug)]
pub struct SetConfiguration {
    name: SubstitutionSequence,
    value: SubstitutionSequence,
}

impl SetConfiguration {
    pub fn new(name: impl Into<SubstitutionInput>,
               value: impl Into<SubstitutionInput>)
               -> Result<Self, CoreLaunchError> {
        Ok(Self { name: normalize(name.into())?,
                  value: normalize(value.into())? })
    }

    pub fn parse(entity: &Entity, parser: &dyn SubstitutionParser) -> Result<Self, ParseError> {
        let name = parser.parse_substitution(entity.get_attr_str("name")?)?;
        let value = parser.parse_substitution(entity.get_attr_str("value")?)?;
        Ok(Self { name, value })
    }
}

impl Action for SetConfiguration {
    fn describe(&self) -> String {
        format!("set_configuration({})", self.name.describe())
    }

    fn execute(&self, context: &mut LaunchContext) -> ActionRunResult {
        let name = match self.name.perform(context) {
            Ok(v) => v,
            Err(error) => return ActionRunResult::Failure { error: error.into() },
        };
        let value = match self.value.perform(context) {
            Ok(v) => v,
            Err(error) => return ActionRunResult::Failure { error: error.into() },
        };
        context.set_configuration(name, value);
        ActionRunResult::Success
    }
}
