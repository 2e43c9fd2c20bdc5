//! Lado consumidor del contrato de `global_params`.
//!
//! Compone la lista final de archivos de parámetros de un proceso: primero
//! lo acumulado en el alcance, después los archivos propios del nodo, en
//! ese orden. La composición se publica como señal `process_params` en el
//! trace; arrancar el proceso es responsabilidad del host, no de esta capa.

use launch_core::action::{Action, ActionRunResult, ActionSignal};
use launch_core::context::LaunchContext;
use launch_core::errors::{CoreLaunchError, SubstitutionError};
use launch_core::frontend::{Entity, ParseError, SubstitutionParser};
use launch_core::substitution::{normalize, SubstitutionInput, SubstitutionSequence};
use serde::Serialize;

pub const PROCESS_PARAMS_SIGNAL: &str = "process_params";

#[derive(Debug)]
pub struct ProcessLaunch {
    command: SubstitutionSequence,
    param_files: Vec<SubstitutionSequence>,
}

/// Payload de la señal `process_params`.
#[derive(Debug, Serialize)]
struct ProcessParams<'a> {
    command: &'a str,
    param_files: &'a [String],
}

impl ProcessLaunch {
    pub fn new<I>(command: impl Into<SubstitutionInput>, param_files: I) -> Result<Self, CoreLaunchError>
        where I: IntoIterator,
              I::Item: Into<SubstitutionInput>
    {
        let mut files = Vec::new();
        for file in param_files {
            files.push(normalize(file.into())?);
        }
        Ok(Self { command: normalize(command.into())?,
                  param_files: files })
    }

    pub fn parse(entity: &Entity, parser: &dyn SubstitutionParser) -> Result<Self, ParseError> {
        let command = parser.parse_substitution(entity.get_attr_str("command")?)?;
        let mut param_files = Vec::new();
        if let Some(values) = entity.attributes.get("param_files") {
            let list = values.as_array()
                             .ok_or_else(|| ParseError::InvalidAttribute { entity: entity.type_name.clone(),
                                                                           attribute: "param_files".to_string(),
                                                                           expected: "array of strings" })?;
            for value in list {
                let expression =
                    value.as_str()
                         .ok_or_else(|| ParseError::InvalidAttribute { entity: entity.type_name.clone(),
                                                                       attribute: "param_files".to_string(),
                                                                       expected: "array of strings" })?;
                param_files.push(parser.parse_substitution(expression)?);
            }
        }
        Ok(Self { command, param_files })
    }

    fn compose(&self, context: &LaunchContext) -> Result<(String, Vec<String>), SubstitutionError> {
        let command = self.command.perform(context)?;
        // Contrato del consumidor: lo acumulado en la cadena de alcances va
        // primero, los archivos propios del nodo al final.
        let mut final_files = context.global_params().to_vec();
        for file in &self.param_files {
            final_files.push(file.perform(context)?);
        }
        Ok((command, final_files))
    }
}

impl Action for ProcessLaunch {
    fn describe(&self) -> String {
        format!("process({})", self.command.describe())
    }

    fn execute(&self, context: &mut LaunchContext) -> ActionRunResult {
        let (command, param_files) = match self.compose(context) {
            Ok(composed) => composed,
            Err(error) => return ActionRunResult::Failure { error: error.into() },
        };
        let payload = ProcessParams { command: &command,
                                      param_files: &param_files };
        let data = match serde_json::to_value(&payload) {
            Ok(data) => data,
            Err(e) => return ActionRunResult::Failure { error: CoreLaunchError::Internal(e.to_string()) },
        };
        ActionRunResult::SuccessWithSignals { signals: vec![ActionSignal { signal: PROCESS_PARAMS_SIGNAL.to_string(),
                                                                           data }] }
    }
}
