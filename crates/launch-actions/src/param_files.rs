//! Declaración diferida de archivos de parámetros.
//!
//! Protocolo en dos fases:
//! - construcción: cada nombre de archivo se normaliza a una
//!   `SubstitutionSequence` y se guarda sin resolver.
//! - ejecución: cada secuencia se resuelve contra el contexto, en orden de
//!   declaración, y el resultado se agrega al final de `global_params`.
//!
//! La acción nunca abre ni valida el archivo nombrado; interpretar su
//! contenido es trabajo del proceso que lo consuma. Tampoco se protege de
//! ejecuciones repetidas: ejecutar dos veces acumula dos veces.

use launch_core::action::{Action, ActionRunResult};
use launch_core::context::LaunchContext;
use launch_core::errors::CoreLaunchError;
use launch_core::frontend::{Entity, ParseError, SubstitutionParser};
use launch_core::substitution::{normalize, SubstitutionInput, SubstitutionSequence};

pub struct ParameterFileDeclaration {
    input_files: Vec<SubstitutionSequence>,
}

impl ParameterFileDeclaration {
    /// Normaliza cada nombre recibido, en orden. Una colección vacía es una
    /// acción legal sin efecto. Una entrada no reconocida falla aquí, antes
    /// de que exista contexto alguno.
    pub fn new<I>(filenames: I) -> Result<Self, CoreLaunchError>
        where I: IntoIterator,
              I::Item: Into<SubstitutionInput>
    {
        let mut input_files = Vec::new();
        for filename in filenames {
            input_files.push(normalize(filename.into())?);
        }
        Ok(Self { input_files })
    }

    /// Adaptador declarativo. La forma textual consume un único atributo
    /// `filename`; el constructor programático acepta una colección. Los
    /// fallos del parser se propagan sin traducción.
    pub fn parse(entity: &Entity, parser: &dyn SubstitutionParser) -> Result<Self, ParseError> {
        let expression = entity.get_attr_str("filename")?;
        let sequence = parser.parse_substitution(expression)?;
        Ok(Self { input_files: vec![sequence] })
    }

    pub fn len(&self) -> usize {
        self.input_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input_files.is_empty()
    }
}

impl std::fmt::Debug for ParameterFileDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParameterFileDeclaration")
         .field("input_files", &self.input_files)
         .finish()
    }
}

impl Action for ParameterFileDeclaration {
    fn describe(&self) -> String {
        format!("parameter_files[{}]", self.input_files.len())
    }

    fn execute(&self, context: &mut LaunchContext) -> ActionRunResult {
        for input_file in &self.input_files {
            match input_file.perform(context) {
                // Lectura-modificación-escritura única: agregar al final,
                // sin reordenar ni deduplicar.
                Ok(filename) => context.push_global_param(filename),
                Err(error) => return ActionRunResult::Failure { error: error.into() },
            }
        }
        ActionRunResult::Success
    }
}
