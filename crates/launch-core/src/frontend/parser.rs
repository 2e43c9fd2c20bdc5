use thiserror::Error;

use crate::substitution::SubstitutionSequence;

/// Errores del front-end declarativo. Se propagan sin traducción hasta quien
/// construye la descripción. A diferencia de los errores del engine, nunca
/// viajan dentro de eventos.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("unknown action type: {0}")]
    UnknownAction(String),
    #[error("entity '{entity}' is missing required attribute '{attribute}'")]
    MissingAttribute { entity: String, attribute: String },
    #[error("entity '{entity}' attribute '{attribute}' must be a {expected}")]
    InvalidAttribute {
        entity: String,
        attribute: String,
        expected: &'static str,
    },
    #[error("malformed substitution expression: {0}")]
    MalformedExpression(String),
}

/// Colaborador que convierte la forma textual de un valor sustituible en su
/// secuencia canónica. La gramática concreta es del implementador; el core
/// sólo exige que el resultado sea resoluble en tiempo de ejecución.
pub trait SubstitutionParser {
    fn parse_substitution(&self, expression: &str) -> Result<SubstitutionSequence, ParseError>;
}
