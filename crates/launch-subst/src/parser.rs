//! Parser de la forma textual de valores sustituibles.
//!
//! Gramática mínima que el camino declarativo necesita:
//! - texto literal, copiado tal cual;
//! - `$(env NOMBRE [default])` para variables de entorno;
//! - `$(var NOMBRE [default])` para configuraciones de alcance.
//!
//! Las expresiones no se anidan. Una expresión sin cerrar o con una clave
//! desconocida es un `ParseError::MalformedExpression` y se propaga sin
//! traducción.

use launch_core::frontend::{ParseError, SubstitutionParser};
use launch_core::substitution::{normalize, SubstitutionInput, SubstitutionSequence};

use crate::configuration::ConfigurationValue;
use crate::environment::EnvironmentVariable;

#[derive(Debug, Default)]
pub struct ExpressionParser;

impl ExpressionParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_expression(&self, inner: &str) -> Result<SubstitutionInput, ParseError> {
        let mut tokens = inner.split_whitespace();
        let kind = tokens.next()
                         .ok_or_else(|| ParseError::MalformedExpression("empty $() expression".to_string()))?;
        let name = tokens.next()
                         .ok_or_else(|| ParseError::MalformedExpression(format!("$({inner}) is missing a name")))?;
        let rest: Vec<&str> = tokens.collect();
        let default_value = if rest.is_empty() { None } else { Some(rest.join(" ")) };

        let built = match (kind, default_value) {
            ("env", None) => EnvironmentVariable::new(name).map(SubstitutionInput::from),
            ("env", Some(d)) => EnvironmentVariable::with_default(name, d.as_str()).map(SubstitutionInput::from),
            ("var", None) => ConfigurationValue::new(name).map(SubstitutionInput::from),
            ("var", Some(d)) => ConfigurationValue::with_default(name, d.as_str()).map(SubstitutionInput::from),
            (other, _) => return Err(ParseError::MalformedExpression(format!("unknown expression kind '{other}'"))),
        };
        built.map_err(|e| ParseError::MalformedExpression(e.to_string()))
    }
}

impl SubstitutionParser for ExpressionParser {
    fn parse_substitution(&self, expression: &str) -> Result<SubstitutionSequence, ParseError> {
        let mut pieces: Vec<SubstitutionInput> = Vec::new();
        let mut remaining = expression;

        while let Some(start) = remaining.find("$(") {
            if start > 0 {
                pieces.push(SubstitutionInput::Text(remaining[..start].to_string()));
            }
            let after = &remaining[start + 2..];
            let end = after.find(')')
                           .ok_or_else(|| ParseError::MalformedExpression(format!("unclosed expression in \
                                                                                   '{expression}'")))?;
            pieces.push(self.parse_expression(&after[..end])?);
            remaining = &after[end + 1..];
        }
        if !remaining.is_empty() {
            pieces.push(SubstitutionInput::Text(remaining.to_string()));
        }
        if pieces.is_empty() {
            // Expresión vacía: literal vacío, resuelve a cadena vacía.
            pieces.push(SubstitutionInput::Text(String::new()));
        }

        normalize(SubstitutionInput::Sequence(pieces)).map_err(|e| ParseError::MalformedExpression(e.to_string()))
    }
}
