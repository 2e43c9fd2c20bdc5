//! Entrada heterogénea del normalizador y su forma canónica.

use crate::errors::SubstitutionError;

use super::{Substitution, SubstitutionSequence, TextSubstitution};

/// Formas aceptadas al declarar un valor sustituible.
///
/// Una `Sequence` admite texto y sustituciones como elementos; una
/// `Sequence` anidada dentro de otra no es una entrada reconocida y falla
/// la normalización.
#[derive(Debug)]
pub enum SubstitutionInput {
    Text(String),
    Single(Box<dyn Substitution>),
    Sequence(Vec<SubstitutionInput>),
}

impl From<&str> for SubstitutionInput {
    fn from(text: &str) -> Self {
        SubstitutionInput::Text(text.to_string())
    }
}

impl From<String> for SubstitutionInput {
    fn from(text: String) -> Self {
        SubstitutionInput::Text(text)
    }
}

// Un blanket `impl<S: Substitution> From<S>` chocaría con `From<String>` por
// coherencia; cada primitiva aporta su propio `From` concreto.
impl From<TextSubstitution> for SubstitutionInput {
    fn from(sub: TextSubstitution) -> Self {
        SubstitutionInput::Single(Box::new(sub))
    }
}

impl SubstitutionInput {
    /// Envuelve una sustitución ya empaquetada (útil en los adaptadores del
    /// front-end, que trabajan con trait objects).
    pub fn boxed(sub: Box<dyn Substitution>) -> Self {
        SubstitutionInput::Single(sub)
    }
}

/// Lleva una entrada aceptada a su secuencia canónica.
///
/// - Texto o sustitución atómica: secuencia de un elemento.
/// - Secuencia: conserva el orden; el texto crudo se eleva a
///   `TextSubstitution`, elemento por elemento.
///
/// Determinista y sin efectos; nunca toca el `LaunchContext`.
pub fn normalize(input: SubstitutionInput) -> Result<SubstitutionSequence, SubstitutionError> {
    match input {
        SubstitutionInput::Text(text) => Ok(SubstitutionSequence::from_parts(vec![Box::new(TextSubstitution::new(text))])),
        SubstitutionInput::Single(sub) => Ok(SubstitutionSequence::from_parts(vec![sub])),
        SubstitutionInput::Sequence(elements) => {
            let mut parts: Vec<Box<dyn Substitution>> = Vec::with_capacity(elements.len());
            for element in elements {
                match element {
                    SubstitutionInput::Text(text) => parts.push(Box::new(TextSubstitution::new(text))),
                    SubstitutionInput::Single(sub) => parts.push(sub),
                    SubstitutionInput::Sequence(_) => {
                        return Err(SubstitutionError::InvalidInput("nested sequence is not a recognized \
                                                                    substitution element"
                                                                              .to_string()))
                    }
                }
            }
            Ok(SubstitutionSequence::from_parts(parts))
        }
    }
}
