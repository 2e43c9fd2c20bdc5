use crate::context::LaunchContext;
use crate::errors::SubstitutionError;

use super::Substitution;

/// Sustitución literal: resuelve siempre al mismo texto.
#[derive(Debug, Clone)]
pub struct TextSubstitution {
    text: String,
}

impl TextSubstitution {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Substitution for TextSubstitution {
    fn describe(&self) -> String {
        format!("'{}'", self.text)
    }

    fn perform(&self, _context: &LaunchContext) -> Result<String, SubstitutionError> {
        Ok(self.text.clone())
    }
}
