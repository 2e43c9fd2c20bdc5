use launch_core::context::LaunchContext;
use launch_core::errors::SubstitutionError;
use launch_core::substitution::{normalize, Substitution, SubstitutionInput, SubstitutionSequence};

/// Une partes resueltas con el separador de rutas de la plataforma.
#[derive(Debug)]
pub struct PathJoin {
    parts: Vec<SubstitutionSequence>,
}

impl PathJoin {
    pub fn new(parts: impl IntoIterator<Item = SubstitutionInput>) -> Result<Self, SubstitutionError> {
        let parts = parts.into_iter().map(normalize).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { parts })
    }
}

impl From<PathJoin> for SubstitutionInput {
    fn from(sub: PathJoin) -> Self {
        SubstitutionInput::boxed(Box::new(sub))
    }
}

impl Substitution for PathJoin {
    fn describe(&self) -> String {
        format!("$(path-join {})",
                self.parts.iter().map(|p| p.describe()).collect::<Vec<_>>().join(", "))
    }

    fn perform(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        let resolved = self.parts
                           .iter()
                           .map(|p| p.perform(context))
                           .collect::<Result<Vec<_>, _>>()?;
        Ok(resolved.join(std::path::MAIN_SEPARATOR_STR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentVariable;

    #[test]
    fn joins_resolved_parts_with_the_platform_separator() {
        let ctx = LaunchContext::with_environment(vec![("BASE", "/opt")]);
        let join = PathJoin::new(vec![SubstitutionInput::from(EnvironmentVariable::new("BASE").unwrap()),
                                      "config".into(),
                                      "a.yaml".into()]).unwrap();
        let expected = ["/opt", "config", "a.yaml"].join(std::path::MAIN_SEPARATOR_STR);
        assert_eq!(join.perform(&ctx).unwrap(), expected);
    }
}
