//! Despacho de entidades declarativas hacia las acciones.
//!
//! El tag `type` de cada entidad decide el adaptador `parse`; un tag no
//! registrado es `ParseError::UnknownAction`. La entidad raíz `launch`
//! produce la descripción completa.

use launch_core::action::{build_launch_description, Action, LaunchDescription};
use launch_core::frontend::{Entity, ParseError, SubstitutionParser};

use crate::{GroupAction, ParameterFileDeclaration, ProcessLaunch, SetConfiguration};

/// Construye una acción a partir de una entidad según su tag.
pub fn action_from_entity(entity: &Entity, parser: &dyn SubstitutionParser) -> Result<Box<dyn Action>, ParseError> {
    match entity.type_name.as_str() {
        "parameter_files" => Ok(Box::new(ParameterFileDeclaration::parse(entity, parser)?)),
        "set_configuration" => Ok(Box::new(SetConfiguration::parse(entity, parser)?)),
        "group" => Ok(Box::new(GroupAction::parse(entity, parser)?)),
        "process" => Ok(Box::new(ProcessLaunch::parse(entity, parser)?)),
        other => Err(ParseError::UnknownAction(other.to_string())),
    }
}

/// Construye la descripción completa desde la entidad raíz `launch`.
pub fn description_from_entity(root: &Entity,
                               parser: &dyn SubstitutionParser)
                               -> Result<LaunchDescription, ParseError> {
    if root.type_name != "launch" {
        return Err(ParseError::UnknownAction(root.type_name.clone()));
    }
    let mut actions = Vec::with_capacity(root.children.len());
    for child in &root.children {
        actions.push(action_from_entity(child, parser)?);
    }
    Ok(build_launch_description(actions))
}
