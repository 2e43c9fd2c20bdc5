//! Grupo de acciones con alcance propio opcional.
//!
//! Con `scoped` activo, lo acumulado y configurado por los hijos vive en un
//! frame propio del contexto y se descarta al salir del grupo; los archivos
//! de parámetros declarados adentro no son visibles para procesos de afuera.
//! Las señales de los hijos se reenvían hacia el engine.

use launch_core::action::{Action, ActionRunResult, ActionSignal};
use launch_core::context::LaunchContext;
use launch_core::frontend::{Entity, ParseError, SubstitutionParser};

pub struct GroupAction {
    actions: Vec<Box<dyn Action>>,
    scoped: bool,
}

impl GroupAction {
    pub fn new(actions: Vec<Box<dyn Action>>, scoped: bool) -> Self {
        Self { actions, scoped }
    }

    pub fn parse(entity: &Entity, parser: &dyn SubstitutionParser) -> Result<Self, ParseError> {
        let scoped = entity.opt_attr_bool("scoped")?.unwrap_or(true);
        let mut actions = Vec::with_capacity(entity.children.len());
        for child in &entity.children {
            actions.push(crate::registry::action_from_entity(child, parser)?);
        }
        Ok(Self { actions, scoped })
    }

    fn run_children(&self, context: &mut LaunchContext) -> ActionRunResult {
        let mut signals: Vec<ActionSignal> = Vec::new();
        for action in &self.actions {
            match action.execute(context) {
                ActionRunResult::Success => {}
                ActionRunResult::SuccessWithSignals { signals: child } => signals.extend(child),
                // El primer hijo que falla corta el grupo completo.
                failure @ ActionRunResult::Failure { .. } => return failure,
            }
        }
        if signals.is_empty() {
            ActionRunResult::Success
        } else {
            ActionRunResult::SuccessWithSignals { signals }
        }
    }
}

impl std::fmt::Debug for GroupAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupAction")
         .field("actions", &self.actions.len())
         .field("scoped", &self.scoped)
         .finish()
    }
}

impl Action for GroupAction {
    fn describe(&self) -> String {
        format!("group[{}{}]", self.actions.len(), if self.scoped { ", scoped" } else { "" })
    }

    fn execute(&self, context: &mut LaunchContext) -> ActionRunResult {
        if !self.scoped {
            return self.run_children(context);
        }
        context.push_scope();
        let result = self.run_children(context);
        context.pop_scope();
        result
    }
}
