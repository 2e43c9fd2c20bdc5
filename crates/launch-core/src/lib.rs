//! launch-core: Núcleo del árbol de acciones de lanzamiento (F2)
pub mod action;
pub mod context;
pub mod engine;
pub mod errors;
pub mod event;
pub mod frontend;
pub mod record;
pub mod substitution;

pub use action::{build_launch_description, Action, ActionRunResult, ActionSignal, LaunchDescription};
pub use context::LaunchContext;
pub use engine::LaunchEngine;
pub use errors::{CoreLaunchError, SubstitutionError};
pub use event::{EventStore, InMemoryEventStore, LaunchEvent, LaunchEventKind};
pub use frontend::{Entity, ParseError, SubstitutionParser};
pub use record::{ActionStatus, InMemoryRunRepository, LaunchRecord, RunRepository};
pub use substitution::{normalize, Substitution, SubstitutionInput, SubstitutionSequence, TextSubstitution};

#[cfg(test)]
mod tests {
    use super::*;

    /// Acción mínima de prueba: fija una configuración al ejecutarse.
    #[derive(Debug)]
    struct MarkStep {
        key: &'static str,
    }

    impl Action for MarkStep {
        fn describe(&self) -> String {
            format!("mark({})", self.key)
        }

        fn execute(&self, context: &mut LaunchContext) -> ActionRunResult {
            context.set_configuration(self.key, "done");
            ActionRunResult::Success
        }
    }

    #[derive(Debug)]
    struct FailingStep;

    impl Action for FailingStep {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        fn execute(&self, _context: &mut LaunchContext) -> ActionRunResult {
            ActionRunResult::Failure { error: SubstitutionError::Resolution("boom".to_string()).into() }
        }
    }

    fn empty_ctx() -> LaunchContext {
        LaunchContext::with_environment(Vec::<(String, String)>::new())
    }

    #[test]
    fn run_visits_actions_in_order_and_completes() {
        let actions: Vec<Box<dyn Action>> = vec![Box::new(MarkStep { key: "a" }), Box::new(MarkStep { key: "b" })];
        let description = build_launch_description(actions);
        let mut engine = LaunchEngine::new_with_stores(InMemoryEventStore::default(),
                                                       InMemoryRunRepository::new());
        let mut ctx = empty_ctx();
        engine.run(&description, &mut ctx).unwrap();

        assert_eq!(ctx.configuration_value("a"), Some("done"));
        assert_eq!(ctx.configuration_value("b"), Some("done"));
        assert_eq!(engine.event_variants().unwrap(), vec!["I", "S", "F", "S", "F", "C"]);
    }

    #[test]
    fn failure_stops_the_run_and_is_traced() {
        let actions: Vec<Box<dyn Action>> = vec![Box::new(FailingStep), Box::new(MarkStep { key: "after" })];
        let description = build_launch_description(actions);
        let mut engine = LaunchEngine::new_with_stores(InMemoryEventStore::default(),
                                                       InMemoryRunRepository::new());
        let mut ctx = empty_ctx();
        let err = engine.run(&description, &mut ctx).unwrap_err();

        assert!(matches!(err, CoreLaunchError::Substitution(_)));
        // La acción posterior nunca se visita.
        assert_eq!(ctx.configuration_value("after"), None);
        assert_eq!(engine.event_variants().unwrap(), vec!["I", "S", "X"]);
    }

    #[test]
    fn completed_run_refuses_reexecution() {
        let actions: Vec<Box<dyn Action>> = vec![Box::new(MarkStep { key: "a" })];
        let description = build_launch_description(actions);
        let mut engine = LaunchEngine::new_with_stores(InMemoryEventStore::default(),
                                                       InMemoryRunRepository::new());
        let mut ctx = empty_ctx();
        let run_id = engine.run(&description, &mut ctx).unwrap();

        let err = engine.next_with(run_id, &description, &mut ctx).unwrap_err();
        assert_eq!(err, CoreLaunchError::LaunchCompleted);
    }

    #[test]
    fn record_replay_reflects_statuses() {
        let actions: Vec<Box<dyn Action>> = vec![Box::new(MarkStep { key: "a" }), Box::new(FailingStep)];
        let description = build_launch_description(actions);
        let mut engine = LaunchEngine::new_with_stores(InMemoryEventStore::default(),
                                                       InMemoryRunRepository::new());
        let mut ctx = empty_ctx();
        let _ = engine.run(&description, &mut ctx);

        let run_id = engine.default_run_id().unwrap();
        let events = engine.events_for(run_id);
        let record = InMemoryRunRepository::new().load(run_id, &events, &description);

        assert_eq!(record.actions[0].status, ActionStatus::FinishedOk);
        assert_eq!(record.actions[1].status, ActionStatus::Failed);
        assert!(!record.completed);
    }
}
