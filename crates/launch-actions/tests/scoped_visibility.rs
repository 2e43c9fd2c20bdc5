//! Visibilidad por alcance: lo declarado dentro de un grupo con alcance
//! propio alimenta a los procesos del grupo y no a los de afuera.

use launch_actions::{GroupAction, ParameterFileDeclaration, ProcessLaunch, SetConfiguration, PROCESS_PARAMS_SIGNAL};
use launch_core::action::Action;
use launch_core::{
    build_launch_description, InMemoryEventStore, InMemoryRunRepository, LaunchContext, LaunchEngine, LaunchEventKind,
};
use launch_subst::{ConfigurationValue, EnvironmentVariable};

fn collect_process_params(engine: &LaunchEngine<InMemoryEventStore, InMemoryRunRepository>) -> Vec<Vec<String>> {
    engine.events()
          .unwrap_or_default()
          .iter()
          .filter_map(|e| match &e.kind {
              LaunchEventKind::ActionSignal { signal, data, .. } if signal == PROCESS_PARAMS_SIGNAL => {
                  let files = data["param_files"].as_array()?
                                                 .iter()
                                                 .map(|v| v.as_str().unwrap_or_default().to_string())
                                                 .collect();
                  Some(files)
              }
              _ => None,
          })
          .collect()
}

#[test]
fn scoped_group_params_are_invisible_outside() {
    let inner: Vec<Box<dyn Action>> = vec![Box::new(ParameterFileDeclaration::new(["inner.yaml"]).unwrap()),
                                           Box::new(ProcessLaunch::new("inside", Vec::<&str>::new()).unwrap())];
    let actions: Vec<Box<dyn Action>> = vec![Box::new(GroupAction::new(inner, true)),
                                             Box::new(ProcessLaunch::new("outside", Vec::<&str>::new()).unwrap())];
    let description = build_launch_description(actions);

    let mut engine = LaunchEngine::new_with_stores(InMemoryEventStore::default(), InMemoryRunRepository::new());
    let mut context = LaunchContext::with_environment(Vec::<(String, String)>::new());
    engine.run(&description, &mut context).unwrap();

    let composed = collect_process_params(&engine);
    assert_eq!(composed.len(), 2);
    assert_eq!(composed[0], vec!["inner.yaml".to_string()]);
    assert!(composed[1].is_empty(), "outside process must not see the scoped file");
}

#[test]
fn unscoped_group_accumulates_into_the_parent_scope() {
    let inner: Vec<Box<dyn Action>> = vec![Box::new(ParameterFileDeclaration::new(["shared.yaml"]).unwrap())];
    let actions: Vec<Box<dyn Action>> = vec![Box::new(GroupAction::new(inner, false)),
                                             Box::new(ProcessLaunch::new("after", Vec::<&str>::new()).unwrap())];
    let description = build_launch_description(actions);

    let mut engine = LaunchEngine::new_with_stores(InMemoryEventStore::default(), InMemoryRunRepository::new());
    let mut context = LaunchContext::with_environment(Vec::<(String, String)>::new());
    engine.run(&description, &mut context).unwrap();

    assert_eq!(context.global_params(), ["shared.yaml"]);
    let composed = collect_process_params(&engine);
    assert_eq!(composed, vec![vec!["shared.yaml".to_string()]]);
}

#[test]
fn deferred_substitutions_resolve_at_execution_time() {
    // La configuración que la secuencia diferida consulta se fija por una
    // acción anterior del mismo recorrido; en tiempo de construcción aún no
    // existe.
    let file = launch_core::SubstitutionInput::Sequence(vec![
        launch_core::SubstitutionInput::from(EnvironmentVariable::new("PARAMS_DIR").unwrap()),
        "/".into(),
        launch_core::SubstitutionInput::from(ConfigurationValue::new("profile").unwrap()),
        ".yaml".into(),
    ]);
    let actions: Vec<Box<dyn Action>> = vec![Box::new(SetConfiguration::new("profile", "indoor").unwrap()),
                                             Box::new(ParameterFileDeclaration::new([file]).unwrap())];
    let description = build_launch_description(actions);

    let mut engine = LaunchEngine::new_with_stores(InMemoryEventStore::default(), InMemoryRunRepository::new());
    let mut context = LaunchContext::with_environment(vec![("PARAMS_DIR", "/opt/params")]);
    engine.run(&description, &mut context).unwrap();

    assert_eq!(context.global_params(), ["/opt/params/indoor.yaml"]);
}

#[test]
fn missing_environment_variable_fails_the_run() {
    let file = launch_core::SubstitutionInput::from(EnvironmentVariable::new("NO_SUCH_VARIABLE").unwrap());
    let actions: Vec<Box<dyn Action>> = vec![Box::new(ParameterFileDeclaration::new([file]).unwrap())];
    let description = build_launch_description(actions);

    let mut engine = LaunchEngine::new_with_stores(InMemoryEventStore::default(), InMemoryRunRepository::new());
    let mut context = LaunchContext::with_environment(Vec::<(String, String)>::new());
    let err = engine.run(&description, &mut context).unwrap_err();

    assert!(matches!(err, launch_core::CoreLaunchError::Substitution(_)));
    assert!(context.global_params().is_empty());
    // El trace termina en el evento de fallo.
    assert_eq!(engine.event_variants().unwrap(), vec!["I", "S", "X"]);
}

#[test]
fn final_global_params_are_published_on_completion() {
    let actions: Vec<Box<dyn Action>> =
        vec![Box::new(ParameterFileDeclaration::new(["a.yaml", "b.yaml"]).unwrap())];
    let description = build_launch_description(actions);

    let mut engine = LaunchEngine::new_with_stores(InMemoryEventStore::default(), InMemoryRunRepository::new());
    let mut context = LaunchContext::with_environment(Vec::<(String, String)>::new());
    engine.run(&description, &mut context).unwrap();

    assert_eq!(engine.final_global_params().unwrap(), vec!["a.yaml", "b.yaml"]);
}
