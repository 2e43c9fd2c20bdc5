//! Propiedades de acumulación de la declaración de archivos de parámetros.

use launch_actions::ParameterFileDeclaration;
use launch_core::action::{Action, ActionRunResult};
use launch_core::errors::{CoreLaunchError, SubstitutionError};
use launch_core::substitution::{SubstitutionInput, TextSubstitution};
use launch_core::LaunchContext;

fn ctx() -> LaunchContext {
    LaunchContext::with_environment(Vec::<(String, String)>::new())
}

fn execute_ok(action: &dyn Action, context: &mut LaunchContext) {
    match action.execute(context) {
        ActionRunResult::Success | ActionRunResult::SuccessWithSignals { .. } => {}
        ActionRunResult::Failure { error } => panic!("unexpected failure: {error}"),
    }
}

#[test]
fn execute_appends_resolved_filenames_in_declaration_order() {
    let decl = ParameterFileDeclaration::new(["f1.yaml", "f2.yaml", "f3.yaml"]).unwrap();
    let mut context = ctx();
    context.push_global_param("previous.yaml");

    execute_ok(&decl, &mut context);
    assert_eq!(context.global_params(),
               ["previous.yaml", "f1.yaml", "f2.yaml", "f3.yaml"]);
}

#[test]
fn empty_declaration_is_a_legal_noop() {
    let decl = ParameterFileDeclaration::new(Vec::<SubstitutionInput>::new()).unwrap();
    assert!(decl.is_empty());

    let mut context = ctx();
    execute_ok(&decl, &mut context);
    assert!(context.global_params().is_empty());
}

#[test]
fn separate_declarations_accumulate_across_executions() {
    let a = ParameterFileDeclaration::new(["x.yaml"]).unwrap();
    let b = ParameterFileDeclaration::new(["y.yaml"]).unwrap();
    let mut context = ctx();

    execute_ok(&a, &mut context);
    execute_ok(&b, &mut context);
    assert_eq!(context.global_params(), ["x.yaml", "y.yaml"]);
}

#[test]
fn reexecution_is_not_idempotent() {
    let decl = ParameterFileDeclaration::new(["p.yaml"]).unwrap();
    let mut context = ctx();

    execute_ok(&decl, &mut context);
    execute_ok(&decl, &mut context);
    assert_eq!(context.global_params(), ["p.yaml", "p.yaml"]);
}

#[test]
fn order_is_preserved_without_sorting_or_dedup() {
    let decl = ParameterFileDeclaration::new(["b.yaml", "a.yaml", "b.yaml"]).unwrap();
    let mut context = ctx();

    execute_ok(&decl, &mut context);
    assert_eq!(context.global_params(), ["b.yaml", "a.yaml", "b.yaml"]);
}

#[test]
fn mixed_sequence_input_concatenates_on_resolution() {
    let filename = SubstitutionInput::Sequence(vec!["dir/".into(),
                                                    TextSubstitution::new("robot").into(),
                                                    ".yaml".into()]);
    let decl = ParameterFileDeclaration::new([filename]).unwrap();
    let mut context = ctx();

    execute_ok(&decl, &mut context);
    assert_eq!(context.global_params(), ["dir/robot.yaml"]);
}

#[test]
fn malformed_input_fails_construction_before_any_context_exists() {
    let nested = SubstitutionInput::Sequence(vec![SubstitutionInput::Sequence(vec!["x.yaml".into()])]);
    let err = ParameterFileDeclaration::new([nested]).unwrap_err();
    assert!(matches!(err,
                     CoreLaunchError::Substitution(SubstitutionError::InvalidInput(_))));
}

#[test]
fn resolution_failure_propagates_and_leaves_partial_appends() {
    #[derive(Debug)]
    struct Exploding;
    impl launch_core::Substitution for Exploding {
        fn describe(&self) -> String {
            "exploding".to_string()
        }
        fn perform(&self, _context: &LaunchContext) -> Result<String, SubstitutionError> {
            Err(SubstitutionError::Resolution("upstream value missing".to_string()))
        }
    }

    let decl = ParameterFileDeclaration::new([SubstitutionInput::from("ok.yaml"),
                                              SubstitutionInput::boxed(Box::new(Exploding))]).unwrap();
    let mut context = ctx();
    match decl.execute(&mut context) {
        ActionRunResult::Failure { error } => {
            assert!(matches!(error, CoreLaunchError::Substitution(SubstitutionError::Resolution(_))))
        }
        _ => panic!("expected resolution failure"),
    }
    // El primer archivo ya estaba resuelto y agregado cuando el segundo falló.
    assert_eq!(context.global_params(), ["ok.yaml"]);
}
