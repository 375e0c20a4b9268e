use std::f64::consts::{E, PI};

use keycalc::engine::{Engine, EngineState, Operation, Registry};

fn assert_close(actual: Option<f64>, expected: f64) {
    let value = actual.unwrap_or_else(|| panic!("Expected {expected}, found no value"));
    assert!((value - expected).abs() < 1e-12, "Expected {expected}, found {value}");
}

fn run(steps: &[&str]) -> Engine {
    let mut engine = Engine::new();
    for step in steps {
        match step.parse::<f64>() {
            Ok(value) => engine.set_operand(value),
            Err(_) => engine.perform_operation(step),
        }
    }
    engine
}

#[test]
fn set_operand_replaces_result() {
    let mut engine = Engine::new();
    assert_eq!(engine.result(), None);

    engine.set_operand(5.0);
    assert_eq!(engine.result(), Some(5.0));

    engine.set_operand(-1.5);
    assert_eq!(engine.result(), Some(-1.5));
}

#[test]
fn constants() {
    assert_close(run(&["π"]).result(), PI);
    assert_close(run(&["e"]).result(), E);
    assert_close(run(&["9", "π"]).result(), PI);
}

#[test]
fn unary_operations() {
    assert_eq!(run(&["4", "√"]).result(), Some(2.0));
    assert_eq!(run(&["0", "cos"]).result(), Some(1.0));
    assert_eq!(run(&["3", "±"]).result(), Some(-3.0));
    assert_eq!(run(&["3", "±", "±"]).result(), Some(3.0));
    assert_close(run(&["π", "cos"]).result(), -1.0);
}

#[test]
fn unary_without_value_is_noop() {
    let engine = run(&["√"]);
    assert_eq!(engine.result(), None);
    assert_eq!(engine.state(), EngineState::Idle);
}

#[test]
fn binary_arithmetic() {
    assert_eq!(run(&["3", "+", "4", "="]).result(), Some(7.0));
    assert_eq!(run(&["3", "-", "4", "="]).result(), Some(-1.0));
    assert_eq!(run(&["3", "×", "4", "="]).result(), Some(12.0));
    assert_eq!(run(&["3", "÷", "4", "="]).result(), Some(0.75));
}

#[test]
fn binary_without_value_is_noop() {
    let engine = run(&["+"]);
    assert_eq!(engine.result(), None);
    assert_eq!(engine.state(), EngineState::Idle);
}

#[test]
fn binary_without_value_keeps_pending() {
    let engine = run(&["3", "+", "×", "4", "="]);
    assert_eq!(engine.result(), Some(7.0));
}

#[test]
fn binary_clears_accumulator_and_waits() {
    let engine = run(&["3", "+"]);
    assert_eq!(engine.result(), None);
    assert_eq!(engine.state(), EngineState::AwaitingSecondOperand);
    assert_eq!(engine.pending_operand(), Some(3.0));
}

#[test]
fn premature_equals_keeps_pending() {
    let mut engine = run(&["3", "+", "="]);
    assert_eq!(engine.result(), None);
    assert_eq!(engine.state(), EngineState::AwaitingSecondOperand);

    engine.set_operand(1.0);
    engine.perform_operation("=");
    assert_eq!(engine.result(), Some(4.0));
    assert_eq!(engine.state(), EngineState::Idle);
}

#[test]
fn equals_without_pending_is_noop() {
    assert_eq!(run(&["=", "="]).result(), None);
    assert_eq!(run(&["8", "="]).result(), Some(8.0));
}

#[test]
fn second_binary_replaces_pending() {
    let engine = run(&["3", "+", "4", "-", "2", "="]);
    assert_eq!(engine.result(), Some(2.0));
}

#[test]
fn pending_operand_is_captured_once() {
    let mut engine = run(&["10", "-"]);
    engine.set_operand(1.0);
    engine.set_operand(4.0);
    engine.perform_operation("√");
    engine.perform_operation("=");
    assert_eq!(engine.result(), Some(8.0));
}

#[test]
fn result_after_equals_can_continue() {
    let engine = run(&["2", "+", "3", "=", "×", "4", "="]);
    assert_eq!(engine.result(), Some(20.0));
}

#[test]
fn result_is_idempotent() {
    let engine = run(&["3", "×", "3", "="]);
    let first = engine.result();
    assert_eq!(engine.result(), first);
    assert_eq!(engine.result(), first);
}

#[test]
fn division_by_zero_is_infinite() {
    let value = run(&["1", "÷", "0", "="]).result().unwrap();
    assert!(value.is_infinite() && value.is_sign_positive());

    let value = run(&["0", "÷", "0", "="]).result().unwrap();
    assert!(value.is_nan());
}

#[test]
fn square_root_of_negative_is_nan() {
    assert!(run(&["2", "±", "√"]).result().unwrap().is_nan());
}

#[test]
fn unknown_symbol_is_ignored() {
    let mut engine = run(&["3", "+"]);
    engine.perform_operation("%");
    engine.perform_operation("PI");
    engine.perform_operation("");
    assert!(!engine.is_known("%"));
    assert_eq!(engine.state(), EngineState::AwaitingSecondOperand);
    assert_eq!(engine.pending_operand(), Some(3.0));

    engine.set_operand(4.0);
    engine.perform_operation("=");
    assert_eq!(engine.result(), Some(7.0));
}

#[test]
fn reset_returns_to_initial_state() {
    let mut engine = run(&["3", "+", "4"]);
    engine.reset();
    assert_eq!(engine.result(), None);
    assert_eq!(engine.state(), EngineState::Idle);
    assert_eq!(engine.pending_operand(), None);

    engine.perform_operation("=");
    assert_eq!(engine.result(), None);
}

#[test]
fn clones_are_independent() {
    let mut first = run(&["3", "+"]);
    let mut second = first.clone();

    first.set_operand(1.0);
    first.perform_operation("=");
    second.set_operand(10.0);
    second.perform_operation("=");

    assert_eq!(first.result(), Some(4.0));
    assert_eq!(second.result(), Some(13.0));
}

#[test]
fn standard_registry_vocabulary() {
    let registry = Registry::standard();
    let symbols: Vec<&str> = registry.symbols().into_iter().map(|(s, _)| s).collect();

    assert_eq!(registry.len(), 10);
    for symbol in ["π", "e", "√", "cos", "±", "+", "-", "×", "÷", "="] {
        assert!(symbols.contains(&symbol), "missing {symbol}");
    }
    assert!(matches!(registry.get("="), Some(Operation::Equals)));
    assert!(matches!(registry.get("÷"), Some(Operation::BinaryOp(_))));
    assert!(registry.get("Cos").is_none());
}

#[test]
fn custom_registry() {
    let registry = Registry::from_entries([("τ", Operation::Constant(std::f64::consts::TAU)),
                                           ("²", Operation::UnaryOp(|x| x * x)),
                                           ("^", Operation::BinaryOp(f64::powf)),
                                           ("=", Operation::Equals)]).unwrap();
    let mut engine = Engine::with_registry(registry.into());

    engine.set_operand(3.0);
    engine.perform_operation("²");
    engine.perform_operation("^");
    engine.set_operand(0.5);
    engine.perform_operation("=");
    assert_close(engine.result(), 3.0);

    engine.perform_operation("+");
    assert_close(engine.result(), 3.0);
    assert!(!engine.is_known("+"));
}

#[test]
fn duplicate_symbols_are_rejected() {
    let err = Registry::from_entries([("+", Operation::Equals), ("+", Operation::Equals)]).unwrap_err();
    assert_eq!(err.to_string(), "Registry error: Symbol '+' is defined more than once.");

    assert!(Registry::from_entries([("", Operation::Equals)]).is_err());
}
