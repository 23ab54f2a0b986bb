//! Tree-level behavior: cloning, application binding, the erased channel
//! and the node catalog.

use std::sync::{Arc, Mutex};

use evaluatable::{
    all_definitions, nodes_map, AnyEvaluatable, AppContext, BooleanConstant, BooleanGate,
    BooleanGateOperator, Category, EvalError, Evaluatable, GameState, Operand, StateMap,
    StringComparison, StringComparisonOperator, StringConstant, StringStateVariable, Value,
};

// ----------------------------------------------------------------- Cloning

#[test]
fn test_clone_is_independent_of_original() {
    let state = StateMap::new();
    let mut original = StringComparison::new(
        StringConstant::new("abc"),
        StringConstant::new("abc"),
        StringComparisonOperator::Equal,
    );
    let cloned = original.clone_node();

    // Mutating the original leaves the clone untouched.
    original.set_operator(StringComparisonOperator::NotEqual);
    assert_eq!(cloned.evaluate(&state), Ok(true));
    assert_eq!(original.evaluate(&state), Ok(false));
}

#[test]
fn test_original_is_independent_of_clone() {
    let state = StateMap::new();
    let original = StringComparison::new(
        StringConstant::new("abc"),
        StringConstant::new("abc"),
        StringComparisonOperator::Equal,
    );
    let mut cloned = original.clone();

    cloned.set_operand2(StringConstant::new("xyz"));
    assert_eq!(cloned.evaluate(&state), Ok(false));
    assert_eq!(original.evaluate(&state), Ok(true));
}

#[test]
fn test_clone_copies_the_whole_tree() {
    let state = StateMap::new();
    let inner = StringComparison::new(
        StringConstant::new("a"),
        StringConstant::new("a"),
        StringComparisonOperator::Equal,
    );
    let mut outer = BooleanGate::new(inner, BooleanConstant::new(true), BooleanGateOperator::And);
    let cloned = outer.clone_node();

    outer.set_operand2(BooleanConstant::new(false));
    assert_eq!(cloned.evaluate(&state), Ok(true));
    assert_eq!(outer.evaluate(&state), Ok(false));
}

// ----------------------------------------------------------------- Application binding

/// Records every binding it receives; evaluation is inert.
#[derive(Debug, Clone)]
struct BindingProbe {
    seen: Arc<Mutex<Vec<AppContext>>>,
}

impl BindingProbe {
    fn new() -> (Self, Arc<Mutex<Vec<AppContext>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        (
            BindingProbe {
                seen: Arc::clone(&seen),
            },
            seen,
        )
    }
}

impl Evaluatable for BindingProbe {
    type Output = String;

    fn evaluate(&self, _state: &dyn GameState) -> Result<String, EvalError> {
        Ok(String::new())
    }

    fn set_application(&mut self, app: &AppContext) {
        self.seen.lock().unwrap().push(app.clone());
    }

    fn clone_node(&self) -> Operand<String> {
        Box::new(self.clone())
    }
}

#[test]
fn test_set_application_reaches_every_operand_once() {
    let (probe1, seen1) = BindingProbe::new();
    let (probe2, seen2) = BindingProbe::new();
    let mut node =
        StringComparison::new(probe1, probe2, StringComparisonOperator::Equal);

    let app = AppContext::new("profile-a");
    node.set_application(&app);

    for seen in [&seen1, &seen2] {
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "each operand must be bound exactly once");
        assert!(seen[0].same_app(&app));
    }
}

#[test]
fn test_set_application_tolerates_indifferent_operands() {
    // Constants have no use for the binding; propagation is still a no-op
    // success, and the binding reaches leaves below them.
    let mut node = StringComparison::new(
        StringConstant::new("a"),
        StringStateVariable::new("player/name"),
        StringComparisonOperator::Equal,
    );
    node.set_application(&AppContext::new("profile-b"));
}

#[test]
fn test_state_variable_stores_binding() {
    let mut var = StringStateVariable::new("player/name");
    assert!(var.application().is_none());

    let app = AppContext::new("profile-c");
    var.set_application(&app);
    assert!(var.application().unwrap().same_app(&app));

    // Rebinding replaces, and clones carry the binding along.
    let other = AppContext::new("profile-d");
    var.set_application(&other);
    assert!(var.application().unwrap().same_app(&other));
    assert!(!var.application().unwrap().same_app(&app));
}

// ----------------------------------------------------------------- Erased channel

#[test]
fn test_erased_evaluation_matches_typed() {
    let state = StateMap::new();
    let node = StringComparison::new(
        StringConstant::new("Hello World"),
        StringConstant::new("hello"),
        StringComparisonOperator::Contains,
    )
    .with_case_insensitive(true);

    assert_eq!(node.evaluate(&state), Ok(true));
    assert_eq!(node.evaluate_erased(&state), Ok(Value::Bool(true)));
    assert_eq!(node.evaluate_any(&state), Ok(Value::Bool(true)));
}

#[test]
fn test_heterogeneous_storage() {
    // A catalog-style mixed bag: children of differing declared types held
    // behind the erased trait.
    let state = StateMap::new().with("fps", 144.0);
    let children: Vec<Box<dyn AnyEvaluatable>> = vec![
        Box::new(StringConstant::new("leaf")),
        Box::new(evaluatable::NumericStateVariable::new("fps")),
        Box::new(StringComparison::default()),
    ];

    let values: Vec<Value> = children
        .iter()
        .map(|c| c.evaluate_any(&state).unwrap())
        .collect();
    assert_eq!(
        values,
        vec![Value::Str("leaf".into()), Value::Num(144.0), Value::Bool(true)]
    );
}

#[test]
fn test_erased_clone_is_independent() {
    let state = StateMap::new();
    let original: Box<dyn AnyEvaluatable> = Box::new(StringComparison::default());
    let mut cloned = original.clone_any();

    cloned.set_application_any(&AppContext::new("profile-e"));
    assert_eq!(original.evaluate_any(&state), Ok(Value::Bool(true)));
    assert_eq!(cloned.evaluate_any(&state), Ok(Value::Bool(true)));
}

// ----------------------------------------------------------------- Catalog

#[test]
fn test_catalog_lists_every_variant() {
    let map = nodes_map();
    for name in [
        "String Constant",
        "Boolean Constant",
        "Number Constant",
        "String Comparison",
        "Number Comparison",
        "Boolean Gate",
        "Boolean Not",
        "String State Variable",
        "Boolean State Variable",
        "Number State Variable",
    ] {
        assert!(map.contains_key(name), "missing catalog entry: {}", name);
    }
    assert_eq!(map.len(), all_definitions().len());
}

#[test]
fn test_catalog_defaults_are_evaluable() {
    let state = StateMap::new();
    for def in all_definitions() {
        let node = (def.construct)();
        let result = node.evaluate_any(&state);
        if def.category == Category::State {
            // Fresh state variables point at the empty path, which an empty
            // provider cannot resolve.
            assert_eq!(result, Err(EvalError::PathNotFound(String::new())), "{}", def.name);
        } else {
            assert!(result.is_ok(), "{}: {:?}", def.name, result);
        }
    }
}

#[test]
fn test_string_comparison_metadata() {
    let map = nodes_map();
    let def = &map["String Comparison"];
    assert_eq!(def.category, Category::String);
    assert_eq!(def.output, evaluatable::ValueKind::Bool);
}
