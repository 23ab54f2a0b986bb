//! Literal leaf nodes.

use std::fmt;
use std::sync::Arc;

use crate::app::AppContext;
use crate::error::EvalError;
use crate::evaluatable::{AnyEvaluatable, Evaluatable, Operand};
use crate::registry::{Category, NodeDefinition};
use crate::state::GameState;
use crate::value::{Value, ValueKind};

/// A leaf node holding one literal of its declared type. Evaluation
/// ignores the game state entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constant<T> {
    value: T,
}

pub type StringConstant = Constant<String>;
pub type BooleanConstant = Constant<bool>;
pub type NumericConstant = Constant<f64>;

impl<T> Constant<T> {
    pub fn new(value: impl Into<T>) -> Self {
        Constant {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<T>) {
        self.value = value.into();
    }
}

impl<T> Evaluatable for Constant<T>
where
    T: Into<Value> + Clone + Send + fmt::Debug + 'static,
{
    type Output = T;

    fn evaluate(&self, _state: &dyn GameState) -> Result<T, EvalError> {
        Ok(self.value.clone())
    }

    fn set_application(&mut self, _app: &AppContext) {}

    fn clone_node(&self) -> Operand<T> {
        Box::new(self.clone())
    }
}

pub fn definitions() -> Vec<Arc<NodeDefinition>> {
    vec![
        Arc::new(NodeDefinition {
            name: "String Constant",
            category: Category::String,
            output: ValueKind::Str,
            construct: || Box::new(StringConstant::default()) as Box<dyn AnyEvaluatable>,
        }),
        Arc::new(NodeDefinition {
            name: "Boolean Constant",
            category: Category::Logic,
            output: ValueKind::Bool,
            construct: || Box::new(BooleanConstant::default()) as Box<dyn AnyEvaluatable>,
        }),
        Arc::new(NodeDefinition {
            name: "Number Constant",
            category: Category::Maths,
            output: ValueKind::Num,
            construct: || Box::new(NumericConstant::default()) as Box<dyn AnyEvaluatable>,
        }),
    ]
}
