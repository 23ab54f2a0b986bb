//! Leaf nodes that read a named path from the game-state provider.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use log::trace;

use crate::app::AppContext;
use crate::error::EvalError;
use crate::evaluatable::{AnyEvaluatable, Evaluatable, Operand};
use crate::registry::{Category, NodeDefinition};
use crate::state::GameState;
use crate::value::{FromValue, Value};

/// A leaf node resolving a provider path to a value of its declared type.
///
/// A missing path is a resolution failure (`PathNotFound`); a present value
/// of the wrong kind is `TypeMismatch`. Both propagate unchanged through
/// any enclosing operator nodes.
#[derive(Debug, Clone)]
pub struct StateVariable<T> {
    path: String,
    application: Option<AppContext>,
    _output: PhantomData<fn() -> T>,
}

pub type StringStateVariable = StateVariable<String>;
pub type BooleanStateVariable = StateVariable<bool>;
pub type NumericStateVariable = StateVariable<f64>;

impl<T> StateVariable<T> {
    pub fn new(path: impl Into<String>) -> Self {
        StateVariable {
            path: path.into(),
            application: None,
            _output: PhantomData,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// The application binding last propagated to this node, if any.
    pub fn application(&self) -> Option<&AppContext> {
        self.application.as_ref()
    }
}

impl<T> Default for StateVariable<T> {
    fn default() -> Self {
        StateVariable::new("")
    }
}

impl<T> Evaluatable for StateVariable<T>
where
    T: FromValue + Into<Value> + Clone + Send + fmt::Debug + 'static,
{
    type Output = T;

    fn evaluate(&self, state: &dyn GameState) -> Result<T, EvalError> {
        let value = state.get(&self.path).ok_or_else(|| {
            trace!("state path {:?} did not resolve", self.path);
            EvalError::PathNotFound(self.path.clone())
        })?;
        T::from_value(value, &self.path)
    }

    fn set_application(&mut self, app: &AppContext) {
        self.application = Some(app.clone());
    }

    fn clone_node(&self) -> Operand<T> {
        Box::new(self.clone())
    }
}

pub fn definitions() -> Vec<Arc<NodeDefinition>> {
    vec![
        Arc::new(NodeDefinition {
            name: "String State Variable",
            category: Category::State,
            output: <String as FromValue>::KIND,
            construct: || Box::new(StringStateVariable::default()) as Box<dyn AnyEvaluatable>,
        }),
        Arc::new(NodeDefinition {
            name: "Boolean State Variable",
            category: Category::State,
            output: <bool as FromValue>::KIND,
            construct: || Box::new(BooleanStateVariable::default()) as Box<dyn AnyEvaluatable>,
        }),
        Arc::new(NodeDefinition {
            name: "Number State Variable",
            category: Category::State,
            output: <f64 as FromValue>::KIND,
            construct: || Box::new(NumericStateVariable::default()) as Box<dyn AnyEvaluatable>,
        }),
    ]
}
