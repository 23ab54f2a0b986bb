//! The polymorphic node contract every variant implements.

use std::fmt;

use crate::app::AppContext;
use crate::error::EvalError;
use crate::state::GameState;
use crate::value::Value;

/// A boxed operand of a known output type.
pub type Operand<T> = Box<dyn Evaluatable<Output = T>>;

/// A tree element that computes a typed value from external state.
///
/// Implementations must treat `evaluate` as a pure function of the node's
/// own fields and the game-state snapshot: no caching across calls, no
/// node-local mutation. That is what makes concurrent read-only evaluation
/// of an unmutated tree safe without any locking.
pub trait Evaluatable: Send + fmt::Debug {
    type Output: Into<Value>;

    /// Computes this node's value against a game-state snapshot.
    ///
    /// Operand failures propagate unchanged; operator nodes perform no
    /// recovery of their own.
    fn evaluate(&self, state: &dyn GameState) -> Result<Self::Output, EvalError>;

    /// Same computation through the type-erased channel.
    fn evaluate_erased(&self, state: &dyn GameState) -> Result<Value, EvalError> {
        self.evaluate(state).map(Into::into)
    }

    /// Propagates an application binding to every operand, exactly once
    /// each. Nodes with no use for the binding still forward it.
    fn set_application(&mut self, app: &AppContext);

    /// Deep, independent copy: every operand is cloned recursively and no
    /// mutable state is shared with the original.
    fn clone_node(&self) -> Operand<Self::Output>;
}

impl<T: Into<Value> + 'static> Evaluatable for Box<dyn Evaluatable<Output = T>> {
    type Output = T;

    fn evaluate(&self, state: &dyn GameState) -> Result<T, EvalError> {
        (**self).evaluate(state)
    }

    fn evaluate_erased(&self, state: &dyn GameState) -> Result<Value, EvalError> {
        (**self).evaluate_erased(state)
    }

    fn set_application(&mut self, app: &AppContext) {
        (**self).set_application(app);
    }

    fn clone_node(&self) -> Operand<T> {
        (**self).clone_node()
    }
}

impl<T: Into<Value> + 'static> Clone for Box<dyn Evaluatable<Output = T>> {
    fn clone(&self) -> Self {
        (**self).clone_node()
    }
}

/// The type-erased face of [`Evaluatable`], for parents and catalogs that
/// hold children of differing declared types.
///
/// Blanket-implemented for every `Evaluatable + Clone` node, so variants
/// never write an erased implementation by hand; `evaluate_any` is always
/// consistent with the typed `evaluate`.
pub trait AnyEvaluatable: Send + fmt::Debug {
    fn evaluate_any(&self, state: &dyn GameState) -> Result<Value, EvalError>;

    fn set_application_any(&mut self, app: &AppContext);

    fn clone_any(&self) -> Box<dyn AnyEvaluatable>;
}

impl<N> AnyEvaluatable for N
where
    N: Evaluatable + Clone + 'static,
{
    fn evaluate_any(&self, state: &dyn GameState) -> Result<Value, EvalError> {
        self.evaluate_erased(state)
    }

    fn set_application_any(&mut self, app: &AppContext) {
        self.set_application(app);
    }

    fn clone_any(&self) -> Box<dyn AnyEvaluatable> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn AnyEvaluatable> {
    fn clone(&self) -> Self {
        (**self).clone_any()
    }
}
