//! The numeric-comparison operator node.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::app::AppContext;
use crate::error::EvalError;
use crate::evaluatable::{AnyEvaluatable, Evaluatable, Operand};
use crate::nodes::constant::NumericConstant;
use crate::registry::{Category, NodeDefinition};
use crate::state::GameState;
use crate::value::ValueKind;

/// The closed set of numeric comparison kinds. Unknown configuration
/// values decode to `Unrecognized`, which evaluates to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericComparisonOperator {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    #[serde(other)]
    Unrecognized,
}

/// Compares two numeric operands with the selected operator.
#[derive(Debug, Clone)]
pub struct NumericComparison {
    operand1: Operand<f64>,
    operand2: Operand<f64>,
    operator: NumericComparisonOperator,
}

impl NumericComparison {
    pub fn new(
        operand1: impl Evaluatable<Output = f64> + 'static,
        operand2: impl Evaluatable<Output = f64> + 'static,
        operator: NumericComparisonOperator,
    ) -> Self {
        NumericComparison {
            operand1: Box::new(operand1),
            operand2: Box::new(operand2),
            operator,
        }
    }

    pub fn set_operand1(&mut self, operand: impl Evaluatable<Output = f64> + 'static) {
        self.operand1 = Box::new(operand);
    }

    pub fn set_operand2(&mut self, operand: impl Evaluatable<Output = f64> + 'static) {
        self.operand2 = Box::new(operand);
    }

    pub fn set_operator(&mut self, operator: NumericComparisonOperator) {
        self.operator = operator;
    }

    pub fn operator(&self) -> NumericComparisonOperator {
        self.operator
    }
}

impl Default for NumericComparison {
    fn default() -> Self {
        NumericComparison::new(
            NumericConstant::default(),
            NumericConstant::default(),
            NumericComparisonOperator::Equal,
        )
    }
}

impl Evaluatable for NumericComparison {
    type Output = bool;

    fn evaluate(&self, state: &dyn GameState) -> Result<bool, EvalError> {
        let op1 = self.operand1.evaluate(state)?;
        let op2 = self.operand2.evaluate(state)?;

        use NumericComparisonOperator::*;
        Ok(match self.operator {
            Equal => op1 == op2,
            NotEqual => op1 != op2,
            LessThan => op1 < op2,
            GreaterThan => op1 > op2,
            LessThanOrEqual => op1 <= op2,
            GreaterThanOrEqual => op1 >= op2,
            Unrecognized => false,
        })
    }

    fn set_application(&mut self, app: &AppContext) {
        self.operand1.set_application(app);
        self.operand2.set_application(app);
    }

    fn clone_node(&self) -> Operand<bool> {
        Box::new(self.clone())
    }
}

pub fn definitions() -> Vec<Arc<NodeDefinition>> {
    vec![Arc::new(NodeDefinition {
        name: "Number Comparison",
        category: Category::Maths,
        output: ValueKind::Bool,
        construct: || Box::new(NumericComparison::default()) as Box<dyn AnyEvaluatable>,
    })]
}
