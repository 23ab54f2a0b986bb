//! Boolean combinator nodes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::app::AppContext;
use crate::error::EvalError;
use crate::evaluatable::{AnyEvaluatable, Evaluatable, Operand};
use crate::nodes::constant::BooleanConstant;
use crate::registry::{Category, NodeDefinition};
use crate::state::GameState;
use crate::value::ValueKind;

/// Two-input boolean gate kinds. Unknown configuration values decode to
/// `Unrecognized`, which evaluates to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanGateOperator {
    And,
    Or,
    Xor,
    Nand,
    Nor,
    #[serde(other)]
    Unrecognized,
}

/// Combines two boolean operands with the selected gate.
///
/// Both operands are always evaluated, even when the first already decides
/// the result, so resolution failures surface regardless of operand values.
#[derive(Debug, Clone)]
pub struct BooleanGate {
    operand1: Operand<bool>,
    operand2: Operand<bool>,
    operator: BooleanGateOperator,
}

impl BooleanGate {
    pub fn new(
        operand1: impl Evaluatable<Output = bool> + 'static,
        operand2: impl Evaluatable<Output = bool> + 'static,
        operator: BooleanGateOperator,
    ) -> Self {
        BooleanGate {
            operand1: Box::new(operand1),
            operand2: Box::new(operand2),
            operator,
        }
    }

    pub fn set_operand1(&mut self, operand: impl Evaluatable<Output = bool> + 'static) {
        self.operand1 = Box::new(operand);
    }

    pub fn set_operand2(&mut self, operand: impl Evaluatable<Output = bool> + 'static) {
        self.operand2 = Box::new(operand);
    }

    pub fn set_operator(&mut self, operator: BooleanGateOperator) {
        self.operator = operator;
    }

    pub fn operator(&self) -> BooleanGateOperator {
        self.operator
    }
}

impl Default for BooleanGate {
    fn default() -> Self {
        BooleanGate::new(
            BooleanConstant::default(),
            BooleanConstant::default(),
            BooleanGateOperator::And,
        )
    }
}

impl Evaluatable for BooleanGate {
    type Output = bool;

    fn evaluate(&self, state: &dyn GameState) -> Result<bool, EvalError> {
        let op1 = self.operand1.evaluate(state)?;
        let op2 = self.operand2.evaluate(state)?;

        use BooleanGateOperator::*;
        Ok(match self.operator {
            And => op1 && op2,
            Or => op1 || op2,
            Xor => op1 != op2,
            Nand => !(op1 && op2),
            Nor => !(op1 || op2),
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

/// Negates one boolean operand.
#[derive(Debug, Clone)]
pub struct BooleanNot {
    operand: Operand<bool>,
}

impl BooleanNot {
    pub fn new(operand: impl Evaluatable<Output = bool> + 'static) -> Self {
        BooleanNot {
            operand: Box::new(operand),
        }
    }

    pub fn set_operand(&mut self, operand: impl Evaluatable<Output = bool> + 'static) {
        self.operand = Box::new(operand);
    }
}

impl Default for BooleanNot {
    fn default() -> Self {
        BooleanNot::new(BooleanConstant::default())
    }
}

impl Evaluatable for BooleanNot {
    type Output = bool;

    fn evaluate(&self, state: &dyn GameState) -> Result<bool, EvalError> {
        Ok(!self.operand.evaluate(state)?)
    }

    fn set_application(&mut self, app: &AppContext) {
        self.operand.set_application(app);
    }

    fn clone_node(&self) -> Operand<bool> {
        Box::new(self.clone())
    }
}

pub fn definitions() -> Vec<Arc<NodeDefinition>> {
    vec![
        Arc::new(NodeDefinition {
            name: "Boolean Gate",
            category: Category::Logic,
            output: ValueKind::Bool,
            construct: || Box::new(BooleanGate::default()) as Box<dyn AnyEvaluatable>,
        }),
        Arc::new(NodeDefinition {
            name: "Boolean Not",
            category: Category::Logic,
            output: ValueKind::Bool,
            construct: || Box::new(BooleanNot::default()) as Box<dyn AnyEvaluatable>,
        }),
    ]
}
