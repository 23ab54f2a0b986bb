//! The string-comparison operator node.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::app::AppContext;
use crate::error::EvalError;
use crate::evaluatable::{AnyEvaluatable, Evaluatable, Operand};
use crate::nodes::constant::StringConstant;
use crate::registry::{Category, NodeDefinition};
use crate::state::GameState;
use crate::value::ValueKind;

/// The closed set of string comparison kinds.
///
/// Configuration written by a newer producer may name an operator this
/// build does not know; such values decode to [`Unrecognized`], which
/// evaluates to `false` rather than failing the consuming pipeline.
///
/// [`Unrecognized`]: StringComparisonOperator::Unrecognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StringComparisonOperator {
    Equal,
    NotEqual,
    Before,
    After,
    EqualLength,
    ShorterThan,
    LongerThan,
    StartsWith,
    EndsWith,
    Contains,
    #[serde(other)]
    Unrecognized,
}

/// Compares two string operands with the selected operator.
///
/// `Before`/`After` order by code point, never by locale-aware collation,
/// and the case-insensitive fold is plain Unicode lowercasing; results are
/// identical on every host. Lengths count Unicode scalars.
#[derive(Debug, Clone)]
pub struct StringComparison {
    operand1: Operand<String>,
    operand2: Operand<String>,
    operator: StringComparisonOperator,
    case_insensitive: bool,
}

impl StringComparison {
    pub fn new(
        operand1: impl Evaluatable<Output = String> + 'static,
        operand2: impl Evaluatable<Output = String> + 'static,
        operator: StringComparisonOperator,
    ) -> Self {
        StringComparison {
            operand1: Box::new(operand1),
            operand2: Box::new(operand2),
            operator,
            case_insensitive: false,
        }
    }

    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn set_operand1(&mut self, operand: impl Evaluatable<Output = String> + 'static) {
        self.operand1 = Box::new(operand);
    }

    pub fn set_operand2(&mut self, operand: impl Evaluatable<Output = String> + 'static) {
        self.operand2 = Box::new(operand);
    }

    pub fn set_operator(&mut self, operator: StringComparisonOperator) {
        self.operator = operator;
    }

    pub fn set_case_insensitive(&mut self, case_insensitive: bool) {
        self.case_insensitive = case_insensitive;
    }

    pub fn operator(&self) -> StringComparisonOperator {
        self.operator
    }
}

impl Default for StringComparison {
    fn default() -> Self {
        StringComparison::new(
            StringConstant::default(),
            StringConstant::default(),
            StringComparisonOperator::Equal,
        )
    }
}

impl Evaluatable for StringComparison {
    type Output = bool;

    fn evaluate(&self, state: &dyn GameState) -> Result<bool, EvalError> {
        let mut op1 = self.operand1.evaluate(state)?;
        let mut op2 = self.operand2.evaluate(state)?;

        if self.case_insensitive {
            op1 = op1.to_lowercase();
            op2 = op2.to_lowercase();
        }

        use StringComparisonOperator::*;
        Ok(match self.operator {
            Equal => op1 == op2,
            NotEqual => op1 != op2,
            Before => op1 < op2,
            After => op1 > op2,
            EqualLength => op1.chars().count() == op2.chars().count(),
            ShorterThan => op1.chars().count() < op2.chars().count(),
            LongerThan => op1.chars().count() > op2.chars().count(),
            StartsWith => op1.starts_with(&op2),
            EndsWith => op1.ends_with(&op2),
            Contains => op1.contains(&op2),
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
        name: "String Comparison",
        category: Category::String,
        output: ValueKind::Bool,
        construct: || Box::new(StringComparison::default()) as Box<dyn AnyEvaluatable>,
    })]
}
