//! Concrete node variants.

pub mod boolean_ops;
pub mod constant;
pub mod numeric_comparison;
pub mod state_variable;
pub mod string_comparison;

pub use boolean_ops::{BooleanGate, BooleanGateOperator, BooleanNot};
pub use constant::{BooleanConstant, Constant, NumericConstant, StringConstant};
pub use numeric_comparison::{NumericComparison, NumericComparisonOperator};
pub use state_variable::{
    BooleanStateVariable, NumericStateVariable, StateVariable, StringStateVariable,
};
pub use string_comparison::{StringComparison, StringComparisonOperator};
