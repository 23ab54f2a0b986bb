//! Typed, composable logic trees evaluated against a live game-state
//! provider.
//!
//! # Overview
//!
//! A tree is built from [`Evaluatable`] nodes: constant leaves, state
//! variables reading named paths from a [`GameState`] provider, and
//! operator nodes combining typed operands. Evaluation is synchronous,
//! pure and top-down; a conditional-effect runtime calls `evaluate` with a
//! fresh snapshot whenever it needs the current truth of a condition.
//!
//! # Example
//!
//! ```
//! use evaluatable::{
//!     Evaluatable, StateMap, StringComparison, StringComparisonOperator, StringConstant,
//!     StringStateVariable,
//! };
//!
//! let node = StringComparison::new(
//!     StringStateVariable::new("local_pc/active_window"),
//!     StringConstant::new("terminal"),
//!     StringComparisonOperator::Contains,
//! )
//! .with_case_insensitive(true);
//!
//! let state = StateMap::new().with("local_pc/active_window", "Terminal - htop");
//! assert_eq!(node.evaluate(&state), Ok(true));
//! ```

pub mod app;
pub mod error;
pub mod evaluatable;
pub mod nodes;
pub mod registry;
pub mod state;
pub mod value;

// Re-export the core public API
pub use app::AppContext;
pub use error::EvalError;
pub use evaluatable::{AnyEvaluatable, Evaluatable, Operand};
pub use nodes::{
    BooleanConstant, BooleanGate, BooleanGateOperator, BooleanNot, BooleanStateVariable, Constant,
    NumericComparison, NumericComparisonOperator, NumericConstant, NumericStateVariable,
    StateVariable, StringComparison, StringComparisonOperator, StringConstant, StringStateVariable,
};
pub use registry::{all_definitions, nodes_map, Category, NodeDefinition, NodeMap};
pub use state::{GameState, StateMap};
pub use value::{FromValue, Value, ValueKind};
