use thiserror::Error;

use crate::value::ValueKind;

/// Errors surfaced while evaluating a logic tree.
///
/// Operator nodes never produce these themselves; they originate in leaf
/// nodes (state lookups) and propagate unchanged to the root caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The game-state provider has no value at the requested path.
    #[error("state path not found: {0}")]
    PathNotFound(String),

    /// A resolved value had the wrong kind for the node's declared type.
    #[error("expected {expected} at {path}, got {found}")]
    TypeMismatch {
        path: String,
        expected: ValueKind,
        found: ValueKind,
    },

    /// An opaque failure reported by the game-state provider.
    #[error("{0}")]
    Provider(String),
}
