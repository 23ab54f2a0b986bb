use std::collections::HashMap;

use crate::value::Value;

/// The game-state provider consumed by every evaluation call.
///
/// The engine places exactly one demand on the provider: given a path, hand
/// back the current value or report that there is none. Path syntax, update
/// cadence and the data behind it are entirely the provider's business.
pub trait GameState {
    fn get(&self, path: &str) -> Option<Value>;
}

/// A map-backed [`GameState`] for tests and simple embedders.
#[derive(Debug, Clone, Default)]
pub struct StateMap {
    values: HashMap<String, Value>,
}

impl StateMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, path: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(path.into(), value.into());
    }

    pub fn with(mut self, path: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(path, value);
        self
    }
}

impl GameState for StateMap {
    fn get(&self, path: &str) -> Option<Value> {
        self.values.get(path).cloned()
    }
}
