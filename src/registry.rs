//! Descriptive catalog of the node variants this build knows.
//!
//! Metadata only: an external editor uses it to list node kinds by
//! category and to construct defaults. It carries no evaluation behavior.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::evaluatable::AnyEvaluatable;
use crate::nodes;
use crate::value::ValueKind;

/// Editor-facing grouping for a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Logic,
    Maths,
    String,
    State,
}

/// One catalog entry: a human-readable name, a category tag, the declared
/// output kind and a default constructor.
pub struct NodeDefinition {
    pub name: &'static str,
    pub category: Category,
    pub output: ValueKind,
    pub construct: fn() -> Box<dyn AnyEvaluatable>,
}

/// Map of node name -> definition.
pub type NodeMap = HashMap<String, Arc<NodeDefinition>>;

/// All node definitions combined.
pub fn all_definitions() -> Vec<Arc<NodeDefinition>> {
    let mut defs = Vec::new();
    defs.extend(nodes::constant::definitions());
    defs.extend(nodes::string_comparison::definitions());
    defs.extend(nodes::numeric_comparison::definitions());
    defs.extend(nodes::boolean_ops::definitions());
    defs.extend(nodes::state_variable::definitions());
    defs
}

/// Builds the name -> definition map from all definitions.
pub fn nodes_map() -> NodeMap {
    let defs = all_definitions();
    debug!("building node catalog with {} definitions", defs.len());
    let mut map = HashMap::new();
    for def in defs {
        map.insert(def.name.to_string(), Arc::clone(&def));
    }
    map
}
