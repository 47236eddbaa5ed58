//! The smart-default and validation engine.
//!
//! Everything here is pure: the functions read a node/edge snapshot, never mutate it, and
//! are total over empty graphs, unknown ids and cyclic edge sets.

use crate::agent::AgentCatalog;
use crate::flow::{Edge, Node};

mod locator;
pub mod reference;
mod resolver;
mod validation;
pub mod walk;

pub use reference::{placeholders, validator_has_explicit_extractor_input};
pub use resolver::{AMBIGUOUS_SOURCE_REASON, ConfigRequirement};
pub use validation::{FlowValidation, NodeIssue};
pub use walk::UpstreamWalk;

/// Engine operations bound to an agent catalog.
#[derive(Debug, Clone, Copy)]
pub struct SmartDefaults<'c> {
    catalog: &'c AgentCatalog,
}

impl<'c> SmartDefaults<'c> {
    pub fn new(catalog: &'c AgentCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c AgentCatalog {
        self.catalog
    }
}

impl SmartDefaults<'static> {
    pub fn standard() -> Self {
        Self::new(AgentCatalog::standard())
    }
}

impl Default for SmartDefaults<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

/// `SmartDefaults::find_nearest_extractor` with the standard catalog.
pub fn find_nearest_extractor<'n>(
    target_id: &str,
    nodes: &'n [Node],
    edges: &[Edge],
) -> Option<&'n Node> {
    SmartDefaults::standard().find_nearest_extractor(target_id, nodes, edges)
}

/// `SmartDefaults::validator_needs_configuration` with the standard catalog.
pub fn validator_needs_configuration(
    node_id: &str,
    nodes: &[Node],
    edges: &[Edge],
) -> ConfigRequirement {
    SmartDefaults::standard().validator_needs_configuration(node_id, nodes, edges)
}

/// `SmartDefaults::validate_flow` with the standard catalog.
pub fn validate_flow(nodes: &[Node], edges: &[Edge]) -> FlowValidation {
    SmartDefaults::standard().validate_flow(nodes, edges)
}
