use super::SmartDefaults;
use super::reference::validator_has_explicit_extractor_input;
use crate::flow::{Edge, Node};
use serde::Serialize;

/// Reason reported for a validator that could read from more than one disconnected extractor.
pub const AMBIGUOUS_SOURCE_REASON: &str =
    "Ambiguous input source: Multiple extractors detected. Please explicitly select one.";

/// Whether a node needs the user to pick its input source by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigRequirement {
    pub needs_config: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ConfigRequirement {
    pub fn satisfied() -> Self {
        Self {
            needs_config: false,
            reason: None,
        }
    }

    pub fn ambiguous_source() -> Self {
        Self {
            needs_config: true,
            reason: Some(AMBIGUOUS_SOURCE_REASON.to_string()),
        }
    }
}

impl SmartDefaults<'_> {
    /// Decides whether the validation node `node_id` has an ambiguous input source.
    ///
    /// Checked in order, the first match wins:
    /// 1. unknown node, or not a validation agent: nothing to check;
    /// 2. custom input references a live extractor's `{{output_key}}`: explicit;
    /// 3. some extractor is reachable upstream by edges: topology decides;
    /// 4. zero or one extractor in the graph: unambiguous; two or more: needs configuration.
    pub fn validator_needs_configuration(
        &self,
        node_id: &str,
        nodes: &[Node],
        edges: &[Edge],
    ) -> ConfigRequirement {
        let Some(node) = nodes.iter().find(|n| n.id == node_id) else {
            return ConfigRequirement::satisfied();
        };
        if !self.catalog.is_validation(&node.agent_id) {
            return ConfigRequirement::satisfied();
        }

        let extractors: Vec<&Node> = self.extractors(nodes).collect();
        if validator_has_explicit_extractor_input(node, &extractors) {
            return ConfigRequirement::satisfied();
        }

        if self.has_extractor_ancestor(node_id, nodes, edges) {
            return ConfigRequirement::satisfied();
        }

        if extractors.len() >= 2 {
            ConfigRequirement::ambiguous_source()
        } else {
            ConfigRequirement::satisfied()
        }
    }
}
