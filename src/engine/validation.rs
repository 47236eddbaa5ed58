use super::SmartDefaults;
use crate::flow::{Edge, Node};
use serde::Serialize;

/// A node flagged by flow validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeIssue {
    pub node_id: String,
    pub message: String,
}

/// The outcome of validating every validation-agent node of a flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowValidation {
    pub issues: Vec<NodeIssue>,
}

impl FlowValidation {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// The node the UI should focus when a save is blocked.
    pub fn first_issue(&self) -> Option<&NodeIssue> {
        self.issues.first()
    }

    pub fn message_for(&self, node_id: &str) -> Option<&str> {
        self.issues
            .iter()
            .find(|issue| issue.node_id == node_id)
            .map(|issue| issue.message.as_str())
    }
}

impl SmartDefaults<'_> {
    /// Runs the configuration check over every validation node, in node order.
    pub fn validate_flow(&self, nodes: &[Node], edges: &[Edge]) -> FlowValidation {
        let issues = nodes
            .iter()
            .filter(|node| self.catalog.is_validation(&node.agent_id))
            .filter_map(|node| {
                let requirement = self.validator_needs_configuration(&node.id, nodes, edges);
                requirement.needs_config.then(|| NodeIssue {
                    node_id: node.id.clone(),
                    message: requirement.reason.unwrap_or_default(),
                })
            })
            .collect();
        FlowValidation { issues }
    }
}
