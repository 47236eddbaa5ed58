use super::FlowEditor;
use crate::engine::{ConfigRequirement, placeholders};
use serde::Serialize;

/// How one validation agent would resolve its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatorReport {
    pub node_id: String,
    pub agent_id: String,
    pub input_source: String,
    #[serde(flatten)]
    pub requirement: ConfigRequirement,
    /// `{{name}}` references in the custom input that no node's output key provides.
    pub unresolved_placeholders: Vec<String>,
}

/// Per-validator findings for the whole flow plus the outcome of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub name: String,
    pub validators: Vec<ValidatorReport>,
    pub save_error: Option<String>,
}

impl CheckReport {
    pub fn is_blocked(&self) -> bool {
        self.save_error.is_some()
    }
}

impl FlowEditor {
    /// Inspects every validator in node order and tries a save under `name`.
    pub fn check_report(&self, name: &str) -> CheckReport {
        let engine = self.engine();
        let known_keys: Vec<&str> = self.nodes().iter().map(|n| n.output_key.as_str()).collect();

        let validators = self
            .nodes()
            .iter()
            .filter(|n| engine.catalog().is_validation(&n.agent_id))
            .map(|n| ValidatorReport {
                node_id: n.id.clone(),
                agent_id: n.agent_id.clone(),
                input_source: n.input_source.to_string(),
                requirement: engine.validator_needs_configuration(
                    &n.id,
                    self.nodes(),
                    self.edges(),
                ),
                unresolved_placeholders: n
                    .custom_input
                    .as_deref()
                    .map(placeholders)
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|p| !known_keys.contains(p))
                    .map(str::to_string)
                    .collect(),
            })
            .collect();

        CheckReport {
            name: name.to_string(),
            validators,
            save_error: self.prepare_save(name, None).err().map(|e| e.to_string()),
        }
    }
}
