//! Per-node record of how a node's input configuration was set.
//!
//! The record is kept beside the graph, never inside node data, and is never recomputed
//! from `input_source` or `custom_input`.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConfigState {
    /// Never touched. Represented by the absence of an entry.
    #[default]
    Unset,
    /// The editor applied a smart default when the node was created.
    Auto,
    /// The user saved the node's configuration.
    Manual,
}

impl fmt::Display for ConfigState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigState::Unset => write!(f, "unset"),
            ConfigState::Auto => write!(f, "auto"),
            ConfigState::Manual => write!(f, "manual"),
        }
    }
}

/// Provenance entries keyed by node id.
///
/// Transitions: absent -> `Auto` (only at creation), absent/`Auto` -> `Manual`, any -> absent
/// (only when the node is deleted or gone from a restored graph). `Manual` never moves back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigProvenance {
    states: AHashMap<String, ConfigState>,
}

impl ConfigProvenance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a freshly created node. Existing entries are left untouched.
    pub fn record_created(&mut self, node_id: &str, smart_default_applied: bool) {
        if smart_default_applied && !self.states.contains_key(node_id) {
            self.states.insert(node_id.to_string(), ConfigState::Auto);
        }
    }

    /// The user explicitly saved configuration for this node.
    pub fn mark_manual(&mut self, node_id: &str) {
        self.states.insert(node_id.to_string(), ConfigState::Manual);
    }

    /// Drops the entry of a deleted node.
    pub fn remove(&mut self, node_id: &str) -> Option<ConfigState> {
        self.states.remove(node_id)
    }

    /// Drops every entry whose node id is rejected by `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.states.retain(|id, _| keep(id));
    }

    pub fn state(&self, node_id: &str) -> ConfigState {
        self.states.get(node_id).copied().unwrap_or_default()
    }

    /// Only nodes nobody has configured may have their input source rewritten on connect.
    pub fn allows_auto_rewrite(&self, node_id: &str) -> bool {
        self.state(node_id) == ConfigState::Unset
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ConfigState)> {
        self.states.iter().map(|(id, state)| (id.as_str(), *state))
    }
}
