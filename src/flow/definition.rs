use serde::{Deserialize, Serialize};
use std::fmt;

/// Agent id of the flow's entry point. A flow holds at most one node of this kind.
pub const TASK_INPUT_AGENT: &str = "task_input";

/// Where a node's input text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    #[default]
    UserQuery,
    PreviousOutput,
    Custom,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::UserQuery => write!(f, "user_query"),
            InputSource::PreviousOutput => write!(f, "previous_output"),
            InputSource::Custom => write!(f, "custom"),
        }
    }
}

/// A single step of a curation flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub agent_id: String,
    #[serde(default)]
    pub input_source: InputSource,
    #[serde(default)]
    pub custom_input: Option<String>,
    #[serde(default)]
    pub output_key: String,
    /// Creation order within the editing session. Higher means created later.
    #[serde(default)]
    pub sequence: u64,
}

impl Node {
    pub fn new(id: impl Into<String>, agent_id: impl Into<String>, sequence: u64) -> Self {
        let agent_id = agent_id.into();
        Self {
            id: id.into(),
            output_key: default_output_key(&agent_id),
            agent_id,
            input_source: InputSource::default(),
            custom_input: None,
            sequence,
        }
    }

    pub fn is_task_input(&self) -> bool {
        self.agent_id == TASK_INPUT_AGENT
    }

    /// The `{{output_key}}` placeholder downstream nodes use to consume this node's output.
    pub fn output_placeholder(&self) -> String {
        format!("{{{{{}}}}}", self.output_key)
    }
}

/// Output key a freshly created node exposes, e.g. `pdf_output`.
pub fn default_output_key(agent_id: &str) -> String {
    format!("{}_output", agent_id)
}

/// Creation order carried by a `node_<n>` style id.
///
/// Only suffixes within `u32` count, which leaves room to number every later node.
pub fn id_sequence(id: &str) -> Option<u64> {
    id.rsplit('_').next()?.parse::<u32>().ok().map(u64::from)
}

/// A directed connection: `target` may consume `source`'s output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// The canonical node/edge graph every engine operation reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowDefinition {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl FlowDefinition {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn task_input(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.is_task_input())
    }

    /// Lowest sequence above every node's `sequence` and every `node_<n>` id suffix.
    pub fn next_free_sequence(&self) -> u64 {
        self.nodes
            .iter()
            .flat_map(|n| [Some(n.sequence), id_sequence(&n.id)])
            .flatten()
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }
}
