use super::definition::{
    Edge, FlowDefinition, InputSource, Node, TASK_INPUT_AGENT, default_output_key, id_sequence,
};
use crate::error::FlowConversionError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A trait for custom data models that can be converted into a curaflow `FlowDefinition`.
///
/// The engine itself only ever reads `FlowDefinition`. Implement this trait on whatever
/// structs your canvas or storage layer produces to plug them in.
///
/// # Example
///
/// ```rust
/// use curaflow::error::FlowConversionError;
/// use curaflow::flow::{Edge, FlowDefinition, IntoFlow, Node};
///
/// struct Pipeline {
///     steps: Vec<(String, String)>,
/// }
///
/// impl IntoFlow for Pipeline {
///     fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
///         if let Some((id, _)) = self.steps.iter().find(|(_, agent)| agent.is_empty()) {
///             return Err(FlowConversionError::ValidationError(format!(
///                 "step '{}' has no agent",
///                 id
///             )));
///         }
///         let nodes: Vec<Node> = self
///             .steps
///             .iter()
///             .enumerate()
///             .map(|(i, (id, agent))| Node::new(id.clone(), agent.clone(), i as u64))
///             .collect();
///         let edges = nodes
///             .windows(2)
///             .map(|pair| Edge::new(pair[0].id.clone(), pair[1].id.clone()))
///             .collect();
///         Ok(FlowDefinition { nodes, edges })
///     }
/// }
///
/// let steps = vec![
///     ("paper".to_string(), "pdf".to_string()),
///     ("check".to_string(), String::new()),
/// ];
/// let result = Pipeline { steps }.into_flow();
/// assert!(matches!(result, Err(FlowConversionError::ValidationError(_))));
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a curaflow flow graph.
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError>;
}

/// Node configuration as the canvas stores it under `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiNodeData {
    #[serde(alias = "agentId")]
    pub agent_id: String,
    #[serde(default, alias = "inputSource")]
    pub input_source: InputSource,
    #[serde(default, alias = "customInput")]
    pub custom_input: Option<String>,
    #[serde(default, alias = "outputKey")]
    pub output_key: Option<String>,
}

/// Canvas node with id and data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiNode {
    pub id: String,
    pub data: UiNodeData,
}

/// Canvas edge connecting nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiEdge {
    pub source: String,
    pub target: String,
}

/// Complete canvas flow structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiFlow {
    #[serde(default)]
    pub nodes: Vec<UiNode>,
    #[serde(default)]
    pub edges: Vec<UiEdge>,
}

impl UiFlow {
    pub fn from_json(json: &str) -> Result<Self, FlowConversionError> {
        serde_json::from_str(json).map_err(|e| FlowConversionError::JsonParseError(e.to_string()))
    }
}

impl From<&FlowDefinition> for UiFlow {
    fn from(flow: &FlowDefinition) -> Self {
        Self {
            nodes: flow
                .nodes
                .iter()
                .map(|n| UiNode {
                    id: n.id.clone(),
                    data: UiNodeData {
                        agent_id: n.agent_id.clone(),
                        input_source: n.input_source,
                        custom_input: n.custom_input.clone(),
                        output_key: Some(n.output_key.clone()),
                    },
                })
                .collect(),
            edges: flow
                .edges
                .iter()
                .map(|e| UiEdge {
                    source: e.source.clone(),
                    target: e.target.clone(),
                })
                .collect(),
        }
    }
}

impl IntoFlow for UiFlow {
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
        let mut seen = AHashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(FlowConversionError::DuplicateNodeId(node.id.clone()));
            }
        }

        let task_inputs = self
            .nodes
            .iter()
            .filter(|n| n.data.agent_id == TASK_INPUT_AGENT)
            .count();
        if task_inputs > 1 {
            return Err(FlowConversionError::MultipleTaskInputs { count: task_inputs });
        }

        let sequences = assign_sequences(self.nodes.iter().map(|n| n.id.as_str()));

        let nodes = self
            .nodes
            .into_iter()
            .zip(sequences)
            .map(|(ui_node, sequence)| Node {
                output_key: ui_node
                    .data
                    .output_key
                    .filter(|k| !k.is_empty())
                    .unwrap_or_else(|| default_output_key(&ui_node.data.agent_id)),
                id: ui_node.id,
                agent_id: ui_node.data.agent_id,
                input_source: ui_node.data.input_source,
                custom_input: ui_node.data.custom_input,
                sequence,
            })
            .collect();

        let edges = self
            .edges
            .into_iter()
            .map(|e| Edge::new(e.source, e.target))
            .collect();

        Ok(FlowDefinition { nodes, edges })
    }
}

/// Reads the creation order carried by `node_<n>` ids. Ids without a usable numeric suffix
/// are placed after the highest parsed value, in document order.
fn assign_sequences<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<u64> {
    let parsed: Vec<Option<u64>> = ids.map(id_sequence).collect();
    let mut next = parsed
        .iter()
        .flatten()
        .max()
        .map_or(0, |max| max.saturating_add(1));
    parsed
        .into_iter()
        .map(|seq| {
            seq.unwrap_or_else(|| {
                let assigned = next;
                next = next.saturating_add(1);
                assigned
            })
        })
        .collect()
}
