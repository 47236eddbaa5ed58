use crate::agent::AgentCatalog;
use crate::engine::{FlowValidation, SmartDefaults};
use crate::error::{EditorError, SaveError};
use crate::flow::{Edge, FlowDefinition, FlowDocument, InputSource, Node, TASK_INPUT_AGENT};
use crate::provenance::{ConfigProvenance, ConfigState};
use itertools::Itertools;
use tracing::{debug, info, warn};

mod report;
mod session;

pub use report::{CheckReport, ValidatorReport};
pub use session::EditorSession;

/// Fields the node editor panel saves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeConfig {
    pub input_source: InputSource,
    pub custom_input: Option<String>,
    /// `None` keeps the current output key.
    pub output_key: Option<String>,
}

/// Error indicator state for a single node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeStatus {
    pub has_error: bool,
    pub error_message: Option<String>,
}

/// Owns the flow being edited: the graph, the id counter, the provenance record and the
/// current validation result.
///
/// Validation is recomputed after every mutation, so `validation()` and `node_status()`
/// always describe the current graph.
#[derive(Debug, Clone)]
pub struct FlowEditor {
    catalog: AgentCatalog,
    flow: FlowDefinition,
    provenance: ConfigProvenance,
    next_sequence: u64,
    validation: FlowValidation,
}

impl FlowEditor {
    /// A new flow containing only the `task_input` entry node.
    pub fn new() -> Self {
        Self::with_catalog(AgentCatalog::default())
    }

    pub fn with_catalog(catalog: AgentCatalog) -> Self {
        let mut editor = Self {
            catalog,
            flow: FlowDefinition::default(),
            provenance: ConfigProvenance::new(),
            next_sequence: 0,
            validation: FlowValidation::default(),
        };
        editor.reset();
        editor
    }

    /// Replaces the current graph with a fresh one seeded with a `task_input` node.
    pub fn reset(&mut self) {
        let seed = Node::new("node_0", TASK_INPUT_AGENT, 0);
        self.flow = FlowDefinition {
            nodes: vec![seed],
            edges: Vec::new(),
        };
        self.provenance.clear();
        self.next_sequence = 1;
        self.revalidate();
        info!("started a new flow");
    }

    /// Replaces the current graph with a loaded document.
    ///
    /// Provenance is not part of the document, so every loaded node starts `Unset`.
    pub fn load(&mut self, document: FlowDocument) {
        self.next_sequence = document.flow.next_free_sequence();
        self.flow = document.flow;
        self.provenance.clear();
        self.revalidate();
        info!(
            name = %document.name,
            nodes = self.flow.nodes.len(),
            edges = self.flow.edges.len(),
            "loaded flow"
        );
    }

    pub fn flow(&self) -> &FlowDefinition {
        &self.flow
    }

    pub fn nodes(&self) -> &[Node] {
        &self.flow.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.flow.edges
    }

    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.flow.node(node_id)
    }

    pub fn catalog(&self) -> &AgentCatalog {
        &self.catalog
    }

    pub fn engine(&self) -> SmartDefaults<'_> {
        SmartDefaults::new(&self.catalog)
    }

    pub fn provenance(&self) -> &ConfigProvenance {
        &self.provenance
    }

    pub fn config_state(&self, node_id: &str) -> ConfigState {
        self.provenance.state(node_id)
    }

    pub fn validation(&self) -> &FlowValidation {
        &self.validation
    }

    pub fn node_status(&self, node_id: &str) -> NodeStatus {
        match self.validation.message_for(node_id) {
            Some(message) => NodeStatus {
                has_error: true,
                error_message: Some(message.to_string()),
            },
            None => NodeStatus::default(),
        }
    }

    /// Adds a node for `agent_id` and returns its id.
    ///
    /// A validation agent is pointed at the located extractor's output (`custom` input,
    /// `{{output_key}}`) and recorded as `Auto`. Every other node starts `Unset` reading the
    /// user query.
    pub fn drop_node(&mut self, agent_id: &str) -> Result<String, EditorError> {
        if agent_id == TASK_INPUT_AGENT {
            if let Some(existing) = self.flow.task_input() {
                return Err(EditorError::DuplicateTaskInput {
                    existing_node_id: existing.id.clone(),
                });
            }
        }

        let (sequence, id) = self.allocate_id()?;
        let mut node = Node::new(id.clone(), agent_id, sequence);

        let mut smart_default_applied = false;
        if self.catalog.is_validation(agent_id) {
            let engine = SmartDefaults::new(&self.catalog);
            if let Some(extractor) =
                engine.find_nearest_extractor(&id, &self.flow.nodes, &self.flow.edges)
            {
                node.input_source = InputSource::Custom;
                node.custom_input = Some(extractor.output_placeholder());
                smart_default_applied = true;
                debug!(node_id = %id, extractor = %extractor.id, "applied smart default");
            }
        }

        self.provenance.record_created(&id, smart_default_applied);
        self.flow.nodes.push(node);
        self.revalidate();
        Ok(id)
    }

    /// Connects `source` to `target`. Returns `false` when the edge already exists.
    ///
    /// A target nobody has configured is switched to read the previous output. Extraction
    /// agents keep their input source.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<bool, EditorError> {
        self.require_node(source)?;
        self.require_node(target)?;

        let edge = Edge::new(source, target);
        if self.flow.edges.contains(&edge) {
            return Ok(false);
        }
        self.flow.edges.push(edge);

        let rewrite = self.provenance.allows_auto_rewrite(target);
        if let Some(node) = self.flow.node_mut(target) {
            if rewrite && !self.catalog.is_extraction(&node.agent_id) {
                node.input_source = InputSource::PreviousOutput;
                debug!(node_id = target, "input source switched to previous output");
            }
        }

        self.revalidate();
        Ok(true)
    }

    /// Removes the edge `source -> target`. Returns whether an edge was removed.
    pub fn disconnect(&mut self, source: &str, target: &str) -> bool {
        let before = self.flow.edges.len();
        self.flow
            .edges
            .retain(|e| !(e.source == source && e.target == target));
        let removed = self.flow.edges.len() != before;
        if removed {
            self.revalidate();
        }
        removed
    }

    /// Removes a node together with its incident edges and its provenance entry.
    pub fn delete_node(&mut self, node_id: &str) -> Result<Node, EditorError> {
        let position = self
            .flow
            .nodes
            .iter()
            .position(|n| n.id == node_id)
            .ok_or_else(|| EditorError::NodeNotFound(node_id.to_string()))?;
        let node = self.flow.nodes.remove(position);
        self.flow
            .edges
            .retain(|e| e.source != node_id && e.target != node_id);
        self.provenance.remove(node_id);
        self.revalidate();
        Ok(node)
    }

    /// Applies what the user saved in the node editor and marks the node `Manual`.
    pub fn save_node_config(
        &mut self,
        node_id: &str,
        config: NodeConfig,
    ) -> Result<(), EditorError> {
        let node = self
            .flow
            .node_mut(node_id)
            .ok_or_else(|| EditorError::NodeNotFound(node_id.to_string()))?;
        node.input_source = config.input_source;
        node.custom_input = config.custom_input;
        if let Some(output_key) = config.output_key {
            node.output_key = output_key;
        }
        self.provenance.mark_manual(node_id);
        self.revalidate();
        Ok(())
    }

    /// Checks everything that blocks persisting the flow and returns the document to store.
    ///
    /// Checked in order: flow name, presence of `task_input`, parallel branching, and
    /// validators needing configuration. The last one reports the node to focus.
    pub fn prepare_save(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<FlowDocument, SaveError> {
        if let Err(e) = self.check_save(name) {
            warn!(error = %e, "flow save blocked");
            return Err(e);
        }

        info!(name, nodes = self.flow.nodes.len(), "flow ready to save");
        Ok(FlowDocument {
            name: name.trim().to_string(),
            description: description.map(str::to_string),
            flow: self.flow.clone(),
        })
    }

    fn check_save(&self, name: &str) -> Result<(), SaveError> {
        if name.trim().is_empty() {
            return Err(SaveError::EmptyFlowName);
        }
        if self.flow.task_input().is_none() {
            return Err(SaveError::MissingTaskInput);
        }

        let outgoing = self
            .flow
            .edges
            .iter()
            .unique()
            .map(|e| e.source.as_str())
            .counts();
        if let Some((node_id, count)) = self
            .flow
            .nodes
            .iter()
            .filter_map(|n| outgoing.get(n.id.as_str()).map(|c| (n.id.as_str(), *c)))
            .find(|(_, count)| *count > 1)
        {
            return Err(SaveError::ParallelBranching {
                node_id: node_id.to_string(),
                outgoing: count,
            });
        }

        let validation = self.engine().validate_flow(&self.flow.nodes, &self.flow.edges);
        if let Some(issue) = validation.first_issue() {
            return Err(SaveError::NeedsConfiguration {
                node_id: issue.node_id.clone(),
                reason: issue.message.clone(),
            });
        }
        Ok(())
    }

    /// Captures the graph together with its provenance record.
    pub fn snapshot(&self) -> EditorSession {
        EditorSession {
            flow: self.flow.clone(),
            provenance: self.provenance.clone(),
            next_sequence: self.next_sequence,
        }
    }

    /// Replaces the current state with a snapshot, provenance included.
    ///
    /// Provenance entries for nodes the snapshot does not contain are dropped, and the id
    /// counter never restarts below an id already in the graph.
    pub fn restore(&mut self, session: EditorSession) {
        self.next_sequence = session
            .next_sequence
            .max(session.flow.next_free_sequence());
        self.flow = session.flow;
        self.provenance = session.provenance;
        let flow = &self.flow;
        self.provenance.retain(|id| flow.node(id).is_some());
        self.revalidate();
    }

    /// Takes the next `node_<n>` id that no node in the graph already uses.
    fn allocate_id(&mut self) -> Result<(u64, String), EditorError> {
        loop {
            let sequence = self.next_sequence;
            self.next_sequence = sequence.checked_add(1).ok_or(EditorError::IdsExhausted)?;
            let id = format!("node_{}", sequence);
            if self.flow.node(&id).is_none() {
                return Ok((sequence, id));
            }
        }
    }

    fn require_node(&self, node_id: &str) -> Result<(), EditorError> {
        match self.flow.node(node_id) {
            Some(_) => Ok(()),
            None => Err(EditorError::NodeNotFound(node_id.to_string())),
        }
    }

    fn revalidate(&mut self) {
        self.validation = SmartDefaults::new(&self.catalog)
            .validate_flow(&self.flow.nodes, &self.flow.edges);
        if !self.validation.is_clean() {
            debug!(flagged = self.validation.issues.len(), "validators need configuration");
        }
    }
}

impl Default for FlowEditor {
    fn default() -> Self {
        Self::new()
    }
}
