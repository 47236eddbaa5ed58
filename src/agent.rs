//! Agent classification.
//!
//! Only two classes matter to the smart-default engine: extraction agents, which produce
//! raw data from a source document, and validation agents, which check extracted entities
//! against a reference and should therefore consume an extractor's output.

use ahash::AHashSet;
use std::sync::LazyLock;

/// Agents that extract raw data from the source document.
pub const EXTRACTION_AGENTS: &[&str] = &["pdf", "gene_expression"];

/// Agents that resolve extracted entities against a reference.
pub const VALIDATION_AGENTS: &[&str] = &[
    "gene",
    "allele",
    "disease",
    "chemical",
    "gene_ontology",
    "go_annotations",
    "orthologs",
    "ontology_mapping",
];

static STANDARD_CATALOG: LazyLock<AgentCatalog> =
    LazyLock::new(|| AgentCatalog::builder().build());

/// Returns `true` iff `agent_id` is one of the standard extraction agents.
pub fn is_extraction_agent(agent_id: &str) -> bool {
    EXTRACTION_AGENTS.contains(&agent_id)
}

/// Returns `true` iff `agent_id` is one of the standard validation agents.
pub fn is_validation_agent(agent_id: &str) -> bool {
    VALIDATION_AGENTS.contains(&agent_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentClass {
    Extraction,
    Validation,
    Other,
}

/// The membership lists the engine classifies agents against.
#[derive(Debug, Clone)]
pub struct AgentCatalog {
    extraction: AHashSet<String>,
    validation: AHashSet<String>,
}

impl AgentCatalog {
    /// Starts from the standard lists.
    pub fn builder() -> AgentCatalogBuilder {
        AgentCatalogBuilder::new()
    }

    /// The catalog holding exactly `EXTRACTION_AGENTS` and `VALIDATION_AGENTS`.
    pub fn standard() -> &'static AgentCatalog {
        &STANDARD_CATALOG
    }

    pub fn is_extraction(&self, agent_id: &str) -> bool {
        self.extraction.contains(agent_id)
    }

    pub fn is_validation(&self, agent_id: &str) -> bool {
        self.validation.contains(agent_id)
    }

    pub fn classify(&self, agent_id: &str) -> AgentClass {
        if self.is_extraction(agent_id) {
            AgentClass::Extraction
        } else if self.is_validation(agent_id) {
            AgentClass::Validation
        } else {
            AgentClass::Other
        }
    }
}

impl Default for AgentCatalog {
    fn default() -> Self {
        Self::standard().clone()
    }
}

pub struct AgentCatalogBuilder {
    extraction: AHashSet<String>,
    validation: AHashSet<String>,
}

impl AgentCatalogBuilder {
    pub fn new() -> Self {
        Self {
            extraction: EXTRACTION_AGENTS.iter().map(|s| s.to_string()).collect(),
            validation: VALIDATION_AGENTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Registers an extraction agent. The id is removed from the validation set.
    pub fn with_extraction_agent(mut self, agent_id: &str) -> Self {
        self.validation.remove(agent_id);
        self.extraction.insert(agent_id.to_string());
        self
    }

    /// Registers a validation agent. The id is removed from the extraction set.
    pub fn with_validation_agent(mut self, agent_id: &str) -> Self {
        self.extraction.remove(agent_id);
        self.validation.insert(agent_id.to_string());
        self
    }

    pub fn build(self) -> AgentCatalog {
        AgentCatalog {
            extraction: self.extraction,
            validation: self.validation,
        }
    }
}

impl Default for AgentCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
