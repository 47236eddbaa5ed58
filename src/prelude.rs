//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the curaflow
//! crate.
//!
//! # Example
//!
//! ```rust
//! use curaflow::prelude::*;
//!
//! let nodes = vec![
//!     Node::new("node_1", "pdf", 1),
//!     Node::new("node_2", "gene", 2),
//! ];
//! let edges = vec![Edge::new("node_1", "node_2")];
//!
//! let nearest = find_nearest_extractor("node_2", &nodes, &edges);
//! assert_eq!(nearest.map(|n| n.id.as_str()), Some("node_1"));
//! assert!(!validator_needs_configuration("node_2", &nodes, &edges).needs_config);
//! ```

// Classification
pub use crate::agent::{AgentCatalog, AgentClass, is_extraction_agent, is_validation_agent};

// Engine operations
pub use crate::engine::{
    ConfigRequirement, FlowValidation, NodeIssue, SmartDefaults, find_nearest_extractor,
    validate_flow, validator_has_explicit_extractor_input, validator_needs_configuration,
};

// Flow model
pub use crate::flow::{Edge, FlowDefinition, FlowDocument, InputSource, IntoFlow, Node, UiFlow};

// Editing state
pub use crate::editor::{
    CheckReport, EditorSession, FlowEditor, NodeConfig, NodeStatus, ValidatorReport,
};
pub use crate::provenance::{ConfigProvenance, ConfigState};

// Error types
pub use crate::error::{EditorError, FlowConversionError, SaveError, SessionError};
