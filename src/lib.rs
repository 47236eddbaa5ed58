//! # curaflow - Smart Defaults and Validation for Curation Flows
//!
//! **curaflow** is the engine behind a visual flow builder for biocuration agent pipelines.
//! A flow is a graph of agent nodes (PDF extraction, gene-expression extraction, gene or
//! disease validation, ...) joined by directed edges. The engine decides which extractor a
//! validation agent should read from, flags validators whose input source is ambiguous,
//! and remembers whether each node's configuration was chosen by the system or the user.
//!
//! ## Core Workflow
//!
//! 1.  **Build or load a flow**: create a `FlowEditor` (seeded with a `task_input` node), or
//!     parse a persisted document with `FlowDocument::from_json` and `load` it.
//! 2.  **Edit**: `drop_node`, `connect`, `disconnect`, `delete_node`, `save_node_config`.
//!     Dropped validators get a smart default pointing at the nearest extractor.
//! 3.  **Inspect**: `validation()` and `node_status()` tell which nodes need attention.
//! 4.  **Save**: `prepare_save` rejects flows that cannot be persisted and returns the
//!     document otherwise.
//!
//! The pure operations in [`engine`] can also be called directly on any node/edge snapshot.
//!
//! ## Quick Start
//!
//! ```rust
//! use curaflow::prelude::*;
//!
//! let mut editor = FlowEditor::new();
//! let pdf = editor.drop_node("pdf").unwrap();
//! let gene = editor.drop_node("gene").unwrap();
//!
//! // The validator was pointed at the PDF extractor's output when it was dropped.
//! assert_eq!(editor.node(&gene).unwrap().custom_input.as_deref(), Some("{{pdf_output}}"));
//! assert_eq!(editor.config_state(&gene), ConfigState::Auto);
//!
//! editor.connect("node_0", &pdf).unwrap();
//! editor.connect(&pdf, &gene).unwrap();
//! assert!(editor.validation().is_clean());
//!
//! let document = editor.prepare_save("Gene curation", None).unwrap();
//! assert_eq!(document.flow.nodes.len(), 3);
//! ```

pub mod agent;
pub mod editor;
pub mod engine;
pub mod error;
pub mod flow;
pub mod prelude;
pub mod provenance;
