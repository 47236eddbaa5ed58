//! Common test utilities for building flow graphs.
use curaflow::prelude::*;

/// A node whose id is `node_<sequence>`.
#[allow(dead_code)]
pub fn node(sequence: u64, agent_id: &str) -> Node {
    Node::new(format!("node_{}", sequence), agent_id, sequence)
}

/// A node reading a custom input text.
#[allow(dead_code)]
pub fn custom_node(sequence: u64, agent_id: &str, custom_input: &str) -> Node {
    let mut n = node(sequence, agent_id);
    n.input_source = InputSource::Custom;
    n.custom_input = Some(custom_input.to_string());
    n
}

#[allow(dead_code)]
pub fn edge(source: u64, target: u64) -> Edge {
    Edge::new(format!("node_{}", source), format!("node_{}", target))
}

/// A single path: `pdf -> gene -> allele -> disease`.
///
/// Ids are `node_1` .. `node_4` in that order.
#[allow(dead_code)]
pub fn create_linear_flow() -> FlowDefinition {
    FlowDefinition {
        nodes: vec![
            node(1, "pdf"),
            node(2, "gene"),
            node(3, "allele"),
            node(4, "disease"),
        ],
        edges: vec![edge(1, 2), edge(2, 3), edge(3, 4)],
    }
}

/// Two extractors (`node_0` pdf, `node_5` gene_expression) and a validator `node_10`
/// that is connected to neither.
#[allow(dead_code)]
pub fn create_disconnected_flow() -> FlowDefinition {
    FlowDefinition {
        nodes: vec![node(0, "pdf"), node(5, "gene_expression"), node(10, "gene")],
        edges: vec![],
    }
}

/// A canvas document with a task input, a PDF extractor and a gene validator.
#[allow(dead_code)]
pub const SIMPLE_FLOW_JSON: &str = r#"{
    "name": "Gene curation",
    "description": "Extract genes from a paper and validate them",
    "nodes": [
        { "id": "node_0", "data": { "agentId": "task_input", "inputSource": "user_query" } },
        { "id": "node_1", "data": { "agentId": "pdf", "outputKey": "pdf_output" } },
        { "id": "node_2", "data": {
            "agentId": "gene",
            "inputSource": "custom",
            "customInput": "Validate {{pdf_output}}",
            "outputKey": "gene_output"
        } }
    ],
    "edges": [
        { "source": "node_0", "target": "node_1" },
        { "source": "node_1", "target": "node_2" }
    ]
}"#;
