//! Tests for the upstream extractor search.
mod common;
use common::*;
use curaflow::prelude::*;

fn nearest_id(target: &str, flow: &FlowDefinition) -> Option<String> {
    find_nearest_extractor(target, &flow.nodes, &flow.edges).map(|n| n.id.clone())
}

#[test]
fn test_multi_hop_upstream_search() {
    let flow = create_linear_flow();
    assert_eq!(nearest_id("node_4", &flow).as_deref(), Some("node_1"));
}

#[test]
fn test_nearer_extractor_wins() {
    let flow = FlowDefinition {
        nodes: vec![node(1, "pdf"), node(2, "gene_expression"), node(3, "gene")],
        edges: vec![edge(1, 2), edge(2, 3)],
    };
    assert_eq!(nearest_id("node_3", &flow).as_deref(), Some("node_2"));
}

#[test]
fn test_nearest_by_hops_not_by_recency() {
    // node_9 (gene_expression) is newer but two hops away; node_1 (pdf) is one hop away.
    let flow = FlowDefinition {
        nodes: vec![
            node(1, "pdf"),
            node(9, "gene_expression"),
            node(4, "task_input"),
            node(5, "gene"),
        ],
        edges: vec![edge(9, 4), edge(4, 5), edge(1, 5)],
    };
    assert_eq!(nearest_id("node_5", &flow).as_deref(), Some("node_1"));
}

#[test]
fn test_equal_distance_tie_goes_to_first_edge() {
    let flow = FlowDefinition {
        nodes: vec![node(1, "pdf"), node(2, "gene_expression"), node(3, "disease")],
        edges: vec![edge(2, 3), edge(1, 3)],
    };
    assert_eq!(nearest_id("node_3", &flow).as_deref(), Some("node_2"));
}

#[test]
fn test_no_extractor_returns_none() {
    let flow = FlowDefinition {
        nodes: vec![node(0, "task_input"), node(1, "gene"), node(2, "allele")],
        edges: vec![edge(0, 1), edge(1, 2)],
    };
    assert!(nearest_id("node_2", &flow).is_none());
    assert!(nearest_id("node_2", &FlowDefinition::default()).is_none());
}

#[test]
fn test_disconnected_fallback_prefers_most_recent() {
    let flow = create_disconnected_flow();
    assert_eq!(nearest_id("node_10", &flow).as_deref(), Some("node_5"));
}

#[test]
fn test_fallback_uses_sequence_not_id_text() {
    // Ids carry no creation order here; only `sequence` does.
    let older = Node::new("extract-b", "gene_expression", 2);
    let newer = Node::new("extract-a", "pdf", 7);
    let flow = FlowDefinition {
        nodes: vec![newer, older, Node::new("validator", "gene", 8)],
        edges: vec![],
    };
    assert_eq!(nearest_id("validator", &flow).as_deref(), Some("extract-a"));
}

#[test]
fn test_missing_target_falls_back_to_graph() {
    let flow = create_disconnected_flow();
    assert_eq!(nearest_id("node_404", &flow).as_deref(), Some("node_5"));
}

#[test]
fn test_cycle_terminates() {
    // gene -> allele -> disease -> gene, with pdf -> gene upstream.
    let flow = FlowDefinition {
        nodes: vec![
            node(1, "pdf"),
            node(2, "gene"),
            node(3, "allele"),
            node(4, "disease"),
        ],
        edges: vec![edge(2, 3), edge(3, 4), edge(4, 2), edge(1, 2)],
    };
    assert_eq!(nearest_id("node_4", &flow).as_deref(), Some("node_1"));
}

#[test]
fn test_cycle_without_extractor_uses_fallback() {
    let flow = FlowDefinition {
        nodes: vec![node(1, "gene"), node(2, "allele"), node(3, "pdf")],
        edges: vec![edge(1, 2), edge(2, 1), edge(2, 2)],
    };
    assert_eq!(nearest_id("node_2", &flow).as_deref(), Some("node_3"));
}

#[test]
fn test_walk_passes_through_dangling_edges() {
    // `ghost` has no node, but the pdf behind it is still reachable.
    let flow = FlowDefinition {
        nodes: vec![node(1, "pdf"), node(2, "gene")],
        edges: vec![Edge::new("node_1", "ghost"), Edge::new("ghost", "node_2")],
    };
    let engine = SmartDefaults::standard();
    assert!(engine.has_extractor_ancestor("node_2", &flow.nodes, &flow.edges));
}

#[test]
fn test_has_extractor_ancestor_ignores_fallback() {
    let flow = create_disconnected_flow();
    let engine = SmartDefaults::standard();
    assert!(!engine.has_extractor_ancestor("node_10", &flow.nodes, &flow.edges));
}

#[test]
fn test_custom_catalog_changes_the_search() {
    let catalog = AgentCatalog::builder()
        .with_extraction_agent("supplement_table")
        .build();
    let flow = FlowDefinition {
        nodes: vec![node(1, "pdf"), node(2, "supplement_table"), node(3, "gene")],
        edges: vec![edge(1, 2), edge(2, 3)],
    };
    let found =
        SmartDefaults::new(&catalog).find_nearest_extractor("node_3", &flow.nodes, &flow.edges);
    assert_eq!(found.map(|n| n.id.as_str()), Some("node_2"));
}
