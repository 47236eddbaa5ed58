//! Tests for canvas document conversion and editor session snapshots.
mod common;
use common::*;
use curaflow::flow::id_sequence;
use curaflow::prelude::*;

#[test]
fn test_document_from_json() {
    let document = FlowDocument::from_json(SIMPLE_FLOW_JSON).expect("Failed to parse flow");
    assert_eq!(document.name, "Gene curation");
    assert_eq!(
        document.description.as_deref(),
        Some("Extract genes from a paper and validate them")
    );

    let flow = &document.flow;
    assert_eq!(flow.nodes.len(), 3);
    assert_eq!(flow.edges.len(), 2);

    let gene = flow.node("node_2").unwrap();
    assert_eq!(gene.input_source, InputSource::Custom);
    assert_eq!(gene.custom_input.as_deref(), Some("Validate {{pdf_output}}"));
    assert_eq!(gene.sequence, 2);

    // Missing fields take their defaults.
    let pdf = flow.node("node_1").unwrap();
    assert_eq!(pdf.input_source, InputSource::UserQuery);
    let task = flow.task_input().unwrap();
    assert_eq!(task.output_key, "task_input_output");
}

#[test]
fn test_snake_case_fields_are_accepted() {
    let json = r#"{
        "nodes": [
            { "id": "a", "data": { "agent_id": "pdf", "output_key": "paper" } },
            { "id": "b", "data": { "agent_id": "gene", "input_source": "previous_output" } }
        ],
        "edges": [ { "source": "a", "target": "b" } ]
    }"#;
    let document = FlowDocument::from_json(json).unwrap();
    assert_eq!(document.name, "");
    assert_eq!(document.flow.node("a").unwrap().output_key, "paper");
    assert_eq!(
        document.flow.node("b").unwrap().input_source,
        InputSource::PreviousOutput
    );
}

#[test]
fn test_sequences_follow_id_suffix_then_document_order() {
    let flow = UiFlow::from_json(
        r#"{ "nodes": [
            { "id": "node_7", "data": { "agentId": "pdf" } },
            { "id": "imported", "data": { "agentId": "gene_expression" } },
            { "id": "node_3", "data": { "agentId": "gene" } },
            { "id": "other", "data": { "agentId": "disease" } }
        ] }"#,
    )
    .unwrap()
    .into_flow()
    .unwrap();

    let sequences: Vec<u64> = flow.nodes.iter().map(|n| n.sequence).collect();
    assert_eq!(sequences, vec![7, 8, 3, 9]);

    // The locator's fallback sees `imported` as the most recent extractor.
    let nearest = find_nearest_extractor("node_3", &flow.nodes, &flow.edges).unwrap();
    assert_eq!(nearest.id, "imported");
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let result = FlowDocument::from_json(
        r#"{ "nodes": [
            { "id": "node_1", "data": { "agentId": "pdf" } },
            { "id": "node_1", "data": { "agentId": "gene" } }
        ] }"#,
    );
    match result {
        Err(FlowConversionError::DuplicateNodeId(id)) => assert_eq!(id, "node_1"),
        other => panic!("Expected DuplicateNodeId, got {:?}", other),
    }
}

#[test]
fn test_multiple_task_inputs_are_rejected() {
    let result = FlowDocument::from_json(
        r#"{ "nodes": [
            { "id": "node_0", "data": { "agentId": "task_input" } },
            { "id": "node_1", "data": { "agentId": "task_input" } }
        ] }"#,
    );
    assert!(matches!(
        result,
        Err(FlowConversionError::MultipleTaskInputs { count: 2 })
    ));
}

#[test]
fn test_malformed_json_is_reported() {
    let result = FlowDocument::from_json("{ not json");
    assert!(matches!(result, Err(FlowConversionError::JsonParseError(_))));
}

#[test]
fn test_saved_document_reloads_identically() {
    let mut editor = FlowEditor::new();
    let pdf = editor.drop_node("pdf").unwrap();
    let gene = editor.drop_node("gene").unwrap();
    editor.connect("node_0", &pdf).unwrap();
    editor.connect(&pdf, &gene).unwrap();

    let document = editor.prepare_save("Round trip", None).unwrap();
    let json = document.to_json().unwrap();
    assert!(json.contains("\"agent_id\": \"gene\""));

    let reloaded = FlowDocument::from_json(&json).unwrap();
    assert_eq!(reloaded, document);
}

#[test]
fn test_session_snapshot_keeps_provenance() {
    let mut editor = FlowEditor::new();
    editor.drop_node("pdf").unwrap();
    let gene = editor.drop_node("gene").unwrap();
    let disease = editor.drop_node("disease").unwrap();
    editor.save_node_config(&disease, NodeConfig::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.bin");
    let path = path.to_str().unwrap();
    editor.snapshot().save(path).expect("Failed to save session");

    let session = EditorSession::from_file(path).expect("Failed to load session");
    assert_eq!(session, editor.snapshot());

    let mut restored = FlowEditor::new();
    restored.restore(session);
    assert_eq!(restored.config_state(&gene), ConfigState::Auto);
    assert_eq!(restored.config_state(&disease), ConfigState::Manual);
    assert_eq!(restored.flow(), editor.flow());
    assert_eq!(restored.drop_node("allele").unwrap(), "node_4");
}

#[test]
fn test_session_from_garbage_bytes() {
    let result = EditorSession::from_bytes(&[0xff, 0xff, 0xff]);
    assert!(matches!(result, Err(SessionError::Decode(_))));
}

#[test]
fn test_missing_session_file() {
    let result = EditorSession::from_file("does/not/exist.bin");
    assert!(matches!(result, Err(SessionError::Io { .. })));
}

#[test]
fn test_oversized_id_suffix_is_not_a_sequence() {
    let document = FlowDocument::from_json(
        r#"{ "nodes": [
            { "id": "node_18446744073709551615", "data": { "agentId": "pdf" } },
            { "id": "node_2", "data": { "agentId": "gene" } }
        ] }"#,
    )
    .expect("large suffixes are valid ids");

    let sequences: Vec<u64> = document.flow.nodes.iter().map(|n| n.sequence).collect();
    assert_eq!(sequences, vec![3, 2]);

    let mut editor = FlowEditor::new();
    editor.load(document);
    let allele = editor.drop_node("allele").unwrap();
    assert_eq!(allele, "node_4");
    assert_eq!(
        editor.node(&allele).unwrap().custom_input.as_deref(),
        Some("{{pdf_output}}")
    );
}

#[test]
fn test_id_sequence_reads_suffix() {
    assert_eq!(id_sequence("node_12"), Some(12));
    assert_eq!(id_sequence("imported"), None);
    assert_eq!(id_sequence("node_4294967296"), None);
    assert_eq!(id_sequence("node_4294967295"), Some(u32::MAX as u64));
}

#[test]
fn test_next_free_sequence_covers_ids_and_sequences() {
    let flow = FlowDefinition {
        nodes: vec![Node::new("node_9", "pdf", 2), Node::new("paper", "pdf", 4)],
        edges: vec![],
    };
    assert_eq!(flow.next_free_sequence(), 10);
    assert_eq!(FlowDefinition::default().next_free_sequence(), 0);
}

#[test]
fn test_write_errors_are_not_reported_as_parse_errors() {
    let error = FlowConversionError::JsonSerializeError("key must be a string".to_string());
    assert_eq!(error.to_string(), "Failed to write flow JSON: key must be a string");
}
