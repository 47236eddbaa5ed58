//! Tests for agent classification.
use curaflow::agent::{EXTRACTION_AGENTS, VALIDATION_AGENTS};
use curaflow::prelude::*;

#[test]
fn test_extraction_agents_are_not_validators() {
    for agent in EXTRACTION_AGENTS {
        assert!(is_extraction_agent(agent), "{} should be an extractor", agent);
        assert!(!is_validation_agent(agent), "{} should not be a validator", agent);
    }
}

#[test]
fn test_validation_agents_are_not_extractors() {
    for agent in VALIDATION_AGENTS {
        assert!(is_validation_agent(agent), "{} should be a validator", agent);
        assert!(!is_extraction_agent(agent), "{} should not be an extractor", agent);
    }
}

#[test]
fn test_unclassified_agents() {
    for agent in ["", "task_input", "summarizer", "PDF", "gene "] {
        assert!(!is_extraction_agent(agent));
        assert!(!is_validation_agent(agent));
        assert_eq!(AgentCatalog::standard().classify(agent), AgentClass::Other);
    }
}

#[test]
fn test_standard_catalog_matches_free_functions() {
    let catalog = AgentCatalog::standard();
    assert_eq!(catalog.classify("pdf"), AgentClass::Extraction);
    assert_eq!(catalog.classify("gene_expression"), AgentClass::Extraction);
    assert_eq!(catalog.classify("ontology_mapping"), AgentClass::Validation);
}

#[test]
fn test_catalog_builder_keeps_sets_disjoint() {
    let catalog = AgentCatalog::builder()
        .with_extraction_agent("supplement_table")
        .with_validation_agent("strain")
        .with_extraction_agent("gene")
        .build();

    assert!(catalog.is_extraction("supplement_table"));
    assert!(catalog.is_validation("strain"));
    assert!(catalog.is_extraction("gene"));
    assert!(!catalog.is_validation("gene"));
    // The standard catalog is untouched.
    assert!(is_validation_agent("gene"));
}
