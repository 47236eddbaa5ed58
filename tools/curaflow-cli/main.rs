use clap::{Parser, Subcommand};
use curaflow::prelude::*;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Validation and smart-default inspection for curation flow documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check every validator of a flow and whether the flow could be saved
    Check {
        /// Path to the flow JSON document
        flow_path: String,
        /// Flow name to check the save against (defaults to the document's name)
        #[arg(long)]
        name: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the extractor a node would read from
    Nearest {
        /// Path to the flow JSON document
        flow_path: String,
        /// Id of the node to search from
        node_id: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Check {
            flow_path,
            name,
            json,
        } => run_check(&flow_path, name, json),
        Command::Nearest { flow_path, node_id } => run_nearest(&flow_path, &node_id),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "curaflow=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_document(flow_path: &str) -> FlowDocument {
    let json = fs::read_to_string(flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read flow file '{}': {}", flow_path, e))
    });
    FlowDocument::from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load flow: {}", e)))
}

fn run_check(flow_path: &str, name: Option<String>, json: bool) {
    let document = load_document(flow_path);
    let name = name.unwrap_or_else(|| document.name.clone());

    let mut editor = FlowEditor::new();
    editor.load(document);
    let report = editor.check_report(&name);

    if json {
        let out = serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode report: {}", e)));
        println!("{}", out);
    } else {
        print_report(&report);
    }

    if report.is_blocked() {
        std::process::exit(1);
    }
}

fn print_report(report: &CheckReport) {
    println!("Flow '{}'", report.name);
    if report.validators.is_empty() {
        println!("  No validation agents in this flow.");
    }
    for v in &report.validators {
        let status = if v.requirement.needs_config {
            "NEEDS CONFIG"
        } else {
            "ok"
        };
        println!(
            "  -> {} ({}, input: {}): {}",
            v.node_id, v.agent_id, v.input_source, status
        );
        if let Some(reason) = &v.requirement.reason {
            println!("       {}", reason);
        }
        if !v.unresolved_placeholders.is_empty() {
            println!(
                "       unresolved references: {}",
                v.unresolved_placeholders.join(", ")
            );
        }
    }
    match &report.save_error {
        Some(e) => println!("\nSave blocked: {}", e),
        None => println!("\nFlow can be saved."),
    }
}

fn run_nearest(flow_path: &str, node_id: &str) {
    let document = load_document(flow_path);
    let flow = &document.flow;

    if flow.node(node_id).is_none() {
        println!("Node '{}' is not in the flow; searching the whole graph.", node_id);
    }
    match find_nearest_extractor(node_id, &flow.nodes, &flow.edges) {
        Some(extractor) => println!(
            "{} ({}) -> {}",
            extractor.id,
            extractor.agent_id,
            extractor.output_placeholder()
        ),
        None => println!("No extractor in this flow."),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
