use crate::flow::{InputSource, Node};

/// Whether a node's custom input explicitly names the output of one of `extractors`.
///
/// Only the extractors passed in count. A `{{key}}` left behind by a deleted extractor is
/// not a reference.
pub fn validator_has_explicit_extractor_input(node: &Node, extractors: &[&Node]) -> bool {
    if node.input_source != InputSource::Custom {
        return false;
    }
    let Some(custom_input) = node.custom_input.as_deref().filter(|s| !s.is_empty()) else {
        return false;
    };
    extractors
        .iter()
        .any(|ext| custom_input.contains(&ext.output_placeholder()))
}

/// Names of the `{{name}}` placeholders in `text`, trimmed, in order of appearance.
pub fn placeholders(text: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find("{{") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            break;
        };
        let name = after_open[..close].trim();
        if !name.is_empty() {
            names.push(name);
        }
        rest = &after_open[close + 2..];
    }
    names
}
