use super::conversion::{IntoFlow, UiFlow};
use super::definition::FlowDefinition;
use crate::error::FlowConversionError;
use serde::{Deserialize, Serialize};

/// A named flow as it is persisted by the surrounding application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowDocument {
    pub name: String,
    pub description: Option<String>,
    pub flow: FlowDefinition,
}

/// JSON shape of a persisted flow: the canvas graph plus its metadata.
#[derive(Serialize, Deserialize)]
struct RawDocument {
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(flatten)]
    canvas: UiFlow,
}

impl FlowDocument {
    pub fn new(name: impl Into<String>, flow: FlowDefinition) -> Self {
        Self {
            name: name.into(),
            description: None,
            flow,
        }
    }

    /// Parses a persisted flow document and converts its canvas graph.
    pub fn from_json(json: &str) -> Result<Self, FlowConversionError> {
        let raw: RawDocument = serde_json::from_str(json)
            .map_err(|e| FlowConversionError::JsonParseError(e.to_string()))?;
        Ok(Self {
            name: raw.name,
            description: raw.description,
            flow: raw.canvas.into_flow()?,
        })
    }

    pub fn to_json(&self) -> Result<String, FlowConversionError> {
        let raw = RawDocument {
            name: self.name.clone(),
            description: self.description.clone(),
            canvas: UiFlow::from(&self.flow),
        };
        serde_json::to_string_pretty(&raw)
            .map_err(|e| FlowConversionError::JsonSerializeError(e.to_string()))
    }
}
