use thiserror::Error;

/// Errors that can occur when converting a canvas document into a curaflow `FlowDefinition`.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Failed to parse flow JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to write flow JSON: {0}")]
    JsonSerializeError(String),

    #[error("Node id '{0}' appears more than once in the flow")]
    DuplicateNodeId(String),

    #[error("Flow contains {count} task_input nodes, but at most one is allowed")]
    MultipleTaskInputs { count: usize },

    /// Returned by `IntoFlow` implementations whose source data cannot form a flow.
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors returned by `FlowEditor` mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Node '{0}' not found in the current flow")]
    NodeNotFound(String),

    #[error("The flow already has a task_input node ('{existing_node_id}')")]
    DuplicateTaskInput { existing_node_id: String },

    #[error("No node ids are left to assign in this flow")]
    IdsExhausted,
}

/// Save-blocking problems detected before a flow is persisted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("Flow name must not be empty")]
    EmptyFlowName,

    #[error("Flow has no task_input node")]
    MissingTaskInput,

    #[error(
        "Node '{node_id}' has {outgoing} outgoing connections; parallel branching is not supported"
    )]
    ParallelBranching { node_id: String, outgoing: usize },

    #[error("Node '{node_id}' needs configuration: {reason}")]
    NeedsConfiguration { node_id: String, reason: String },
}

/// Errors that can occur while writing or reading an editor session snapshot.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Could not access session file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Session serialization failed: {0}")]
    Encode(String),

    #[error("Session deserialization failed: {0}")]
    Decode(String),
}
