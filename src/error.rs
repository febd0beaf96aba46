// ABOUTME: Defines all error types for the confab library using thiserror.
// ABOUTME: Each layer has its own error enum, unified under ConfabError.

/// Top-level error type for the confab library.
#[derive(Debug, thiserror::Error)]
pub enum ConfabError {
    #[error("completion error: {0}")]
    Llm(#[from] LlmError),

    #[error("conversation error: {0}")]
    Loop(#[from] LoopError),

    #[error("subagent error: {0}")]
    Spawn(#[from] SpawnError),
}

/// Errors from the completion client adapter.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Terminal conditions of a conversation loop run.
///
/// Budget exhaustion is reported to the loop's caller, never fed back to
/// the model as a tool result.
#[derive(Debug, thiserror::Error)]
pub enum LoopError {
    #[error("completion call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("conversation exceeded {max_turns} turns")]
    TurnLimit { max_turns: usize },

    #[error("conversation deadline exceeded")]
    Deadline,
}

/// Errors from spawning a subagent.
#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error("unknown agent type '{0}'")]
    UnknownAgent(String),

    #[error(transparent)]
    Loop(#[from] LoopError),
}
