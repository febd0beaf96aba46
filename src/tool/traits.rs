// ABOUTME: Defines the Tool trait - the handler abstraction behind the
// ABOUTME: dispatch registry. One async execution method per tool.

use async_trait::async_trait;

use super::ToolResult;

/// A tool that can be executed on behalf of the model.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the model.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for the tool's input parameters.
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given parameters.
    ///
    /// Handlers may return `Err`; the dispatch boundary converts it to an
    /// error result, so failures never escape into the conversation loop.
    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error>;
}
