// ABOUTME: TaskTool - delegates a task to a subagent via the orchestrator.
// ABOUTME: Unknown agent types surface as error results, never as failures.

use std::sync::Arc;

use async_trait::async_trait;

use super::orchestrator::Orchestrator;
use crate::error::SpawnError;
use crate::tool::{Tool, ToolResult};

/// A tool that spawns subagents to handle delegated tasks.
///
/// Holds a direct reference to the orchestrator; there is no dynamic
/// lookup between the handler and the spawn path.
pub struct TaskTool {
    orchestrator: Arc<Orchestrator>,
}

impl TaskTool {
    /// Create a new TaskTool backed by the given orchestrator.
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self { orchestrator }
    }
}

#[async_trait]
impl Tool for TaskTool {
    fn name(&self) -> &str {
        "task"
    }

    fn description(&self) -> &str {
        "Delegate a task to a specialized subagent. The subagent runs with a restricted tool set and returns its final answer."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "subagent_type": {
                    "type": "string",
                    "description": "The type of agent to spawn (must be a registered agent type)"
                },
                "description": {
                    "type": "string",
                    "description": "The task for the subagent to perform"
                },
                "prompt": {
                    "type": "string",
                    "description": "Optional: full task prompt overriding the description"
                }
            },
            "required": ["subagent_type", "description"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        let subagent_type = params
            .get("subagent_type")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("Missing required parameter: subagent_type"))?;

        let description = params
            .get("description")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("Missing required parameter: description"))?;

        let task = params
            .get("prompt")
            .and_then(|v| v.as_str())
            .unwrap_or(description);

        match self.orchestrator.spawn(subagent_type, task).await {
            Ok(result) => Ok(ToolResult::text(result.content)),
            Err(SpawnError::UnknownAgent(agent_type)) => {
                let available = self.orchestrator.agents().list().await;
                Ok(ToolResult::error(format!(
                    "Unknown subagent type '{}'. Available types: {}",
                    agent_type,
                    available.join(", ")
                )))
            }
            Err(e) => Ok(ToolResult::error(format!("Subagent failed: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentDefinition, AgentRegistry};
    use crate::tool::Registry;

    fn orchestrator_without_client(agents: AgentRegistry) -> Arc<Orchestrator> {
        Arc::new(Orchestrator::new(agents, Registry::new(), |_| {
            panic!("no completion client should be created")
        }))
    }

    #[tokio::test]
    async fn test_task_tool_schema() {
        let tool = TaskTool::new(orchestrator_without_client(AgentRegistry::new()));

        let schema = tool.schema();
        assert!(schema["properties"].get("subagent_type").is_some());
        assert!(schema["properties"].get("description").is_some());
        assert_eq!(schema["required"][0], "subagent_type");
    }

    #[tokio::test]
    async fn test_unknown_subagent_type_is_error_result() {
        let agents = AgentRegistry::new();
        agents
            .register(AgentDefinition::new("researcher", "You research things."))
            .await;

        let tool = TaskTool::new(orchestrator_without_client(agents));

        let result = tool
            .execute(serde_json::json!({
                "subagent_type": "nonexistent",
                "description": "do something"
            }))
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(result.content.contains("nonexistent"));
        assert!(result.content.contains("researcher"));
    }

    #[tokio::test]
    async fn test_missing_subagent_type_rejected() {
        let tool = TaskTool::new(orchestrator_without_client(AgentRegistry::new()));

        let result = tool
            .execute(serde_json::json!({"description": "orphan task"}))
            .await;

        assert!(result.is_err());
    }
}
