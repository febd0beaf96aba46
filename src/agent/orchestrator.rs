// ABOUTME: Orchestrator - resolves agent definitions and runs nested,
// ABOUTME: capability-scoped conversation loops to completion.

use std::sync::Arc;

use super::definition::AgentRegistry;
use super::filter::FilteredRegistry;
use super::runner::{ConversationLoop, DEFAULT_MODEL};
use crate::error::SpawnError;
use crate::hook::{HookEvent, HookRegistry};
use crate::llm::{CompletionClient, Usage};
use crate::tool::Registry;

/// Result from a completed subagent run.
#[derive(Debug, Clone)]
pub struct SpawnResult {
    /// Unique identifier for this agent run.
    pub agent_id: String,

    /// Concatenated text of the agent's final message.
    pub content: String,

    /// Number of turns the agent's loop took.
    pub turns: usize,

    /// Number of tool calls made during execution.
    pub tool_use_count: usize,

    /// Total token usage across the agent's completion calls.
    pub usage: Usage,
}

/// Spawns subagents: each one is a fresh conversation loop restricted to
/// the tools its definition declares, run to completion before the caller
/// resumes. No message history is shared with the parent.
pub struct Orchestrator {
    agents: AgentRegistry,
    tools: Registry,
    client_factory: Arc<dyn Fn(&str) -> Arc<dyn CompletionClient> + Send + Sync>,
    hooks: Arc<HookRegistry>,
}

impl Orchestrator {
    /// Create a new orchestrator.
    ///
    /// `client_factory` creates a completion client for a given model name.
    pub fn new<F>(agents: AgentRegistry, tools: Registry, client_factory: F) -> Self
    where
        F: Fn(&str) -> Arc<dyn CompletionClient> + Send + Sync + 'static,
    {
        Self {
            agents,
            tools,
            client_factory: Arc::new(client_factory),
            hooks: Arc::new(HookRegistry::new()),
        }
    }

    /// Create with a single client shared by all models.
    pub fn with_default_client(
        agents: AgentRegistry,
        tools: Registry,
        client: Arc<dyn CompletionClient>,
    ) -> Self {
        let client_clone = client.clone();
        Self::new(agents, tools, move |_| client_clone.clone())
    }

    /// Attach an observer registry, shared with spawned loops.
    pub fn with_hooks(mut self, hooks: Arc<HookRegistry>) -> Self {
        self.hooks = hooks;
        self
    }

    /// The agent catalog.
    pub fn agents(&self) -> &AgentRegistry {
        &self.agents
    }

    /// Spawn a subagent and run it to completion on the given task.
    ///
    /// The subagent's loop is scoped to the definition's tool subset and
    /// starts from the task description as its sole user message.
    pub async fn spawn(&self, agent_type: &str, task: &str) -> Result<SpawnResult, SpawnError> {
        let definition = self
            .agents
            .get(agent_type)
            .await
            .ok_or_else(|| SpawnError::UnknownAgent(agent_type.to_string()))?;

        let model = definition
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let client = (self.client_factory)(&model);

        let tools = FilteredRegistry::new(self.tools.clone())
            .allowed(Some(definition.allowed_tools.clone()));

        let conversation = ConversationLoop::new(client, tools, &definition.system_prompt)
            .model(&model)
            .max_turns(definition.max_turns)
            .hooks(self.hooks.clone());
        let agent_id = conversation.agent_id().to_string();

        self.hooks
            .fire(&HookEvent::SubagentStart {
                agent_id: agent_id.clone(),
                agent_type: agent_type.to_string(),
                task: task.to_string(),
            })
            .await;
        tracing::debug!(agent_id = %agent_id, agent_type, "subagent spawned");

        let outcome = match conversation.run(task).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.hooks
                    .fire(&HookEvent::SubagentStop {
                        agent_id: agent_id.clone(),
                        agent_type: agent_type.to_string(),
                        error: Some(e.to_string()),
                    })
                    .await;
                return Err(e.into());
            }
        };

        self.hooks
            .fire(&HookEvent::SubagentStop {
                agent_id: agent_id.clone(),
                agent_type: agent_type.to_string(),
                error: None,
            })
            .await;

        Ok(SpawnResult {
            agent_id,
            content: outcome.message.text(),
            turns: outcome.turns,
            tool_use_count: outcome.tool_use_count,
            usage: outcome.usage,
        })
    }
}
