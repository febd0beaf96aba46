// ABOUTME: Agent definition types - configuration for spawning subagents.
// ABOUTME: AgentRegistry holds the catalog of spawnable agent types.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Definition of an agent type that can be spawned.
#[derive(Debug, Clone)]
pub struct AgentDefinition {
    /// Unique identifier for this agent type.
    pub agent_type: String,

    /// What this agent is for, shown to the delegating model.
    pub description: String,

    /// System prompt for this agent.
    pub system_prompt: String,

    /// The only tools this agent may use. A spawned agent never sees the
    /// full catalog.
    pub allowed_tools: Vec<String>,

    /// Model to use. If None, the orchestrator's default applies.
    pub model: Option<String>,

    /// Maximum turns for the agent's conversation loop.
    pub max_turns: usize,
}

impl AgentDefinition {
    /// Create a new agent definition with required fields.
    pub fn new(agent_type: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            agent_type: agent_type.into(),
            description: String::new(),
            system_prompt: system_prompt.into(),
            allowed_tools: Vec::new(),
            model: None,
            max_turns: 10,
        }
    }

    /// Set the catalog description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the allowed tool subset.
    pub fn allowed_tools(mut self, tools: Vec<String>) -> Self {
        self.allowed_tools = tools;
        self
    }

    /// Set the model for this agent.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the maximum turn count.
    pub fn max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }
}

/// Registry of available agent definitions.
#[derive(Default)]
pub struct AgentRegistry {
    agents: Arc<RwLock<HashMap<String, AgentDefinition>>>,
}

impl AgentRegistry {
    /// Create a new empty agent registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent definition.
    pub async fn register(&self, definition: AgentDefinition) {
        let mut agents = self.agents.write().await;
        agents.insert(definition.agent_type.clone(), definition);
    }

    /// Get an agent definition by type.
    pub async fn get(&self, agent_type: &str) -> Option<AgentDefinition> {
        let agents = self.agents.read().await;
        agents.get(agent_type).cloned()
    }

    /// List all registered agent types, sorted.
    pub async fn list(&self) -> Vec<String> {
        let agents = self.agents.read().await;
        let mut types: Vec<_> = agents.keys().cloned().collect();
        types.sort();
        types
    }
}

impl Clone for AgentRegistry {
    fn clone(&self) -> Self {
        Self {
            agents: Arc::clone(&self.agents),
        }
    }
}
