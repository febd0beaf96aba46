// ABOUTME: Observer hooks for conversation and subagent lifecycle events.
// ABOUTME: Display/observability side channel; never part of control flow.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::tool::ToolResult;

/// Events fired during a conversation loop run.
#[derive(Debug, Clone)]
pub enum HookEvent {
    /// Fired at the start of each conversation turn.
    TurnStart { agent_id: String, turn: usize },

    /// Fired when a tool-use request is about to be dispatched.
    ToolUse {
        agent_id: String,
        tool_use_id: String,
        tool_name: String,
        input: Value,
    },

    /// Fired after a tool-use request has produced a result.
    ToolResult {
        agent_id: String,
        tool_use_id: String,
        tool_name: String,
        result: ToolResult,
    },

    /// Fired when a subagent is spawned.
    SubagentStart {
        agent_id: String,
        agent_type: String,
        task: String,
    },

    /// Fired when a subagent's nested loop finishes.
    SubagentStop {
        agent_id: String,
        agent_type: String,
        error: Option<String>,
    },
}

/// Trait for implementing observers.
///
/// Observers cannot block, transform, or fail the observed operation.
#[async_trait]
pub trait Hook: Send + Sync {
    /// Called when an event occurs.
    async fn on_event(&self, event: &HookEvent);

    /// Optional: filter which events this hook cares about.
    fn accepts(&self, event: &HookEvent) -> bool {
        let _ = event;
        true
    }
}

/// Registry for managing and firing hooks.
#[derive(Default)]
pub struct HookRegistry {
    hooks: RwLock<Vec<Arc<dyn Hook>>>,
}

impl HookRegistry {
    /// Create a new empty hook registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook.
    pub async fn register(&self, hook: impl Hook + 'static) {
        self.hooks.write().await.push(Arc::new(hook));
    }

    /// Register a hook wrapped in Arc.
    pub async fn register_arc(&self, hook: Arc<dyn Hook>) {
        self.hooks.write().await.push(hook);
    }

    /// Fire an event to all registered hooks, in registration order.
    pub async fn fire(&self, event: &HookEvent) {
        let hooks = self.hooks.read().await;
        for hook in hooks.iter() {
            if hook.accepts(event) {
                hook.on_event(event).await;
            }
        }
    }

    /// Get the number of registered hooks.
    pub async fn len(&self) -> usize {
        self.hooks.read().await.len()
    }

    /// Check if the registry is empty.
    pub async fn is_empty(&self) -> bool {
        self.hooks.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LoggingHook {
        events: Arc<RwLock<Vec<String>>>,
    }

    impl LoggingHook {
        fn new() -> (Self, Arc<RwLock<Vec<String>>>) {
            let events = Arc::new(RwLock::new(Vec::new()));
            (
                Self {
                    events: events.clone(),
                },
                events,
            )
        }
    }

    #[async_trait]
    impl Hook for LoggingHook {
        async fn on_event(&self, event: &HookEvent) {
            let msg = match event {
                HookEvent::TurnStart { turn, .. } => format!("turn:{}", turn),
                HookEvent::ToolUse { tool_name, .. } => format!("use:{}", tool_name),
                HookEvent::ToolResult { tool_name, .. } => format!("result:{}", tool_name),
                HookEvent::SubagentStart { agent_type, .. } => format!("spawn:{}", agent_type),
                HookEvent::SubagentStop { agent_type, .. } => format!("done:{}", agent_type),
            };
            self.events.write().await.push(msg);
        }
    }

    struct ToolUseOnlyHook {
        count: Arc<RwLock<usize>>,
    }

    #[async_trait]
    impl Hook for ToolUseOnlyHook {
        fn accepts(&self, event: &HookEvent) -> bool {
            matches!(event, HookEvent::ToolUse { .. })
        }

        async fn on_event(&self, _event: &HookEvent) {
            *self.count.write().await += 1;
        }
    }

    #[tokio::test]
    async fn test_fire_reaches_all_hooks() {
        let registry = HookRegistry::new();
        let (hook1, events1) = LoggingHook::new();
        let (hook2, events2) = LoggingHook::new();
        registry.register(hook1).await;
        registry.register(hook2).await;

        registry
            .fire(&HookEvent::TurnStart {
                agent_id: "a1".into(),
                turn: 1,
            })
            .await;

        assert_eq!(events1.read().await.len(), 1);
        assert_eq!(events2.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_accepts_filters_events() {
        let registry = HookRegistry::new();
        let count = Arc::new(RwLock::new(0));
        registry
            .register(ToolUseOnlyHook {
                count: count.clone(),
            })
            .await;

        registry
            .fire(&HookEvent::TurnStart {
                agent_id: "a1".into(),
                turn: 1,
            })
            .await;
        registry
            .fire(&HookEvent::ToolUse {
                agent_id: "a1".into(),
                tool_use_id: "tu_1".into(),
                tool_name: "bash".into(),
                input: serde_json::json!({}),
            })
            .await;

        assert_eq!(*count.read().await, 1);
    }

    #[tokio::test]
    async fn test_empty_registry_fires_without_observers() {
        let registry = HookRegistry::new();
        assert!(registry.is_empty().await);

        registry
            .fire(&HookEvent::SubagentStop {
                agent_id: "a1".into(),
                agent_type: "researcher".into(),
                error: None,
            })
            .await;

        assert_eq!(registry.len().await, 0);
    }
}
