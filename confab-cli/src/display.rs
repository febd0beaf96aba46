// ABOUTME: DisplayHook - renders tool activity during a conversation and
// ABOUTME: labels subagent spawns via the attribution registry.

use async_trait::async_trait;

use confab::prelude::{AttributionRegistry, Hook, HookEvent};

const DISPLAY_TRUNCATE: usize = 500;

/// Observer that prints tool activity to the terminal.
///
/// For task tool-use requests it records `tool_use_id -> subagent_type`
/// in the attribution registry. The label is display-only; which subagent
/// actually runs is always decided from the request input itself.
pub struct DisplayHook {
    attribution: AttributionRegistry,
}

impl DisplayHook {
    pub fn new(attribution: AttributionRegistry) -> Self {
        Self { attribution }
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > DISPLAY_TRUNCATE {
        let shortened: String = text.chars().take(DISPLAY_TRUNCATE).collect();
        format!("{}...\n[truncated, {} chars total]", shortened, text.chars().count())
    } else {
        text.to_string()
    }
}

#[async_trait]
impl Hook for DisplayHook {
    async fn on_event(&self, event: &HookEvent) {
        match event {
            HookEvent::ToolUse {
                tool_use_id,
                tool_name,
                input,
                ..
            } => {
                if tool_name == "task" {
                    if let Some(agent_type) =
                        input.get("subagent_type").and_then(|v| v.as_str())
                    {
                        self.attribution.record(tool_use_id, agent_type).await;
                    }
                    let label = self.attribution.label(tool_use_id).await;
                    println!("\n[task -> {}]", label);
                } else {
                    println!("\n[{}]", tool_name);
                }
            }
            HookEvent::ToolResult {
                tool_use_id,
                tool_name,
                result,
                ..
            } => {
                if result.is_error {
                    println!("error: {}\n", truncate(&result.content));
                } else {
                    println!("{}\n", truncate(&result.content));
                }
                if tool_name == "task" {
                    let label = self.attribution.label(tool_use_id).await;
                    println!("[task -> {} finished]", label);
                }
            }
            HookEvent::SubagentStart {
                agent_type, task, ..
            } => {
                println!("[subagent {}: {}]", agent_type, truncate(task));
            }
            HookEvent::SubagentStop {
                agent_type, error, ..
            } => {
                if let Some(error) = error {
                    println!("[subagent {} failed: {}]", agent_type, error);
                }
            }
            HookEvent::TurnStart { agent_id, turn } => {
                tracing::debug!(agent_id = %agent_id, turn, "turn started");
            }
        }
    }
}
