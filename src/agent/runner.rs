// ABOUTME: ConversationLoop - the turn-based completion/tool-execution loop.
// ABOUTME: Runs until the model answers without tool use or a budget expires.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use uuid::Uuid;

use super::filter::FilteredRegistry;
use crate::error::LoopError;
use crate::hook::{HookEvent, HookRegistry};
use crate::llm::{CompletionClient, ContentBlock, Message, Request, Usage};

/// Model used when neither the caller nor an agent definition picks one.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

const DEFAULT_MAX_TOKENS: u32 = 4096;
const DEFAULT_MAX_TURNS: usize = 10;

/// Result of a completed conversation loop run.
#[derive(Debug, Clone)]
pub struct LoopOutcome {
    /// The final assistant message (no tool-use blocks).
    pub message: Message,

    /// Number of completion calls made.
    pub turns: usize,

    /// Number of tool-use requests executed.
    pub tool_use_count: usize,

    /// Total token usage across all completion calls.
    pub usage: Usage,
}

/// The turn-based conversation loop.
///
/// Each run starts from a fresh history seeded with one user message and
/// drives completion calls and tool execution until the model stops
/// requesting tools. Tool-use requests execute sequentially in emission
/// order; handler failures come back as error results, never as loop
/// failures.
pub struct ConversationLoop {
    agent_id: String,
    client: Arc<dyn CompletionClient>,
    tools: FilteredRegistry,
    hooks: Arc<HookRegistry>,
    system_prompt: String,
    model: String,
    max_tokens: u32,
    max_turns: usize,
    deadline: Option<Duration>,
}

impl ConversationLoop {
    /// Create a new loop over the given client and tool view.
    pub fn new(
        client: Arc<dyn CompletionClient>,
        tools: FilteredRegistry,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            agent_id: Uuid::new_v4().to_string(),
            client,
            tools,
            hooks: Arc::new(HookRegistry::new()),
            system_prompt: system_prompt.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            max_turns: DEFAULT_MAX_TURNS,
            deadline: None,
        }
    }

    /// Set the model identifier.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the maximum output tokens per completion call.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the maximum number of turns before the run is cut off.
    pub fn max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set a wall-clock budget for the whole run.
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Attach an observer registry.
    pub fn hooks(mut self, hooks: Arc<HookRegistry>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Get this loop's instance id.
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Run the loop to completion from a single initial user message.
    ///
    /// Returns the final assistant message, or a terminal error when the
    /// turn or wall-clock budget runs out.
    pub async fn run(&self, initial_user_text: &str) -> Result<LoopOutcome, LoopError> {
        let started = Instant::now();
        let mut messages = vec![Message::user(initial_user_text)];
        let mut usage = Usage::default();
        let mut tool_use_count = 0;
        let mut turns = 0;

        let catalog = self.tools.to_definitions().await;

        loop {
            if turns >= self.max_turns {
                return Err(LoopError::TurnLimit {
                    max_turns: self.max_turns,
                });
            }
            if let Some(deadline) = self.deadline {
                if started.elapsed() >= deadline {
                    return Err(LoopError::Deadline);
                }
            }

            turns += 1;
            self.hooks
                .fire(&HookEvent::TurnStart {
                    agent_id: self.agent_id.clone(),
                    turn: turns,
                })
                .await;
            tracing::debug!(agent_id = %self.agent_id, turn = turns, "completion call");

            let request = Request::new(&self.model)
                .system(&self.system_prompt)
                .messages(messages.clone())
                .tools(catalog.clone())
                .max_tokens(self.max_tokens);

            let response = self.client.complete(&request).await?;
            usage.absorb(&response.usage);

            if !response.has_tool_use() {
                // Normal termination: the model answered without tools.
                return Ok(LoopOutcome {
                    message: response.into_message(),
                    turns,
                    tool_use_count,
                    usage,
                });
            }

            // Execute every tool-use request in emission order; handlers
            // may have order-dependent side effects.
            let mut tool_results = Vec::new();
            for block in &response.content {
                if let ContentBlock::ToolUse { id, name, input } = block {
                    tool_use_count += 1;
                    self.hooks
                        .fire(&HookEvent::ToolUse {
                            agent_id: self.agent_id.clone(),
                            tool_use_id: id.clone(),
                            tool_name: name.clone(),
                            input: input.clone(),
                        })
                        .await;

                    let result = self.tools.dispatch(name, input.clone()).await;

                    self.hooks
                        .fire(&HookEvent::ToolResult {
                            agent_id: self.agent_id.clone(),
                            tool_use_id: id.clone(),
                            tool_name: name.clone(),
                            result: result.clone(),
                        })
                        .await;

                    tool_results.push(if result.is_error {
                        ContentBlock::tool_error(id, &result.content)
                    } else {
                        ContentBlock::tool_result(id, &result.content)
                    });
                }
            }

            // The raw assistant message goes into history first, then one
            // user message carrying the results matched by tool_use_id.
            messages.push(response.into_message());
            messages.push(Message::tool_results(tool_results));
        }
    }
}
