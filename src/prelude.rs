// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use confab::prelude::*;` to get started quickly.

pub use crate::agent::{
    builtin_agents, register_builtin, AgentDefinition, AgentRegistry, AttributionRegistry,
    ConversationLoop, FilteredRegistry, LoopOutcome, Orchestrator, SpawnResult, TaskTool,
    DEFAULT_MODEL,
};
pub use crate::error::{ConfabError, LlmError, LoopError, SpawnError};
pub use crate::hook::{Hook, HookEvent, HookRegistry};
pub use crate::llm::{
    AnthropicClient, CompletionClient, ContentBlock, Message, Request, Response, Role, StopReason,
    ToolDefinition, Usage,
};
pub use crate::tool::{Registry, Tool, ToolResult};
pub use crate::tools::{BashTool, SkillTool, WebFetchTool, WebSearchTool, WriteTool};
