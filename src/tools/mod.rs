// ABOUTME: Built-in tool handlers for the agent loop.
// ABOUTME: Skill stub, scoped file writes, command execution, and web access.

mod bash;
mod skill;
mod web_fetch;
mod web_search;
mod write;

pub use bash::BashTool;
pub use skill::SkillTool;
pub use web_fetch::WebFetchTool;
pub use web_search::WebSearchTool;
pub use write::WriteTool;
