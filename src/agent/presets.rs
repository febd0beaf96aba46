// ABOUTME: Built-in agent catalog - definitions registered at session start.
// ABOUTME: Each agent gets a focused prompt and a restricted tool subset.

use super::definition::{AgentDefinition, AgentRegistry};

const RESEARCHER_PROMPT: &str = r#"You are a researcher. Your job is to gather and synthesize information from the web.

Guidelines:
- Use web search to find relevant sources
- Fetch pages to read them in detail
- Cross-reference findings from multiple sources
- Summarize key findings clearly and cite the URLs you used"#;

const CODER_PROMPT: &str = r#"You are a coding agent. Your job is to implement changes and run commands.

Guidelines:
- Write files with complete, working content
- Run commands to verify your changes
- Make minimal, focused changes
- Report what you changed and why"#;

const GENERAL_PROMPT: &str = r#"You are a general-purpose assistant. Complete the delegated task using the tools available to you, then report the outcome concisely."#;

/// The built-in agent definitions.
///
/// None of them may spawn further subagents; `task` is deliberately
/// absent from every subset.
pub fn builtin_agents() -> Vec<AgentDefinition> {
    vec![
        AgentDefinition::new("researcher", RESEARCHER_PROMPT)
            .description("Gathers and synthesizes information from the web")
            .allowed_tools(vec!["web_search".into(), "web_fetch".into()])
            .max_turns(15),
        AgentDefinition::new("coder", CODER_PROMPT)
            .description("Writes files and runs commands")
            .allowed_tools(vec!["write".into(), "bash".into()])
            .max_turns(20),
        AgentDefinition::new("general", GENERAL_PROMPT)
            .description("General-purpose agent with the full built-in tool set")
            .allowed_tools(vec![
                "skill".into(),
                "write".into(),
                "bash".into(),
                "web_search".into(),
                "web_fetch".into(),
            ])
            .max_turns(15),
    ]
}

/// Register the built-in agents into a catalog.
pub async fn register_builtin(registry: &AgentRegistry) {
    for definition in builtin_agents() {
        registry.register(definition).await;
    }
}
