// ABOUTME: Interactive agent session - the confab REPL entry point.
// ABOUTME: Wires config, tools, the agent catalog, attribution, and display.

mod config;
mod display;

use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;

use confab::prelude::*;

use crate::config::Config;
use crate::display::DisplayHook;

const SYSTEM_PROMPT: &str = "You are a helpful assistant. You can invoke skills, write files, run \
shell commands, search the web, fetch pages, and delegate work to specialized subagents with the \
task tool. Be concise in your responses.";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    if config.bridge_token.is_some() {
        tracing::debug!("capability bridge token present (bridge not wired)");
    }

    let mut anthropic = AnthropicClient::new(&config.api_key);
    if let Some(base_url) = &config.base_url {
        anthropic = anthropic.with_base_url(base_url);
    }
    let client: Arc<dyn CompletionClient> = Arc::new(anthropic);

    // Built-in tools
    let registry = Registry::new();
    let project_root = std::env::current_dir()?;
    registry.register(SkillTool).await;
    registry.register(WriteTool::new(&project_root)).await;
    registry.register(BashTool::new()).await;
    registry.register(WebSearchTool::new()).await;
    registry.register(WebFetchTool::new()).await;

    // Agent catalog
    let agents = AgentRegistry::new();
    register_builtin(&agents).await;

    // Session state: attribution is created here and cleared on exit.
    let attribution = AttributionRegistry::new();
    let hooks = Arc::new(HookRegistry::new());
    hooks
        .register(DisplayHook::new(attribution.clone()))
        .await;

    // The task tool holds the orchestrator directly.
    let orchestrator = Arc::new(
        Orchestrator::with_default_client(agents, registry.clone(), client.clone())
            .with_hooks(hooks.clone()),
    );
    registry.register(TaskTool::new(orchestrator)).await;

    let tools = registry.list().await;
    println!("confab - tools: {}", tools.join(", "));
    println!("Type 'exit' to quit.\n");

    run_session(&config, client, registry, hooks).await?;

    attribution.clear().await;
    Ok(())
}

async fn run_session(
    config: &Config,
    client: Arc<dyn CompletionClient>,
    registry: Registry,
    hooks: Arc<HookRegistry>,
) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        // End of input also ends the session.
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(_) => break,
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") {
            break;
        }
        let _ = rl.add_history_entry(line);

        let conversation = ConversationLoop::new(
            client.clone(),
            FilteredRegistry::new(registry.clone()),
            SYSTEM_PROMPT,
        )
        .model(&config.model)
        .max_turns(config.max_turns)
        .hooks(hooks.clone());

        match conversation.run(line).await {
            Ok(outcome) => {
                let text = outcome.message.text();
                if !text.is_empty() {
                    println!("\n{}\n", text);
                }
            }
            Err(e) => eprintln!("\nconversation ended: {}\n", e),
        }
    }

    Ok(())
}
