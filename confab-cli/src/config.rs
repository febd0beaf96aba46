// ABOUTME: Environment configuration for the interactive session.
// ABOUTME: The API key is required; base URL and bridge token are optional.

use anyhow::{anyhow, Result};

use confab::prelude::DEFAULT_MODEL;

const DEFAULT_MAX_TURNS: usize = 10;

/// Session configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the completion service. Required.
    pub api_key: String,

    /// Optional base URL override for the completion service.
    pub base_url: Option<String>,

    /// Optional token reserved for the pluggable capability bridge.
    pub bridge_token: Option<String>,

    /// Model for the top-level conversation.
    pub model: String,

    /// Turn budget per conversation.
    pub max_turns: usize,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// A missing API key aborts startup; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| anyhow!("ANTHROPIC_API_KEY is not set; refusing to start"))?;

        let base_url = std::env::var("ANTHROPIC_BASE_URL").ok();
        let bridge_token = std::env::var("MCP_BRIDGE_TOKEN").ok();

        let model =
            std::env::var("CONFAB_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let max_turns = std::env::var("CONFAB_MAX_TURNS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_TURNS);

        Ok(Self {
            api_key,
            base_url,
            bridge_token,
            model,
            max_turns,
        })
    }
}
