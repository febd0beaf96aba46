// ABOUTME: WebFetchTool - fetches content from URLs with an outbound GET.
// ABOUTME: Returns at most the first 5000 characters of the body.

use async_trait::async_trait;
use serde::Deserialize;

use crate::tool::{Tool, ToolResult};

const MAX_FETCH_CHARS: usize = 5000;

/// Tool for fetching web content from URLs.
pub struct WebFetchTool {
    client: reqwest::Client,
}

impl Default for WebFetchTool {
    fn default() -> Self {
        Self::new()
    }
}

impl WebFetchTool {
    /// Create a new WebFetchTool with default settings.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("confab/0.3")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    /// Create with a custom reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WebFetchTool {
    fn name(&self) -> &str {
        "web_fetch"
    }

    fn description(&self) -> &str {
        "Fetch content from a URL. Returns the beginning of the response body as text."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "The URL to fetch"
                },
                "prompt": {
                    "type": "string",
                    "description": "What to look for in the fetched content"
                }
            },
            "required": ["url"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            url: String,
        }
        let params: Params = serde_json::from_value(params)?;

        let url = if !params.url.starts_with("http://") && !params.url.starts_with("https://") {
            format!("https://{}", params.url)
        } else {
            params.url
        };

        let response = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => return Ok(ToolResult::error(format!("Failed to fetch URL: {}", e))),
        };

        let status = response.status();
        if !status.is_success() {
            return Ok(ToolResult::error(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => return Ok(ToolResult::error(format!("Failed to read response: {}", e))),
        };

        let content: String = body.chars().take(MAX_FETCH_CHARS).collect();
        Ok(ToolResult::text(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_connection_refused_is_error() {
        let tool = WebFetchTool::new();
        let result = tool
            .execute(serde_json::json!({
                "url": "http://127.0.0.1:9/nothing"
            }))
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(result.content.contains("Failed to fetch URL"));
    }

    #[tokio::test]
    async fn test_fetch_malformed_url_is_error() {
        let tool = WebFetchTool::new();
        let result = tool
            .execute(serde_json::json!({
                "url": "http://not a url"
            }))
            .await
            .unwrap();

        assert!(result.is_error);
    }

    #[test]
    fn test_truncation_is_char_safe() {
        let body: String = "é".repeat(MAX_FETCH_CHARS + 100);
        let content: String = body.chars().take(MAX_FETCH_CHARS).collect();
        assert_eq!(content.chars().count(), MAX_FETCH_CHARS);
    }
}
