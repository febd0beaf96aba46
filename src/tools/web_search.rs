// ABOUTME: WebSearchTool - performs web searches via the DuckDuckGo
// ABOUTME: instant-answer API; returns abstract plus related results.

use async_trait::async_trait;
use serde::Deserialize;

use crate::tool::{Tool, ToolResult};

const DEFAULT_MAX_RESULTS: usize = 5;

/// Default instant-answer endpoint.
const SEARCH_BASE_URL: &str = "https://api.duckduckgo.com";

/// Tool for performing web searches.
pub struct WebSearchTool {
    client: reqwest::Client,
    base_url: String,
}

impl Default for WebSearchTool {
    fn default() -> Self {
        Self::new()
    }
}

impl WebSearchTool {
    /// Create a new WebSearchTool.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("confab/0.3")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            base_url: SEARCH_BASE_URL.to_string(),
        }
    }

    /// Create with a custom reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: SEARCH_BASE_URL.to_string(),
        }
    }

    /// Override the search endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

/// Instant-answer response shape. Related topics nest one level deep when
/// DuckDuckGo groups them by category.
#[derive(Debug, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "AbstractText", default)]
    abstract_text: String,
    #[serde(rename = "AbstractURL", default)]
    abstract_url: String,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

#[derive(Debug, Deserialize)]
struct RelatedTopic {
    #[serde(rename = "Text", default)]
    text: String,
    #[serde(rename = "FirstURL", default)]
    first_url: String,
    #[serde(rename = "Topics", default)]
    topics: Vec<RelatedTopic>,
}

fn flatten_topics<'a>(topics: &'a [RelatedTopic], out: &mut Vec<&'a RelatedTopic>) {
    for topic in topics {
        if !topic.topics.is_empty() {
            flatten_topics(&topic.topics, out);
        } else if !topic.text.is_empty() {
            out.push(topic);
        }
    }
}

impl InstantAnswer {
    fn render(&self, query: &str, max_results: usize) -> String {
        let mut output = String::new();

        if !self.abstract_text.is_empty() {
            output.push_str(&self.abstract_text);
            if !self.abstract_url.is_empty() {
                output.push_str(&format!("\n{}", self.abstract_url));
            }
            output.push_str("\n\n");
        }

        let mut topics = Vec::new();
        flatten_topics(&self.related_topics, &mut topics);

        for (i, topic) in topics.iter().take(max_results).enumerate() {
            output.push_str(&format!("{}. {}\n   {}\n", i + 1, topic.text, topic.first_url));
        }

        if output.is_empty() {
            format!("No results found for \"{}\".", query)
        } else {
            output
        }
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Search the web for information. Returns a summary abstract plus related results."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of related results to return (default: 5)",
                    "default": 5
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            query: String,
            #[serde(default = "default_max_results")]
            max_results: usize,
        }

        fn default_max_results() -> usize {
            DEFAULT_MAX_RESULTS
        }

        let params: Params = serde_json::from_value(params)?;

        let url = format!(
            "{}/?q={}&format=json&no_html=1&skip_disambig=1",
            self.base_url,
            urlencoding::encode(&params.query)
        );

        let response = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => return Ok(ToolResult::error(format!("Search failed: {}", e))),
        };

        if !response.status().is_success() {
            return Ok(ToolResult::error(format!(
                "Search failed with status: {}",
                response.status()
            )));
        }

        let answer: InstantAnswer = match response.json().await {
            Ok(answer) => answer,
            Err(e) => {
                return Ok(ToolResult::error(format!(
                    "Failed to parse search response: {}",
                    e
                )));
            }
        };

        Ok(ToolResult::text(
            answer.render(&params.query, params.max_results),
        ))
    }
}
