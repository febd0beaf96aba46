// ABOUTME: Defines the CompletionClient trait - the adapter boundary that
// ABOUTME: hides the hosted completion service's wire format.

use async_trait::async_trait;

use super::{Request, Response};
use crate::error::LlmError;

/// Adapter to the hosted completion service.
///
/// One call per loop turn: the full message history goes out, one assistant
/// message with an ordered sequence of content blocks comes back.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one completion request and return the assistant's message.
    async fn complete(&self, req: &Request) -> Result<Response, LlmError>;
}
