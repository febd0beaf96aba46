// ABOUTME: Completion client module - boundary to the hosted model service.
// ABOUTME: Defines conversation types, the client trait, and the Anthropic adapter.

mod anthropic;
mod client;
mod types;

pub use anthropic::*;
pub use client::*;
pub use types::*;

#[cfg(test)]
mod types_test;
