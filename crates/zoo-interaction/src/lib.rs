//! Interaction with the external text-generation API.
//!
//! - `agent`: the [`Agent`] seam and the credential-less [`OfflineAgent`]
//! - `gemini_api_agent`: REST client for Gemini `generateContent`
//! - `prompt`: guidebook context block and system instruction
//! - `assistant`: the chat session that ties them together

pub mod agent;
pub mod assistant;
pub mod gemini_api_agent;
pub mod prompt;

pub use agent::{Agent, AgentError, OfflineAgent};
pub use assistant::{AssistantSession, RejectReason, SendOutcome};
pub use gemini_api_agent::GeminiApiAgent;
pub use prompt::PromptBuilder;

use std::sync::Arc;

use zoo_core::config::AssistantConfig;

/// Picks the agent for this process: Gemini when an API key is present in
/// the environment, otherwise the offline stand-in.
pub fn agent_from_env(config: &AssistantConfig) -> Arc<dyn Agent> {
    match GeminiApiAgent::from_env(config) {
        Ok(agent) => {
            tracing::info!("Using Gemini model {}", agent.model());
            Arc::new(agent)
        }
        Err(e) => {
            tracing::warn!("{}; the assistant will answer with its offline message", e);
            Arc::new(OfflineAgent)
        }
    }
}
