//! The text-generation seam.

use async_trait::async_trait;
use thiserror::Error;

/// Failure of one generation request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// No API credential was configured.
    #[error("No API key configured for the generation API")]
    MissingCredential,

    /// The request never produced an HTTP response.
    #[error("Generation request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status.
    #[error("Generation API returned {status}: {message}")]
    Http {
        status: u16,
        message: String,
        is_retryable: bool,
    },

    /// The response could not be decoded.
    #[error("Failed to parse generation response: {0}")]
    Parse(String),

    /// The response decoded but carried no text.
    #[error("Generation API returned no text")]
    EmptyResponse,
}

/// Produces a reply to `message` under a system instruction.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    async fn generate(&self, system_instruction: &str, message: &str)
    -> Result<String, AgentError>;
}

/// Stand-in used when no API credential is available. Every call fails with
/// [`AgentError::MissingCredential`].
#[derive(Debug, Clone, Default)]
pub struct OfflineAgent;

#[async_trait]
impl Agent for OfflineAgent {
    fn name(&self) -> &str {
        "offline"
    }

    async fn generate(
        &self,
        _system_instruction: &str,
        _message: &str,
    ) -> Result<String, AgentError> {
        Err(AgentError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_agent_reports_missing_credential() {
        let agent = OfflineAgent;
        assert_eq!(
            agent.generate("system", "hello").await,
            Err(AgentError::MissingCredential)
        );
    }
}
