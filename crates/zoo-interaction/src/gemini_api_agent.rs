//! GeminiApiAgent - Direct REST API implementation for Gemini.
//!
//! One `generateContent` call per question: the guidebook prompt goes in the
//! system instruction and the visitor's message is the only user turn.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use zoo_core::config::{API_KEY_ENV_VARS, AssistantConfig, DEFAULT_GEMINI_BASE_URL};

use crate::agent::{Agent, AgentError};

/// Agent implementation that talks to the Gemini HTTP API.
///
/// No client-side timeout is set; a stalled request stalls the caller.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiApiAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiApiAgent")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiApiAgent {
    /// Creates a new agent with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    /// Builds an agent from the process environment and assistant config.
    ///
    /// The key is read from the first non-empty variable in
    /// [`API_KEY_ENV_VARS`]. Returns [`AgentError::MissingCredential`] if
    /// none is set.
    pub fn from_env(config: &AssistantConfig) -> Result<Self, AgentError> {
        let api_key = API_KEY_ENV_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
            .ok_or(AgentError::MissingCredential)?;

        Ok(Self::new(api_key, config.model.clone()).with_base_url(config.api_base_url.clone()))
    }

    /// Overrides the API base URL (everything before `/{model}:generateContent`).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String, AgentError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|err| AgentError::Request(format!("Gemini API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| AgentError::Parse(err.to_string()))?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl Agent for GeminiApiAgent {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        system_instruction: &str,
        message: &str,
    ) -> Result<String, AgentError> {
        let request = GenerateContentRequest::new(system_instruction, message);
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

impl GenerateContentRequest {
    fn new(system_instruction: &str, message: &str) -> Self {
        let system_instruction = (!system_instruction.trim().is_empty()).then(|| Content {
            role: "system".to_string(),
            parts: vec![Part {
                text: system_instruction.to_string(),
            }],
        });

        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: message.to_string(),
                }],
            }],
            system_instruction,
        }
    }
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Concatenates the text parts of the first candidate.
fn extract_text_response(response: GenerateContentResponse) -> Result<String, AgentError> {
    let text: String = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(AgentError::EmptyResponse)
    } else {
        Ok(text)
    }
}

fn map_http_error(status: StatusCode, body: String) -> AgentError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    AgentError::Http {
        status: status.as_u16(),
        message,
        is_retryable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_layout() {
        let request = GenerateContentRequest::new("Be helpful.", "Where are the lions?");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Where are the lions?");
        assert_eq!(json["system_instruction"]["parts"][0]["text"], "Be helpful.");
    }

    #[test]
    fn test_blank_system_instruction_is_omitted() {
        let request = GenerateContentRequest::new("  ", "Hi");
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("system_instruction").is_none());
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Take the "},{"text":"ramp."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text_response(response).unwrap(), "Take the ramp.");
    }

    #[test]
    fn test_extract_text_empty_cases() {
        for body in [
            r#"{}"#,
            r#"{"candidates":[]}"#,
            r#"{"candidates":[{}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#,
        ] {
            let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
            assert_eq!(
                extract_text_response(response),
                Err(AgentError::EmptyResponse),
                "{body}"
            );
        }
    }

    #[test]
    fn test_map_http_error_reads_google_error_body() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#
                .to_string(),
        );
        assert_eq!(
            err,
            AgentError::Http {
                status: 429,
                message: "RESOURCE_EXHAUSTED: Quota exceeded".to_string(),
                is_retryable: true,
            }
        );
    }

    #[test]
    fn test_map_http_error_plain_body() {
        let err = map_http_error(StatusCode::BAD_REQUEST, "bad".to_string());
        assert!(matches!(
            err,
            AgentError::Http {
                status: 400,
                is_retryable: false,
                ..
            }
        ));
    }

    #[test]
    fn test_endpoint_and_debug_hide_key() {
        let agent = GeminiApiAgent::new("secret-key", "gemini-2.5-flash")
            .with_base_url("http://localhost:9999/v1beta/models/");
        assert_eq!(
            agent.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert!(!format!("{agent:?}").contains("secret-key"));
    }
}
