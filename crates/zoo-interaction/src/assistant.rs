//! Assistant chat session.
//!
//! A linear, append-only transcript seeded with a welcome message. Each
//! accepted question appends the visitor's message and then exactly one
//! assistant message: either the generated reply or a fixed fallback text.
//! At most one question is outstanding at a time; further sends are
//! rejected until it completes.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use zoo_core::ProfileSet;
use zoo_core::chat::{ChatMessage, MessageRole};
use zoo_core::poi::Catalog;

use crate::agent::{Agent, AgentError};
use crate::prompt::PromptBuilder;

pub const NO_CONNECTION_REPLY: &str =
    "I'm sorry, I cannot connect to the zoo assistant right now. Please check your connection.";
pub const EMPTY_REPLY: &str = "I'm having trouble thinking of an answer right now.";
pub const OFFLINE_REPLY: &str = "I am currently offline. Please ask a staff member for assistance.";

/// Why a send was refused without touching the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The message was empty or whitespace.
    EmptyInput,
    /// A previous question is still waiting for its reply.
    Busy,
}

/// Result of [`AssistantSession::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The generated reply was appended.
    Replied(ChatMessage),
    /// Generation failed; a fallback message was appended instead.
    Fallback(ChatMessage),
    /// Nothing was appended.
    Rejected(RejectReason),
}

impl SendOutcome {
    /// The appended assistant message, if any.
    pub fn message(&self) -> Option<&ChatMessage> {
        match self {
            Self::Replied(msg) | Self::Fallback(msg) => Some(msg),
            Self::Rejected(_) => None,
        }
    }
}

/// Fallback text shown for a generation failure.
pub fn fallback_reply(error: &AgentError) -> &'static str {
    match error {
        AgentError::MissingCredential => NO_CONNECTION_REPLY,
        AgentError::EmptyResponse => EMPTY_REPLY,
        AgentError::Request(_) | AgentError::Http { .. } | AgentError::Parse(_) => OFFLINE_REPLY,
    }
}

/// Welcome text reflecting the active profiles.
pub fn welcome_text(profiles: &ProfileSet) -> String {
    format!(
        "Hello! 🌿 I'm **ZooBuddy**. I see you're customized for: **{}**. I can help you find your way or answer animal questions!",
        profiles.summary()
    )
}

/// Clears the in-flight flag when the send completes or is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct AssistantSession {
    agent: Arc<dyn Agent>,
    prompt: PromptBuilder,
    transcript: Mutex<Vec<ChatMessage>>,
    next_id: AtomicU64,
    in_flight: AtomicBool,
}

impl AssistantSession {
    /// Starts a session whose transcript holds only the welcome message.
    pub fn new(agent: Arc<dyn Agent>, prompt: PromptBuilder, profiles: &ProfileSet) -> Self {
        let welcome = ChatMessage::new(0, MessageRole::Assistant, welcome_text(profiles));
        tracing::info!(
            "Assistant session started with {} agent for [{}]",
            agent.name(),
            profiles.summary()
        );
        Self {
            agent,
            prompt,
            transcript: Mutex::new(vec![welcome]),
            next_id: AtomicU64::new(1),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Asks one question with the given profiles and catalog as context.
    pub async fn send(
        &self,
        user_text: &str,
        profiles: &ProfileSet,
        catalog: &Catalog,
    ) -> SendOutcome {
        if user_text.trim().is_empty() {
            return SendOutcome::Rejected(RejectReason::EmptyInput);
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Assistant busy, ignoring message");
            return SendOutcome::Rejected(RejectReason::Busy);
        }
        let _in_flight = InFlight(&self.in_flight);

        self.append(MessageRole::User, user_text);

        let instruction = self
            .prompt
            .system_instruction(profiles, catalog)
            .map_err(|e| AgentError::Parse(format!("system instruction: {e}")));
        let result = match instruction {
            Ok(instruction) => self.agent.generate(&instruction, user_text).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(reply) => SendOutcome::Replied(self.append(MessageRole::Assistant, reply)),
            Err(e) => {
                tracing::warn!("Assistant reply failed ({}): {}", self.agent.name(), e);
                SendOutcome::Fallback(self.append(MessageRole::Assistant, fallback_reply(&e)))
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Snapshot of the transcript in creation order.
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.lock_transcript().clone()
    }

    pub fn len(&self) -> usize {
        self.lock_transcript().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_transcript().is_empty()
    }

    fn append(&self, role: MessageRole, text: impl Into<String>) -> ChatMessage {
        let mut transcript = self.lock_transcript();
        let message = ChatMessage::new(self.next_id.fetch_add(1, Ordering::Relaxed), role, text);
        transcript.push(message.clone());
        message
    }

    fn lock_transcript(&self) -> MutexGuard<'_, Vec<ChatMessage>> {
        // The transcript is only ever pushed to, so a poisoned lock still holds valid data.
        self.transcript
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
