use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;
use zoo_core::chat::MessageRole;
use zoo_core::poi::Catalog;
use zoo_core::{AccessibilityProfile, ProfileSet};
use zoo_interaction::assistant::{EMPTY_REPLY, OFFLINE_REPLY};
use zoo_interaction::{
    Agent, AgentError, AssistantSession, PromptBuilder, RejectReason, SendOutcome,
};

/// Replays a fixed list of results and records what it was asked.
struct ScriptedAgent {
    replies: Mutex<VecDeque<Result<String, AgentError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedAgent {
    fn new(replies: Vec<Result<String, AgentError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Agent for ScriptedAgent {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, system_instruction: &str, message: &str) -> Result<String, AgentError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_instruction.to_string(), message.to_string()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(AgentError::EmptyResponse))
    }
}

/// Holds every request open until released.
struct GatedAgent {
    gate: Notify,
}

#[async_trait]
impl Agent for GatedAgent {
    fn name(&self) -> &str {
        "gated"
    }

    async fn generate(&self, _system_instruction: &str, message: &str) -> Result<String, AgentError> {
        self.gate.notified().await;
        Ok(format!("Answer to: {message}"))
    }
}

fn mobility() -> ProfileSet {
    ProfileSet::from_profiles([AccessibilityProfile::Mobility])
}

#[tokio::test]
async fn test_reply_is_appended_after_question() {
    let agent = Arc::new(ScriptedAgent::new(vec![Ok(
        "The **Lions** are north of the Quiet Zone.".to_string(),
    )]));
    let catalog = Catalog::builtin().unwrap();
    let profiles = mobility();
    let session = AssistantSession::new(agent.clone(), PromptBuilder::new(16_000), &profiles);

    let outcome = session
        .send("Where are the lions?", &profiles, &catalog)
        .await;
    assert!(matches!(outcome, SendOutcome::Replied(_)));

    let transcript = session.transcript();
    let roles: Vec<MessageRole> = transcript.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![MessageRole::Assistant, MessageRole::User, MessageRole::Assistant]
    );
    assert_eq!(transcript[2].text, "The **Lions** are north of the Quiet Zone.");

    let calls = agent.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (instruction, message) = &calls[0];
    assert_eq!(message, "Where are the lions?");
    assert!(instruction.contains("Current User Profile(s): **Mobility**"));
    assert!(instruction.contains("[Mobility Note:"));
}

#[tokio::test]
async fn test_failure_appends_one_fallback_and_session_recovers() {
    let agent = Arc::new(ScriptedAgent::new(vec![
        Err(AgentError::Http {
            status: 500,
            message: "internal".to_string(),
            is_retryable: true,
        }),
        Ok("Try the ramp by the Giraffes.".to_string()),
    ]));
    let catalog = Catalog::builtin().unwrap();
    let profiles = mobility();
    let session = AssistantSession::new(agent, PromptBuilder::new(16_000), &profiles);

    let first = session.send("Route to giraffes?", &profiles, &catalog).await;
    assert!(matches!(first, SendOutcome::Fallback(ref msg) if msg.text == OFFLINE_REPLY));
    assert_eq!(session.len(), 3);
    assert!(!session.is_busy());

    let second = session.send("And after that?", &profiles, &catalog).await;
    assert!(matches!(second, SendOutcome::Replied(_)));
    assert_eq!(session.len(), 5);
}

#[tokio::test]
async fn test_empty_generation_uses_its_own_fallback() {
    let agent = Arc::new(ScriptedAgent::new(vec![Err(AgentError::EmptyResponse)]));
    let catalog = Catalog::builtin().unwrap();
    let profiles = mobility();
    let session = AssistantSession::new(agent, PromptBuilder::new(16_000), &profiles);

    let outcome = session.send("Tell me a story", &profiles, &catalog).await;
    assert_eq!(outcome.message().unwrap().text, EMPTY_REPLY);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_second_send_while_waiting_is_rejected() {
    let agent = Arc::new(GatedAgent {
        gate: Notify::new(),
    });
    let catalog = Arc::new(Catalog::builtin().unwrap());
    let profiles = mobility();
    let session = Arc::new(AssistantSession::new(
        agent.clone(),
        PromptBuilder::new(16_000),
        &profiles,
    ));

    let pending = {
        let session = Arc::clone(&session);
        let catalog = Arc::clone(&catalog);
        let profiles = profiles.clone();
        tokio::spawn(async move { session.send("First question", &profiles, &catalog).await })
    };

    tokio::time::timeout(Duration::from_secs(5), async {
        while !session.is_busy() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("first send never started");

    let rejected = session.send("Second question", &profiles, &catalog).await;
    assert_eq!(rejected, SendOutcome::Rejected(RejectReason::Busy));
    assert_eq!(session.len(), 2);

    agent.gate.notify_one();
    let first = pending.await.unwrap();
    assert_eq!(first.message().unwrap().text, "Answer to: First question");
    assert_eq!(session.len(), 3);
    assert!(!session.is_busy());
    assert!(
        session
            .transcript()
            .iter()
            .all(|m| m.text != "Second question")
    );
}
