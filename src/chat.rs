//! The chat bridge: one user message in, updated history out.

use crate::agent::AgentInterface;
use crate::session::{ChatTurn, Role};

/// Run one chat turn against the agent.
///
/// Empty or whitespace-only messages are ignored: the history comes back
/// unchanged and the agent is not invoked. Otherwise the agent's answer is
/// awaited and the user turn plus the assistant turn are appended, in that
/// order. The returned string is the cleared-input placeholder for the
/// widget's text box.
///
/// Agent failures propagate as errors and leave the history untouched.
pub async fn take_turn(
    agent: &dyn AgentInterface,
    message: &str,
    mut history: Vec<ChatTurn>,
) -> anyhow::Result<(String, Vec<ChatTurn>)> {
    if message.trim().is_empty() {
        return Ok((String::new(), history));
    }

    let answer = agent.chat(message).await?;

    history.push(ChatTurn {
        role: Role::User,
        content: message.to_string(),
    });
    history.push(ChatTurn {
        role: Role::Assistant,
        content: answer,
    });

    Ok((String::new(), history))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockAgent {
        reply: Option<String>,
        calls: AtomicUsize,
    }

    impl MockAgent {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AgentInterface for MockAgent {
        async fn chat(&self, _user_message: &str) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => Err(anyhow::anyhow!("model unavailable")),
            }
        }

        fn name(&self) -> &str {
            "Mock Agent"
        }
    }

    #[tokio::test]
    async fn hello_turn_appends_user_then_assistant() {
        let agent = MockAgent::replying("Hi there!");
        let (cleared, history) = take_turn(&agent, "Hello", Vec::new()).await.unwrap();

        assert_eq!(cleared, "");
        assert_eq!(
            history,
            vec![ChatTurn::user("Hello"), ChatTurn::assistant("Hi there!")]
        );
        assert_eq!(agent.call_count(), 1);
    }

    #[tokio::test]
    async fn empty_message_is_ignored() {
        let agent = MockAgent::replying("unused");
        let prior = vec![ChatTurn::user("A"), ChatTurn::assistant("B")];

        let (cleared, history) = take_turn(&agent, "", prior.clone()).await.unwrap();
        assert_eq!(cleared, "");
        assert_eq!(history, prior);
        assert_eq!(agent.call_count(), 0);
    }

    #[tokio::test]
    async fn whitespace_message_is_ignored() {
        let agent = MockAgent::replying("unused");
        let prior = vec![ChatTurn::user("A"), ChatTurn::assistant("B")];

        let (cleared, history) = take_turn(&agent, "   ", prior.clone()).await.unwrap();
        assert_eq!(cleared, "");
        assert_eq!(history, prior);
        assert_eq!(agent.call_count(), 0);
    }

    #[tokio::test]
    async fn each_turn_appends_exactly_two_entries_in_order() {
        let agent = MockAgent::replying("ok");
        let mut history = Vec::new();

        for n in 1..=3 {
            let (_, updated) = take_turn(&agent, &format!("message {n}"), history)
                .await
                .unwrap();
            history = updated;
            assert_eq!(history.len(), n * 2);
        }

        // Turn N's entries precede turn N+1's entries.
        assert_eq!(history[0].content, "message 1");
        assert_eq!(history[2].content, "message 2");
        assert_eq!(history[4].content, "message 3");
        assert_eq!(history[1].role, Role::Assistant);
        assert_eq!(history[3].role, Role::Assistant);
    }

    #[tokio::test]
    async fn agent_failure_propagates_and_history_is_untouched() {
        let agent = MockAgent::failing();
        let prior = vec![ChatTurn::user("A"), ChatTurn::assistant("B")];

        let result = take_turn(&agent, "Hello", prior.clone()).await;
        assert!(result.is_err());
        assert_eq!(agent.call_count(), 1);
        // The caller keeps its own copy of the history on error.
        assert_eq!(prior.len(), 2);
    }
}
