use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

use super::interface::AgentInterface;
use crate::config::AgentConfig;
use crate::llm::OpenAiClient;
use crate::prompts::{ASSISTANT_AGENT_NAME, ASSISTANT_SYSTEM_PROMPT};

/// Generic application assistant: one fixed instruction string, one model,
/// one question in, one answer out.
pub struct AssistantAgent {
    llm: Arc<OpenAiClient>,
    model: String,
    temperature: f32,
}

impl AssistantAgent {
    pub fn new(llm: Arc<OpenAiClient>, config: &AgentConfig) -> Self {
        info!("Initialized {}: model={}", ASSISTANT_AGENT_NAME, config.model);
        Self {
            llm,
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl AgentInterface for AssistantAgent {
    async fn chat(&self, user_message: &str) -> anyhow::Result<String> {
        let span = info_span!("agent_chat", agent = ASSISTANT_AGENT_NAME);
        let answer = self
            .llm
            .chat_completion(
                &self.model,
                self.temperature,
                ASSISTANT_SYSTEM_PROMPT,
                user_message,
            )
            .instrument(span)
            .await?;
        Ok(answer)
    }

    fn name(&self) -> &str {
        ASSISTANT_AGENT_NAME
    }
}
