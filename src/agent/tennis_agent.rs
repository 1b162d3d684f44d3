use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

use super::interface::AgentInterface;
use crate::config::AgentConfig;
use crate::llm::OpenAiClient;
use crate::prompts::{TENNIS_AGENT_NAME, TENNIS_SYSTEM_PROMPT};

/// A bookable court option. Carried (always empty) in the tennis variant's
/// turn payload; the agent answers in free text and nothing extracts
/// structured suggestions from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtSuggestion {
    pub court_id: String,
    pub name: String,
    pub court_type: String,
    pub location: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: u32,
    pub preferred: bool,
}

/// Booking assistant for the tennis club. Same turn-taking contract as the
/// generic assistant, with the club-specific instruction text.
pub struct TennisBookingAgent {
    llm: Arc<OpenAiClient>,
    model: String,
    temperature: f32,
}

impl TennisBookingAgent {
    pub fn new(llm: Arc<OpenAiClient>, config: &AgentConfig) -> Self {
        info!("Initialized {}: model={}", TENNIS_AGENT_NAME, config.model);
        Self {
            llm,
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl AgentInterface for TennisBookingAgent {
    async fn chat(&self, user_message: &str) -> anyhow::Result<String> {
        let span = info_span!("agent_chat", agent = TENNIS_AGENT_NAME);
        let answer = self
            .llm
            .chat_completion(
                &self.model,
                self.temperature,
                TENNIS_SYSTEM_PROMPT,
                user_message,
            )
            .instrument(span)
            .await?;
        Ok(answer)
    }

    fn name(&self) -> &str {
        TENNIS_AGENT_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_serializes_with_field_names() {
        let suggestion = CourtSuggestion {
            court_id: "court-3".to_string(),
            name: "Platz 3".to_string(),
            court_type: "clay".to_string(),
            location: "outdoor".to_string(),
            date: "2026-08-29".to_string(),
            start_time: "15:00".to_string(),
            end_time: "16:00".to_string(),
            duration_minutes: 60,
            preferred: true,
        };

        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["court_id"], "court-3");
        assert_eq!(json["duration_minutes"], 60);
        assert_eq!(json["preferred"], true);
    }
}
