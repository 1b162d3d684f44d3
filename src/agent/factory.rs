use std::sync::Arc;
use tracing::info;

use super::assistant_agent::AssistantAgent;
use super::interface::AgentInterface;
use super::tennis_agent::TennisBookingAgent;
use crate::config::{AgentConfig, AgentVariant};
use crate::llm::OpenAiClient;

/// Factory for creating the configured agent variant.
pub struct AgentFactory;

impl AgentFactory {
    pub fn create(config: &AgentConfig, llm: Arc<OpenAiClient>) -> Arc<dyn AgentInterface> {
        info!("Initializing agent variant: {:?}", config.variant);

        match config.variant {
            AgentVariant::Assistant => Arc::new(AssistantAgent::new(llm, config)),
            AgentVariant::Tennis => Arc::new(TennisBookingAgent::new(llm, config)),
        }
    }
}
