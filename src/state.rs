use std::sync::Arc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::agent::{AgentFactory, AgentInterface};
use crate::config::Config;
use crate::llm::OpenAiClient;
use crate::session::ChatSession;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub agent: Arc<dyn AgentInterface>,
    pub sessions: Arc<DashMap<String, ChatSession>>,
}

impl AppState {
    pub fn new(config: Config, api_key: String) -> Self {
        let llm = Arc::new(OpenAiClient::new(
            config.agent_config.base_url.clone(),
            api_key,
        ));
        let agent = AgentFactory::create(&config.agent_config, llm);

        Self {
            config,
            agent,
            sessions: Arc::new(DashMap::new()),
        }
    }

    pub fn generate_client_uid(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
