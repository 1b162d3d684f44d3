use async_trait::async_trait;

/// Base interface for all agent implementations.
#[async_trait]
pub trait AgentInterface: Send + Sync {
    /// Process one user message and return the agent's textual answer.
    ///
    /// Errors from the remote model call propagate unchanged; there is no
    /// retry or timeout at this layer.
    async fn chat(&self, user_message: &str) -> anyhow::Result<String>;

    /// Display name of the agent, used for trace spans and the UI header.
    fn name(&self) -> &str;
}
