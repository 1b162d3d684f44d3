use serde::{Deserialize, Serialize};
use reqwest::Client;
use thiserror::Error;

/// Client for an OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API returned status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("API response contained no choices")]
    EmptyResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

impl OpenAiClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// One completion round-trip: system prompt + single user message in,
    /// assistant text out. Failures are returned as-is; no retry or timeout
    /// beyond what reqwest does by default.
    pub async fn chat_completion(
        &self,
        model: &str,
        temperature: f32,
        system: &str,
        user_text: &str,
    ) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatCompletionRequest {
            model: model.to_string(),
            temperature,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_text.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatCompletionResponse = response.json().await?;
        let choice = body.choices.into_iter().next().ok_or(LlmError::EmptyResponse)?;
        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            temperature: 1.0,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "be helpful".to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: "Hello".to_string(),
                },
            ],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "Hello");
    }

    #[test]
    fn response_body_parses() {
        let raw = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "Hi there!"},
                    "finish_reason": "stop"
                }
            ]
        }"#;

        let body: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.choices[0].message.content, "Hi there!");
    }

    #[test]
    fn empty_choices_is_an_error() {
        let raw = r#"{"choices": []}"#;
        let body: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert!(body.choices.is_empty());
    }
}
