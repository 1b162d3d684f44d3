use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the chat history: who said it and what was said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Per-connection chat session. History lives in memory only and is dropped
/// when the client disconnects or clears the chat.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub client_uid: String,
    turns: Vec<ChatTurn>,
}

impl ChatSession {
    pub fn new(client_uid: impl Into<String>) -> Self {
        Self {
            client_uid: client_uid.into(),
            turns: Vec::new(),
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn replace_turns(&mut self, turns: Vec<ChatTurn>) {
        self.turns = turns;
    }

    pub fn snapshot(&self) -> Vec<ChatTurn> {
        self.turns.clone()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}
