use serde_json::{json, Value};
use tracing::{debug, error, warn};
use axum::extract::ws::Message;
use futures_util::SinkExt;

use crate::chat;
use crate::config::AgentVariant;
use crate::session::ChatTurn;
use crate::state::AppState;

type WsSender = futures_util::stream::SplitSink<axum::extract::ws::WebSocket, Message>;

pub async fn handle_message(
    state: &AppState,
    client_uid: &str,
    text: &str,
    sender: &mut WsSender,
) -> anyhow::Result<()> {
    let msg: Value = serde_json::from_str(text)?;
    let msg_type = msg.get("type").and_then(|v| v.as_str());
    debug!("Client {}: frame type {:?}", client_uid, msg_type);

    match msg_type {
        Some("text-input") => {
            handle_text_input(state, client_uid, &msg, sender).await?;
        }
        Some("clear-history") => {
            handle_clear_history(state, client_uid, sender).await?;
        }
        Some("fetch-history") => {
            handle_fetch_history(state, client_uid, sender).await?;
        }
        _ => {
            warn!("Unknown message type: {:?}", msg_type);
        }
    }

    Ok(())
}

/// Build the `history-update` frame sent after every mutation. The tennis
/// variant additionally carries the (always empty) suggestions array.
pub fn history_frame(state: &AppState, turns: &[ChatTurn]) -> Value {
    let mut frame = json!({
        "type": "history-update",
        "input": "",
        "messages": turns
    });
    if state.config.agent_config.variant == AgentVariant::Tennis {
        frame["suggestions"] = json!([]);
    }
    frame
}

async fn handle_text_input(
    state: &AppState,
    client_uid: &str,
    msg: &Value,
    sender: &mut WsSender,
) -> anyhow::Result<()> {
    let text = msg.get("text").and_then(|v| v.as_str()).unwrap_or("");

    let history = state
        .sessions
        .get(client_uid)
        .map(|session| session.snapshot())
        .unwrap_or_default();

    match chat::take_turn(state.agent.as_ref(), text, history).await {
        Ok((_, updated)) => {
            if let Some(mut session) = state.sessions.get_mut(client_uid) {
                session.replace_turns(updated.clone());
                debug!(
                    "Session {} now holds {} turns",
                    session.client_uid,
                    session.turns().len()
                );
            }
            let frame = history_frame(state, &updated);
            sender.send(Message::Text(frame.to_string())).await?;
        }
        Err(e) => {
            // History stays as it was; the widget shows the failure.
            error!("Agent call failed for {}: {}", client_uid, e);
            let frame = json!({
                "type": "error",
                "message": e.to_string()
            });
            sender.send(Message::Text(frame.to_string())).await?;
        }
    }

    Ok(())
}

async fn handle_clear_history(
    state: &AppState,
    client_uid: &str,
    sender: &mut WsSender,
) -> anyhow::Result<()> {
    if let Some(mut session) = state.sessions.get_mut(client_uid) {
        session.clear();
    }
    let frame = history_frame(state, &[]);
    sender.send(Message::Text(frame.to_string())).await?;
    Ok(())
}

async fn handle_fetch_history(
    state: &AppState,
    client_uid: &str,
    sender: &mut WsSender,
) -> anyhow::Result<()> {
    let turns = state
        .sessions
        .get(client_uid)
        .map(|session| session.snapshot())
        .unwrap_or_default();
    let frame = history_frame(state, &turns);
    sender.send(Message::Text(frame.to_string())).await?;
    Ok(())
}
