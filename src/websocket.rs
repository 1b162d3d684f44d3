use axum::{
    extract::{ws::Message, State, WebSocketUpgrade},
    response::Response,
};
use axum::extract::ws::WebSocket;
use serde_json::json;
use tracing::{error, info};
use futures_util::{SinkExt, StreamExt};

use crate::session::ChatSession;
use crate::state::AppState;
use crate::handlers;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let client_uid = state.generate_client_uid();
    info!("New WebSocket connection: {}", client_uid);

    state
        .sessions
        .insert(client_uid.clone(), ChatSession::new(client_uid.clone()));

    let (mut sender, mut receiver) = socket.split();

    // Greet the client with the agent identity and an empty history
    let initial_messages = vec![
        json!({
            "type": "set-agent",
            "agent_name": state.agent.name(),
            "client_uid": client_uid
        }),
        handlers::history_frame(&state, &[]),
    ];

    for msg in initial_messages {
        if let Err(e) = sender.send(Message::Text(msg.to_string())).await {
            error!("Failed to send initial message: {}", e);
            state.sessions.remove(&client_uid);
            return;
        }
    }

    // Handle incoming messages; frames within one connection are handled
    // sequentially, so at most one turn per session is in flight.
    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Err(e) = handlers::handle_message(&state, &client_uid, &text, &mut sender).await {
                    error!("Error handling message: {}", e);
                }
            }
            Ok(Message::Close(_)) => {
                info!("Client {} disconnected", client_uid);
                break;
            }
            Err(e) => {
                error!("WebSocket error: {}", e);
                break;
            }
            _ => {}
        }
    }

    // History lives only as long as the connection
    state.sessions.remove(&client_uid);
    info!("Cleaned up client {}", client_uid);
}
