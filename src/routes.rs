use axum::{
    extract::State,
    routing::get,
    Router,
    Json,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let static_dir = state.config.system_config.static_dir.clone();

    Router::new()
        // WebSocket
        .route("/client-ws", get(websocket_handler))
        // REST API routes
        .route("/api/health", get(health_check))
        .route("/api/agent-info", get(agent_info))
        // Chat widget page
        .fallback_service(ServeDir::new(static_dir))
}

async fn websocket_handler(
    ws: axum::extract::ws::WebSocketUpgrade,
    State(state): State<AppState>,
) -> axum::response::Response {
    crate::websocket::websocket_handler(ws, State(state)).await
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "agent": state.agent.name(),
        "sessions": state.sessions.len()
    }))
}

async fn agent_info(State(state): State<AppState>) -> Json<Value> {
    let agent_config = &state.config.agent_config;
    Json(json!({
        "agent_name": state.agent.name(),
        "variant": agent_config.variant,
        "model": agent_config.model
    }))
}
