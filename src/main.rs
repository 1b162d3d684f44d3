mod agent;
mod chat;
mod config;
mod handlers;
mod llm;
mod prompts;
mod routes;
mod session;
mod state;
mod websocket;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tennis_assistant_backend=debug,tower_http=debug".into()),
        )
        .init();

    // Required credential check comes before anything binds
    let missing = config::missing_required_vars(|var| std::env::var(var).ok());
    if !missing.is_empty() {
        println!("Missing required environment variables:");
        for var in &missing {
            println!("   - {}", var);
        }
        println!("\nSet them in the environment or a .env-style wrapper, e.g.:");
        for var in &missing {
            println!("   {}=your_value_here", var);
        }
        std::process::exit(1);
    }
    let api_key = std::env::var("OPENAI_API_KEY")?;

    // Load configuration, falling back to built-in defaults
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut config = None;
    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                info!("Loaded configuration from: {}", path);
                config = Some(cfg);
                break;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }
    let config = config.unwrap_or_else(|| {
        warn!("No config file found, using defaults (tried: {:?})", config_paths);
        Config::default()
    });

    // Initialize app state
    let app_state = AppState::new(config.clone(), api_key);
    info!("Agent ready: {}", app_state.agent.name());

    // Build application
    let app = Router::new()
        .merge(routes::create_routes(app_state.clone()))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let host: std::net::IpAddr = config.system_config.host.parse()?;
    let addr = SocketAddr::from((host, config.system_config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
