use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub agent_config: AgentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7860
}

fn default_static_dir() -> String {
    "static".to_string()
}

/// Which agent persona the process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentVariant {
    Assistant,
    Tennis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_variant")]
    pub variant: AgentVariant,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_variant() -> AgentVariant {
    AgentVariant::Tennis
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    1.0
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            variant: default_variant(),
            model: default_model(),
            temperature: default_temperature(),
            base_url: default_base_url(),
        }
    }
}

pub const REQUIRED_ENV_VARS: &[&str] = &["OPENAI_API_KEY"];

/// Names of required environment variables the given lookup cannot resolve
/// to a non-empty value.
pub fn missing_required_vars<F>(lookup: F) -> Vec<&'static str>
where
    F: Fn(&str) -> Option<String>,
{
    REQUIRED_ENV_VARS
        .iter()
        .copied()
        .filter(|var| lookup(var).map_or(true, |v| v.trim().is_empty()))
        .collect()
}
