//! Server configuration loading from file and environment variables.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;
use vigil_outbound::ElevenLabsConfig;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// External voice-agent platform credentials. All values may also come
    /// from the environment; credentials are never hard-coded.
    #[serde(default)]
    pub elevenlabs: ElevenLabsConfig,
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "vigil_server=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `VIGIL_HOST` overrides `server.host`
/// - `VIGIL_PORT` overrides `server.port`
/// - `VIGIL_LOG_LEVEL` overrides `logging.level`
/// - `VIGIL_LOG_JSON` overrides `logging.json` (set to "true" to enable)
/// - `ELEVENLABS_API_KEY` overrides `elevenlabs.api_key`
/// - `ELEVENLABS_AGENT_ID` overrides `elevenlabs.agent_id`
/// - `ELEVENLABS_PHONE_NUMBER_ID` overrides `elevenlabs.phone_number_id`
/// - `ELEVENLABS_API_BASE_URL` overrides `elevenlabs.api_base_url`
///
/// Missing credentials do not fail the load: the server starts and only the
/// follow-up endpoint rejects requests until they are supplied.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(host) = std::env::var("VIGIL_HOST") {
        if let Ok(parsed) = host.parse() {
            config.server.host = parsed;
        }
    }
    if let Ok(port) = std::env::var("VIGIL_PORT") {
        if let Ok(parsed) = port.parse() {
            config.server.port = parsed;
        }
    }
    if let Ok(level) = std::env::var("VIGIL_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("VIGIL_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }
    if let Ok(api_key) = std::env::var("ELEVENLABS_API_KEY") {
        config.elevenlabs.api_key = api_key;
    }
    if let Ok(agent_id) = std::env::var("ELEVENLABS_AGENT_ID") {
        config.elevenlabs.agent_id = agent_id;
    }
    if let Ok(phone_number_id) = std::env::var("ELEVENLABS_PHONE_NUMBER_ID") {
        config.elevenlabs.phone_number_id = phone_number_id;
    }
    if let Ok(base_url) = std::env::var("ELEVENLABS_API_BASE_URL") {
        config.elevenlabs.api_base_url = base_url;
    }

    Ok(config)
}
