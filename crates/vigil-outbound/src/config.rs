use serde::{Deserialize, Serialize};
use std::fmt;

fn default_api_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

/// Credentials and endpoint for the ElevenLabs Conversational AI platform.
///
/// All three credential fields are required before a follow-up call can be
/// initiated; they are injected via config file or environment only. An empty
/// string means "not configured".
#[derive(Clone, Serialize, Deserialize)]
pub struct ElevenLabsConfig {
    /// Platform API key, sent as the `xi-api-key` header.
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Identifier of the follow-up agent that places the outbound call.
    #[serde(default)]
    pub agent_id: String,

    /// Identifier of the provisioned phone number the call originates from.
    #[serde(default)]
    pub phone_number_id: String,

    /// Base URL of the platform API. Overridable for tests.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            agent_id: String::new(),
            phone_number_id: String::new(),
            api_base_url: default_api_base_url(),
        }
    }
}

impl fmt::Debug for ElevenLabsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElevenLabsConfig")
            .field("api_key", &"[REDACTED]")
            .field("agent_id", &self.agent_id)
            .field("phone_number_id", &self.phone_number_id)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl ElevenLabsConfig {
    pub fn new(
        api_key: impl Into<String>,
        agent_id: impl Into<String>,
        phone_number_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            agent_id: agent_id.into(),
            phone_number_id: phone_number_id.into(),
            api_base_url: default_api_base_url(),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Names of required credentials that are absent.
    ///
    /// Intended for internal logging only — which credential is missing must
    /// never be reported to API callers.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_key.is_empty() {
            missing.push("api_key");
        }
        if self.agent_id.is_empty() {
            missing.push("agent_id");
        }
        if self.phone_number_id.is_empty() {
            missing.push("phone_number_id");
        }
        missing
    }

    /// True when every required credential is present.
    pub fn is_configured(&self) -> bool {
        self.missing_credentials().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_the_api_key() {
        let config = ElevenLabsConfig::new("sk-secret", "agent-1", "phone-1");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("agent-1"));
    }

    #[test]
    fn missing_credentials_names_each_absent_field() {
        let config = ElevenLabsConfig::new("", "agent-1", "");
        assert_eq!(config.missing_credentials(), vec!["api_key", "phone_number_id"]);
        assert!(!config.is_configured());

        let full = ElevenLabsConfig::new("key", "agent-1", "phone-1");
        assert!(full.is_configured());
    }

    #[test]
    fn deserializes_with_default_base_url() {
        let config: ElevenLabsConfig =
            toml::from_str("api_key = \"key\"\nagent_id = \"a\"\nphone_number_id = \"p\"")
                .unwrap();
        assert_eq!(config.api_base_url, "https://api.elevenlabs.io");
    }

    #[test]
    fn serialization_skips_the_api_key() {
        let config = ElevenLabsConfig::new("sk-secret", "agent-1", "phone-1");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
    }
}
