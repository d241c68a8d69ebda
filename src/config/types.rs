use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::credentials::DEFAULT_API_KEY_ENV;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub rewriter: RewriterConfig,
}

/// Chat-completion provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the OpenAI-compatible API (e.g., "https://openrouter.ai/api/v1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Direct API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is unset.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Value of the `HTTP-Referer` header.
    #[serde(default = "default_referer")]
    pub referer: String,
    /// Value of the `X-Title` header.
    #[serde(default = "default_title")]
    pub title: String,
    /// Whole-request timeout in seconds. `0` disables it.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Timing and prompt settings for the Note Rewriter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriterConfig {
    /// Window after a successful rewrite during which new requests are rejected.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    /// How long the "Copied" badge stays up after a clipboard write.
    #[serde(default = "default_copied_ms")]
    pub copied_ms: u64,
    /// Replaces the built-in system prompt with the contents of this file.
    #[serde(default)]
    pub system_prompt_file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_model() -> String {
    "anthropic/claude-3-opus-20240229".to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_referer() -> String {
    "https://localhost/notes/".to_string()
}

fn default_title() -> String {
    "Technician Notes AI Rewriter".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_cooldown_ms() -> u64 {
    5000
}

fn default_copied_ms() -> u64 {
    2000
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            api_key_env: default_api_key_env(),
            referer: default_referer(),
            title: default_title(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl ProviderConfig {
    /// Request timeout, or `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds.max(1))
    }

    /// Full URL of the chat-completions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: default_cooldown_ms(),
            copied_ms: default_copied_ms(),
            system_prompt_file: None,
        }
    }
}

impl RewriterConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn copied_flash(&self) -> Duration {
        Duration::from_millis(self.copied_ms)
    }
}
