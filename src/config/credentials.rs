//! Credential resolution from configuration.
//!
//! The API key is resolved once, when the provider client is built, and
//! then travels inside the client. Nothing reads the environment per request.

use super::types::ProviderConfig;

/// Environment variable read when the config file carries no key.
pub const DEFAULT_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution for the provider.
#[derive(Debug, Clone, PartialEq)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl CredentialStatus {
    pub fn into_key(self) -> Option<SecureString> {
        match self {
            CredentialStatus::Configured(key) => Some(key),
            CredentialStatus::Unconfigured { .. } => None,
        }
    }
}

impl ProviderConfig {
    /// Resolve the API key from the config file, then the process environment.
    pub fn resolve_credential(&self) -> CredentialStatus {
        self.resolve_credential_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key using `lookup` in place of the process environment.
    pub fn resolve_credential_with<F>(&self, lookup: F) -> CredentialStatus
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = self.api_key.as_deref().map(str::trim) {
            if !key.is_empty() {
                return CredentialStatus::Configured(SecureString::new(key.to_string()));
            }
        }

        let env_name = self.api_key_env.trim();
        if env_name.is_empty() {
            return CredentialStatus::Unconfigured {
                reason: "api_key is not set and api_key_env is empty".to_string(),
            };
        }

        match lookup(env_name).map(|value| value.trim().to_string()) {
            Some(value) if !value.is_empty() => {
                CredentialStatus::Configured(SecureString::new(value))
            }
            _ => CredentialStatus::Unconfigured {
                reason: format!("api_key is not set and ${} is empty", env_name),
            },
        }
    }
}
