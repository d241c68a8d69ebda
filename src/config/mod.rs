//! Configuration: TOML file, defaults, validation and credential resolution.

mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, SecureString, DEFAULT_API_KEY_ENV};
pub use loader::ConfigError;
pub use types::{Config, ProviderConfig, RewriterConfig};
