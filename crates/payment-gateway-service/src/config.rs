//! Service configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use serde::Deserialize;

use crate::stripe::StripeClient;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No Stripe secret key was found in the secrets file or environment.
    #[error("Stripe API key not configured (set STRIPE_API_KEY or .secrets/stripe.json)")]
    MissingApiKey,

    /// A numeric variable could not be parsed.
    #[error("invalid value for {name}: {value:?}")]
    InvalidNumber {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
    },
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Port to listen on (default: 3000).
    pub port: u16,

    /// Stripe secret API key.
    pub stripe_api_key: String,

    /// Stripe API base URL (default: `<https://api.stripe.com/v1>`).
    pub stripe_api_base: String,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

/// Stripe secrets file structure.
#[derive(Debug, Deserialize)]
struct StripeSecrets {
    api_key: String,
}

/// Default port.
const DEFAULT_PORT: u16 = 3000;

/// Default CORS origin (local frontend dev server).
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Default body limit, 100 KiB.
const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;

impl ServiceConfig {
    /// Load configuration from environment variables and secrets files.
    ///
    /// # Errors
    ///
    /// Fails when no Stripe key is available or a numeric variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let file_key = load_stripe_secrets().map(|s| s.api_key);
        Self::from_lookup(file_key, |name| std::env::var(name).ok())
    }

    /// Build configuration from an explicit variable lookup.
    ///
    /// `file_key` takes precedence over `STRIPE_API_KEY`.
    ///
    /// # Errors
    ///
    /// Fails when no Stripe key is available or a numeric variable is malformed.
    pub fn from_lookup<F>(file_key: Option<String>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let stripe_api_key = file_key
            .or_else(|| lookup("STRIPE_API_KEY"))
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            port: parse_number(&lookup, "PORT", DEFAULT_PORT)?,
            stripe_api_key,
            stripe_api_base: lookup("STRIPE_API_BASE")
                .unwrap_or_else(|| StripeClient::BASE_URL.into()),
            cors_origins: lookup("CORS_ORIGINS")
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            max_body_bytes: parse_number(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        })
    }

    /// Socket address to bind, on all interfaces.
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Configuration for the given key with every other setting at its default.
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            port: DEFAULT_PORT,
            stripe_api_key: api_key.into(),
            stripe_api_base: StripeClient::BASE_URL.into(),
            cors_origins: vec![DEFAULT_CORS_ORIGIN.into()],
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

fn parse_number<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}

/// Load Stripe secrets from file.
fn load_stripe_secrets() -> Option<StripeSecrets> {
    let secret_paths = [".secrets/stripe.json", "../.secrets/stripe.json"];

    for path in &secret_paths {
        if let Ok(secrets) = load_secrets_file::<StripeSecrets>(path) {
            tracing::info!(path = %path, "Loaded Stripe secrets from file");
            return Some(secrets);
        }
    }

    tracing::debug!("Stripe secrets file not found, using environment variables");
    None
}

/// Load secrets from a JSON file.
fn load_secrets_file<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, std::io::Error> {
    let path = Path::new(path);
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Secrets file not found",
        ));
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
