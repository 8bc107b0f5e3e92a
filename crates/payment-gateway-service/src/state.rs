//! Application state.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::provider::PaymentProvider;
use crate::stripe::{StripeClient, StripeError};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// Payment provider every route forwards to.
    pub provider: Arc<dyn PaymentProvider>,
}

impl AppState {
    /// Create application state backed by a Stripe client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the Stripe client cannot be constructed.
    pub fn new(config: ServiceConfig) -> Result<Self, StripeError> {
        let stripe = StripeClient::new(&config.stripe_api_key, &config.stripe_api_base)?;

        tracing::info!(api_base = %config.stripe_api_base, "Stripe integration enabled");

        Ok(Self::with_provider(config, Arc::new(stripe)))
    }

    /// Create application state around an existing provider.
    #[must_use]
    pub fn with_provider(config: ServiceConfig, provider: Arc<dyn PaymentProvider>) -> Self {
        Self { config, provider }
    }
}
