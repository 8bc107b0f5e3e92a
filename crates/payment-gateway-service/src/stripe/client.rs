//! Stripe API client implementation.

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::types::{
    CustomerParams, FormParams, PaymentIntentParams, PriceParams, ProductParams, RefundParams,
    StripeErrorResponse, StripeObject, SubscriptionParams,
};
use crate::provider::PaymentProvider;

/// Error type for Stripe operations.
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stripe API returned an error.
    #[error("Stripe API error: {error_type} - {message}")]
    Api {
        /// Error type.
        error_type: String,
        /// Error message.
        message: String,
        /// Error code.
        code: Option<String>,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StripeError {
    /// The message reported back to API callers.
    ///
    /// For API errors this is Stripe's own message, unmodified.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Stripe API client.
#[derive(Debug, Clone)]
pub struct StripeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl StripeClient {
    /// Stripe API base URL.
    pub const BASE_URL: &'static str = "https://api.stripe.com/v1";

    /// Create a new Stripe client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Stripe secret API key (`sk_test_...` or `sk_live_...`)
    /// * `base_url` - API root, normally [`Self::BASE_URL`]
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self, StripeError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| StripeError::Configuration(format!("invalid base URL: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(StripeError::Configuration(format!(
                "base URL cannot carry a path: {base_url}"
            )));
        }

        let client = Client::builder().build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url,
        })
    }

    /// Build an endpoint URL from path segments, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, StripeError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| StripeError::Configuration("base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn post_form(
        &self,
        segments: &[&str],
        params: &FormParams,
    ) -> Result<StripeObject, StripeError> {
        let url = self.endpoint(segments)?;

        tracing::debug!(url = %url, params = params.len(), "Stripe POST");

        let response = self
            .client
            .post(url)
            .basic_auth(&self.api_key, Option::<&str>::None)
            .form(params)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn get_query(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<StripeObject, StripeError> {
        let url = self.endpoint(segments)?;

        tracing::debug!(url = %url, "Stripe GET");

        let response = self
            .client
            .get(url)
            .basic_auth(&self.api_key, Option::<&str>::None)
            .query(query)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<StripeObject, StripeError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Try to parse error response
        let error_body: Result<StripeErrorResponse, _> = response.json().await;

        match error_body {
            Ok(stripe_error) => Err(StripeError::Api {
                error_type: stripe_error.error.error_type,
                message: stripe_error.error.message,
                code: stripe_error.error.code,
            }),
            Err(_) => Err(StripeError::Api {
                error_type: "unknown".to_string(),
                message: format!("HTTP {status}"),
                code: None,
            }),
        }
    }
}

#[async_trait]
impl PaymentProvider for StripeClient {
    async fn create_customer(&self, params: CustomerParams) -> Result<StripeObject, StripeError> {
        self.post_form(&["customers"], &params.to_form()).await
    }

    async fn update_customer(
        &self,
        customer_id: &str,
        params: CustomerParams,
    ) -> Result<StripeObject, StripeError> {
        self.post_form(&["customers", customer_id], &params.to_form())
            .await
    }

    async fn create_payment_intent(
        &self,
        params: PaymentIntentParams,
    ) -> Result<StripeObject, StripeError> {
        self.post_form(&["payment_intents"], &params.to_form()).await
    }

    async fn create_subscription(
        &self,
        params: SubscriptionParams,
    ) -> Result<StripeObject, StripeError> {
        self.post_form(&["subscriptions"], &params.to_form()).await
    }

    async fn list_subscriptions(&self, customer_id: &str) -> Result<StripeObject, StripeError> {
        self.get_query(
            &["subscriptions"],
            &[("customer", customer_id), ("status", "all")],
        )
        .await
    }

    async fn create_product(&self, params: ProductParams) -> Result<StripeObject, StripeError> {
        self.post_form(&["products"], &params.to_form()).await
    }

    async fn create_price(&self, params: PriceParams) -> Result<StripeObject, StripeError> {
        self.post_form(&["prices"], &params.to_form()).await
    }

    async fn list_payment_methods(&self, customer_id: &str) -> Result<StripeObject, StripeError> {
        self.get_query(
            &["payment_methods"],
            &[("customer", customer_id), ("type", "card")],
        )
        .await
    }

    async fn create_refund(&self, params: RefundParams) -> Result<StripeObject, StripeError> {
        self.post_form(&["refunds"], &params.to_form()).await
    }
}
