//! Payment provider abstraction.
//!
//! Handlers only talk to the provider through this trait so the concrete
//! client can be built once at startup and injected through [`AppState`].
//!
//! [`AppState`]: crate::state::AppState

use async_trait::async_trait;

use crate::stripe::{
    CustomerParams, PaymentIntentParams, PriceParams, ProductParams, RefundParams, StripeError,
    StripeObject, SubscriptionParams,
};

/// Operations the gateway forwards to the payment provider.
///
/// Every method maps to exactly one provider API call and returns the
/// provider's object unchanged.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a customer.
    async fn create_customer(&self, params: CustomerParams) -> Result<StripeObject, StripeError>;

    /// Update a customer's name and email.
    async fn update_customer(
        &self,
        customer_id: &str,
        params: CustomerParams,
    ) -> Result<StripeObject, StripeError>;

    /// Create a card payment intent.
    async fn create_payment_intent(
        &self,
        params: PaymentIntentParams,
    ) -> Result<StripeObject, StripeError>;

    /// Create a subscription awaiting its first payment.
    async fn create_subscription(
        &self,
        params: SubscriptionParams,
    ) -> Result<StripeObject, StripeError>;

    /// List a customer's subscriptions in every status.
    async fn list_subscriptions(&self, customer_id: &str) -> Result<StripeObject, StripeError>;

    /// Create a product.
    async fn create_product(&self, params: ProductParams) -> Result<StripeObject, StripeError>;

    /// Create a price for an existing product.
    async fn create_price(&self, params: PriceParams) -> Result<StripeObject, StripeError>;

    /// List a customer's card payment methods.
    async fn list_payment_methods(&self, customer_id: &str) -> Result<StripeObject, StripeError>;

    /// Refund a payment intent.
    async fn create_refund(&self, params: RefundParams) -> Result<StripeObject, StripeError>;
}
