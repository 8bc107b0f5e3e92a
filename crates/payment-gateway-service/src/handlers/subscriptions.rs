//! Subscription handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::extract::Payload;
use crate::state::AppState;
use crate::stripe::{FormValue, StripeObject, SubscriptionParams};

/// Create subscription request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    /// Stripe customer ID.
    pub customer_id: Option<FormValue>,
    /// Stripe price ID.
    pub price_id: Option<FormValue>,
}

/// Subscription response.
#[derive(Debug, Serialize)]
pub struct SubscriptionResponse {
    /// Always `true`.
    pub success: bool,
    /// The Stripe subscription, with its latest invoice's payment intent expanded.
    pub subscription: StripeObject,
}

/// Create a subscription for a single price.
pub async fn create_subscription(
    State(state): State<Arc<AppState>>,
    Payload(body): Payload<CreateSubscriptionRequest>,
) -> Result<Json<SubscriptionResponse>, ApiError> {
    let subscription = state
        .provider
        .create_subscription(SubscriptionParams {
            customer: body.customer_id,
            price: body.price_id,
        })
        .await?;

    tracing::info!(subscription_id = ?subscription.id(), "Subscription created");

    Ok(Json(SubscriptionResponse {
        success: true,
        subscription,
    }))
}

/// Subscription list response.
#[derive(Debug, Serialize)]
pub struct SubscriptionsResponse {
    /// Always `true`.
    pub success: bool,
    /// The Stripe list of subscriptions.
    pub subscriptions: StripeObject,
}

/// List a customer's subscriptions, whatever their status.
pub async fn list_subscriptions(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<String>,
) -> Result<Json<SubscriptionsResponse>, ApiError> {
    let subscriptions = state.provider.list_subscriptions(&customer_id).await?;

    tracing::debug!(customer_id = %customer_id, "Listed subscriptions");

    Ok(Json(SubscriptionsResponse {
        success: true,
        subscriptions,
    }))
}
