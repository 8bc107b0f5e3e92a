//! Payment intent, payment method and refund handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::extract::Payload;
use crate::state::AppState;
use crate::stripe::{FormValue, PaymentIntentParams, RefundParams, StripeObject};

/// Create payment intent request.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Amount in the smallest currency unit.
    pub amount: Option<FormValue>,
    /// Currency code.
    pub currency: Option<FormValue>,
    /// Stripe customer ID.
    pub customer: Option<FormValue>,
}

/// Payment intent response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    /// Always `true`.
    pub success: bool,
    /// The Stripe payment intent.
    pub payment_intent: StripeObject,
}

/// Create a card payment intent.
pub async fn create_payment_intent(
    State(state): State<Arc<AppState>>,
    Payload(body): Payload<CreatePaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, ApiError> {
    let payment_intent = state
        .provider
        .create_payment_intent(PaymentIntentParams {
            amount: body.amount,
            currency: body.currency,
            customer: body.customer,
        })
        .await?;

    tracing::info!(payment_intent_id = ?payment_intent.id(), "Payment intent created");

    Ok(Json(PaymentIntentResponse {
        success: true,
        payment_intent,
    }))
}

/// Payment methods response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodsResponse {
    /// Always `true`.
    pub success: bool,
    /// The Stripe list of card payment methods.
    pub payment_methods: StripeObject,
}

/// List a customer's card payment methods.
pub async fn list_payment_methods(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<String>,
) -> Result<Json<PaymentMethodsResponse>, ApiError> {
    let payment_methods = state.provider.list_payment_methods(&customer_id).await?;

    tracing::debug!(customer_id = %customer_id, "Listed payment methods");

    Ok(Json(PaymentMethodsResponse {
        success: true,
        payment_methods,
    }))
}

/// Refund request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    /// Payment intent to refund.
    pub payment_intent_id: Option<FormValue>,
    /// Amount to refund.
    pub amount: Option<FormValue>,
}

/// Refund response.
#[derive(Debug, Serialize)]
pub struct RefundResponse {
    /// Always `true`.
    pub success: bool,
    /// The Stripe refund.
    pub refund: StripeObject,
}

/// Refund a payment intent.
pub async fn refund(
    State(state): State<Arc<AppState>>,
    Payload(body): Payload<RefundRequest>,
) -> Result<Json<RefundResponse>, ApiError> {
    let refund = state
        .provider
        .create_refund(RefundParams {
            payment_intent: body.payment_intent_id,
            amount: body.amount,
        })
        .await?;

    tracing::info!(refund_id = ?refund.id(), "Refund created");

    Ok(Json(RefundResponse {
        success: true,
        refund,
    }))
}
