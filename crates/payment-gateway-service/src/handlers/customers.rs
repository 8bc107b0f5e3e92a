//! Customer handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::extract::Payload;
use crate::state::AppState;
use crate::stripe::{CustomerParams, FormValue, StripeObject};

/// Create customer request.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCustomerRequest {
    /// Customer email.
    pub email: Option<FormValue>,
    /// Customer name.
    pub name: Option<FormValue>,
}

/// Update customer request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    /// Stripe customer ID.
    pub customer_id: Option<FormValue>,
    /// New name.
    pub name: Option<FormValue>,
    /// New email.
    pub email: Option<FormValue>,
}

/// Customer response.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    /// Always `true`.
    pub success: bool,
    /// The Stripe customer.
    pub customer: StripeObject,
}

/// Create a customer.
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    Payload(body): Payload<CreateCustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = state
        .provider
        .create_customer(CustomerParams {
            email: body.email,
            name: body.name,
        })
        .await?;

    tracing::info!(customer_id = ?customer.id(), "Customer created");

    Ok(Json(CustomerResponse {
        success: true,
        customer,
    }))
}

/// Update a customer's name and email.
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    Payload(body): Payload<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    // A missing id is sent as an empty path segment.
    let customer_id = body
        .customer_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    let customer = state
        .provider
        .update_customer(
            &customer_id,
            CustomerParams {
                email: body.email,
                name: body.name,
            },
        )
        .await?;

    tracing::info!(customer_id = %customer_id, "Customer updated");

    Ok(Json(CustomerResponse {
        success: true,
        customer,
    }))
}
