//! Product handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::extract::Payload;
use crate::state::AppState;
use crate::stripe::{FormValue, PriceParams, ProductParams, StripeObject};

/// Create product request.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProductRequest {
    /// Product name.
    pub name: Option<FormValue>,
    /// Product description.
    pub description: Option<FormValue>,
    /// Unit amount of the product's price.
    pub amount: Option<FormValue>,
    /// Currency of the product's price.
    pub currency: Option<FormValue>,
}

/// Product response.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    /// Always `true`.
    pub success: bool,
    /// The Stripe product.
    pub product: StripeObject,
    /// The Stripe price attached to the product.
    pub price: StripeObject,
}

/// Create a product and a price for it.
///
/// The price is only created once the product exists. If price creation
/// fails the product is left in place.
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Payload(body): Payload<CreateProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state
        .provider
        .create_product(ProductParams {
            name: body.name,
            description: body.description,
        })
        .await?;

    let product_id = product.id().unwrap_or_default().to_string();

    let price = state
        .provider
        .create_price(PriceParams {
            unit_amount: body.amount,
            currency: body.currency,
            product: product_id.clone(),
        })
        .await?;

    tracing::info!(
        product_id = %product_id,
        price_id = ?price.id(),
        "Product and price created"
    );

    Ok(Json(ProductResponse {
        success: true,
        product,
        price,
    }))
}
