//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{customers, payments, products, subscriptions};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// - `POST /create-customer` - Create a customer
/// - `POST /update-customer` - Update a customer's name and email
/// - `POST /create-payment-intent` - Create a card payment intent
/// - `GET /list-payment-methods/:customerId` - List a customer's cards
/// - `POST /refund` - Refund a payment intent
/// - `POST /create-subscription` - Subscribe a customer to a price
/// - `GET /subscriptions/:customerId` - List a customer's subscriptions
/// - `POST /create-product` - Create a product and its price
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors = build_cors_layer(&state.config.cors_origins);
    let max_body_bytes = state.config.max_body_bytes;

    let state = Arc::new(state);

    Router::new()
        // Customers
        .route("/create-customer", post(customers::create_customer))
        .route("/update-customer", post(customers::update_customer))
        // Payments
        .route(
            "/create-payment-intent",
            post(payments::create_payment_intent),
        )
        .route(
            "/list-payment-methods/:customerId",
            get(payments::list_payment_methods),
        )
        .route("/refund", post(payments::refund))
        // Subscriptions
        .route(
            "/create-subscription",
            post(subscriptions::create_subscription),
        )
        .route(
            "/subscriptions/:customerId",
            get(subscriptions::list_subscriptions),
        )
        // Products
        .route("/create-product", post(products::create_product))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::HEAD,
                Method::PUT,
                Method::PATCH,
                Method::POST,
                Method::DELETE,
            ])
            .allow_headers(AllowHeaders::mirror_request())
    }
}
