//! Payment Gateway HTTP service.
//!
//! A thin HTTP façade over the Stripe API. Each route extracts its inputs,
//! forwards them to Stripe and relays the result as
//! `{success: true, <resource>: ...}`, or `{success: false, error}` with
//! status 500 when the Stripe call fails.
//!
//! The Stripe client is built once at startup and reaches handlers through
//! [`AppState`] as a [`PaymentProvider`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod provider;
pub mod routes;
pub mod state;
pub mod stripe;

pub use config::{ConfigError, ServiceConfig};
pub use error::ApiError;
pub use provider::PaymentProvider;
pub use routes::create_router;
pub use state::AppState;
pub use stripe::{StripeClient, StripeError, StripeObject};
