//! Stripe integration.
//!
//! Stripe handles:
//! - Customers and their card payment methods
//! - Payment intents and refunds
//! - Products, prices and subscriptions

pub mod client;
pub mod types;

pub use client::StripeClient;
pub use client::StripeError;
pub use types::*;
