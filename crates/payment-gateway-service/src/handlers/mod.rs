//! API handlers.
//!
//! Each handler extracts its inputs, makes the provider call(s) and wraps the
//! result in the `{success: true, ...}` envelope. Failures become [`ApiError`].
//!
//! [`ApiError`]: crate::error::ApiError

pub mod customers;
pub mod payments;
pub mod products;
pub mod subscriptions;
