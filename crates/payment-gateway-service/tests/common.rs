//! Common test utilities for payment gateway integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{json, Value};

use payment_gateway_service::stripe::{
    CustomerParams, PaymentIntentParams, PriceParams, ProductParams, RefundParams,
    SubscriptionParams,
};
use payment_gateway_service::{
    create_router, AppState, PaymentProvider, ServiceConfig, StripeError, StripeObject,
};

/// A provider call as received by [`FakeProvider`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateCustomer(CustomerParams),
    UpdateCustomer(String, CustomerParams),
    CreatePaymentIntent(PaymentIntentParams),
    CreateSubscription(SubscriptionParams),
    ListSubscriptions(String),
    CreateProduct(ProductParams),
    CreatePrice(PriceParams),
    ListPaymentMethods(String),
    CreateRefund(RefundParams),
}

/// In-memory provider that records calls and replays canned results.
///
/// Operations without a canned result answer `{"id": "<op>_1", "object": "<op>"}`.
#[derive(Default)]
pub struct FakeProvider {
    calls: Mutex<Vec<Call>>,
    results: Mutex<HashMap<&'static str, Result<Value, String>>>,
}

impl FakeProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer `op` with `object`.
    pub fn respond(&self, op: &'static str, object: Value) {
        self.results.lock().unwrap().insert(op, Ok(object));
    }

    /// Fail `op` with a Stripe API error carrying `message`.
    pub fn fail(&self, op: &'static str, message: &str) {
        self.results
            .lock()
            .unwrap()
            .insert(op, Err(message.to_string()));
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str, call: Call) -> Result<StripeObject, StripeError> {
        self.calls.lock().unwrap().push(call);

        let result = self
            .results
            .lock()
            .unwrap()
            .get(op)
            .cloned()
            .unwrap_or_else(|| Ok(json!({ "id": format!("{op}_1"), "object": op })));

        match result {
            Ok(value) => Ok(serde_json::from_value(value)?),
            Err(message) => Err(StripeError::Api {
                error_type: "invalid_request_error".into(),
                message,
                code: None,
            }),
        }
    }
}

#[async_trait]
impl PaymentProvider for FakeProvider {
    async fn create_customer(&self, params: CustomerParams) -> Result<StripeObject, StripeError> {
        self.record("customer", Call::CreateCustomer(params))
    }

    async fn update_customer(
        &self,
        customer_id: &str,
        params: CustomerParams,
    ) -> Result<StripeObject, StripeError> {
        self.record(
            "customer",
            Call::UpdateCustomer(customer_id.to_string(), params),
        )
    }

    async fn create_payment_intent(
        &self,
        params: PaymentIntentParams,
    ) -> Result<StripeObject, StripeError> {
        self.record("payment_intent", Call::CreatePaymentIntent(params))
    }

    async fn create_subscription(
        &self,
        params: SubscriptionParams,
    ) -> Result<StripeObject, StripeError> {
        self.record("subscription", Call::CreateSubscription(params))
    }

    async fn list_subscriptions(&self, customer_id: &str) -> Result<StripeObject, StripeError> {
        self.record(
            "subscription_list",
            Call::ListSubscriptions(customer_id.to_string()),
        )
    }

    async fn create_product(&self, params: ProductParams) -> Result<StripeObject, StripeError> {
        self.record("product", Call::CreateProduct(params))
    }

    async fn create_price(&self, params: PriceParams) -> Result<StripeObject, StripeError> {
        self.record("price", Call::CreatePrice(params))
    }

    async fn list_payment_methods(&self, customer_id: &str) -> Result<StripeObject, StripeError> {
        self.record(
            "payment_method_list",
            Call::ListPaymentMethods(customer_id.to_string()),
        )
    }

    async fn create_refund(&self, params: RefundParams) -> Result<StripeObject, StripeError> {
        self.record("refund", Call::CreateRefund(params))
    }
}

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The fake provider behind the router.
    pub provider: Arc<FakeProvider>,
}

impl TestHarness {
    /// Create a new test harness with a fresh fake provider.
    pub fn new() -> Self {
        let provider = FakeProvider::new();
        let config = ServiceConfig::with_api_key("sk_test_harness");

        let state = AppState::with_provider(config, provider.clone());
        let server = TestServer::new(create_router(state)).expect("Failed to create test server");

        Self { server, provider }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
