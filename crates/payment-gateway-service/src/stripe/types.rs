//! Stripe API types.
//!
//! Resource objects are kept opaque: the gateway relays whatever Stripe
//! returned, so only request parameters are modelled here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A Stripe resource (customer, price, list, ...) exactly as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StripeObject(serde_json::Map<String, serde_json::Value>);

impl StripeObject {
    /// The object's `id` field, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(serde_json::Value::as_str)
    }

    /// Look up a top-level field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for StripeObject {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(map)
    }
}

/// A scalar request value forwarded to Stripe in its textual form.
///
/// Request fields are not type-checked locally: strings, numbers and booleans
/// are all accepted (form bodies only carry strings) and passed through
/// untouched for Stripe to judge.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// A string value.
    Text(String),
    /// A JSON number.
    Number(serde_json::Number),
    /// A JSON boolean.
    Bool(bool),
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for FormValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Form-encoded parameter list in Stripe's bracket notation.
pub type FormParams = Vec<(String, String)>;

fn push_opt(params: &mut FormParams, key: &str, value: Option<&impl fmt::Display>) {
    if let Some(value) = value {
        params.push((key.to_string(), value.to_string()));
    }
}

/// Parameters for creating or updating a customer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerParams {
    /// Customer email.
    pub email: Option<FormValue>,
    /// Customer name.
    pub name: Option<FormValue>,
}

impl CustomerParams {
    /// Encode as form parameters.
    #[must_use]
    pub fn to_form(&self) -> FormParams {
        let mut params = FormParams::new();
        push_opt(&mut params, "email", self.email.as_ref());
        push_opt(&mut params, "name", self.name.as_ref());
        params
    }
}

/// Parameters for creating a card payment intent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentIntentParams {
    /// Amount in the smallest currency unit.
    pub amount: Option<FormValue>,
    /// Three-letter currency code.
    pub currency: Option<FormValue>,
    /// Customer ID.
    pub customer: Option<FormValue>,
}

impl PaymentIntentParams {
    /// Encode as form parameters. Only card payments are enabled.
    #[must_use]
    pub fn to_form(&self) -> FormParams {
        let mut params = FormParams::new();
        push_opt(&mut params, "amount", self.amount.as_ref());
        push_opt(&mut params, "currency", self.currency.as_ref());
        push_opt(&mut params, "customer", self.customer.as_ref());
        params.push(("payment_method_types[0]".into(), "card".into()));
        params
    }
}

/// Parameters for creating a single-item subscription.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionParams {
    /// Customer ID.
    pub customer: Option<FormValue>,
    /// Price ID of the single subscription item.
    pub price: Option<FormValue>,
}

impl SubscriptionParams {
    /// Encode as form parameters.
    ///
    /// The subscription is left incomplete until its first invoice is paid,
    /// and the invoice's payment intent is expanded so the caller can confirm it.
    #[must_use]
    pub fn to_form(&self) -> FormParams {
        let mut params = FormParams::new();
        push_opt(&mut params, "customer", self.customer.as_ref());
        push_opt(&mut params, "items[0][price]", self.price.as_ref());
        params.push(("payment_behavior".into(), "default_incomplete".into()));
        params.push((
            "expand[0]".into(),
            "latest_invoice.payment_intent".into(),
        ));
        params
    }
}

/// Parameters for creating a product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductParams {
    /// Product name.
    pub name: Option<FormValue>,
    /// Product description.
    pub description: Option<FormValue>,
}

impl ProductParams {
    /// Encode as form parameters.
    #[must_use]
    pub fn to_form(&self) -> FormParams {
        let mut params = FormParams::new();
        push_opt(&mut params, "name", self.name.as_ref());
        push_opt(&mut params, "description", self.description.as_ref());
        params
    }
}

/// Parameters for creating a price attached to a product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceParams {
    /// Unit amount in the smallest currency unit.
    pub unit_amount: Option<FormValue>,
    /// Three-letter currency code.
    pub currency: Option<FormValue>,
    /// Product ID.
    pub product: String,
}

impl PriceParams {
    /// Encode as form parameters.
    #[must_use]
    pub fn to_form(&self) -> FormParams {
        let mut params = FormParams::new();
        push_opt(&mut params, "unit_amount", self.unit_amount.as_ref());
        push_opt(&mut params, "currency", self.currency.as_ref());
        params.push(("product".into(), self.product.clone()));
        params
    }
}

/// Parameters for refunding a payment intent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefundParams {
    /// Payment intent ID.
    pub payment_intent: Option<FormValue>,
    /// Amount to refund; Stripe refunds the full amount when absent.
    pub amount: Option<FormValue>,
}

impl RefundParams {
    /// Encode as form parameters.
    #[must_use]
    pub fn to_form(&self) -> FormParams {
        let mut params = FormParams::new();
        push_opt(&mut params, "payment_intent", self.payment_intent.as_ref());
        push_opt(&mut params, "amount", self.amount.as_ref());
        params
    }
}

/// Stripe API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    /// Error details.
    pub error: StripeErrorDetail,
}

/// Stripe error detail.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorDetail {
    /// Error type.
    #[serde(rename = "type", default)]
    pub error_type: String,
    /// Error message.
    #[serde(default)]
    pub message: String,
    /// Error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Parameter that caused the error.
    #[serde(default)]
    pub param: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(params: &FormParams) -> Vec<(&str, &str)> {
        params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn payment_intent_is_card_only() {
        let params = PaymentIntentParams {
            amount: Some(FormValue::from(2000_i64)),
            currency: Some("usd".into()),
            customer: Some("cus_1".into()),
        };

        assert_eq!(
            pairs(&params.to_form()),
            vec![
                ("amount", "2000"),
                ("currency", "usd"),
                ("customer", "cus_1"),
                ("payment_method_types[0]", "card"),
            ]
        );
    }

    #[test]
    fn subscription_expands_latest_invoice_payment_intent() {
        let params = SubscriptionParams {
            customer: Some("cus_1".into()),
            price: Some("price_1".into()),
        };
        let form = params.to_form();

        assert!(form.contains(&("items[0][price]".into(), "price_1".into())));
        assert!(form.contains(&("payment_behavior".into(), "default_incomplete".into())));
        assert!(form.contains(&(
            "expand[0]".into(),
            "latest_invoice.payment_intent".into()
        )));
    }

    #[test]
    fn missing_fields_are_omitted() {
        let form = RefundParams {
            payment_intent: Some("pi_1".into()),
            amount: None,
        }
        .to_form();

        assert_eq!(pairs(&form), vec![("payment_intent", "pi_1")]);
        assert!(CustomerParams::default().to_form().is_empty());
    }

    #[test]
    fn non_string_scalars_are_stringified() {
        let customer: FormValue = serde_json::from_str("123").unwrap();
        let flag: FormValue = serde_json::from_str("true").unwrap();
        let form = CustomerParams {
            email: Some(flag),
            name: Some(customer),
        }
        .to_form();

        assert_eq!(pairs(&form), vec![("email", "true"), ("name", "123")]);
    }

    #[test]
    fn object_keeps_provider_key_order() {
        let body = r#"{"id":"cus_1","email":"a@b.com","name":"A","created":1}"#;
        let object: StripeObject = serde_json::from_str(body).unwrap();

        assert_eq!(serde_json::to_string(&object).unwrap(), body);
    }

    #[test]
    fn price_always_references_product() {
        let form = PriceParams {
            unit_amount: Some("1500".into()),
            currency: None,
            product: "prod_1".into(),
        }
        .to_form();

        assert_eq!(pairs(&form), vec![("unit_amount", "1500"), ("product", "prod_1")]);
    }

    #[test]
    fn form_value_accepts_numbers_and_strings() {
        let number: FormValue = serde_json::from_str("500").unwrap();
        let text: FormValue = serde_json::from_str("\"500\"").unwrap();

        assert_eq!(number.to_string(), "500");
        assert_eq!(text.to_string(), "500");
        assert_eq!(number, FormValue::from(500_i64));
    }

    #[test]
    fn object_id_lookup() {
        let object: StripeObject =
            serde_json::from_value(serde_json::json!({ "id": "prod_1", "name": "Widget" }))
                .unwrap();

        assert_eq!(object.id(), Some("prod_1"));
        assert_eq!(object.get("name"), Some(&serde_json::json!("Widget")));
        assert_eq!(StripeObject::default().id(), None);
    }

    #[test]
    fn error_response_parses() {
        let body = r#"{"error":{"type":"invalid_request_error","message":"No such payment_intent","code":"resource_missing","param":"payment_intent"}}"#;
        let parsed: StripeErrorResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.error.error_type, "invalid_request_error");
        assert_eq!(parsed.error.message, "No such payment_intent");
        assert_eq!(parsed.error.code.as_deref(), Some("resource_missing"));
    }
}
