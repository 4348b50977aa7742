//! Data models for the Merchant API.
//!
//! Amounts are integers in minor currency units (e.g. cents). Dates are
//! milliseconds since the Unix epoch, UTC.
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Payment,
    Refund,
    Chargeback,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    Pending,
    Processing,
    Authorised,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaptureMode {
    Manual,
    Automatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Visa,
    Mastercard,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Funding {
    Credit,
    Debit,
    Prepaid,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    High,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreeDsState {
    Verified,
    Failed,
    Challenge,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CvvVerification {
    Match,
    NotMatch,
    Incorrect,
    NotProcessed,
    #[serde(other)]
    Unknown,
}

/// Outcome of an address, postcode or cardholder check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckResult {
    Match,
    NotMatch,
    #[serde(rename = "N_A")]
    NotApplicable,
    Invalid,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeType {
    Fx,
    Acquiring,
    #[serde(other)]
    Unknown,
}

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Minor units.
    pub value: i64,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street_line_1: Option<String>,
    pub street_line_2: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub country_code: Option<String>,
    pub postcode: Option<String>,
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Minor units.
    pub amount: i64,
    pub currency: String,
    /// `AUTOMATIC` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_mode: Option<CaptureMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Transaction currency when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_customer_id: Option<String>,
}

impl CreateOrderRequest {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            capture_mode: None,
            merchant_order_id: None,
            customer_email: None,
            description: None,
            settlement_currency: None,
            merchant_customer_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundRequest {
    /// Minor units. Less than the captured amount for a partial refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    pub value: Option<i64>,
    pub currency: Option<String>,
    #[serde(rename = "type")]
    pub fee_type: Option<FeeType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreeDs {
    pub state: Option<ThreeDsState>,
    pub version: Option<u32>,
}

/// Fraud and verification checks run on a card payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checks {
    #[serde(default)]
    pub proxy: bool,
    #[serde(default)]
    pub vpn: bool,
    pub country_by_ip: Option<String>,
    pub three_ds: Option<ThreeDs>,
    /// Authorization code returned by the processor.
    pub authorization_code: Option<String>,
    pub cvv_verification: Option<CvvVerification>,
    pub address: Option<CheckResult>,
    pub postal_code: Option<CheckResult>,
    pub card_holder: Option<CheckResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub card_type: Option<CardType>,
    pub funding: Option<Funding>,
    pub card_bin: Option<String>,
    pub card_last_four: Option<String>,
    /// `MM/YY`.
    pub card_expiry: Option<String>,
    pub cardholder_name: Option<String>,
    pub checks: Option<Checks>,
    pub risk_level: Option<RiskLevel>,
    pub billing_address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "type")]
    pub payment_type: Option<String>,
    pub amount: Option<Amount>,
    pub state: Option<String>,
    pub created_date: Option<i64>,
    pub updated_date: Option<i64>,
    pub completed_date: Option<i64>,
    pub card: Option<Card>,
}

/// A payment attempt or a related order (refund, chargeback).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedOrder {
    pub id: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub amount: Option<Amount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Temporary ID handed to the checkout widget.
    pub public_id: Option<String>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub state: OrderState,
    pub created_date: i64,
    pub updated_date: i64,
    pub completed_date: Option<i64>,
    pub order_amount: Amount,
    pub settled_amount: Option<Amount>,
    pub refunded_amount: Option<Amount>,
    pub merchant_order_ext_ref: Option<String>,
    pub merchant_customer_ext_ref: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub customer_id: Option<String>,
    #[serde(default)]
    pub fees: Vec<Fee>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub attempts: Vec<RelatedOrder>,
    #[serde(default)]
    pub related: Vec<RelatedOrder>,
    pub shipping_address: Option<Address>,
}

/// The refund order created by `POST /orders/{id}/refund`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refund {
    pub id: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub state: OrderState,
    pub created_date: i64,
    pub updated_date: i64,
    pub completed_date: Option<i64>,
    pub order_amount: Amount,
    pub merchant_customer_ext_ref: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub related: Vec<RelatedOrder>,
}

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub business_name: Option<String>,
    pub phone: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_result_not_applicable() {
        let result: CheckResult = serde_json::from_str(r#""N_A""#).unwrap();
        assert_eq!(result, CheckResult::NotApplicable);
        assert_eq!(serde_json::to_string(&result).unwrap(), r#""N_A""#);

        let result: CheckResult = serde_json::from_str(r#""NOT_MATCH""#).unwrap();
        assert_eq!(result, CheckResult::NotMatch);
    }

    #[test]
    fn new_order_states_do_not_fail() {
        let state: OrderState = serde_json::from_str(r#""CANCELLED""#).unwrap();
        assert_eq!(state, OrderState::Unknown);

        let card: CardType = serde_json::from_str(r#""AMEX""#).unwrap();
        assert_eq!(card, CardType::Unknown);
    }

    #[test]
    fn create_order_request_omits_unset_fields() {
        let mut request = CreateOrderRequest::new(1000, "GBP");
        request.capture_mode = Some(CaptureMode::Manual);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "amount": 1000,
                "currency": "GBP",
                "capture_mode": "MANUAL"
            })
        );
    }
}
