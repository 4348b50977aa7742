//! Data models for the Business API.
//!
//! Monetary values are JSON numbers on the wire and [`Decimal`] here.
//! Timestamps are RFC 3339 strings.
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountState {
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

/// Payment schemes an account's bank details can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentScheme {
    Chaps,
    Bacs,
    FasterPayments,
    Sepa,
    Swift,
    Ach,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Days,
    Hours,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileType {
    Business,
    Personal,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterpartyState {
    Created,
    Deleted,
    #[serde(other)]
    Unknown,
}

/// Kind of account held by a counterparty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterpartyAccountType {
    #[serde(rename = "self")]
    Own,
    Revolut,
    External,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientCharges {
    No,
    Expected,
    #[serde(other)]
    Unknown,
}

/// State of a transaction (exchanges, webhook events).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionState {
    Pending,
    Completed,
    Declined,
    Failed,
    Reverted,
    #[serde(other)]
    Unknown,
}

/// State of a single payment inside a payment draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentDraftState {
    Created,
    Pending,
    Completed,
    Reverted,
    Declined,
    Cancelled,
    Failed,
    Deleted,
    #[serde(other)]
    Unknown,
}

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// An amount of money in a currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
}

/// Postal address, used both for bank details and external counterparties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: Option<String>,
    /// Available balance.
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub currency: String,
    pub state: AccountState,
    /// Whether the account is visible to other Revolut businesses.
    #[serde(default)]
    pub public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Inbound transfer time estimate for a set of bank details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedTime {
    pub unit: TimeUnit,
    pub min: u32,
    pub max: u32,
}

/// Details needed to pay into an account over one or more schemes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBankDetails {
    pub iban: Option<String>,
    pub bic: Option<String>,
    pub account_no: Option<String>,
    pub sort_code: Option<String>,
    pub routing_number: Option<String>,
    pub beneficiary: Option<String>,
    pub beneficiary_address: Option<Address>,
    pub bank_country: Option<String>,
    /// True when the address is pooled rather than unique to this account.
    #[serde(default)]
    pub pooled: bool,
    /// Reference to quote when paying into a pooled account.
    pub unique_reference: Option<String>,
    #[serde(default)]
    pub schemes: Vec<PaymentScheme>,
    pub estimated_time: Option<EstimatedTime>,
}

// ---------------------------------------------------------------------------
// Counterparties
// ---------------------------------------------------------------------------

/// Add an existing Revolut user as a counterparty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevolutCounterpartyRequest {
    pub profile_type: ProfileType,
    /// Personal profiles only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Personal profiles only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email of an admin of a public Revolut Business account. Business profiles only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl RevolutCounterpartyRequest {
    pub fn personal(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            profile_type: ProfileType::Personal,
            name: Some(name.into()),
            phone: Some(phone.into()),
            email: None,
        }
    }

    pub fn business(email: impl Into<String>) -> Self {
        Self {
            profile_type: ProfileType::Business,
            name: None,
            phone: None,
            email: Some(email.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndividualName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Add a bank account held outside Revolut as a counterparty.
///
/// Either `company_name` or `individual_name` must be present; the API
/// enforces this, not the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalCounterpartyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual_name: Option<IndividualName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterpartyAccount {
    pub id: String,
    pub currency: String,
    #[serde(rename = "type")]
    pub account_type: CounterpartyAccountType,
    pub account_no: Option<String>,
    pub iban: Option<String>,
    pub sort_code: Option<String>,
    pub routing_number: Option<String>,
    pub bic: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub bank_country: Option<String>,
    pub recipient_charges: Option<RecipientCharges>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counterparty {
    pub id: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub profile_type: Option<ProfileType>,
    pub country: Option<String>,
    pub state: CounterpartyState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub accounts: Vec<CounterpartyAccount>,
}

// ---------------------------------------------------------------------------
// Exchanges
// ---------------------------------------------------------------------------

/// Query for `GET /rate`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRateQuery {
    pub from: String,
    pub to: String,
    pub amount: Decimal,
}

impl ExchangeRateQuery {
    /// Quote for exchanging one unit of `from`.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount: Decimal::ONE,
        }
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// The amount as sent on the wire: always exactly two decimal places,
    /// rounding half away from zero.
    pub fn amount_param(&self) -> String {
        let mut amount = self
            .amount
            .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(2);
        amount.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub from: Amount,
    pub to: Amount,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    pub fee: Amount,
    pub rate_date: DateTime<Utc>,
}

/// One side of an exchange. Set `amount` on exactly one side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeLeg {
    pub account_id: String,
    pub currency: String,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRequest {
    pub from: ExchangeLeg,
    pub to: ExchangeLeg,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Caller-chosen deduplication key, at most 40 characters. Sent verbatim.
    pub request_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeResponse {
    /// Transaction ID.
    pub id: String,
    pub state: TransactionState,
    pub reason_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Payment drafts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftReceiver {
    pub counterparty_id: String,
    /// Required when the counterparty has more than one account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPayment {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Account to pay from. Must be the same for every payment in a draft.
    pub account_id: String,
    pub receiver: DraftReceiver,
    pub reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentDraftRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// ISO date of a future execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_for: Option<String>,
    pub payments: Vec<DraftPayment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDraftCreated {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDraftSummary {
    pub id: String,
    pub scheduled_for: Option<String>,
    pub title: Option<String>,
    pub payments_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDrafts {
    #[serde(default)]
    pub payment_orders: Vec<PaymentDraftSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDraftPayment {
    pub id: String,
    pub amount: Amount,
    pub account_id: String,
    pub receiver: DraftReceiver,
    pub state: PaymentDraftState,
    pub reference: Option<String>,
    pub reason: Option<String>,
    pub error_message: Option<String>,
    /// Conversion that will apply when the payment is sent.
    pub current_charge_options: Option<ExchangeRate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDraftDetail {
    pub scheduled_for: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub payments: Vec<PaymentDraftPayment>,
}

// ---------------------------------------------------------------------------
// Webhooks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookRequest {
    /// HTTPS callback endpoint.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rate_amount_has_two_decimals() {
        let query = ExchangeRateQuery::new("USD", "EUR");
        assert_eq!(query.amount_param(), "1.00");

        let query = query.with_amount(dec!(12.3456));
        assert_eq!(query.amount_param(), "12.35");

        let query = ExchangeRateQuery::new("USD", "EUR").with_amount(dec!(0.125));
        assert_eq!(query.amount_param(), "0.13");

        let query = ExchangeRateQuery::new("USD", "EUR").with_amount(dec!(2500.5));
        assert_eq!(query.amount_param(), "2500.50");
    }

    #[test]
    fn unknown_enum_values_fall_back() {
        let state: AccountState = serde_json::from_str(r#""frozen""#).unwrap();
        assert_eq!(state, AccountState::Unknown);

        let scheme: PaymentScheme = serde_json::from_str(r#""faster_payments""#).unwrap();
        assert_eq!(scheme, PaymentScheme::FasterPayments);

        let own: CounterpartyAccountType = serde_json::from_str(r#""self""#).unwrap();
        assert_eq!(own, CounterpartyAccountType::Own);

        let draft: PaymentDraftState = serde_json::from_str(r#""COMPLETED""#).unwrap();
        assert_eq!(draft, PaymentDraftState::Completed);
    }

    #[test]
    fn external_counterparty_omits_unset_fields() {
        let request = ExternalCounterpartyRequest {
            company_name: Some("Acme Ltd".into()),
            bank_country: Some("GB".into()),
            currency: Some("GBP".into()),
            account_no: Some("12345678".into()),
            sort_code: Some("223344".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "company_name": "Acme Ltd",
                "bank_country": "GB",
                "currency": "GBP",
                "account_no": "12345678",
                "sort_code": "223344"
            })
        );
    }

    #[test]
    fn exchange_leg_amount_is_a_number() {
        let leg = ExchangeLeg {
            account_id: "acc-1".into(),
            currency: "USD".into(),
            amount: Some(dec!(10.5)),
        };
        let value = serde_json::to_value(&leg).unwrap();
        assert_eq!(value["amount"], serde_json::json!(10.5));

        let leg = ExchangeLeg {
            amount: None,
            ..leg
        };
        let value = serde_json::to_value(&leg).unwrap();
        assert!(value.get("amount").is_none());
    }
}
