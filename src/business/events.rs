//! Payloads Revolut posts to a registered Business webhook.
//!
//! The SDK does not host a server; these types are for the caller's own
//! receiver to decode request bodies with.
use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::{CounterpartyAccountType, TransactionState};
use crate::errors::RevolutError;

pub const TRANSACTION_CREATED: &str = "TransactionCreated";
pub const TRANSACTION_STATE_CHANGED: &str = "TransactionStateChanged";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegCounterparty {
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub account_type: Option<CounterpartyAccountType>,
}

/// One side of a transaction. Transfers between own accounts have two legs,
/// everything else has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionLeg {
    pub leg_id: String,
    pub account_id: String,
    pub counterparty: Option<LegCounterparty>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee: Option<Decimal>,
    pub currency: String,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub bill_amount: Option<Decimal>,
    pub bill_currency: Option<String>,
    pub description: Option<String>,
    /// Account balance after the transaction.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub balance: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCreated {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// The request ID supplied when the transaction was initiated.
    pub request_id: Option<String>,
    pub state: TransactionState,
    pub reason_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Present for completed transactions only.
    pub completed_at: Option<DateTime<Utc>>,
    pub scheduled_for: Option<String>,
    pub reference: Option<String>,
    #[serde(default)]
    pub legs: Vec<TransactionLeg>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCreatedEvent {
    pub event: String,
    pub timestamp: DateTime<Utc>,
    pub data: TransactionCreated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStateChanged {
    pub id: String,
    pub old_state: TransactionState,
    pub new_state: TransactionState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStateChangedEvent {
    pub event: String,
    pub timestamp: DateTime<Utc>,
    pub data: TransactionStateChanged,
}

/// A decoded webhook delivery.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookEvent {
    TransactionCreated(TransactionCreatedEvent),
    TransactionStateChanged(TransactionStateChangedEvent),
    /// An event name this SDK does not model; the payload is kept whole.
    Unknown {
        event: String,
        payload: serde_json::Value,
    },
}

impl WebhookEvent {
    /// Decode a webhook request body, dispatching on its `event` field.
    pub fn from_slice(body: &[u8]) -> Result<Self, RevolutError> {
        let payload: serde_json::Value = serde_json::from_slice(body)?;
        let event = payload
            .get("event")
            .and_then(|e| e.as_str())
            .ok_or_else(|| RevolutError::JsonError("webhook payload has no event field".into()))?
            .to_string();
        debug!("webhook.from_slice event={}", event);

        match event.as_str() {
            TRANSACTION_CREATED => Ok(WebhookEvent::TransactionCreated(
                serde_json::from_value(payload)?,
            )),
            TRANSACTION_STATE_CHANGED => Ok(WebhookEvent::TransactionStateChanged(
                serde_json::from_value(payload)?,
            )),
            _ => Ok(WebhookEvent::Unknown { event, payload }),
        }
    }

    pub fn event_name(&self) -> &str {
        match self {
            WebhookEvent::TransactionCreated(e) => &e.event,
            WebhookEvent::TransactionStateChanged(e) => &e.event,
            WebhookEvent::Unknown { event, .. } => event,
        }
    }
}
