//! Decoding of Business webhook deliveries.
use chrono::{TimeZone, Utc};
use revolut_sdk::business::{
    CounterpartyAccountType, TransactionState, WebhookEvent, TRANSACTION_CREATED,
    TRANSACTION_STATE_CHANGED,
};
use revolut_sdk::RevolutError;
use rust_decimal_macros::dec;

#[test]
fn test_transaction_created() {
    let body = br#"{
        "event": "TransactionCreated",
        "timestamp": "2024-03-07T10:41:47.115Z",
        "data": {
            "id": "tx-9f1c",
            "type": "transfer",
            "request_id": "payroll-2024-03",
            "state": "pending",
            "created_at": "2024-03-07T10:41:47.115Z",
            "updated_at": "2024-03-07T10:41:47.115Z",
            "reference": "March salary",
            "legs": [
                {
                    "leg_id": "leg-1",
                    "account_id": "acc-gbp-1",
                    "counterparty": {
                        "id": "cp-1",
                        "account_id": "cp-acc-1",
                        "account_type": "external"
                    },
                    "amount": -1250.25,
                    "fee": 0.5,
                    "currency": "GBP",
                    "description": "To John Smith",
                    "balance": 8749.75
                }
            ]
        }
    }"#;

    let event = WebhookEvent::from_slice(body).unwrap();
    assert_eq!(event.event_name(), TRANSACTION_CREATED);

    let WebhookEvent::TransactionCreated(created) = event else {
        panic!("expected TransactionCreated");
    };
    let tx = created.data;
    assert_eq!(tx.id, "tx-9f1c");
    assert_eq!(tx.transaction_type, "transfer");
    assert_eq!(tx.request_id.as_deref(), Some("payroll-2024-03"));
    assert_eq!(tx.state, TransactionState::Pending);
    assert_eq!(tx.completed_at, None);
    assert_eq!(tx.reference.as_deref(), Some("March salary"));

    assert_eq!(tx.legs.len(), 1);
    let leg = &tx.legs[0];
    assert_eq!(leg.amount, dec!(-1250.25));
    assert_eq!(leg.fee, Some(dec!(0.5)));
    assert_eq!(leg.balance, Some(dec!(8749.75)));
    assert_eq!(leg.bill_amount, None);
    let counterparty = leg.counterparty.as_ref().unwrap();
    assert_eq!(
        counterparty.account_type,
        Some(CounterpartyAccountType::External)
    );
}

#[test]
fn test_transaction_state_changed() {
    let body = br#"{
        "event": "TransactionStateChanged",
        "timestamp": "2024-03-07T10:45:00Z",
        "data": {
            "id": "tx-9f1c",
            "old_state": "pending",
            "new_state": "completed"
        }
    }"#;

    let event = WebhookEvent::from_slice(body).unwrap();
    assert_eq!(event.event_name(), TRANSACTION_STATE_CHANGED);

    match event {
        WebhookEvent::TransactionStateChanged(changed) => {
            assert_eq!(
                changed.timestamp,
                Utc.with_ymd_and_hms(2024, 3, 7, 10, 45, 0).unwrap()
            );
            assert_eq!(changed.data.id, "tx-9f1c");
            assert_eq!(changed.data.old_state, TransactionState::Pending);
            assert_eq!(changed.data.new_state, TransactionState::Completed);
        }
        other => panic!("expected TransactionStateChanged, got {other:?}"),
    }
}

#[test]
fn test_unknown_event_keeps_payload() {
    let body = br#"{"event":"PayoutLinkCreated","timestamp":"2024-03-07T10:45:00Z","data":{"id":"pl-1"}}"#;

    let event = WebhookEvent::from_slice(body).unwrap();
    assert_eq!(event.event_name(), "PayoutLinkCreated");
    match event {
        WebhookEvent::Unknown { payload, .. } => {
            assert_eq!(payload["data"]["id"], "pl-1");
        }
        other => panic!("expected Unknown, got {other:?}"),
    }
}

#[test]
fn test_missing_event_field() {
    let err = WebhookEvent::from_slice(br#"{"data":{}}"#).unwrap_err();
    assert!(matches!(err, RevolutError::JsonError(_)), "got {err:?}");
}

#[test]
fn test_known_event_with_bad_payload() {
    let body = br#"{"event":"TransactionStateChanged","timestamp":"2024-03-07T10:45:00Z","data":{"id":"tx-1"}}"#;
    let err = WebhookEvent::from_slice(body).unwrap_err();
    assert!(matches!(err, RevolutError::JsonError(_)), "got {err:?}");
}

#[test]
fn test_not_json() {
    let err = WebhookEvent::from_slice(b"ping").unwrap_err();
    assert!(matches!(err, RevolutError::JsonError(_)), "got {err:?}");
}
