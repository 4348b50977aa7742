use log::debug;

use super::models::{CreateOrderRequest, Order, Refund, RefundRequest};
use crate::api::{Endpoint, RestClient, OK_OR_CREATED};
use crate::errors::RevolutError;

/// Payment orders accepted through the Merchant API.
#[derive(Debug, Clone)]
pub struct OrderService {
    rest: RestClient,
}

impl OrderService {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// POST /orders - Create a payment order. Succeeds on 200 or 201.
    pub async fn create(&self, request: &CreateOrderRequest) -> Result<Order, RevolutError> {
        debug!(
            "api.orders.create amount={} currency={} capture_mode={:?}",
            request.amount, request.currency, request.capture_mode
        );
        let endpoint = Endpoint::post(&["orders"])
            .json(request)
            .expect(OK_OR_CREATED);
        self.rest.execute(endpoint).await
    }

    /// GET /orders/{id}
    pub async fn get(&self, id: &str) -> Result<Order, RevolutError> {
        debug!("api.orders.get id={}", id);
        self.rest.execute(Endpoint::get(&["orders", id])).await
    }

    /// POST /orders/{id}/capture - Send an authorised payment for processing.
    pub async fn capture(&self, id: &str) -> Result<Order, RevolutError> {
        debug!("api.orders.capture id={}", id);
        self.rest
            .execute(Endpoint::post(&["orders", id, "capture"]))
            .await
    }

    /// POST /orders/{id}/cancel - Cancel an order that has not been captured.
    pub async fn cancel(&self, id: &str) -> Result<Order, RevolutError> {
        debug!("api.orders.cancel id={}", id);
        self.rest
            .execute(Endpoint::post(&["orders", id, "cancel"]))
            .await
    }

    /// POST /orders/{id}/refund - Full or partial refund of a captured order.
    pub async fn refund(&self, id: &str, request: &RefundRequest) -> Result<Refund, RevolutError> {
        debug!(
            "api.orders.refund id={} amount={:?} currency={:?}",
            id, request.amount, request.currency
        );
        self.rest
            .execute(Endpoint::post(&["orders", id, "refund"]).json(request))
            .await
    }
}
