use log::debug;

use super::models::{PaymentDraftCreated, PaymentDraftDetail, PaymentDraftRequest, PaymentDrafts};
use crate::api::{Endpoint, RestClient, NO_CONTENT};
use crate::errors::RevolutError;

/// Payment drafts: batches of payments waiting for approval in the web app.
#[derive(Debug, Clone)]
pub struct PaymentDraftService {
    rest: RestClient,
}

impl PaymentDraftService {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// POST /payment-drafts
    pub async fn create(
        &self,
        request: &PaymentDraftRequest,
    ) -> Result<PaymentDraftCreated, RevolutError> {
        debug!(
            "api.payment_drafts.create payments={} schedule_for={:?}",
            request.payments.len(),
            request.schedule_for
        );
        self.rest
            .execute(Endpoint::post(&["payment-drafts"]).json(request))
            .await
    }

    /// GET /payment-drafts
    pub async fn list(&self) -> Result<PaymentDrafts, RevolutError> {
        debug!("api.payment_drafts.list");
        self.rest.execute(Endpoint::get(&["payment-drafts"])).await
    }

    /// GET /payment-drafts/{id}
    pub async fn get(&self, id: &str) -> Result<PaymentDraftDetail, RevolutError> {
        debug!("api.payment_drafts.get id={}", id);
        self.rest
            .execute(Endpoint::get(&["payment-drafts", id]))
            .await
    }

    /// DELETE /payment-drafts/{id}
    pub async fn delete(&self, id: &str) -> Result<(), RevolutError> {
        debug!("api.payment_drafts.delete id={}", id);
        self.rest
            .execute_no_content(Endpoint::delete(&["payment-drafts", id]).expect(NO_CONTENT))
            .await
    }
}
