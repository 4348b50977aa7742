use log::debug;

use super::models::{Counterparty, ExternalCounterpartyRequest, RevolutCounterpartyRequest};
use crate::api::{Endpoint, RestClient, NO_CONTENT};
use crate::errors::RevolutError;

/// People and businesses the account can pay.
#[derive(Debug, Clone)]
pub struct CounterpartyService {
    rest: RestClient,
}

impl CounterpartyService {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// POST /counterparty - Add an existing Revolut user.
    pub async fn add_revolut(
        &self,
        request: &RevolutCounterpartyRequest,
    ) -> Result<Counterparty, RevolutError> {
        debug!(
            "api.counterparties.add_revolut profile_type={:?}",
            request.profile_type
        );
        self.rest
            .execute(Endpoint::post(&["counterparty"]).json(request))
            .await
    }

    /// POST /counterparty - Add a bank account held outside Revolut.
    pub async fn add_external(
        &self,
        request: &ExternalCounterpartyRequest,
    ) -> Result<Counterparty, RevolutError> {
        debug!(
            "api.counterparties.add_external bank_country={:?} currency={:?}",
            request.bank_country, request.currency
        );
        self.rest
            .execute(Endpoint::post(&["counterparty"]).json(request))
            .await
    }

    /// GET /counterparty/{id}
    pub async fn get(&self, id: &str) -> Result<Counterparty, RevolutError> {
        debug!("api.counterparties.get id={}", id);
        self.rest.execute(Endpoint::get(&["counterparty", id])).await
    }

    /// GET /counterparties
    pub async fn list(&self) -> Result<Vec<Counterparty>, RevolutError> {
        debug!("api.counterparties.list");
        self.rest.execute(Endpoint::get(&["counterparties"])).await
    }

    /// DELETE /counterparty/{id} - No payments can be made to a deleted counterparty.
    pub async fn delete(&self, id: &str) -> Result<(), RevolutError> {
        debug!("api.counterparties.delete id={}", id);
        self.rest
            .execute_no_content(Endpoint::delete(&["counterparty", id]).expect(NO_CONTENT))
            .await
    }
}
