use log::debug;

use super::models::{ExchangeRate, ExchangeRateQuery, ExchangeRequest, ExchangeResponse};
use crate::api::{Endpoint, RestClient};
use crate::errors::RevolutError;

/// Currency exchange between the business's own accounts.
#[derive(Debug, Clone)]
pub struct ExchangeService {
    rest: RestClient,
}

impl ExchangeService {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// GET /rate?from=..&to=..&amount=.. - Quote a rate and fee.
    pub async fn rate(&self, query: &ExchangeRateQuery) -> Result<ExchangeRate, RevolutError> {
        let amount = query.amount_param();
        debug!(
            "api.exchanges.rate from={} to={} amount={}",
            query.from, query.to, amount
        );
        let endpoint = Endpoint::get(&["rate"])
            .query("from", query.from.as_str())
            .query("to", query.to.as_str())
            .query("amount", amount);
        self.rest.execute(endpoint).await
    }

    /// POST /exchange - Exchange money between two accounts.
    pub async fn exchange(
        &self,
        request: &ExchangeRequest,
    ) -> Result<ExchangeResponse, RevolutError> {
        debug!(
            "api.exchanges.exchange from={} to={} request_id={}",
            request.from.currency, request.to.currency, request.request_id
        );
        self.rest
            .execute(Endpoint::post(&["exchange"]).json(request))
            .await
    }
}
