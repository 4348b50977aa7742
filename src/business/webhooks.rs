use log::debug;

use super::models::WebhookRequest;
use crate::api::{Endpoint, RestClient, NO_CONTENT};
use crate::errors::RevolutError;

/// Registration of the single Business API webhook.
///
/// Deliveries are decoded with [`WebhookEvent`](super::events::WebhookEvent).
#[derive(Debug, Clone)]
pub struct WebhookService {
    rest: RestClient,
}

impl WebhookService {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// POST /webhook - Register or replace the callback URL.
    pub async fn set(&self, url: &str) -> Result<(), RevolutError> {
        debug!("api.webhooks.set url={}", url);
        let body = WebhookRequest {
            url: url.to_string(),
        };
        self.rest
            .execute_no_content(Endpoint::post(&["webhook"]).json(&body).expect(NO_CONTENT))
            .await
    }

    /// DELETE /webhook
    pub async fn delete(&self) -> Result<(), RevolutError> {
        debug!("api.webhooks.delete");
        self.rest
            .execute_no_content(Endpoint::delete(&["webhook"]).expect(NO_CONTENT))
            .await
    }
}
