//! Revolut Business API: accounts, counterparties, exchanges, payment drafts
//! and webhooks, authenticated with an access token.
pub mod accounts;
pub mod counterparties;
pub mod events;
pub mod exchanges;
pub mod models;
pub mod payment_drafts;
pub mod webhooks;

pub use accounts::AccountService;
pub use counterparties::CounterpartyService;
pub use events::*;
pub use exchanges::ExchangeService;
pub use models::*;
pub use payment_drafts::PaymentDraftService;
pub use webhooks::WebhookService;

use crate::api::{Credential, RestClient};
use crate::config::{ApiConfig, ApiFamily, Environment};

/// Entry point for the Business API.
///
/// All services share one access token, one base URL and one connection pool.
#[derive(Debug, Clone)]
pub struct BusinessClient {
    rest: RestClient,
    accounts: AccountService,
    counterparties: CounterpartyService,
    exchanges: ExchangeService,
    payment_drafts: PaymentDraftService,
    webhooks: WebhookService,
}

impl BusinessClient {
    pub fn new(access_token: impl Into<String>, environment: Environment) -> Self {
        Self::with_config(
            ApiConfig::new(ApiFamily::Business, environment),
            access_token,
        )
    }

    pub fn production(access_token: impl Into<String>) -> Self {
        Self::new(access_token, Environment::Production)
    }

    pub fn sandbox(access_token: impl Into<String>) -> Self {
        Self::new(access_token, Environment::Sandbox)
    }

    /// Create a client with a custom configuration, e.g. a stub server base URL.
    pub fn with_config(config: ApiConfig, access_token: impl Into<String>) -> Self {
        let rest = RestClient::new(&config, Credential::AccessToken(access_token.into()));
        Self {
            accounts: AccountService::new(rest.clone()),
            counterparties: CounterpartyService::new(rest.clone()),
            exchanges: ExchangeService::new(rest.clone()),
            payment_drafts: PaymentDraftService::new(rest.clone()),
            webhooks: WebhookService::new(rest.clone()),
            rest,
        }
    }

    /// The shared transport, for endpoints without a typed wrapper.
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    pub fn accounts(&self) -> &AccountService {
        &self.accounts
    }

    pub fn counterparties(&self) -> &CounterpartyService {
        &self.counterparties
    }

    pub fn exchanges(&self) -> &ExchangeService {
        &self.exchanges
    }

    pub fn payment_drafts(&self) -> &PaymentDraftService {
        &self.payment_drafts
    }

    pub fn webhooks(&self) -> &WebhookService {
        &self.webhooks
    }
}
