//! Revolut Merchant API: orders and customers, authenticated with a secret API key.
pub mod customers;
pub mod models;
pub mod orders;

pub use customers::CustomerService;
pub use models::*;
pub use orders::OrderService;

use crate::api::{Credential, RestClient};
use crate::config::{ApiConfig, ApiFamily, Environment};

/// Entry point for the Merchant API.
#[derive(Debug, Clone)]
pub struct MerchantClient {
    rest: RestClient,
    orders: OrderService,
    customers: CustomerService,
}

impl MerchantClient {
    pub fn new(api_key: impl Into<String>, environment: Environment) -> Self {
        Self::with_config(ApiConfig::new(ApiFamily::Merchant, environment), api_key)
    }

    pub fn production(api_key: impl Into<String>) -> Self {
        Self::new(api_key, Environment::Production)
    }

    pub fn sandbox(api_key: impl Into<String>) -> Self {
        Self::new(api_key, Environment::Sandbox)
    }

    pub fn with_config(config: ApiConfig, api_key: impl Into<String>) -> Self {
        let rest = RestClient::new(&config, Credential::ApiKey(api_key.into()));
        Self {
            orders: OrderService::new(rest.clone()),
            customers: CustomerService::new(rest.clone()),
            rest,
        }
    }

    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    pub fn orders(&self) -> &OrderService {
        &self.orders
    }

    pub fn customers(&self) -> &CustomerService {
        &self.customers
    }
}
