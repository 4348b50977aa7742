use log::debug;

use super::models::{Account, AccountBankDetails};
use crate::api::{Endpoint, RestClient};
use crate::errors::RevolutError;

/// Accounts held by the business.
#[derive(Debug, Clone)]
pub struct AccountService {
    rest: RestClient,
}

impl AccountService {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// GET /accounts - List all accounts.
    pub async fn list(&self) -> Result<Vec<Account>, RevolutError> {
        debug!("api.accounts.list");
        self.rest.execute(Endpoint::get(&["accounts"])).await
    }

    /// GET /accounts/{id} - Fetch one account.
    pub async fn get(&self, id: &str) -> Result<Account, RevolutError> {
        debug!("api.accounts.get id={}", id);
        self.rest.execute(Endpoint::get(&["accounts", id])).await
    }

    /// GET /accounts/{id}/bank-details - Details for paying into an account.
    pub async fn bank_details(&self, id: &str) -> Result<Vec<AccountBankDetails>, RevolutError> {
        debug!("api.accounts.bank_details id={}", id);
        self.rest
            .execute(Endpoint::get(&["accounts", id, "bank-details"]))
            .await
    }
}
