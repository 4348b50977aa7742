use log::debug;

use super::models::{CreateCustomerRequest, Customer};
use crate::api::{Endpoint, RestClient};
use crate::errors::RevolutError;

#[derive(Debug, Clone)]
pub struct CustomerService {
    rest: RestClient,
}

impl CustomerService {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// POST /customers
    pub async fn create(&self, request: &CreateCustomerRequest) -> Result<Customer, RevolutError> {
        debug!("api.customers.create");
        self.rest
            .execute(Endpoint::post(&["customers"]).json(request))
            .await
    }
}
