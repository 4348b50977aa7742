//! Shared helpers for the revolut-sdk integration tests.
#![allow(dead_code)]

use revolut_sdk::{ApiConfig, BusinessClient, MerchantClient};
use wiremock::{MockServer, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "oa_sand_test_token";
pub const API_KEY: &str = "sk_sandbox_test_key";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn api_base(server: &MockServer) -> String {
    format!("{}/api/1.0", server.uri())
}

pub fn business_client(server: &MockServer) -> BusinessClient {
    BusinessClient::with_config(ApiConfig::custom(api_base(server)), ACCESS_TOKEN)
}

pub fn merchant_client(server: &MockServer) -> MerchantClient {
    MerchantClient::with_config(ApiConfig::custom(api_base(server)), API_KEY)
}

/// A response with the given status and a raw JSON body.
pub fn json_response(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/json")
}
