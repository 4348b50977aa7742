//! Revolut SDK for Rust.
//!
//! Typed async clients for the Revolut Business API and the Revolut Merchant
//! API (version 1.0).
//!
//! # What This SDK Provides
//!
//! - Business API client: [`BusinessClient`] (accounts, counterparties,
//!   exchanges, payment drafts, webhooks)
//! - Merchant API client: [`MerchantClient`] (orders, customers)
//! - Typed request/response models for both APIs
//! - Decoding of Business webhook deliveries: [`business::WebhookEvent`]
//! - Low-level transport for untyped endpoints: [`api::RestClient`]
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use revolut_sdk::BusinessClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), revolut_sdk::RevolutError> {
//!     let client = BusinessClient::sandbox("oa_sand_access_token");
//!
//!     for account in client.accounts().list().await? {
//!         println!("{} {} {}", account.id, account.balance, account.currency);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Taking a Card Payment
//!
//! ```rust,no_run
//! use revolut_sdk::merchant::{CaptureMode, CreateOrderRequest, OrderState};
//! use revolut_sdk::MerchantClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), revolut_sdk::RevolutError> {
//!     let client = MerchantClient::sandbox("sk_sandbox_key");
//!
//!     let mut request = CreateOrderRequest::new(1999, "GBP");
//!     request.capture_mode = Some(CaptureMode::Manual);
//!     let order = client.orders().create(&request).await?;
//!
//!     // ... customer pays via the checkout widget using order.public_id ...
//!
//!     if client.orders().get(&order.id).await?.state == OrderState::Authorised {
//!         client.orders().capture(&order.id).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Quoting and Executing an Exchange
//!
//! ```rust,no_run
//! use revolut_sdk::business::{ExchangeLeg, ExchangeRateQuery, ExchangeRequest};
//! use revolut_sdk::BusinessClient;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), revolut_sdk::RevolutError> {
//!     let client = BusinessClient::production("oa_prod_access_token");
//!     let amount = Decimal::new(10000, 2);
//!
//!     let quote = client
//!         .exchanges()
//!         .rate(&ExchangeRateQuery::new("GBP", "EUR").with_amount(amount))
//!         .await?;
//!     println!("rate {} fee {}", quote.rate, quote.fee.amount);
//!
//!     let request = ExchangeRequest {
//!         from: ExchangeLeg { account_id: "gbp-account".into(), currency: "GBP".into(), amount: Some(amount) },
//!         to: ExchangeLeg { account_id: "eur-account".into(), currency: "EUR".into(), amount: None },
//!         reference: Some("treasury".into()),
//!         request_id: "exchange-2024-001".into(),
//!     };
//!     let result = client.exchanges().exchange(&request).await?;
//!     println!("exchange {} is {:?}", result.id, result.state);
//!     Ok(())
//! }
//! ```
//!
//! # Logging
//!
//! This crate emits debug-level logs through the [`log`](https://docs.rs/log/) facade:
//! one line per API call and one per HTTP round trip. Credentials are never
//! logged. Configure any compatible logger in your binary, then set
//! `RUST_LOG=debug` to inspect request flow.
//!
//! # Errors
//!
//! All fallible operations return [`RevolutError`]:
//!
//! - `Config`: the client was built with an empty credential or bad base URL;
//!   nothing was sent
//! - `HttpError`: the request never got an answer
//! - `Api`: the API answered with a status the endpoint does not treat as
//!   success; carries the status and the raw body
//! - `JsonError`: the success body did not match the expected shape
//!
//! No call is retried.
pub mod api;
pub mod business;
pub mod config;
pub mod errors;
pub mod merchant;

// Re-export primary types for convenience.
pub use api::{Credential, Endpoint, RawResponse, RestClient};
pub use business::BusinessClient;
pub use config::{ApiConfig, ApiFamily, Environment};
pub use errors::RevolutError;
pub use merchant::MerchantClient;
