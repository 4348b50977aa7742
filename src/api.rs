//! Low-level REST transport for the Revolut APIs.
//!
//! Every resource service funnels its calls through [`RestClient::execute`] or
//! [`RestClient::execute_no_content`]: build the URL from an [`Endpoint`],
//! send one request, check the status against the endpoint's success codes,
//! then decode the body. Uses reqwest for HTTP.
use std::any::type_name;
use std::fmt;

use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ApiConfig;
use crate::errors::RevolutError;

const JSON: &str = "application/json";

/// Statuses accepted by most endpoints.
pub const OK: &[StatusCode] = &[StatusCode::OK];
/// Statuses accepted by deletions and webhook registration.
pub const NO_CONTENT: &[StatusCode] = &[StatusCode::NO_CONTENT];
/// Statuses accepted by order creation.
pub const OK_OR_CREATED: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];

/// The secret sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Business API access token.
    AccessToken(String),
    /// Merchant API secret key.
    ApiKey(String),
}

impl Credential {
    fn secret(&self) -> &str {
        match self {
            Credential::AccessToken(token) => token,
            Credential::ApiKey(key) => key,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Credential::AccessToken(_) => "access token",
            Credential::ApiKey(_) => "API key",
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::AccessToken(_) => f.write_str("AccessToken(<redacted>)"),
            Credential::ApiKey(_) => f.write_str("ApiKey(<redacted>)"),
        }
    }
}

/// Status and undecoded body of one HTTP round trip.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// The body as text. Invalid UTF-8 sequences become U+FFFD; use `body`
    /// for the exact bytes.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Description of one endpoint call: method, path, query, body and the
/// statuses that count as success.
#[derive(Debug, Clone)]
pub struct Endpoint {
    method: Method,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
    body: Option<Vec<u8>>,
    /// Set when `json` could not encode its argument; reported on dispatch.
    body_error: Option<String>,
    expected: &'static [StatusCode],
}

impl Endpoint {
    /// Path segments are appended to the base URL and percent-encoded, so
    /// identifiers can be passed as-is.
    pub fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: None,
            body_error: None,
            expected: OK,
        }
    }

    pub fn get(segments: &[&str]) -> Self {
        Self::new(Method::GET, segments)
    }

    pub fn post(segments: &[&str]) -> Self {
        Self::new(Method::POST, segments)
    }

    pub fn delete(segments: &[&str]) -> Self {
        Self::new(Method::DELETE, segments)
    }

    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Attach a JSON body. An encoding failure surfaces as
    /// [`RevolutError::JsonError`] when the endpoint is executed, after the
    /// client configuration has been checked.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        match serde_json::to_vec(body) {
            Ok(bytes) => {
                self.body = Some(bytes);
                self.body_error = None;
            }
            Err(e) => {
                self.body = None;
                self.body_error = Some(e.to_string());
            }
        }
        self
    }

    /// Replace the default `200 OK` success set.
    pub fn expect(mut self, expected: &'static [StatusCode]) -> Self {
        self.expected = expected;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn accepts(&self, status: StatusCode) -> bool {
        self.expected.contains(&status)
    }

    /// Resolve against a base URL such as `https://b2b.revolut.com/api/1.0`.
    pub fn url(&self, base: &Url) -> Result<Url, RevolutError> {
        let mut url = base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| RevolutError::Config(format!("{base} cannot be a base URL")))?;
            path.pop_if_empty().extend(&self.segments);
        }
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}

#[derive(Debug, Clone)]
struct Configured {
    http: Client,
    base: Url,
    credential: Credential,
}

/// HTTP client bound to one base URL and one credential.
///
/// Construction never fails. An invalid configuration is kept and returned as
/// [`RevolutError::Config`] from every call, before any request is sent.
/// Cloning is cheap and clones share one connection pool.
#[derive(Debug, Clone)]
pub struct RestClient {
    state: Result<Configured, String>,
}

impl RestClient {
    pub fn new(config: &ApiConfig, credential: Credential) -> Self {
        Self {
            state: configure(config, credential),
        }
    }

    /// The stored configuration problem, if any.
    pub fn config_error(&self) -> Option<&str> {
        self.state.as_ref().err().map(String::as_str)
    }

    /// The parsed base URL, if the client is usable.
    pub fn base_url(&self) -> Option<&Url> {
        self.state.as_ref().ok().map(|c| &c.base)
    }

    fn configured(&self) -> Result<&Configured, RevolutError> {
        self.state
            .as_ref()
            .map_err(|message| RevolutError::Config(message.clone()))
    }

    /// Perform one HTTP round trip. The body is returned as-is, whatever the status.
    pub async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, RevolutError> {
        let configured = self.configured()?;
        debug!(
            "api.send method={} url={} body_len={}",
            method,
            url,
            body.as_ref().map_or(0, Vec::len)
        );

        let mut request = configured
            .http
            .request(method.clone(), url.clone())
            .header(
                AUTHORIZATION,
                format!("Bearer {}", configured.credential.secret()),
            )
            .header(ACCEPT, JSON);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, JSON).body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        debug!(
            "api.send method={} url={} status={} body_len={}",
            method,
            url,
            status,
            body.len()
        );
        Ok(RawResponse { status, body })
    }

    /// Call an endpoint and decode its success body into `T`.
    pub async fn execute<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, RevolutError> {
        let raw = self.dispatch(endpoint).await?;
        decode(&raw)
    }

    /// Call an endpoint whose success response carries no body worth decoding.
    pub async fn execute_no_content(&self, endpoint: Endpoint) -> Result<(), RevolutError> {
        self.dispatch(endpoint).await.map(|_| ())
    }

    async fn dispatch(&self, endpoint: Endpoint) -> Result<RawResponse, RevolutError> {
        let configured = self.configured()?;
        let url = endpoint.url(&configured.base)?;
        let Endpoint {
            method,
            body,
            body_error,
            expected,
            ..
        } = endpoint;
        if let Some(message) = body_error {
            return Err(RevolutError::JsonError(format!(
                "Failed to encode request body: {message}"
            )));
        }
        let raw = self.send(method, url, body).await?;

        if !expected.contains(&raw.status) {
            let text = raw.text();
            debug!(
                "api.dispatch unexpected_status status={} expected={:?} body={}",
                raw.status, expected, text
            );
            return Err(RevolutError::api(raw.status.as_u16(), text));
        }
        Ok(raw)
    }
}

fn configure(config: &ApiConfig, credential: Credential) -> Result<Configured, String> {
    if credential.secret().trim().is_empty() {
        return Err(format!("{} is empty", credential.kind()));
    }

    let base = Url::parse(&config.api_base)
        .map_err(|e| format!("invalid base URL {:?}: {e}", config.api_base))?;
    if base.cannot_be_a_base() {
        return Err(format!("{:?} cannot be a base URL", config.api_base));
    }

    let mut builder = Client::builder().user_agent(config.user_agent.clone());
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let http = builder
        .build()
        .map_err(|e| format!("failed to build HTTP client: {e}"))?;

    Ok(Configured {
        http,
        base,
        credential,
    })
}

fn decode<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, RevolutError> {
    let target_type = type_name::<T>();
    match serde_json::from_slice(&raw.body) {
        Ok(parsed) => {
            debug!("api.decode ok target_type={}", target_type);
            Ok(parsed)
        }
        Err(e) => {
            debug!(
                "api.decode failed target_type={} error={}",
                target_type, e
            );
            let preview: String = raw.text().chars().take(500).collect();
            Err(RevolutError::JsonError(format!(
                "Failed to parse response: {e}\nBody: {preview}"
            )))
        }
    }
}
