//! Environment and base-URL configuration for the two Revolut API families.
use std::time::Duration;

/// Which Revolut API a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFamily {
    Business,
    Merchant,
}

/// Supported Revolut environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

/// Configuration holding the API base URL and HTTP options.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL including the `/api/1.0` prefix, without a trailing slash.
    pub api_base: String,
    /// Whole-request timeout. `None` leaves the HTTP client default.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new(family: ApiFamily, environment: Environment) -> Self {
        let api_base = match (family, environment) {
            (ApiFamily::Business, Environment::Production) => "https://b2b.revolut.com/api/1.0",
            (ApiFamily::Business, Environment::Sandbox) => {
                "https://sandbox-b2b.revolut.com/api/1.0"
            }
            (ApiFamily::Merchant, Environment::Production) => {
                "https://merchant.revolut.com/api/1.0"
            }
            (ApiFamily::Merchant, Environment::Sandbox) => {
                "https://sandbox-merchant.revolut.com/api/1.0"
            }
        };
        Self::custom(api_base)
    }

    /// Point the client at an arbitrary base URL, e.g. a stub server or proxy.
    pub fn custom(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            timeout: None,
            user_agent: concat!("revolut-sdk/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_urls_per_family_and_environment() {
        assert_eq!(
            ApiConfig::new(ApiFamily::Business, Environment::Production).api_base,
            "https://b2b.revolut.com/api/1.0"
        );
        assert_eq!(
            ApiConfig::new(ApiFamily::Business, Environment::Sandbox).api_base,
            "https://sandbox-b2b.revolut.com/api/1.0"
        );
        assert_eq!(
            ApiConfig::new(ApiFamily::Merchant, Environment::Production).api_base,
            "https://merchant.revolut.com/api/1.0"
        );
        assert_eq!(
            ApiConfig::new(ApiFamily::Merchant, Environment::Sandbox).api_base,
            "https://sandbox-merchant.revolut.com/api/1.0"
        );
    }

    #[test]
    fn custom_base_strips_trailing_slash() {
        let config = ApiConfig::custom("http://127.0.0.1:8080/api/1.0/");
        assert_eq!(config.api_base, "http://127.0.0.1:8080/api/1.0");
        assert!(config.timeout.is_none());
    }
}
