/*
[INPUT]:  Caller-supplied connection settings
[OUTPUT]: Validated SDK configuration
[POS]:    Configuration layer - shared by transport and resource modules
[UPDATE]: When adding connection options
*/

use std::time::Duration;

/// Default request timeout, matching the backend's documented 30s budget.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// SDK configuration.
///
/// `base_url` and `timeout` are fixed at construction. The API key and the
/// default customer id can be replaced later through
/// [`BuildPayClient::set_api_key`](crate::BuildPayClient::set_api_key) and
/// [`BuildPayClient::set_customer_id`](crate::BuildPayClient::set_customer_id);
/// changes apply to requests issued afterwards only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the BuildPay API, e.g. `https://api.buildpay.com`.
    pub base_url: String,
    /// Bearer token sent as `Authorization` when present.
    pub api_key: Option<String>,
    /// Default customer (tenant) id, sent as `X-Customer-Id` and merged into
    /// requests that omit a per-call customer id.
    pub customer_id: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            customer_id: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
