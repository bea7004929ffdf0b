/*
[INPUT]:  SDK configuration (base URL, timeout, credentials)
[OUTPUT]: Issued HTTP requests with normalized errors
[POS]:    HTTP layer - transport facade shared by all resource modules
[UPDATE]: When adding connection options or changing request construction
*/

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::http::{BuildPayError, Result};

/// Tenant-scoping header expected by the backend.
const CUSTOMER_ID_HEADER: &str = "X-Customer-Id";

/// Owns the single reusable HTTP client and the mutable credential state.
///
/// Headers are rebuilt from [`Config`] at request-issue time, so a credential
/// update affects every request issued afterwards while requests already in
/// flight keep the headers they were sent with.
#[derive(Debug)]
pub(crate) struct Transport {
    http: Client,
    base_url: String,
    config: Config,
}

impl Transport {
    pub(crate) fn new(config: Config) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(BuildPayError::Config(
                "BuildPay SDK requires a base_url in the configuration".to_string(),
            ));
        }
        // Validate up front so a bad base address fails at construction,
        // not on the first request.
        Url::parse(&config.base_url)
            .map_err(|e| BuildPayError::Config(format!("invalid base_url: {e}")))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BuildPayError::Config(format!("failed to build HTTP client: {e}")))?;
        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            config,
        })
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the bearer token used for subsequent requests.
    pub(crate) fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.config.api_key = Some(api_key.into());
    }

    /// Replace the default customer id used for header scoping and
    /// parameter defaulting on subsequent requests.
    pub(crate) fn set_customer_id(&mut self, customer_id: impl Into<String>) {
        self.config.customer_id = Some(customer_id.into());
    }

    /// Returns the configured default customer id, if any.
    pub(crate) fn default_customer_id(&self) -> Option<String> {
        self.config.customer_id.clone()
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(api_key) = &self.config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|_| BuildPayError::Config("api_key is not a valid header value".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        if let Some(customer_id) = &self.config.customer_id {
            let value = HeaderValue::from_str(customer_id).map_err(|_| {
                BuildPayError::Config("customer_id is not a valid header value".to_string())
            })?;
            headers.insert(CUSTOMER_ID_HEADER, value);
        }
        Ok(headers)
    }

    /// Build a request for `path` with the current header set attached.
    ///
    /// Plain string concatenation rather than `Url::join`, so a base address
    /// carrying a path prefix (e.g. `https://host/api/v1`) keeps the prefix.
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = Url::parse(&format!("{}{}", self.base_url, path))?;
        Ok(self.http.request(method, url).headers(self.headers()?))
    }

    /// Issue a request and decode the response, normalizing every failure
    /// into one of the crate's error kinds.
    pub(crate) async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        // A send() failure means no usable response arrived.
        let response = builder.send().await.map_err(BuildPayError::Network)?;
        let status = response.status();
        let url = response.url().clone();
        let text = response.text().await.map_err(BuildPayError::Network)?;

        if !status.is_success() {
            let body: Option<serde_json::Value> = serde_json::from_str(&text).ok();
            let message = body
                .as_ref()
                .and_then(|value| value.get("message"))
                .and_then(|message| message.as_str())
                .map(str::to_owned)
                .unwrap_or_else(|| format!("request failed with status {status}"));
            warn!(%url, status = status.as_u16(), %message, "API error response");
            return Err(BuildPayError::Api {
                status: status.as_u16(),
                message,
                body,
            });
        }

        debug!(%url, status = status.as_u16(), "response received");
        serde_json::from_str(&text).map_err(BuildPayError::Serialization)
    }
}
