/*
[INPUT]:  Caller-supplied configuration
[OUTPUT]: Composed BuildPay client with resource accessors
[POS]:    Client facade - composition root, the only type callers construct
[UPDATE]: When adding resource modules or configuration mutators
*/

use crate::config::Config;
use crate::http::transport::Transport;
use crate::http::{CustomerApi, Result, TransactionApi};

/// Entry point for the BuildPay API.
///
/// Construct one per backend, then reach endpoints through the resource
/// accessors:
///
/// ```no_run
/// use buildpay_sdk::{BuildPayClient, Config, CreateWalletRequest};
///
/// # async fn run() -> buildpay_sdk::Result<()> {
/// let client = BuildPayClient::new(
///     Config::new("https://api.buildpay.com")
///         .with_api_key("your-api-key")
///         .with_customer_id("customer123"),
/// )?;
///
/// let wallet = client
///     .customer()
///     .create_wallet(CreateWalletRequest {
///         user_id: "user123".to_string(),
///         customer_id: None,
///     })
///     .await?;
/// println!("wallet address: {}", wallet.data.address);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BuildPayClient {
    transport: Transport,
}

impl BuildPayClient {
    /// Build a client from configuration. Fails with
    /// [`BuildPayError::Config`](crate::BuildPayError::Config) when
    /// `base_url` is missing or unparseable; no HTTP client is created in
    /// that case.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Customer and wallet operations.
    pub fn customer(&self) -> CustomerApi<'_> {
        CustomerApi {
            transport: &self.transport,
        }
    }

    /// Asset transaction operations.
    pub fn transaction(&self) -> TransactionApi<'_> {
        TransactionApi {
            transport: &self.transport,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        self.transport.config()
    }

    /// Replace the API key. Takes effect on the next issued request;
    /// requests already in flight keep the token they were sent with.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.transport.set_api_key(api_key);
    }

    /// Replace the default customer id used for the `X-Customer-Id` header
    /// and for parameter defaulting. Takes effect on the next issued
    /// request.
    pub fn set_customer_id(&mut self, customer_id: impl Into<String>) {
        self.transport.set_customer_id(customer_id);
    }
}
