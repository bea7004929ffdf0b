/*
[INPUT]:  Customer and wallet operation parameters
[OUTPUT]: Customer/wallet resources from the backend
[POS]:    HTTP layer - customer endpoints
[UPDATE]: When adding customer endpoints or changing their parameters
*/

use reqwest::Method;

use crate::http::Result;
use crate::http::transport::Transport;
use crate::types::{
    ApiResponse, CreateCustomerRequest, CreateWalletRequest, CreatedCustomer, Customer,
    Transaction, UserWalletDetailsQuery, Wallet, WalletDetails, WalletTransactionsQuery,
};

/// Customer and wallet operations. Borrowed from
/// [`BuildPayClient::customer`](crate::BuildPayClient::customer).
#[derive(Debug)]
pub struct CustomerApi<'a> {
    pub(crate) transport: &'a Transport,
}

impl CustomerApi<'_> {
    /// Create a SaaS customer (tenant).
    ///
    /// POST /customers/create
    pub async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<ApiResponse<CreatedCustomer>> {
        let builder = self
            .transport
            .request(Method::POST, "/customers/create")?
            .json(&request);
        self.transport.send(builder).await
    }

    /// Fetch a customer by id.
    ///
    /// GET /customers/{id}
    pub async fn get_customer(&self, customer_id: &str) -> Result<ApiResponse<Customer>> {
        let builder = self
            .transport
            .request(Method::GET, &format!("/customers/{customer_id}"))?;
        self.transport.send(builder).await
    }

    /// Create a wallet for a user. Falls back to the configured default
    /// customer id when the request omits one.
    ///
    /// POST /customers/wallet
    pub async fn create_wallet(
        &self,
        mut request: CreateWalletRequest,
    ) -> Result<ApiResponse<Wallet>> {
        if request.customer_id.is_none() {
            request.customer_id = self.transport.default_customer_id();
        }
        let builder = self
            .transport
            .request(Method::POST, "/customers/wallet")?
            .json(&request);
        self.transport.send(builder).await
    }

    /// List deposit/withdraw transactions for a wallet address. The type
    /// filter is left off the wire entirely when unset.
    ///
    /// GET /customers/wallet/transactions
    pub async fn wallet_transactions(
        &self,
        mut query: WalletTransactionsQuery,
    ) -> Result<ApiResponse<Vec<Transaction>>> {
        if query.customer_id.is_none() {
            query.customer_id = self.transport.default_customer_id();
        }
        let builder = self
            .transport
            .request(Method::GET, "/customers/wallet/transactions")?
            .query(&query);
        self.transport.send(builder).await
    }

    /// Fetch wallet details plus recent transactions for a user.
    ///
    /// GET /customers/wallet/details
    pub async fn user_wallet_details(
        &self,
        mut query: UserWalletDetailsQuery,
    ) -> Result<ApiResponse<WalletDetails>> {
        if query.customer_id.is_none() {
            query.customer_id = self.transport.default_customer_id();
        }
        let builder = self
            .transport
            .request(Method::GET, "/customers/wallet/details")?
            .query(&query);
        self.transport.send(builder).await
    }
}
