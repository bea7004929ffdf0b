/*
[INPUT]:  Transaction operation parameters
[OUTPUT]: Transaction resources and paginated listings from the backend
[POS]:    HTTP layer - asset transaction endpoints
[UPDATE]: When adding transaction endpoints or changing their parameters
*/

use reqwest::Method;

use crate::http::Result;
use crate::http::transport::Transport;
use crate::types::{
    ApiResponse, ApproveWithdrawRequest, ListTransactionsQuery, PaginatedTransactions,
    Transaction, WithdrawAssetRequest,
};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 10;

/// Asset transaction operations. Borrowed from
/// [`BuildPayClient::transaction`](crate::BuildPayClient::transaction).
#[derive(Debug)]
pub struct TransactionApi<'a> {
    pub(crate) transport: &'a Transport,
}

impl TransactionApi<'_> {
    /// Submit a withdraw request from the tenant hot wallet to a user
    /// wallet. Whether it completes immediately or parks in
    /// `WAITING_APPROVAL` is decided server-side; the returned transaction
    /// status is the only signal.
    ///
    /// POST /assetsTransaction/WithdrawAsset
    pub async fn withdraw_asset(
        &self,
        mut request: WithdrawAssetRequest,
    ) -> Result<ApiResponse<Transaction>> {
        if request.customer_id.is_none() {
            request.customer_id = self.transport.default_customer_id();
        }
        let builder = self
            .transport
            .request(Method::POST, "/assetsTransaction/WithdrawAsset")?
            .json(&request);
        self.transport.send(builder).await
    }

    /// List transactions with pagination and optional filters. `page` and
    /// `limit` default to 1 and 10; unset filters stay off the wire.
    ///
    /// GET /assetsTransaction/transactions
    pub async fn list_transactions(
        &self,
        mut query: ListTransactionsQuery,
    ) -> Result<ApiResponse<PaginatedTransactions>> {
        if query.customer_id.is_none() {
            query.customer_id = self.transport.default_customer_id();
        }
        query.page = Some(query.page.unwrap_or(DEFAULT_PAGE));
        query.limit = Some(query.limit.unwrap_or(DEFAULT_LIMIT));
        let builder = self
            .transport
            .request(Method::GET, "/assetsTransaction/transactions")?
            .query(&query);
        self.transport.send(builder).await
    }

    /// Approve or reject a withdraw that is waiting for approval.
    ///
    /// POST /assetsTransaction/withdraw/approve
    pub async fn approve_withdraw(
        &self,
        request: ApproveWithdrawRequest,
    ) -> Result<ApiResponse<Transaction>> {
        let builder = self
            .transport
            .request(Method::POST, "/assetsTransaction/withdraw/approve")?
            .json(&request);
        self.transport.send(builder).await
    }
}
