/*
[INPUT]:  BuildPay API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with deserialization support
[POS]:    Data layer - inbound wire shapes
[UPDATE]: When the backend response envelope changes
*/

use serde::{Deserialize, Serialize};

use super::models::Transaction;

/// Every BuildPay response wraps its payload in this envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
}

/// Paginated payload nested inside the envelope by the transaction list
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedTransactions {
    pub transactions: Vec<Transaction>,
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub total_pages: u32,
}
