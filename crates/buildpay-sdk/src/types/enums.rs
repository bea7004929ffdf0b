/*
[INPUT]:  BuildPay API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the backend schema changes or new types are added
*/

use serde::{Deserialize, Serialize};

/// Kind of value movement recorded by a transaction.
///
/// Wire values are backend-owned; `PLAN PURCHASE` really does carry a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "DEPOSIT")]
    Deposit,
    #[serde(rename = "WITHDRAW")]
    Withdraw,
    #[serde(rename = "TRANSFER")]
    Transfer,
    #[serde(rename = "CREDIT")]
    Credit,
    #[serde(rename = "DEBIT")]
    Debit,
    #[serde(rename = "PLAN PURCHASE")]
    PlanPurchase,
}

/// Server-driven transaction lifecycle state. The client only observes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    WaitingApproval,
    Completed,
    Cancelled,
    Rejected,
    SelfTransfer,
}
