/*
[INPUT]:  BuildPay API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the backend schema changes or new types are added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{TransactionStatus, TransactionType};

/// A SaaS customer (tenant). All fields are server-owned; the client never
/// caches or mutates them locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub rpc_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotwallet_address: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Identifier payload returned by customer creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCustomer {
    pub customer_id: String,
}

/// A user wallet scoped to one customer. Balance and limit fields are
/// server-computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub customer_id: String,
    pub address: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub income_balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_deposit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_floating_balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub withdraw_limit_amount: Decimal,
    pub withdraw_limit_count: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_withdraw_limit_amount: Decimal,
    pub current_withdraw_limit_count: u32,
    pub is_blocked: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// A record of value movement with a type and a server-driven status.
///
/// The backend spells several wire names inconsistently (`transacionType`,
/// `transacionStatus`, `formWalletAddress`). That spelling is the real API
/// contract, so the renames below map it to correct Rust names exactly once,
/// here at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    pub customer_id: String,
    pub user_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(
        rename = "formWalletAddress",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub from_wallet_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_wallet_address: Option<String>,
    #[serde(rename = "transacionType")]
    pub transaction_type: TransactionType,
    #[serde(rename = "transacionStatus")]
    pub status: TransactionStatus,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub transaction_fee: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Wallet plus its recent transactions, as returned by the details endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletDetails {
    pub wallet: Wallet,
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_transaction_deserializes_misspelled_wire_names() {
        let json = r#"{
            "_id": "txn123",
            "customerId": "cust1",
            "userId": "alice",
            "amount": 50.5,
            "formWalletAddress": "0xaaa",
            "toWalletAddress": "0xbbb",
            "transacionType": "WITHDRAW",
            "transacionStatus": "WAITING_APPROVAL",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;

        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.id, "txn123");
        assert_eq!(txn.amount, dec!(50.5));
        assert_eq!(txn.from_wallet_address.as_deref(), Some("0xaaa"));
        assert_eq!(txn.transaction_type, TransactionType::Withdraw);
        assert_eq!(txn.status, TransactionStatus::WaitingApproval);
        assert_eq!(txn.transaction_fee, None);

        let back = serde_json::to_value(&txn).unwrap();
        assert_eq!(back["transacionType"], "WITHDRAW");
        assert_eq!(back["formWalletAddress"], "0xaaa");
        assert!(back.get("transactionFee").is_none());
    }

    #[test]
    fn test_wallet_deserializes_numeric_balances() {
        let json = r#"{
            "_id": "w1",
            "userId": "alice",
            "customerId": "cust1",
            "address": "0xabc",
            "balance": 100.25,
            "incomeBalance": 10,
            "totalDeposit": 200,
            "totalSpent": 99.75,
            "totalFloatingBalance": 0,
            "withdrawLimitAmount": 1000,
            "withdrawLimitCount": 5,
            "currentWithdrawLimitAmount": 950,
            "currentWithdrawLimitCount": 4,
            "isBlocked": false,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        }"#;

        let wallet: Wallet = serde_json::from_str(json).unwrap();
        assert_eq!(wallet.balance, dec!(100.25));
        assert_eq!(wallet.withdraw_limit_count, 5);
        assert!(!wallet.is_blocked);
    }
}
