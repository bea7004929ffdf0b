/*
[INPUT]:  Caller-supplied operation parameters
[OUTPUT]: Typed request bodies and query structs with serialization support
[POS]:    Data layer - outbound wire shapes
[UPDATE]: When endpoint parameters change
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{TransactionStatus, TransactionType};

/// Body for `POST /customers/create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_pvt_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotwallet_pvt_key: Option<String>,
}

impl CreateCustomerRequest {
    pub fn new(name: impl Into<String>, rpc_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rpc_url: rpc_url.into(),
            token_address: None,
            vault_contract_address: None,
            admin_address: None,
            hotwallet_address: None,
            admin_pvt_key: None,
            hotwallet_pvt_key: None,
        }
    }
}

/// Body for `POST /customers/wallet`. When `customer_id` is `None` the
/// client fills in the configured default before sending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalletRequest {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

/// Query for `GET /customers/wallet/transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransactionsQuery {
    pub wallet_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
}

/// Query for `GET /customers/wallet/details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWalletDetailsQuery {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

/// Body for `POST /assetsTransaction/WithdrawAsset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawAssetRequest {
    pub wallet_address: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Query for `GET /assetsTransaction/transactions`. `page` and `limit`
/// default to 1 and 10 at issue time when left unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Body for `POST /assetsTransaction/withdraw/approve`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveWithdrawRequest {
    pub transaction_id: String,
    pub approve: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    // Unset optional fields must never serialize, so nothing reaches the
    // wire as null or empty. Round trip through JSON and compare key sets.
    #[rstest]
    #[case(ListTransactionsQuery::default(), vec![])]
    #[case(
        ListTransactionsQuery {
            customer_id: Some("cust1".to_string()),
            page: Some(2),
            ..Default::default()
        },
        vec!["customerId", "page"]
    )]
    #[case(
        ListTransactionsQuery {
            user_id: Some("alice".to_string()),
            status: Some(TransactionStatus::Completed),
            from_date: Some("2024-01-01".to_string()),
            to_date: Some("2024-02-01".to_string()),
            ..Default::default()
        },
        vec!["fromDate", "status", "toDate", "userId"]
    )]
    fn test_only_set_fields_serialize(
        #[case] query: ListTransactionsQuery,
        #[case] mut expected_keys: Vec<&str>,
    ) {
        let value = serde_json::to_value(&query).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        expected_keys.sort_unstable();
        assert_eq!(keys, expected_keys);

        let parsed: ListTransactionsQuery = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, query);
    }

    #[test]
    fn test_wallet_transactions_query_type_param_name() {
        let query = WalletTransactionsQuery {
            wallet_address: "0xabc".to_string(),
            customer_id: None,
            transaction_type: Some(TransactionType::Deposit),
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["type"], "DEPOSIT");
        assert_eq!(value["walletAddress"], "0xabc");
        assert!(value.get("customerId").is_none());
    }

    #[test]
    fn test_withdraw_request_amount_is_a_number() {
        let req = WithdrawAssetRequest {
            wallet_address: "0xabc".to_string(),
            user_id: "alice".to_string(),
            customer_id: Some("cust1".to_string()),
            amount: dec!(50),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value["amount"].is_number());
    }
}
