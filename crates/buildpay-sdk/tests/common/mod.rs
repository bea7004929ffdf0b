/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for buildpay-sdk tests

use buildpay_sdk::{BuildPayClient, Config};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client bound to the mock server with the standard test credentials:
/// api key `k1`, default customer id `t1`.
pub fn test_client(server: &MockServer) -> BuildPayClient {
    BuildPayClient::new(
        Config::new(server.uri())
            .with_api_key("k1")
            .with_customer_id("t1"),
    )
    .expect("client init")
}

/// Client bound to the mock server with no credentials configured.
#[allow(dead_code)]
pub fn bare_client(server: &MockServer) -> BuildPayClient {
    BuildPayClient::new(Config::new(server.uri())).expect("client init")
}

/// A transaction record as the backend serializes it, misspellings included.
#[allow(dead_code)]
pub fn transaction_json(id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "customerId": "t1",
        "userId": "alice",
        "amount": 50.0,
        "formWalletAddress": "0xhotwallet",
        "toWalletAddress": "0xalice",
        "transacionType": "WITHDRAW",
        "transacionStatus": status,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

/// A wallet record as the backend serializes it.
#[allow(dead_code)]
pub fn wallet_json(user_id: &str, address: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": "w1",
        "userId": user_id,
        "customerId": "t1",
        "address": address,
        "balance": 100.0,
        "incomeBalance": 0.0,
        "totalDeposit": 100.0,
        "totalSpent": 0.0,
        "totalFloatingBalance": 0.0,
        "withdrawLimitAmount": 1000.0,
        "withdrawLimitCount": 5,
        "currentWithdrawLimitAmount": 1000.0,
        "currentWithdrawLimitCount": 5,
        "isBlocked": false,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

/// Wrap a payload in the backend's `{ data, message }` envelope.
#[allow(dead_code)]
pub fn envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "data": data, "message": "success" })
}
