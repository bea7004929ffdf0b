/*
[INPUT]:  BUILDPAY_API_URL / BUILDPAY_API_KEY environment variables
[OUTPUT]: Console walkthrough from customer creation to withdrawal approval
[POS]:    Example - end-to-end workflow against a running backend
[UPDATE]: When the workflow-facing SDK surface changes
*/

use buildpay_sdk::{
    ApproveWithdrawRequest, BuildPayClient, Config, CreateCustomerRequest, CreateWalletRequest,
    ListTransactionsQuery, TransactionStatus, WithdrawAssetRequest,
};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url =
        std::env::var("BUILDPAY_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let api_key = std::env::var("BUILDPAY_API_KEY").unwrap_or_else(|_| "your-api-key".to_string());

    let mut client = BuildPayClient::new(Config::new(base_url).with_api_key(api_key))?;

    // Create a tenant and make it the default for everything that follows.
    let customer = client
        .customer()
        .create_customer(CreateCustomerRequest::new(
            "Demo Company Ltd",
            "https://bsc-dataseed.binance.org/",
        ))
        .await?;
    println!("customer created: {}", customer.data.customer_id);
    client.set_customer_id(customer.data.customer_id.clone());

    // Wallets for two users, scoped automatically to the new tenant.
    let alice = client
        .customer()
        .create_wallet(CreateWalletRequest {
            user_id: "alice".to_string(),
            customer_id: None,
        })
        .await?;
    println!("wallet created for alice: {}", alice.data.address);

    let bob = client
        .customer()
        .create_wallet(CreateWalletRequest {
            user_id: "bob".to_string(),
            customer_id: None,
        })
        .await?;
    println!("wallet created for bob: {}", bob.data.address);

    // A large withdrawal; whether it needs approval is a server decision.
    let withdrawal = client
        .transaction()
        .withdraw_asset(WithdrawAssetRequest {
            wallet_address: bob.data.address.clone(),
            user_id: "bob".to_string(),
            customer_id: None,
            amount: dec!(150),
        })
        .await?;
    println!(
        "withdrawal {} submitted, status {:?}",
        withdrawal.data.id, withdrawal.data.status
    );

    // Approve whatever is parked behind the approval gate.
    let pending = client
        .transaction()
        .list_transactions(ListTransactionsQuery {
            status: Some(TransactionStatus::WaitingApproval),
            ..Default::default()
        })
        .await?;
    println!("{} transaction(s) waiting for approval", pending.data.total);

    for txn in &pending.data.transactions {
        let approved = client
            .transaction()
            .approve_withdraw(ApproveWithdrawRequest {
                transaction_id: txn.id.clone(),
                approve: true,
            })
            .await?;
        println!("approved {}: now {:?}", approved.data.id, approved.data.status);
    }

    Ok(())
}
