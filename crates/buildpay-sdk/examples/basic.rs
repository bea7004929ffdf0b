/*
[INPUT]:  BUILDPAY_API_URL / BUILDPAY_API_KEY environment variables
[OUTPUT]: Console walkthrough of wallet creation and lookup
[POS]:    Example - minimal SDK usage
[UPDATE]: When the basic client surface changes
*/

use buildpay_sdk::{BuildPayClient, Config, CreateWalletRequest, UserWalletDetailsQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url =
        std::env::var("BUILDPAY_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let api_key = std::env::var("BUILDPAY_API_KEY").unwrap_or_else(|_| "your-api-key".to_string());

    let client = BuildPayClient::new(
        Config::new(base_url)
            .with_api_key(api_key)
            .with_customer_id("customer123"),
    )?;

    let wallet = client
        .customer()
        .create_wallet(CreateWalletRequest {
            user_id: "user_12345".to_string(),
            customer_id: None,
        })
        .await?;
    println!("wallet created: {}", wallet.data.address);

    let details = client
        .customer()
        .user_wallet_details(UserWalletDetailsQuery {
            user_id: "user_12345".to_string(),
            customer_id: None,
        })
        .await?;
    println!(
        "balance: {} ({} recent transactions)",
        details.data.wallet.balance,
        details.data.transactions.len()
    );

    Ok(())
}
