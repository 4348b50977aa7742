/// Business accounts example: list accounts, show bank details, quote an exchange.
///
/// Usage: cargo run --example business_accounts -- <sandbox-access-token>
use revolut_sdk::business::ExchangeRateQuery;
use revolut_sdk::BusinessClient;
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::args()
        .nth(1)
        .ok_or("usage: business_accounts <access-token>")?;
    let client = BusinessClient::sandbox(token);

    // 1. List accounts
    let accounts = client.accounts().list().await?;
    println!("Accounts:");
    for account in &accounts {
        println!(
            "  {} {:?} {} {} ({:?})",
            account.id, account.name, account.balance, account.currency, account.state
        );
    }

    // 2. Bank details for the first account
    if let Some(account) = accounts.first() {
        for details in client.accounts().bank_details(&account.id).await? {
            println!(
                "\nBeneficiary: {}",
                details.beneficiary.as_deref().unwrap_or("-")
            );
            if let Some(iban) = &details.iban {
                println!("  IBAN {iban} BIC {}", details.bic.as_deref().unwrap_or("-"));
            }
            if let (Some(no), Some(sort)) = (&details.account_no, &details.sort_code) {
                println!("  Account {no} sort code {sort}");
            }
            println!("  Schemes: {:?}", details.schemes);
        }
    }

    // 3. Quote GBP -> EUR
    let query = ExchangeRateQuery::new("GBP", "EUR").with_amount(Decimal::new(10000, 2));
    let rate = client.exchanges().rate(&query).await?;
    println!(
        "\n{} {} -> {} {} at {} (fee {} {})",
        rate.from.amount,
        rate.from.currency,
        rate.to.amount,
        rate.to.currency,
        rate.rate,
        rate.fee.amount,
        rate.fee.currency
    );

    Ok(())
}
