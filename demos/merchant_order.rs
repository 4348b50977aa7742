/// Merchant order example: create a manual-capture order, inspect it, cancel it.
///
/// Usage: cargo run --example merchant_order -- <sandbox-secret-key>
use revolut_sdk::merchant::{CaptureMode, CreateOrderRequest, OrderState};
use revolut_sdk::MerchantClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::args()
        .nth(1)
        .ok_or("usage: merchant_order <secret-api-key>")?;
    let client = MerchantClient::sandbox(api_key);

    // 1. Create an order for 19.99 GBP
    let mut request = CreateOrderRequest::new(1999, "GBP");
    request.capture_mode = Some(CaptureMode::Manual);
    request.description = Some("SDK demo order".into());
    let order = client.orders().create(&request).await?;
    println!("Order {} created, state {:?}", order.id, order.state);
    if let Some(public_id) = &order.public_id {
        println!("Checkout public id: {public_id}");
    }

    // 2. Fetch it back
    let order = client.orders().get(&order.id).await?;
    println!(
        "Amount {} {} state {:?}",
        order.order_amount.value, order.order_amount.currency, order.state
    );

    // 3. Nobody paid, so cancel it
    if order.state == OrderState::Pending {
        let cancelled = client.orders().cancel(&order.id).await?;
        println!("Cancelled, state {:?}", cancelled.state);
    }

    Ok(())
}
