//! Quote and create a delivery.
//!
//! Run with:
//! ```bash
//! UBER_DIRECT_CLIENT_ID=... UBER_DIRECT_CLIENT_SECRET=... UBER_DIRECT_CUSTOMER_ID=... \
//!     RUST_LOG=uber_direct=debug cargo run --example create_delivery
//! ```

use tracing_subscriber::EnvFilter;
use uber_direct::prelude::*;
use uber_direct::types::ItemSize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = UberDirect::from_env()?;

    let pickup = "1 Market St, San Francisco, CA, 94105";
    let dropoff = "425 Mission St, San Francisco, CA, 94105";

    let quote = client
        .deliveries()
        .quote(&QuoteRequest::new(pickup, dropoff))
        .await?;
    let Some(quote) = quote.into_valid() else {
        anyhow::bail!("quote response did not match the expected shape");
    };
    println!("Quote {}: {} {} cents", quote.id, quote.fee, quote.currency_type);

    let request = DeliveryRequest {
        pickup_name: "Store".into(),
        pickup_address: pickup.into(),
        pickup_phone_number: "+15555550100".into(),
        dropoff_name: "Customer".into(),
        dropoff_address: dropoff.into(),
        dropoff_phone_number: "+15555550101".into(),
        manifest_items: vec![ManifestItem::new("Burrito", 2, ItemSize::Small)],
        quote_id: Some(quote.id),
        ..Default::default()
    };

    match client.deliveries().create_delivery(&request).await? {
        Checked::Valid(delivery) => {
            println!("Delivery {} is {}", delivery.id, delivery.status);
            println!("Tracking: {}", delivery.tracking_url);
        }
        Checked::Unvalidated(raw) => println!("Delivery created: {raw:#}"),
    }

    let saved = serde_json::to_string(&client.snapshot())?;
    println!("Saved auth state ({} bytes)", saved.len());

    Ok(())
}
