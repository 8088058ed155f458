//! Verify and decode a webhook the way an HTTP handler would.
//!
//! Run with:
//! ```bash
//! UBER_DIRECT_WEBHOOK_SECRET=whsec_demo cargo run --example webhook_receiver
//! ```

use http::{HeaderMap, HeaderValue};
use tracing_subscriber::EnvFilter;
use uber_direct::prelude::*;
use uber_direct::headers_from_http;
use uber_direct::webhooks::compute_signature;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = WebhookConfig::from_env()?;
    let handler = WebhookHandler::new(config.clone());

    // Simulate what the platform sends.
    let body = r#"{"kind":"event.courier_update","live_mode":false,"delivery_id":"del_demo","location":{"lat":37.79,"lng":-122.39}}"#;
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-postmates-signature",
        HeaderValue::from_str(&compute_signature(&config.secret, body)?)?,
    );

    let event = handler.handle(body, &headers_from_http(&headers))?;
    match event.event {
        WebhookEvent::CourierUpdate(Checked::Valid(update)) => {
            println!("Courier for {} at {:?}", update.delivery_id, update.location);
        }
        WebhookEvent::CourierUpdate(Checked::Unvalidated(raw)) => {
            println!("Courier update ({}) with unexpected shape: {raw}", event.kind);
        }
        other => println!("Other event: {other:?}"),
    }

    let forged = r#"{"kind":"event.courier_update","delivery_id":"del_forged"}"#;
    if let Err(e) = handler.handle(forged, &headers_from_http(&headers)) {
        println!("Rejected forged payload: {e}");
    }

    Ok(())
}
