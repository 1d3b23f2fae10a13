//! EventSquare store inspector.
//!
//! Loads one store edition with the environment's API settings and reports
//! the visitor state the service hands back.
//!
//! Usage: `eventsquare-store <event> <edition> [channel]`

use std::env;

use anyhow::{bail, Context};
use eventsquare_sdk::{EventSquareClient, SdkError, StoreSession};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,eventsquare_sdk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (event, edition, channel) = match args.as_slice() {
        [event, edition] => (event, edition, None),
        [event, edition, channel] => (event, edition, Some(channel.as_str())),
        _ => bail!("usage: eventsquare-store <event> <edition> [channel]"),
    };

    let client = EventSquareClient::from_env().context("invalid EVENTSQUARE_* configuration")?;
    tracing::info!("Store API: {}", client.config().base_url);

    let mut store = StoreSession::new(client);
    if let Ok(language) = env::var("EVENTSQUARE_LANGUAGE") {
        store.set_language(language);
    } else {
        store.event(event).await.context("loading event")?;
        store.set_default_language()?;
    }

    let preview_token = env::var("EVENTSQUARE_PREVIEW_TOKEN").ok();
    match store
        .load(event, edition, channel, preview_token.as_deref())
        .await
    {
        Ok(_) => {}
        // The edition itself loaded; only the follow-up cart fetch failed.
        Err(SdkError::Client(err)) if err.path().is_some_and(|p| p.starts_with("cart/")) => {
            tracing::warn!(%err, "Cart unavailable");
        }
        Err(err) => {
            return Err(err).with_context(|| format!("loading {}/{}", event, edition));
        }
    }

    if store.is_closed() {
        tracing::info!("Store is closed");
        return Ok(());
    }

    tracing::info!(
        language = store.language().unwrap_or_default(),
        queued = store.is_queue(),
        queue_id = store.queue_id().unwrap_or_default(),
        cart_id = store.cart_id().unwrap_or_default(),
        pending = store.is_pending(),
        "Store loaded"
    );
    tracing::info!("Store URI: {}", store.build_uri(None));

    Ok(())
}
