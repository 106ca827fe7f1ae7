//! # Example: live_feed
//!
//! Runs the alert feed with a short period and prints the toasts the
//! notification banner produces.
//!
//! ## Flow
//! ```text
//! AlertFeed::builder(cfg) ──► Dashboard::mount()
//!     ├─► bus.subscribe(NotificationBanner, AlertList)
//!     ├─► bus.subscribe(LogWriter)
//!     └─► feed.start() ──► every period: emit("new-alert")
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=alertfeed=debug cargo run --example live_feed
//! ```

use std::{sync::Arc, time::Duration};

use alertfeed::{AlertFeed, Dashboard, FeedConfig, LogWriter};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("alertfeed=info")),
        )
        .with_target(true)
        .init();

    let cfg = FeedConfig {
        period: Duration::from_secs(2),
        ..FeedConfig::default()
    };
    let feed = AlertFeed::builder(cfg.clone()).build()?;
    let logger = feed.bus().subscribe(&cfg.event, Arc::new(LogWriter::new()));

    let mut dash = Dashboard::new(feed);
    dash.mount()?;

    for _ in 0..5 {
        tokio::time::sleep(cfg.period).await;
        for toast in dash.banner().drain_toasts() {
            println!("[{:?}] {} - {}", toast.kind, toast.title, toast.summary);
        }
    }

    dash.feed().bus().unsubscribe(&cfg.event, &logger);
    dash.unmount();
    println!("\nalerts on page: {}", dash.alert_list().len());
    Ok(())
}
