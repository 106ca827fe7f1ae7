//! # Example: manual_trigger
//!
//! Triggers one alert per category on demand, then browses the alert list
//! through district and severity filters.
//!
//! ## Run
//! ```bash
//! cargo run --example manual_trigger
//! ```

use alertfeed::{AlertFeed, Coordinates, Dashboard, DisasterType, FeedConfig, Severity};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cfg = FeedConfig::default();
    let feed = AlertFeed::builder(cfg.clone()).build()?;
    let mut dash = Dashboard::new(feed);

    // Disconnected: nothing is emitted.
    assert!(dash.feed().trigger_alert(DisasterType::Flood).is_none());

    dash.mount()?;
    for kind in DisasterType::ALL {
        if let Some(alert) = dash.feed().trigger_alert(kind) {
            println!("triggered {:<10} id={}", kind, alert.id);
        }
    }

    println!("\nbanner (newest first):");
    for alert in dash.banner().recent() {
        println!("  [{}] {}", alert.severity, alert.title);
    }

    let list = dash.alert_list();
    list.toggle_district("Chennai");
    list.toggle_severity(Severity::Critical);
    println!("\ncritical alerts concerning Chennai:");
    for alert in list.filtered() {
        println!("  {} {}", alert.id, alert.title);
    }

    let chennai = Coordinates(13.0827, 80.2707);
    let nearby = dash.feed().catalog().within_radius(chennai, 150.0);
    println!("\ncatalog alerts within 150 km of Chennai: {}", nearby.len());

    dash.unmount();
    Ok(())
}
