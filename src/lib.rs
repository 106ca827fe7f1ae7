//! # alertfeed
//!
//! **alertfeed** simulates the real-time alert stream of a regional
//! disaster-management dashboard.
//!
//! It provides a synchronous, in-process [`EventBus`], an [`AlertFeed`] that
//! periodically synthesizes alerts from a fixed [`Catalog`], and the
//! consumers a dashboard wires onto it (toast banner, filterable list).
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   Catalog    │   │ RandomSource │   │    Clock     │
//!     │ (8 alerts)   │   │ (pick index) │   │ (timestamps) │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  AlertFeed                                                        │
//! │  - connected flag (Disconnected ⇄ Connected)                      │
//! │  - one ticker task (tokio interval + CancellationToken)           │
//! │  - trigger_alert(kind) for on-demand alerts                       │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   │ emit("new-alert", &Alert)
//!                                   ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                 EventBus (snapshot, registration order)           │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        ▼                  ▼                  ▼
//!  NotificationBanner    AlertList         LogWriter / custom
//!  (toasts, last 5)     (prepend, filter)
//! ```
//!
//! ### Lifecycle
//! ```text
//! Dashboard::new(feed) ──► mount() ──► subscribe consumers, feed.start()
//!                                          │
//!                      every period ──► tick: catalog[random] reissued ──► emit
//!                                          │
//!                          unmount() ──► unsubscribe consumers, feed.stop()
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits                          |
//! |-------------------|----------------------------------------------------------|---------------------------------------------|
//! | **Event bus**     | Named publish/subscribe with ordered, isolated delivery. | [`EventBus`], [`Subscribe`], [`SubscriberFn`] |
//! | **Feed**          | Periodic and on-demand alert synthesis.                  | [`AlertFeed`], [`RandomSource`], [`Clock`]  |
//! | **Alerts**        | Alert record, catalog queries, filtering.                | [`Alert`], [`Catalog`], [`AlertFilter`]     |
//! | **Consumers**     | Toast banner, alert list, logging.                       | [`NotificationBanner`], [`AlertList`], [`LogWriter`] |
//! | **Composition**   | Explicit lifecycle owner.                                | [`Dashboard`]                               |
//! | **Errors**        | Typed errors.                                            | [`FeedError`]                               |
//! | **Configuration** | Centralized settings.                                    | [`FeedConfig`]                              |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use alertfeed::{Alert, AlertFeed, DisasterType, FeedConfig, SubscriberFn};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cfg = FeedConfig::default();
//!     let feed = AlertFeed::builder(cfg.clone()).build()?;
//!
//!     feed.bus().subscribe(&cfg.event, SubscriberFn::arc("printer", |a: &Alert| {
//!         println!("[{}] {}", a.severity, a.title);
//!     }));
//!
//!     feed.start()?;
//!     let alert = feed.trigger_alert(DisasterType::Flood).expect("connected");
//!     assert!(alert.id.starts_with("manual-"));
//!
//!     feed.stop();
//!     assert!(feed.trigger_alert(DisasterType::Flood).is_none());
//!     Ok(())
//! }
//! ```
mod alerts;
mod config;
mod dashboard;
mod error;
mod events;
mod feed;
mod subscribers;

// ---- Public re-exports ----

pub use alerts::{
    Alert, AlertFilter, AlertUpdate, Catalog, Coordinates, DisasterType, EARTH_RADIUS_KM,
    EmergencyContact, EvacuationRoute, Location, Resources, Severity, Shelter, WarningLevels,
    haversine_km,
};
pub use config::{FeedConfig, NEW_ALERT};
pub use dashboard::Dashboard;
pub use error::FeedError;
pub use events::{EventBus, Subscription, SubscriptionId};
pub use feed::{
    AlertFeed, AlertFeedBuilder, Clock, RandomSource, SequenceRandom, SystemClock, ThreadRandom,
};
pub use subscribers::{
    AlertList, LogWriter, NotificationBanner, Subscribe, SubscriberFn, Toast, ToastKind,
};
