//! # Dashboard: root composition of the feed and its consumers.
//!
//! The [`Dashboard`] owns an [`AlertFeed`] together with the two consumers
//! the UI relies on, and ties their lifecycle together:
//!
//! ```text
//! mount()   ──► bus.subscribe(event, NotificationBanner)
//!           ──► bus.subscribe(event, AlertList)
//!           ──► feed.start()
//!
//! unmount() ──► bus.unsubscribe(event, list/banner handles)
//!           ──► feed.stop()
//! ```
//!
//! ## Example
//! ```rust
//! use alertfeed::{AlertFeed, Dashboard, DisasterType, FeedConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cfg = FeedConfig::default();
//!     let feed = AlertFeed::builder(cfg).build()?;
//!     let mut dash = Dashboard::new(feed);
//!
//!     dash.mount()?;
//!     dash.feed().trigger_alert(DisasterType::Cyclone);
//!     assert_eq!(dash.banner().recent().len(), 1);
//!
//!     dash.unmount();
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::alerts::Alert;
use crate::error::FeedError;
use crate::events::Subscription;
use crate::feed::AlertFeed;
use crate::subscribers::{AlertList, NotificationBanner, Subscribe};

/// Owner of the alert feed lifecycle and the UI-facing consumers.
pub struct Dashboard {
    feed: AlertFeed,
    banner: Arc<NotificationBanner>,
    list: Arc<AlertList>,
    subscriptions: Vec<Subscription>,
}

impl Dashboard {
    /// Creates the consumers from the feed's own configuration; the list is
    /// seeded from the feed's catalog.
    pub fn new(feed: AlertFeed) -> Self {
        let banner = Arc::new(NotificationBanner::new(feed.config()));
        let list = Arc::new(AlertList::seeded(feed.catalog()));
        Self {
            feed,
            banner,
            list,
            subscriptions: Vec::new(),
        }
    }

    /// Subscribes the banner and the list, then starts the feed.
    ///
    /// Mounting an already mounted dashboard is a no-op.
    pub fn mount(&mut self) -> Result<(), FeedError> {
        if self.is_mounted() {
            return Ok(());
        }
        let event = self.feed.config().event.clone();
        let consumers: [Arc<dyn Subscribe<Alert>>; 2] = [self.banner.clone(), self.list.clone()];
        for consumer in consumers {
            let handle = self.feed.bus().subscribe(&event, consumer);
            self.subscriptions.push(handle);
        }
        if let Err(e) = self.feed.start() {
            self.drop_subscriptions();
            return Err(e);
        }
        debug!("dashboard mounted");
        Ok(())
    }

    /// Unsubscribes the consumers and stops the feed.
    pub fn unmount(&mut self) {
        self.drop_subscriptions();
        self.feed.stop();
        debug!("dashboard unmounted");
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn feed(&self) -> &AlertFeed {
        &self.feed
    }

    pub fn banner(&self) -> &Arc<NotificationBanner> {
        &self.banner
    }

    pub fn alert_list(&self) -> &Arc<AlertList> {
        &self.list
    }

    fn drop_subscriptions(&mut self) {
        for handle in self.subscriptions.drain(..) {
            self.feed.bus().unsubscribe(handle.event(), &handle);
        }
    }
}
