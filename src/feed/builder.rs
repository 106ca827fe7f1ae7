use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use super::simulator::{AlertFeed, FeedInner};
use super::source::{Clock, RandomSource, SystemClock, ThreadRandom};
use crate::{
    alerts::{Alert, Catalog},
    config::FeedConfig,
    error::FeedError,
    events::EventBus,
};

/// Builder for constructing an [`AlertFeed`] with injected collaborators.
///
/// Anything not supplied falls back to a default:
/// - bus: a fresh [`EventBus`]
/// - catalog: [`Catalog::builtin`]
/// - random: [`ThreadRandom`]
/// - clock: [`SystemClock`]
pub struct AlertFeedBuilder {
    cfg: FeedConfig,
    bus: Option<Arc<EventBus<Alert>>>,
    catalog: Option<Arc<Catalog>>,
    random: Option<Arc<dyn RandomSource>>,
    clock: Option<Arc<dyn Clock>>,
}

impl AlertFeedBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: FeedConfig) -> Self {
        Self {
            cfg,
            bus: None,
            catalog: None,
            random: None,
            clock: None,
        }
    }

    /// Publishes on an existing bus (shared with other producers/consumers).
    pub fn with_bus(mut self, bus: Arc<EventBus<Alert>>) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn with_catalog(mut self, catalog: impl Into<Arc<Catalog>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    /// Replaces the source used to pick catalog entries on each tick.
    pub fn with_random(mut self, random: impl RandomSource) -> Self {
        self.random = Some(Arc::new(random));
        self
    }

    /// Replaces the source of alert timestamps.
    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Builds the feed in the Disconnected state.
    ///
    /// Fails only if the built-in catalog is needed and cannot be parsed.
    pub fn build(self) -> Result<AlertFeed, FeedError> {
        let catalog = match self.catalog {
            Some(c) => c,
            None => Arc::new(Catalog::builtin()?),
        };

        Ok(AlertFeed::from_inner(FeedInner {
            cfg: self.cfg,
            bus: self.bus.unwrap_or_default(),
            catalog,
            random: self.random.unwrap_or_else(|| Arc::new(ThreadRandom)),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            connected: AtomicBool::new(false),
        }))
    }
}
