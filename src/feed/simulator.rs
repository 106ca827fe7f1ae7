//! # AlertFeed: simulated real-time alert source.
//!
//! [`AlertFeed`] manufactures a steady trickle of alerts without any upstream
//! data source. While connected, a ticker task picks a catalog entry every
//! [`FeedConfig::period`], reissues it under a fresh id and the current time,
//! and emits it on the bus.
//!
//! ## State machine
//! ```text
//!               start()                    start()
//!  Disconnected ───────► Connected ◄──────────┘   (ticker replaced)
//!       ▲   │               │
//!       │   └─ stop() ─┐    │ stop()
//!       │     (no-op)  │    │
//!       └──────────────┴────┘
//! ```
//!
//! ## Ticker
//! ```text
//! start() ──► connected = true
//!         ──► cancel previous ticker (if any)
//!         ──► spawn run_ticker(token):
//!               loop {
//!                 select (biased) {
//!                   token.cancelled() → exit
//!                   interval.tick()   → if connected: emit(catalog[random.pick(len)]
//!                                                       .reissue("alert-<uuid>", clock.now()))
//!                 }
//!               }
//! stop()  ──► connected = false, cancel ticker, clear slot
//! ```
//!
//! ## Rules
//! - At most one ticker is active; `start()` is idempotent.
//! - The first tick fires one full period after `start()`.
//! - `stop()` never awaits anything: emission is synchronous, so nothing is in flight.
//! - Dropping the feed cancels its ticker.

use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::builder::AlertFeedBuilder;
use super::source::{Clock, RandomSource, fresh_id};
use crate::alerts::{Alert, Catalog, DisasterType};
use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::events::EventBus;

/// State shared between the feed handle and its ticker task.
pub(super) struct FeedInner {
    pub(super) cfg: FeedConfig,
    pub(super) bus: Arc<EventBus<Alert>>,
    pub(super) catalog: Arc<Catalog>,
    pub(super) random: Arc<dyn RandomSource>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) connected: AtomicBool,
}

impl FeedInner {
    /// One timer firing: synthesize a random alert and emit it.
    fn tick(&self) -> Option<Alert> {
        if self.catalog.is_empty() {
            warn!("alert catalog is empty; tick skipped");
            return None;
        }
        let index = self.random.pick(self.catalog.len()).min(self.catalog.len() - 1);
        let alert = self
            .catalog
            .get(index)?
            .reissue(fresh_id("alert"), self.clock.now());
        self.publish(&alert);
        Some(alert)
    }

    fn publish(&self, alert: &Alert) -> bool {
        let delivered = self.bus.emit(&self.cfg.event, alert);
        debug!(
            event = %self.cfg.event,
            id = %alert.id,
            kind = %alert.kind,
            delivered,
            "alert emitted"
        );
        delivered
    }
}

/// Periodic alert simulator publishing on an [`EventBus`].
///
/// Construct with [`AlertFeed::builder`]; the instance is owned explicitly
/// (e.g. by a [`Dashboard`](crate::Dashboard)) rather than living in a global.
pub struct AlertFeed {
    inner: Arc<FeedInner>,
    ticker: Mutex<Option<CancellationToken>>,
}

impl AlertFeed {
    /// Starts building a feed with the given configuration.
    pub fn builder(cfg: FeedConfig) -> AlertFeedBuilder {
        AlertFeedBuilder::new(cfg)
    }

    pub(super) fn from_inner(inner: FeedInner) -> Self {
        Self {
            inner: Arc::new(inner),
            ticker: Mutex::new(None),
        }
    }

    /// Connects the feed and (re)installs the periodic ticker.
    ///
    /// Calling `start()` while connected replaces the ticker, so exactly one
    /// is ever active. Must be called from within a tokio runtime; otherwise
    /// returns [`FeedError::RuntimeUnavailable`] and leaves the state unchanged.
    pub fn start(&self) -> Result<(), FeedError> {
        let rt = Handle::try_current().map_err(|_| FeedError::RuntimeUnavailable)?;
        let period = self.inner.cfg.period_clamped();
        let first = Instant::now() + period;

        let mut slot = self.slot();
        if let Some(previous) = slot.take() {
            previous.cancel();
            debug!("previous ticker cancelled");
        }
        self.inner.connected.store(true, AtomicOrdering::SeqCst);

        let token = CancellationToken::new();
        rt.spawn(run_ticker(Arc::clone(&self.inner), token.clone(), first));
        *slot = Some(token);

        info!(period = ?period, event = %self.inner.cfg.event, "alert feed connected");
        Ok(())
    }

    /// Disconnects the feed and cancels the ticker. Idempotent.
    pub fn stop(&self) {
        // Flag and slot change together under the slot lock, as in `start()`.
        let mut slot = self.slot();
        let was_connected = self.inner.connected.swap(false, AtomicOrdering::SeqCst);
        if let Some(token) = slot.take() {
            token.cancel();
        }
        drop(slot);
        if was_connected {
            info!("alert feed disconnected");
        }
    }

    /// Emits a copy of the first catalog entry of `kind`, on demand.
    ///
    /// Returns the emitted alert, or `None` (and emits nothing) when the
    /// feed is disconnected or the catalog has no entry of that kind.
    pub fn trigger_alert(&self, kind: DisasterType) -> Option<Alert> {
        if !self.is_connected() {
            debug!(kind = %kind, "trigger ignored: feed disconnected");
            return None;
        }
        let Some(base) = self.inner.catalog.first_of(kind) else {
            debug!(kind = %kind, "trigger ignored: no catalog entry");
            return None;
        };
        let alert = base.reissue(fresh_id("manual"), self.inner.clock.now());
        self.inner.publish(&alert);
        Some(alert)
    }

    /// Same as [`trigger_alert`](Self::trigger_alert) for a lowercase category tag.
    ///
    /// Unknown tags yield `None`.
    pub fn trigger_tag(&self, tag: &str) -> Option<Alert> {
        DisasterType::from_tag(tag).and_then(|kind| self.trigger_alert(kind))
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.inner.connected.load(AtomicOrdering::SeqCst)
    }

    /// Bus this feed publishes on.
    pub fn bus(&self) -> &Arc<EventBus<Alert>> {
        &self.inner.bus
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.inner.catalog
    }

    pub fn config(&self) -> &FeedConfig {
        &self.inner.cfg
    }

    fn slot(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.ticker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for AlertFeed {
    fn drop(&mut self) {
        if let Some(token) = self.slot().take() {
            token.cancel();
        }
    }
}

/// Ticker loop; exits when `token` is cancelled.
async fn run_ticker(inner: Arc<FeedInner>, token: CancellationToken, first: Instant) {
    let period = inner.cfg.period_clamped();
    let mut interval = time::interval_at(first, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = interval.tick() => {
                if inner.connected.load(AtomicOrdering::SeqCst) {
                    inner.tick();
                }
            }
        }
    }
    debug!("ticker exited");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::Severity;
    use crate::alerts::fixtures::alert;
    use crate::feed::source::SequenceRandom;
    use crate::subscribers::SubscriberFn;
    use chrono::{DateTime, Utc};
    use std::time::Duration;

    const PERIOD: Duration = Duration::from_secs(60);

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        "2026-10-15T09:00:00Z".parse().unwrap()
    }

    fn feed_with(catalog: Catalog, random: SequenceRandom) -> AlertFeed {
        AlertFeed::builder(FeedConfig::default())
            .with_catalog(catalog)
            .with_random(random)
            .with_clock(FixedClock(fixed_now()))
            .build()
            .unwrap()
    }

    fn builtin_feed() -> AlertFeed {
        feed_with(Catalog::builtin().unwrap(), SequenceRandom::new(vec![0]))
    }

    /// Records every alert received on the feed's event.
    fn record(feed: &AlertFeed) -> Arc<Mutex<Vec<Alert>>> {
        let seen: Arc<Mutex<Vec<Alert>>> = Arc::default();
        let sink = Arc::clone(&seen);
        feed.bus().subscribe(
            &feed.config().event,
            SubscriberFn::arc("recorder", move |a: &Alert| {
                sink.lock().unwrap().push(a.clone());
            }),
        );
        seen
    }

    /// Lets the spawned ticker observe timer wake-ups.
    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    async fn advance(d: Duration) {
        time::advance(d).await;
        settle().await;
    }

    fn count(seen: &Arc<Mutex<Vec<Alert>>>) -> usize {
        seen.lock().unwrap().len()
    }

    #[tokio::test(start_paused = true)]
    async fn test_emits_once_per_period() {
        let feed = builtin_feed();
        let seen = record(&feed);
        feed.start().unwrap();
        settle().await;

        advance(PERIOD - Duration::from_secs(1)).await;
        assert_eq!(count(&seen), 0, "no tick before one full period");

        advance(Duration::from_secs(1)).await;
        assert_eq!(count(&seen), 1);

        advance(PERIOD).await;
        advance(PERIOD).await;
        assert_eq!(count(&seen), 3);
        feed.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_reissues_random_entry() {
        let catalog = Catalog::builtin().unwrap();
        let feed = feed_with(catalog.clone(), SequenceRandom::new(vec![3, 7]));
        let seen = record(&feed);
        feed.start().unwrap();
        settle().await;

        advance(PERIOD).await;
        advance(PERIOD).await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].title, catalog.get(3).unwrap().title);
        assert_eq!(seen[1].title, catalog.get(7).unwrap().title);
        for a in seen.iter() {
            assert!(a.id.starts_with("alert-"));
            assert_eq!(a.timestamp, fixed_now());
        }
        assert_ne!(seen[0].id, seen[1].id);
        feed.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_start_keeps_single_ticker() {
        let feed = builtin_feed();
        let seen = record(&feed);
        feed.start().unwrap();
        feed.start().unwrap();
        assert!(feed.is_connected());
        settle().await;

        advance(PERIOD).await;
        assert_eq!(count(&seen), 1);

        advance(PERIOD).await;
        assert_eq!(count(&seen), 2);
        feed.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_resets_phase() {
        let feed = builtin_feed();
        let seen = record(&feed);
        feed.start().unwrap();
        settle().await;

        advance(Duration::from_secs(30)).await;
        feed.start().unwrap();
        settle().await;

        advance(Duration::from_secs(30)).await;
        assert_eq!(count(&seen), 0, "old ticker must not fire");

        advance(Duration::from_secs(30)).await;
        assert_eq!(count(&seen), 1);
        feed.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_stop_is_silent() {
        let feed = builtin_feed();
        let seen = record(&feed);
        feed.start().unwrap();
        settle().await;

        feed.stop();
        assert!(!feed.is_connected());
        feed.stop();
        assert!(!feed.is_connected());

        for _ in 0..5 {
            advance(PERIOD).await;
        }
        assert_eq!(count(&seen), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_after_ticks_silences_feed() {
        let feed = builtin_feed();
        let seen = record(&feed);
        feed.start().unwrap();
        settle().await;

        advance(PERIOD).await;
        assert_eq!(count(&seen), 1);

        feed.stop();
        for _ in 0..10 {
            advance(PERIOD).await;
        }
        assert_eq!(count(&seen), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_stop_resumes() {
        let feed = builtin_feed();
        let seen = record(&feed);
        feed.start().unwrap();
        feed.stop();
        feed.start().unwrap();
        settle().await;

        advance(PERIOD).await;
        assert_eq!(count(&seen), 1);
        feed.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_trigger_respects_connection_state() {
        let feed = builtin_feed();
        let seen = record(&feed);

        assert!(feed.trigger_alert(DisasterType::Flood).is_none());
        assert_eq!(count(&seen), 0);

        feed.start().unwrap();
        let a = feed.trigger_alert(DisasterType::Flood).unwrap();
        assert_eq!(a.kind, DisasterType::Flood);
        assert!(a.id.starts_with("manual-"));
        assert!(feed.catalog().iter().all(|c| c.id != a.id));
        assert_eq!(count(&seen), 1);
        assert_eq!(seen.lock().unwrap()[0], a);
        feed.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_trigger_unknown_kind_emits_nothing() {
        let catalog = Catalog::new(vec![alert(
            "flood-1",
            DisasterType::Flood,
            "Chennai",
            Severity::Critical,
        )]);
        let feed = feed_with(catalog, SequenceRandom::new(vec![0]));
        let seen = record(&feed);
        feed.start().unwrap();

        assert!(feed.trigger_alert(DisasterType::Cyclone).is_none());
        assert!(feed.trigger_tag("meteor").is_none());
        assert_eq!(count(&seen), 0);

        assert!(feed.trigger_tag("flood").is_some());
        assert_eq!(count(&seen), 1);
        feed.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_trigger_scenario() {
        let catalog = Catalog::new(vec![alert(
            "flood-1",
            DisasterType::Flood,
            "Chennai",
            Severity::Critical,
        )]);
        let feed = feed_with(catalog, SequenceRandom::new(vec![0]));
        let seen = record(&feed);

        feed.start().unwrap();
        let a = feed.trigger_alert(DisasterType::Flood).unwrap();
        assert_eq!(a.kind, DisasterType::Flood);
        assert_ne!(a.id, "flood-1");
        assert_eq!(a.timestamp, fixed_now());

        feed.stop();
        assert!(feed.trigger_alert(DisasterType::Flood).is_none());
        assert_eq!(count(&seen), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_catalog_ticks_without_emitting() {
        let feed = feed_with(Catalog::default(), SequenceRandom::new(vec![0]));
        let seen = record(&feed);
        feed.start().unwrap();
        settle().await;

        advance(PERIOD).await;
        assert_eq!(count(&seen), 0);
        assert!(feed.is_connected());
        feed.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_ticker() {
        let bus: Arc<EventBus<Alert>> = Arc::new(EventBus::new());
        let feed = AlertFeed::builder(FeedConfig::default())
            .with_bus(Arc::clone(&bus))
            .build()
            .unwrap();
        let seen = record(&feed);
        feed.start().unwrap();
        drop(feed);

        advance(PERIOD).await;
        assert_eq!(count(&seen), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_start_stop_keeps_flag_and_ticker_in_sync() {
        let feed = Arc::new(builtin_feed());
        let mut inconsistent = 0;

        for _ in 0..2_000 {
            feed.start().unwrap();
            let starter = {
                let feed = Arc::clone(&feed);
                tokio::spawn(async move { feed.start().unwrap() })
            };
            let stopper = {
                let feed = Arc::clone(&feed);
                tokio::spawn(async move { feed.stop() })
            };
            starter.await.unwrap();
            stopper.await.unwrap();

            if feed.is_connected() != feed.slot().is_some() {
                inconsistent += 1;
            }
        }
        feed.stop();
        assert_eq!(inconsistent, 0);
    }

    #[test]
    fn test_start_outside_runtime_fails() {
        let feed = builtin_feed();
        let err = feed.start().unwrap_err();
        assert!(matches!(err, FeedError::RuntimeUnavailable));
        assert!(!feed.is_connected());
    }
}
