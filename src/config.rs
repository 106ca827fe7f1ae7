//! # Feed configuration.
//!
//! Provides [`FeedConfig`] centralized settings for the alert feed and the
//! consumers wired by the [`Dashboard`](crate::Dashboard).
//!
//! ## Sentinel values
//! - `period = 0s` → clamped to 1ms (a ticker cannot have a zero period)
//! - `banner_capacity = 0` → clamped to 1

use std::time::Duration;

/// Event name on which synthesized alerts are published.
pub const NEW_ALERT: &str = "new-alert";

/// Configuration for the alert feed and its consumers.
///
/// ## Field semantics
/// - `period`: interval between synthesized alerts (first tick after one full period)
/// - `event`: event name alerts are emitted on
/// - `banner_capacity`: how many recent alerts the banner keeps
/// - `toast_duration`: display duration attached to each toast
/// - `summary_chars`: description prefix length shown in a toast
#[derive(Clone, Debug)]
pub struct FeedConfig {
    /// Interval between two synthesized alerts.
    pub period: Duration,

    /// Event name used for emission and subscription.
    pub event: String,

    /// Number of most recent alerts retained by the notification banner.
    pub banner_capacity: usize,

    /// How long a toast stays visible.
    pub toast_duration: Duration,

    /// Number of description characters kept in a toast summary.
    pub summary_chars: usize,
}

impl FeedConfig {
    /// Returns the tick period, never zero.
    #[inline]
    pub fn period_clamped(&self) -> Duration {
        self.period.max(Duration::from_millis(1))
    }

    /// Returns the banner capacity clamped to a minimum of 1.
    #[inline]
    pub fn banner_capacity_clamped(&self) -> usize {
        self.banner_capacity.max(1)
    }
}

impl Default for FeedConfig {
    /// Default configuration:
    ///
    /// - `period = 60s` (one alert per minute)
    /// - `event = "new-alert"`
    /// - `banner_capacity = 5`
    /// - `toast_duration = 5s`
    /// - `summary_chars = 100`
    fn default() -> Self {
        Self {
            period: Duration::from_secs(60),
            event: NEW_ALERT.to_string(),
            banner_capacity: 5,
            toast_duration: Duration::from_secs(5),
            summary_chars: 100,
        }
    }
}
