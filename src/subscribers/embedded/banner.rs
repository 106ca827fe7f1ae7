//! # NotificationBanner: toast notifications for new alerts
//!
//! Keeps the most recent alerts (newest first, bounded by
//! [`FeedConfig::banner_capacity`](crate::FeedConfig::banner_capacity)) and
//! queues one [`Toast`] per alert for the presentation layer to drain.
//!
//! ## Toast format
//! ```text
//! title:    "Severe Flooding in Chennai"
//! summary:  first `summary_chars` characters of the description + "..."
//! kind:     critical/high → error, medium → warning, low → info
//! duration: FeedConfig::toast_duration
//! ```

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::alerts::{Alert, Severity};
use crate::config::FeedConfig;
use crate::subscribers::Subscribe;

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl From<Severity> for ToastKind {
    fn from(s: Severity) -> Self {
        match s {
            Severity::Critical | Severity::High => ToastKind::Error,
            Severity::Medium => ToastKind::Warning,
            Severity::Low => ToastKind::Info,
        }
    }
}

/// Transient notification describing one alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub alert_id: String,
    pub title: String,
    pub summary: String,
    pub kind: ToastKind,
    pub duration: Duration,
}

#[derive(Default)]
struct BannerState {
    recent: VecDeque<Alert>,
    toasts: Vec<Toast>,
}

/// Subscriber backing the top-bar notification area.
pub struct NotificationBanner {
    capacity: usize,
    summary_chars: usize,
    toast_duration: Duration,
    state: Mutex<BannerState>,
}

impl NotificationBanner {
    #[must_use]
    pub fn new(cfg: &FeedConfig) -> Self {
        Self {
            capacity: cfg.banner_capacity_clamped(),
            summary_chars: cfg.summary_chars,
            toast_duration: cfg.toast_duration,
            state: Mutex::new(BannerState::default()),
        }
    }

    /// Most recent alerts, newest first.
    pub fn recent(&self) -> Vec<Alert> {
        self.lock().recent.iter().cloned().collect()
    }

    /// Takes every queued toast, oldest first.
    pub fn drain_toasts(&self) -> Vec<Toast> {
        std::mem::take(&mut self.lock().toasts)
    }

    fn toast_for(&self, alert: &Alert) -> Toast {
        let mut summary: String = alert.description.chars().take(self.summary_chars).collect();
        summary.push_str("...");
        Toast {
            alert_id: alert.id.clone(),
            title: alert.title.clone(),
            summary,
            kind: alert.severity.into(),
            duration: self.toast_duration,
        }
    }

    fn lock(&self) -> MutexGuard<'_, BannerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Subscribe<Alert> for NotificationBanner {
    fn on_event(&self, alert: &Alert) {
        let toast = self.toast_for(alert);
        let mut state = self.lock();
        state.recent.push_front(alert.clone());
        state.recent.truncate(self.capacity);
        state.toasts.push(toast);
    }

    fn name(&self) -> &'static str {
        "NotificationBanner"
    }
}
