//! Subscription handle returned by [`EventBus::subscribe`](crate::EventBus::subscribe).

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Global counter giving every subscription a distinct identity.
static SUBSCRIPTION_SEQ: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of one registration.
///
/// Two registrations of the same subscriber yield two distinct ids, so each
/// can be removed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn next() -> Self {
        Self(SUBSCRIPTION_SEQ.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// Handle for a single registration; pass it back to `unsubscribe`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub(crate) id: SubscriptionId,
    pub(crate) event: Arc<str>,
    pub(crate) name: &'static str,
}

impl Subscription {
    #[inline]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Event name this registration was made under.
    #[inline]
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Name of the registered subscriber.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}
