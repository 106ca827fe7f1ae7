//! # Event bus for named, synchronous publish/subscribe.
//!
//! [`EventBus`] maps event names to ordered lists of subscribers and delivers
//! each emitted payload to all of them on the caller's task.
//!
//! ## Architecture
//! ```text
//! Publishers:                       Subscribers (per event name):
//!   AlertFeed ticker ──┐
//!   trigger_alert()  ──┼──► emit("new-alert", &alert) ──► [S1, S2, ..., SN]
//!   user code        ──┘        (snapshot, in order)        on_event(&alert)
//! ```
//!
//! ## Rules
//! - **Registration order**: subscribers of one event receive a payload in
//!   the order they subscribed, exactly once per emission.
//! - **Snapshot dispatch**: the subscriber list is copied before delivery
//!   starts. Subscribing or unsubscribing from inside a callback affects
//!   the next emission only.
//! - **Panic isolation**: a panicking subscriber is caught and logged; the
//!   remaining subscribers still receive the payload.
//! - **No errors**: unsubscribing an unknown handle is a no-op; emitting with
//!   no subscribers returns `false`.

use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, error};

use super::subscription::{Subscription, SubscriptionId};
use crate::subscribers::Subscribe;

/// One registration inside the registry.
struct Entry<P> {
    id: SubscriptionId,
    sub: Arc<dyn Subscribe<P>>,
}

impl<P> Clone for Entry<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            sub: Arc::clone(&self.sub),
        }
    }
}

/// Registry of subscribers keyed by event name.
///
/// ### Properties
/// - **Synchronous**: `emit()` returns after every subscriber has run.
/// - **Shared**: `&self` methods only; wrap in `Arc` to share between owners.
/// - **Re-entrant**: the registry lock is released before callbacks run.
pub struct EventBus<P> {
    registry: RwLock<HashMap<Arc<str>, Vec<Entry<P>>>>,
}

impl<P: 'static> EventBus<P> {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(HashMap::new()),
        }
    }

    /// Registers `subscriber` under `event` and returns its handle.
    ///
    /// Never fails. Registering the same subscriber twice yields two
    /// independent handles and two deliveries per emission.
    pub fn subscribe(&self, event: &str, subscriber: Arc<dyn Subscribe<P>>) -> Subscription {
        let id = SubscriptionId::next();
        let name = subscriber.name();

        let mut registry = self.write();
        let key = match registry.get_key_value(event) {
            Some((k, _)) => Arc::clone(k),
            None => Arc::from(event),
        };
        registry
            .entry(Arc::clone(&key))
            .or_default()
            .push(Entry { id, sub: subscriber });

        debug!(event, subscriber = name, "subscribed");
        Subscription {
            id,
            event: key,
            name,
        }
    }

    /// Removes the registration identified by `handle` from `event`.
    ///
    /// Returns `true` if something was removed. Unknown events and handles
    /// registered under a different event are ignored.
    pub fn unsubscribe(&self, event: &str, handle: &Subscription) -> bool {
        let mut registry = self.write();
        let Some(list) = registry.get_mut(event) else {
            return false;
        };

        let before = list.len();
        list.retain(|e| e.id != handle.id);
        let removed = list.len() != before;
        if list.is_empty() {
            registry.remove(event);
        }

        if removed {
            debug!(event, subscriber = handle.name, "unsubscribed");
        }
        removed
    }

    /// Delivers `payload` to every subscriber of `event`, in registration order.
    ///
    /// Returns `false` if `event` had no subscribers when dispatch started.
    pub fn emit(&self, event: &str, payload: &P) -> bool {
        let snapshot: Vec<Entry<P>> = match self.read().get(event) {
            Some(list) if !list.is_empty() => list.clone(),
            _ => return false,
        };

        for entry in &snapshot {
            let sub = &entry.sub;
            if let Err(panic_err) = panic::catch_unwind(AssertUnwindSafe(|| sub.on_event(payload))) {
                error!(
                    event,
                    subscriber = sub.name(),
                    info = %panic_message(panic_err.as_ref()),
                    "subscriber panicked"
                );
            }
        }
        true
    }

    /// Number of subscribers currently registered under `event`.
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.read().get(event).map_or(0, Vec::len)
    }

    /// Drops every subscriber of `event`; returns how many were removed.
    pub fn clear(&self, event: &str) -> usize {
        self.write().remove(event).map_or(0, |list| list.len())
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Arc<str>, Vec<Entry<P>>>> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Arc<str>, Vec<Entry<P>>>> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P: 'static> Default for EventBus<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for EventBus<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events: Vec<(String, usize)> = match self.registry.read() {
            Ok(r) => r.iter().map(|(k, v)| (k.to_string(), v.len())).collect(),
            Err(_) => Vec::new(),
        };
        f.debug_struct("EventBus").field("events", &events).finish()
    }
}

fn panic_message(panic_err: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_err.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic_err.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
