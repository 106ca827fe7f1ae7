//! # Function-backed subscriber (`SubscriberFn`)
//!
//! [`SubscriberFn`] wraps a closure `F: Fn(&P)` so ad-hoc consumers can be
//! registered without declaring a type. Shared state captured by the closure
//! must be `Send + Sync` (use `Arc<...>` explicitly).
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use alertfeed::{Alert, EventBus, SubscriberFn};
//!
//! let bus: EventBus<Alert> = EventBus::new();
//! let handle = bus.subscribe("new-alert", SubscriberFn::arc("printer", |a: &Alert| {
//!     println!("{}: {}", a.severity, a.title);
//! }));
//! assert_eq!(handle.name(), "printer");
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use super::Subscribe;

/// Closure-backed subscriber.
pub struct SubscriberFn<P, F> {
    name: &'static str,
    f: F,
    _payload: PhantomData<fn(&P)>,
}

impl<P, F> SubscriberFn<P, F>
where
    F: Fn(&P) + Send + Sync + 'static,
{
    pub fn new(name: &'static str, f: F) -> Self {
        Self {
            name,
            f,
            _payload: PhantomData,
        }
    }

    /// Creates the subscriber and returns it as a shared handle.
    pub fn arc(name: &'static str, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<P, F> Subscribe<P> for SubscriberFn<P, F>
where
    P: 'static,
    F: Fn(&P) + Send + Sync + 'static,
{
    fn on_event(&self, payload: &P) {
        (self.f)(payload)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
