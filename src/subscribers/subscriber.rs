//! # Event subscriber trait.
//!
//! Provides [`Subscribe`] an extension point for plugging consumers into the
//! [`EventBus`](crate::EventBus).
//!
//! ## Rules
//! - Delivery is synchronous, on the emitter's task, in registration order.
//! - The payload is shared by reference; subscribers must not rely on owning it.
//! - A panicking subscriber is caught by the bus and logged; later subscribers
//!   still receive the payload.
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use alertfeed::{Alert, Severity, Subscribe};
//!
//! #[derive(Default)]
//! struct CriticalCounter(AtomicUsize);
//!
//! impl Subscribe<Alert> for CriticalCounter {
//!     fn on_event(&self, alert: &Alert) {
//!         if alert.severity == Severity::Critical {
//!             self.0.fetch_add(1, Ordering::Relaxed);
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "critical-counter" }
//! }
//! ```

/// Consumer of payloads of type `P` emitted on the bus.
pub trait Subscribe<P>: Send + Sync + 'static {
    /// Processes a single payload.
    ///
    /// Called synchronously from [`EventBus::emit`](crate::EventBus::emit).
    /// Keep it short; a slow subscriber delays every subscriber after it.
    fn on_event(&self, payload: &P);

    /// Returns the subscriber name used in logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
