//! # Event subscribers.
//!
//! This module provides the [`Subscribe`] trait and built-in implementations
//! for consuming payloads emitted through the [`EventBus`](crate::EventBus).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   AlertFeed ── emit("new-alert", &Alert) ──► EventBus ──► snapshot, in order
//!                                                  │
//!                                    ┌─────────────┼──────────────┬─────────┐
//!                                    ▼             ▼              ▼         ▼
//!                          NotificationBanner  AlertList     LogWriter   Custom
//! ```
//!
//! ## Subscriber types
//! - **Stateful subscribers** keep what they received (banner, list)
//! - **Passive subscribers** only react (logging, counters)
//!
//! Ad-hoc closures can be registered through [`SubscriberFn`].

mod embedded;
mod subscriber;
mod subscriber_fn;

pub use embedded::{AlertList, LogWriter, NotificationBanner, Toast, ToastKind};
pub use subscriber::Subscribe;
pub use subscriber_fn::SubscriberFn;
