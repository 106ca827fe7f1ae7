//! Named publish/subscribe: the bus and its subscription handles.
//!
//! ## Contents
//! - [`EventBus`] registry of subscribers keyed by event name
//! - [`Subscription`], [`SubscriptionId`] handles used to unsubscribe
//!
//! ## Quick reference
//! - **Publishers**: [`AlertFeed`](crate::AlertFeed) ticker and `trigger_alert`.
//! - **Consumers**: anything implementing [`Subscribe`](crate::Subscribe),
//!   e.g. the banner and list owned by [`Dashboard`](crate::Dashboard).

mod bus;
mod subscription;

pub use bus::EventBus;
pub use subscription::{Subscription, SubscriptionId};
