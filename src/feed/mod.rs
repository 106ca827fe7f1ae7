//! Alert feed: periodic synthesis of alerts from the catalog.
//!
//! Internal modules:
//! - [`simulator`]: the [`AlertFeed`] itself (start/stop/trigger, ticker task);
//! - [`builder`]: wiring of bus, catalog, randomness and clock;
//! - [`source`]: [`RandomSource`] and [`Clock`] abstractions with default implementations.

mod builder;
mod simulator;
mod source;

pub use builder::AlertFeedBuilder;
pub use simulator::AlertFeed;
pub use source::{Clock, RandomSource, SequenceRandom, SystemClock, ThreadRandom};
