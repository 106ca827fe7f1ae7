//! # Injected sources of randomness and time.
//!
//! The feed never calls `rand` or the wall clock directly. It goes through
//! [`RandomSource`] and [`Clock`] so tests and demos can substitute
//! deterministic implementations.
//!
//! - [`ThreadRandom`]: uniform pick via the thread-local `rand` generator
//! - [`SequenceRandom`]: cycles through a fixed list of indices
//! - [`SystemClock`]: `chrono::Utc::now()`

use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

/// Chooses catalog indices.
pub trait RandomSource: Send + Sync + 'static {
    /// Returns an index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform random selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

/// Deterministic selection cycling through a fixed sequence.
///
/// Each value is reduced modulo `len`, so the sequence can be reused with
/// catalogs of any size.
///
/// # Example
/// ```
/// use alertfeed::{RandomSource, SequenceRandom};
///
/// let r = SequenceRandom::new(vec![2, 0, 5]);
/// assert_eq!(r.pick(4), 2);
/// assert_eq!(r.pick(4), 0);
/// assert_eq!(r.pick(4), 1); // 5 % 4
/// assert_eq!(r.pick(4), 2); // wraps around
/// ```
#[derive(Debug)]
pub struct SequenceRandom {
    seq: Vec<usize>,
    pos: AtomicUsize,
}

impl SequenceRandom {
    /// Creates a source from `seq`; an empty sequence always picks 0.
    pub fn new(seq: Vec<usize>) -> Self {
        Self {
            seq,
            pos: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn pick(&self, len: usize) -> usize {
        if self.seq.is_empty() || len == 0 {
            return 0;
        }
        let i = self.pos.fetch_add(1, AtomicOrdering::Relaxed) % self.seq.len();
        self.seq[i] % len
    }
}

/// Source of "now" for alert timestamps.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fresh time-ordered identifier such as `alert-0193c5e2-…`.
pub(crate) fn fresh_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::now_v7())
}
