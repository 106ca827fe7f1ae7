//! Error types used by the alert feed.
//!
//! The feed performs no I/O, so the taxonomy is small:
//!
//! - [`FeedError::RuntimeUnavailable`]: [`AlertFeed::start`](crate::AlertFeed::start)
//!   was called outside a tokio runtime, so no timer can be installed.
//! - [`FeedError::Catalog`]: catalog JSON could not be parsed.
//!
//! Unsubscribing an unknown handle, emitting without subscribers and
//! triggering an alert while disconnected are **not** errors; they are
//! reported through `bool`/`Option` return values.

use thiserror::Error;

/// # Errors produced by the alert feed.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum FeedError {
    /// No tokio runtime is available to drive the periodic ticker.
    #[error("no tokio runtime available to drive the alert ticker")]
    RuntimeUnavailable,

    /// Catalog JSON was malformed.
    #[error("invalid alert catalog: {source}")]
    Catalog {
        /// The underlying parse error.
        #[from]
        source: serde_json::Error,
    },
}

impl FeedError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use alertfeed::FeedError;
    ///
    /// assert_eq!(FeedError::RuntimeUnavailable.as_label(), "feed_runtime_unavailable");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            FeedError::RuntimeUnavailable => "feed_runtime_unavailable",
            FeedError::Catalog { .. } => "feed_catalog_invalid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_from_json() {
        let err: FeedError = serde_json::from_str::<Vec<u8>>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.as_label(), "feed_catalog_invalid");
        assert!(err.to_string().starts_with("invalid alert catalog"));
    }
}
