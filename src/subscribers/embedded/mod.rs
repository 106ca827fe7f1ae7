//! Built-in alert consumers.
//!
//! - [`NotificationBanner`] toasts and the five most recent alerts
//! - [`AlertList`] full list with category/district/severity filters
//! - [`LogWriter`] structured log line per alert

mod alert_list;
mod banner;
mod log;

pub use alert_list::AlertList;
pub use banner::{NotificationBanner, Toast, ToastKind};
pub use log::LogWriter;
