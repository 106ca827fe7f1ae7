//! # LogWriter: alert logger
//!
//! A minimal subscriber that writes each incoming [`Alert`] to `tracing`.
//!
//! ## Example output
//! ```text
//! INFO alertfeed: new alert id="alert-0193…" kind=flood severity=critical district="Chennai" title="Severe Flooding in Chennai"
//! ```

use tracing::info;

use crate::alerts::Alert;
use crate::subscribers::Subscribe;

/// Alert logging subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Subscribe<Alert> for LogWriter {
    fn on_event(&self, a: &Alert) {
        info!(
            id = %a.id,
            kind = %a.kind,
            severity = %a.severity,
            district = %a.location.district,
            title = %a.title,
            "new alert"
        );
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::fixtures::alert;
    use crate::alerts::{DisasterType, Severity};
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_logs_alert_fields() {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            LogWriter::new().on_event(&alert(
                "flood-1",
                DisasterType::Flood,
                "Chennai",
                Severity::Low,
            ));
        });

        let line = String::from_utf8(out.0.lock().unwrap().clone()).unwrap();
        assert!(line.contains("INFO"));
        assert!(line.contains("new alert"));
        assert!(line.contains("id=flood-1"));
        assert!(line.contains("kind=flood"));
        assert!(line.contains("severity=low"));
        assert!(line.contains("district=Chennai"));
    }
}
