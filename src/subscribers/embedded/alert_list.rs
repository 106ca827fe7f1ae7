//! # AlertList: browsable, filterable alert list
//!
//! Seeded with the catalog, then prepends every alert received on the bus.
//! The active [`AlertFilter`] is applied on read, so toggling a filter never
//! loses alerts.

use std::sync::{PoisonError, RwLock};

use crate::alerts::{Alert, AlertFilter, Catalog, DisasterType, Severity};
use crate::subscribers::Subscribe;

/// Subscriber backing the alerts page.
#[derive(Default)]
pub struct AlertList {
    alerts: RwLock<Vec<Alert>>,
    filter: RwLock<AlertFilter>,
}

impl AlertList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list pre-populated with the catalog entries, in catalog order.
    #[must_use]
    pub fn seeded(catalog: &Catalog) -> Self {
        Self {
            alerts: RwLock::new(catalog.iter().cloned().collect()),
            filter: RwLock::default(),
        }
    }

    /// Replaces the active filter.
    pub fn with_filter(mut self, filter: AlertFilter) -> Self {
        *self.filter.get_mut().unwrap_or_else(PoisonError::into_inner) = filter;
        self
    }

    /// Every alert, newest first.
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Alerts passing the active filter, newest first.
    pub fn filtered(&self) -> Vec<Alert> {
        let filter = self.filter();
        self.alerts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.alerts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the active filter.
    pub fn filter(&self) -> AlertFilter {
        self.filter
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn toggle_type(&self, kind: DisasterType) {
        self.update_filter(|f| f.toggle_type(kind));
    }

    pub fn toggle_district(&self, district: &str) {
        self.update_filter(|f| f.toggle_district(district));
    }

    pub fn toggle_severity(&self, severity: Severity) {
        self.update_filter(|f| f.toggle_severity(severity));
    }

    pub fn clear_filters(&self) {
        self.update_filter(AlertFilter::clear);
    }

    fn update_filter(&self, f: impl FnOnce(&mut AlertFilter)) {
        let mut guard = self.filter.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard);
    }
}

impl Subscribe<Alert> for AlertList {
    fn on_event(&self, alert: &Alert) {
        self.alerts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(0, alert.clone());
    }

    fn name(&self) -> &'static str {
        "AlertList"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::fixtures::alert;

    #[test]
    fn test_seeded_then_prepends() {
        let catalog = Catalog::builtin().unwrap();
        let list = AlertList::seeded(&catalog);
        assert_eq!(list.len(), 8);

        let a = catalog.get(2).unwrap().reissue("alert-new", chrono::Utc::now());
        list.on_event(&a);
        assert_eq!(list.len(), 9);
        assert_eq!(list.alerts()[0].id, "alert-new");
        assert_eq!(list.alerts()[1].id, "flood-1");
    }

    #[test]
    fn test_filter_applies_on_read() {
        let list = AlertList::new();
        list.on_event(&alert("f1", DisasterType::Flood, "Chennai", Severity::Critical));
        list.on_event(&alert("d1", DisasterType::Drought, "Madurai", Severity::High));

        list.toggle_district("Chennai");
        let ids: Vec<String> = list.filtered().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["f1"]);

        list.toggle_severity(Severity::High);
        assert!(list.filtered().is_empty());

        list.clear_filters();
        assert_eq!(list.filtered().len(), 2);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_with_filter() {
        let list = AlertList::new().with_filter(AlertFilter::for_district("Madurai"));
        list.on_event(&alert("f1", DisasterType::Flood, "Chennai", Severity::Low));
        assert!(list.filtered().is_empty());
        assert_eq!(list.filter().districts, vec!["Madurai".to_string()]);
    }
}
