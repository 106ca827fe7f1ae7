//! # Alert filter.
//!
//! [`AlertFilter`] narrows a list of alerts by category, district and
//! severity. Each dimension is a set of accepted values; an empty set
//! accepts everything.
//!
//! ## Rules
//! - Dimensions combine with AND; values within a dimension with OR.
//! - District matches the origin district **or** any affected area.
//! - `toggle_*` adds a missing value and removes a present one.

use serde::{Deserialize, Serialize};

use super::alert::{Alert, DisasterType, Severity};

/// Filter over categories, districts and severities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertFilter {
    pub types: Vec<DisasterType>,
    pub districts: Vec<String>,
    pub severities: Vec<Severity>,
}

impl AlertFilter {
    /// Creates a filter accepting every alert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter pre-selected to a single district.
    pub fn for_district(district: impl Into<String>) -> Self {
        Self {
            districts: vec![district.into()],
            ..Self::default()
        }
    }

    /// True if no dimension restricts anything.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.districts.is_empty() && self.severities.is_empty()
    }

    /// Returns whether `alert` passes every non-empty dimension.
    pub fn matches(&self, alert: &Alert) -> bool {
        if !self.types.is_empty() && !self.types.contains(&alert.kind) {
            return false;
        }
        if !self.districts.is_empty() && !self.districts.iter().any(|d| alert.concerns(d)) {
            return false;
        }
        if !self.severities.is_empty() && !self.severities.contains(&alert.severity) {
            return false;
        }
        true
    }

    /// Returns the matching alerts, preserving input order.
    pub fn apply<'a>(&self, alerts: &'a [Alert]) -> Vec<&'a Alert> {
        alerts.iter().filter(|a| self.matches(a)).collect()
    }

    pub fn toggle_type(&mut self, kind: DisasterType) {
        toggle(&mut self.types, kind);
    }

    pub fn toggle_district(&mut self, district: &str) {
        match self.districts.iter().position(|d| d == district) {
            Some(i) => {
                self.districts.remove(i);
            }
            None => self.districts.push(district.to_string()),
        }
    }

    pub fn toggle_severity(&mut self, severity: Severity) {
        toggle(&mut self.severities, severity);
    }

    /// Removes every selection.
    pub fn clear(&mut self) {
        self.types.clear();
        self.districts.clear();
        self.severities.clear();
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    match values.iter().position(|v| *v == value) {
        Some(i) => {
            values.remove(i);
        }
        None => values.push(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::alert::fixtures::alert;

    fn sample() -> Vec<Alert> {
        let mut fire = alert("fire-1", DisasterType::Fire, "Chennai", Severity::High);
        fire.affected_areas = vec!["Padi".into()];
        vec![
            alert("flood-1", DisasterType::Flood, "Chennai", Severity::Critical),
            fire,
            alert("drought-1", DisasterType::Drought, "Madurai", Severity::High),
            alert("quake-1", DisasterType::Earthquake, "Coimbatore", Severity::Medium),
        ]
    }

    fn ids(v: Vec<&Alert>) -> Vec<&str> {
        v.into_iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let alerts = sample();
        let f = AlertFilter::new();
        assert!(f.is_empty());
        assert_eq!(f.apply(&alerts).len(), alerts.len());
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let alerts = sample();
        let mut f = AlertFilter::new();
        f.toggle_severity(Severity::High);
        assert_eq!(ids(f.apply(&alerts)), vec!["fire-1", "drought-1"]);

        f.toggle_district("Madurai");
        assert_eq!(ids(f.apply(&alerts)), vec!["drought-1"]);
    }

    #[test]
    fn test_district_matches_affected_area() {
        let alerts = sample();
        let f = AlertFilter::for_district("Padi");
        assert_eq!(ids(f.apply(&alerts)), vec!["fire-1"]);
    }

    #[test]
    fn test_toggle_twice_removes() {
        let mut f = AlertFilter::new();
        f.toggle_type(DisasterType::Flood);
        f.toggle_type(DisasterType::Fire);
        f.toggle_type(DisasterType::Flood);
        assert_eq!(f.types, vec![DisasterType::Fire]);

        f.toggle_district("Chennai");
        f.toggle_district("Chennai");
        assert!(f.districts.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut f = AlertFilter::for_district("Chennai");
        f.toggle_type(DisasterType::Cyclone);
        f.toggle_severity(Severity::Low);
        f.clear();
        assert!(f.is_empty());
    }
}
