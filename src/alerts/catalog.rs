//! # Alert catalog.
//!
//! [`Catalog`] is the fixed, ordered collection of alerts the feed draws its
//! synthetic payloads from. The feed itself only needs random-access
//! indexing ([`Catalog::get`]) and category lookup ([`Catalog::first_of`]);
//! the remaining queries serve the dashboard views.
//!
//! The built-in catalog holds eight Tamil Nadu alerts, one per category,
//! embedded from `data/catalog.json`.

use super::alert::{Alert, Coordinates, DisasterType};
use super::geo::haversine_km;
use crate::error::FeedError;

const BUILTIN: &str = include_str!("../../data/catalog.json");

/// Ordered, immutable collection of alerts.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    alerts: Vec<Alert>,
}

impl Catalog {
    /// Creates a catalog from the given alerts, keeping their order.
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    /// Parses a catalog from a JSON array of alerts.
    pub fn from_json(json: &str) -> Result<Self, FeedError> {
        let alerts: Vec<Alert> = serde_json::from_str(json)?;
        Ok(Self::new(alerts))
    }

    /// Returns the embedded catalog.
    pub fn builtin() -> Result<Self, FeedError> {
        Self::from_json(BUILTIN)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Alert> {
        self.alerts.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Alert> {
        self.alerts.iter()
    }

    pub fn as_slice(&self) -> &[Alert] {
        &self.alerts
    }

    /// First entry of the given category, in catalog order.
    pub fn first_of(&self, kind: DisasterType) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.kind == kind)
    }

    /// Alerts originating in `district` or listing it as an affected area.
    pub fn by_district(&self, district: &str) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| a.concerns(district)).collect()
    }

    pub fn by_type(&self, kind: DisasterType) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| a.kind == kind).collect()
    }

    /// Alerts whose origin lies within `radius_km` of `center` (inclusive).
    pub fn within_radius(&self, center: Coordinates, radius_km: f64) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|a| haversine_km(center, a.location.coordinates) <= radius_km)
            .collect()
    }

    /// Distinct origin districts, in first-seen order.
    pub fn districts(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for a in &self.alerts {
            let d = a.location.district.as_str();
            if !out.contains(&d) {
                out.push(d);
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Alert;
    type IntoIter = std::slice::Iter<'a, Alert>;

    fn into_iter(self) -> Self::IntoIter {
        self.alerts.iter()
    }
}
