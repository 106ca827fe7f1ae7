//! # Disaster alert record.
//!
//! [`Alert`] is the payload carried on the `"new-alert"` event. It mirrors
//! the JSON layout of the catalog file (camelCase keys, `type` for the
//! disaster category, `[lat, lng]` coordinate pairs).
//!
//! ## Example
//! ```rust
//! use alertfeed::{Alert, DisasterType, Severity};
//!
//! let json = r#"{
//!     "id": "flood-1",
//!     "type": "flood",
//!     "title": "Flooding",
//!     "description": "Heavy rain",
//!     "location": { "district": "Chennai", "coordinates": [13.08, 80.27] },
//!     "severity": "critical",
//!     "timestamp": "2025-05-15T08:30:00Z",
//!     "affectedAreas": ["Adyar"]
//! }"#;
//!
//! let alert: Alert = serde_json::from_str(json).unwrap();
//! assert_eq!(alert.kind, DisasterType::Flood);
//! assert_eq!(alert.severity, Severity::Critical);
//! assert!(alert.shelters.is_none());
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a disaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisasterType {
    Flood,
    Cyclone,
    Earthquake,
    Tsunami,
    Fire,
    Landslide,
    Drought,
    Heatwave,
}

impl DisasterType {
    /// All categories, in display order.
    pub const ALL: [DisasterType; 8] = [
        DisasterType::Flood,
        DisasterType::Cyclone,
        DisasterType::Earthquake,
        DisasterType::Tsunami,
        DisasterType::Fire,
        DisasterType::Landslide,
        DisasterType::Drought,
        DisasterType::Heatwave,
    ];

    /// Returns the lowercase tag used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisasterType::Flood => "flood",
            DisasterType::Cyclone => "cyclone",
            DisasterType::Earthquake => "earthquake",
            DisasterType::Tsunami => "tsunami",
            DisasterType::Fire => "fire",
            DisasterType::Landslide => "landslide",
            DisasterType::Drought => "drought",
            DisasterType::Heatwave => "heatwave",
        }
    }

    /// Parses a lowercase tag; unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

impl fmt::Display for DisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity tier, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All tiers, least severe first.
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// Returns the lowercase tag used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `[latitude, longitude]` pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates(pub f64, pub f64);

impl Coordinates {
    #[inline]
    pub fn lat(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn lng(&self) -> f64 {
        self.1
    }
}

/// Origin of an alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub district: String,
    pub coordinates: Coordinates,
}

/// Resources needed for a response and those already on hand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resources {
    pub required: Vec<String>,
    pub available: Vec<String>,
}

impl Resources {
    /// Required resources that are not yet available, in required order.
    pub fn missing(&self) -> Vec<&str> {
        self.required
            .iter()
            .filter(|r| !self.available.contains(r))
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvacuationRoute {
    pub description: String,
    pub coordinates: Vec<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelter {
    pub name: String,
    pub capacity: u32,
    pub coordinates: Coordinates,
    pub available: bool,
}

/// Timestamped progress note attached to an alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertUpdate {
    pub timestamp: DateTime<Utc>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub department: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningLevels {
    pub current: String,
    pub expected: String,
    pub time_to_impact: String,
}

/// A single disaster alert.
///
/// Required fields describe the event itself; the optional sections are
/// present only when the source supplied them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Unique identifier (catalog ids look like `flood-1`).
    pub id: String,
    /// Disaster category.
    #[serde(rename = "type")]
    pub kind: DisasterType,
    pub title: String,
    pub description: String,
    pub location: Location,
    pub severity: Severity,
    /// When the alert was raised.
    pub timestamp: DateTime<Utc>,
    /// Names of areas affected beyond the origin district.
    pub affected_areas: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Resources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evacuation_routes: Option<Vec<EvacuationRoute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelters: Option<Vec<Shelter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<AlertUpdate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_advisory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impacted_sectors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contacts: Option<Vec<EmergencyContact>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_levels: Option<WarningLevels>,
}

impl Alert {
    /// Returns a copy of this alert carrying a new identity and timestamp.
    ///
    /// Every other field is cloned unchanged.
    pub fn reissue(&self, id: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            timestamp: at,
            ..self.clone()
        }
    }

    /// True if `district` is the origin district or one of the affected areas.
    pub fn concerns(&self, district: &str) -> bool {
        self.location.district == district || self.affected_areas.iter().any(|a| a == district)
    }

    /// Shelters that currently accept people.
    pub fn open_shelters(&self) -> impl Iterator<Item = &Shelter> {
        self.shelters
            .iter()
            .flatten()
            .filter(|s| s.available)
    }
}
