//! Alert domain: record types, catalog, filtering and geo helpers.
//!
//! ## Contents
//! - [`Alert`] and its sub-records, the payload carried on the bus
//! - [`Catalog`] fixed collection used as the feed's data source
//! - [`AlertFilter`] category/district/severity selection
//! - [`haversine_km`] great-circle distance used by radius queries

mod alert;
mod catalog;
mod filter;
mod geo;

pub use alert::{
    Alert, AlertUpdate, Coordinates, DisasterType, EmergencyContact, EvacuationRoute, Location,
    Resources, Severity, Shelter, WarningLevels,
};
pub use catalog::Catalog;
pub use filter::AlertFilter;
pub use geo::{EARTH_RADIUS_KM, haversine_km};

#[cfg(test)]
pub(crate) use alert::fixtures;
