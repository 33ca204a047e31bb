//! Facility records and routing lookups consumed by the comparison engine.
//!
//! Both types mirror the JSON shape served by the facility directory backend.
//! Every attribute that takes part in scoring is optional on the wire, so the
//! accessors here apply the documented defaults (`0` for counts) once instead
//! of leaving each caller to do it.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A healthcare facility as returned by the directory service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Facility {
    pub id: Option<String>,
    pub name: String,
    pub address: Option<String>,
    pub average_rating: Option<f64>,
    pub services_list: Vec<String>,
    pub specialists: Vec<String>,
    pub total_reviews: Option<u64>,
    pub inventory: Option<Inventory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    pub infrastructure: Option<Infrastructure>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Infrastructure {
    pub inpatient_beds: Option<u64>,
}

impl Facility {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.average_rating = Some(rating);
        self
    }

    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services_list = services.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_specialists<I, S>(mut self, specialists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialists = specialists.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_reviews(mut self, total_reviews: u64) -> Self {
        self.total_reviews = Some(total_reviews);
        self
    }

    pub fn with_beds(mut self, inpatient_beds: u64) -> Self {
        self.inventory = Some(Inventory {
            infrastructure: Some(Infrastructure {
                inpatient_beds: Some(inpatient_beds),
            }),
        });
        self
    }

    /// Average rating, `None` when the facility has not been rated.
    pub fn rating(&self) -> Option<f64> {
        self.average_rating.filter(|r| r.is_finite())
    }

    pub fn review_count(&self) -> u64 {
        self.total_reviews.unwrap_or(0)
    }

    pub fn inpatient_beds(&self) -> u64 {
        self.inventory
            .as_ref()
            .and_then(|inv| inv.infrastructure.as_ref())
            .and_then(|infra| infra.inpatient_beds)
            .unwrap_or(0)
    }

    pub fn service_count(&self) -> usize {
        self.services_list.len()
    }

    pub fn specialist_count(&self) -> usize {
        self.specialists.len()
    }

    /// Name used in headings; falls back to the id, then a placeholder.
    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            &self.name
        } else {
            self.id.as_deref().unwrap_or("Unnamed facility")
        }
    }
}

/// Best route between the user's location and a facility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    /// Travel time in seconds.
    pub duration: f64,
    /// Travel distance in meters.
    pub distance: f64,
}

impl DirectionsRoute {
    pub fn new(duration: f64, distance: f64) -> Self {
        Self { duration, distance }
    }
}

/// State of one side's routing lookup.
///
/// The engine treats `Pending` and `Unavailable` the same way. Only row
/// rendering tells them apart, so the UI can show a loading indicator for the
/// former and a prompt to enable location for the latter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "route", rename_all = "snake_case")]
pub enum RouteLookup {
    /// Lookup has not resolved yet.
    #[default]
    Pending,
    /// No user location, or the lookup failed.
    Unavailable,
    Resolved(DirectionsRoute),
}

impl RouteLookup {
    pub fn route(&self) -> Option<&DirectionsRoute> {
        match self {
            Self::Resolved(route) => Some(route),
            Self::Pending | Self::Unavailable => None,
        }
    }

    pub fn duration(&self) -> Option<f64> {
        self.route().map(|r| r.duration).filter(|d| d.is_finite())
    }

    pub fn distance(&self) -> Option<f64> {
        self.route().map(|r| r.distance).filter(|d| d.is_finite())
    }
}

impl From<Option<DirectionsRoute>> for RouteLookup {
    fn from(route: Option<DirectionsRoute>) -> Self {
        match route {
            Some(route) => Self::Resolved(route),
            None => Self::Unavailable,
        }
    }
}

fn read_input(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::FileSystem {
        message: format!("Cannot read {what} {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })
}

/// Read a facility record from a JSON file.
pub fn load_facility(path: &Path) -> Result<Facility> {
    let contents = read_input(path, "facility")?;
    parse_facility(&contents)
}

pub fn parse_facility(contents: &str) -> Result<Facility> {
    Ok(serde_json::from_str(contents)?)
}

/// Read a routing result from a JSON file. A literal `null` document means
/// the lookup ran and produced nothing.
pub fn load_route(path: &Path) -> Result<RouteLookup> {
    let contents = read_input(path, "route")?;
    parse_route(&contents)
}

pub fn parse_route(contents: &str) -> Result<RouteLookup> {
    let route: Option<DirectionsRoute> = serde_json::from_str(contents)?;
    Ok(route.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let facility = parse_facility(r#"{"name": "St. Mary"}"#).unwrap();
        assert_eq!(facility.rating(), None);
        assert_eq!(facility.review_count(), 0);
        assert_eq!(facility.inpatient_beds(), 0);
        assert_eq!(facility.service_count(), 0);
    }

    #[test]
    fn test_nested_inpatient_beds() {
        let json = r#"{
            "name": "County General",
            "inventory": {"infrastructure": {"inpatient_beds": 42}}
        }"#;
        let facility = parse_facility(json).unwrap();
        assert_eq!(facility.inpatient_beds(), 42);

        let partial = parse_facility(r#"{"inventory": {}}"#).unwrap();
        assert_eq!(partial.inpatient_beds(), 0);
    }

    #[test]
    fn test_null_route_is_unavailable() {
        assert_eq!(parse_route("null").unwrap(), RouteLookup::Unavailable);
        let resolved = parse_route(r#"{"duration": 600, "distance": 4200}"#).unwrap();
        assert_eq!(
            resolved,
            RouteLookup::Resolved(DirectionsRoute::new(600.0, 4200.0))
        );
    }

    #[test]
    fn test_pending_and_unavailable_have_no_route() {
        assert!(RouteLookup::Pending.route().is_none());
        assert!(RouteLookup::Unavailable.route().is_none());
        assert_eq!(RouteLookup::default(), RouteLookup::Pending);
    }

    #[test]
    fn test_display_name_fallback() {
        let mut facility = Facility::new("  ");
        assert_eq!(facility.display_name(), "Unnamed facility");
        facility.id = Some("fac-17".into());
        assert_eq!(facility.display_name(), "fac-17");
    }
}
