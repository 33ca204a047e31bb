use crate::comparison::types::ComparisonKey;
use serde::{Deserialize, Serialize};

/// Tie thresholds for each compared field.
///
/// Two values are a tie when their absolute difference does not exceed the
/// field's threshold. Count fields therefore need to differ by more than `N`
/// before a winner is declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonThresholds {
    /// Rating points
    #[serde(default = "default_rating_threshold")]
    pub rating: f64,

    /// Seconds
    #[serde(default = "default_travel_time_threshold")]
    pub travel_time: f64,

    /// Meters
    #[serde(default = "default_distance_threshold")]
    pub distance: f64,

    #[serde(default = "default_services_threshold")]
    pub services: u64,

    #[serde(default = "default_specialists_threshold")]
    pub specialists: u64,

    #[serde(default = "default_reviews_threshold")]
    pub reviews: u64,

    #[serde(default = "default_beds_threshold")]
    pub beds: u64,
}

/// Default tie thresholds.
pub const COMPARISON_THRESHOLDS: ComparisonThresholds = ComparisonThresholds {
    rating: 0.1,
    travel_time: 60.0,
    distance: 100.0,
    services: 0,
    specialists: 0,
    reviews: 5,
    beds: 0,
};

impl Default for ComparisonThresholds {
    fn default() -> Self {
        COMPARISON_THRESHOLDS
    }
}

impl ComparisonThresholds {
    /// Threshold for a field, in that field's raw unit.
    pub fn for_key(&self, key: ComparisonKey) -> f64 {
        match key {
            ComparisonKey::Rating => self.rating,
            ComparisonKey::TravelTime => self.travel_time,
            ComparisonKey::Distance => self.distance,
            ComparisonKey::Services => self.services as f64,
            ComparisonKey::Specialists => self.specialists as f64,
            ComparisonKey::Reviews => self.reviews as f64,
            ComparisonKey::Beds => self.beds as f64,
        }
    }

    /// Every threshold must be a finite, non-negative number.
    pub fn validate(&self) -> Result<(), String> {
        for key in ComparisonKey::ALL {
            let value = self.for_key(key);
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "{} threshold must be a non-negative number, got {}",
                    key.label(),
                    value
                ));
            }
        }
        Ok(())
    }
}

fn default_rating_threshold() -> f64 {
    COMPARISON_THRESHOLDS.rating
}
fn default_travel_time_threshold() -> f64 {
    COMPARISON_THRESHOLDS.travel_time
}
fn default_distance_threshold() -> f64 {
    COMPARISON_THRESHOLDS.distance
}
fn default_services_threshold() -> u64 {
    COMPARISON_THRESHOLDS.services
}
fn default_specialists_threshold() -> u64 {
    COMPARISON_THRESHOLDS.specialists
}
fn default_reviews_threshold() -> u64 {
    COMPARISON_THRESHOLDS.reviews
}
fn default_beds_threshold() -> u64 {
    COMPARISON_THRESHOLDS.beds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_key_uses_raw_units() {
        let thresholds = ComparisonThresholds::default();
        assert_eq!(thresholds.for_key(ComparisonKey::TravelTime), 60.0);
        assert_eq!(thresholds.for_key(ComparisonKey::Reviews), 5.0);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let thresholds = ComparisonThresholds {
            distance: -1.0,
            ..ComparisonThresholds::default()
        };
        assert!(thresholds.validate().is_err());
        assert!(ComparisonThresholds::default().validate().is_ok());
    }
}
