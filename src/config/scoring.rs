//! Scoring weights for the aggregate comparison score
//!
//! Each compared field contributes `normalized_value * weight` to a side's
//! score. The weight table is versioned so stored configs can be told apart
//! when the defaults change.

use crate::comparison::types::ComparisonKey;
use serde::{Deserialize, Serialize};

pub const WEIGHTS_VERSION: u32 = 1;

/// Per-field scoring weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonWeights {
    #[serde(default = "default_weights_version")]
    pub version: u32,

    /// Weight for average rating (0.0-1.0)
    #[serde(default = "default_rating_weight")]
    pub rating: f64,

    /// Weight for travel time (0.0-1.0)
    #[serde(default = "default_travel_time_weight")]
    pub travel_time: f64,

    /// Weight for route distance (0.0-1.0)
    #[serde(default = "default_distance_weight")]
    pub distance: f64,

    /// Weight for number of services offered (0.0-1.0)
    #[serde(default = "default_services_weight")]
    pub services: f64,

    /// Weight for number of specialists (0.0-1.0)
    #[serde(default = "default_specialists_weight")]
    pub specialists: f64,

    /// Weight for review count (0.0-1.0)
    #[serde(default = "default_reviews_weight")]
    pub reviews: f64,

    /// Weight for inpatient bed capacity (0.0-1.0)
    #[serde(default = "default_beds_weight")]
    pub beds: f64,
}

/// Default weight table.
pub const COMPARISON_WEIGHTS: ComparisonWeights = ComparisonWeights {
    version: WEIGHTS_VERSION,
    rating: 0.25,
    travel_time: 0.15,
    distance: 0.10,
    services: 0.20,
    specialists: 0.10,
    reviews: 0.10,
    beds: 0.10,
};

impl Default for ComparisonWeights {
    fn default() -> Self {
        COMPARISON_WEIGHTS
    }
}

impl ComparisonWeights {
    pub fn for_key(&self, key: ComparisonKey) -> f64 {
        match key {
            ComparisonKey::Rating => self.rating,
            ComparisonKey::TravelTime => self.travel_time,
            ComparisonKey::Distance => self.distance,
            ComparisonKey::Services => self.services,
            ComparisonKey::Specialists => self.specialists,
            ComparisonKey::Reviews => self.reviews,
            ComparisonKey::Beds => self.beds,
        }
    }

    fn for_key_mut(&mut self, key: ComparisonKey) -> &mut f64 {
        match key {
            ComparisonKey::Rating => &mut self.rating,
            ComparisonKey::TravelTime => &mut self.travel_time,
            ComparisonKey::Distance => &mut self.distance,
            ComparisonKey::Services => &mut self.services,
            ComparisonKey::Specialists => &mut self.specialists,
            ComparisonKey::Reviews => &mut self.reviews,
            ComparisonKey::Beds => &mut self.beds,
        }
    }

    pub fn total(&self) -> f64 {
        ComparisonKey::ALL.iter().map(|&key| self.for_key(key)).sum()
    }

    // Pure function: Check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    /// Check that every weight is in [0, 1]
    pub fn validate_ranges(&self) -> Result<(), String> {
        for key in ComparisonKey::ALL {
            if !Self::is_valid_weight(self.for_key(key)) {
                return Err(format!("{} weight must be between 0.0 and 1.0", key.label()));
            }
        }
        Ok(())
    }

    /// Validate each weight is in [0, 1] and that they sum to 1.0
    /// (with small tolerance for floating point)
    pub fn validate(&self) -> Result<(), String> {
        self.validate_ranges()?;

        let sum = self.total();
        if (sum - 1.0).abs() > 0.001 {
            return Err(format!(
                "Comparison weights must sum to 1.0, but sum to {:.3}",
                sum
            ));
        }

        Ok(())
    }

    /// Rescale weights that drift from a sum of 1.0
    pub fn normalize(&mut self) {
        let sum = self.total();
        if sum > 0.0 && (sum - 1.0).abs() > 0.001 {
            for key in ComparisonKey::ALL {
                *self.for_key_mut(key) /= sum;
            }
        }
    }
}

fn default_weights_version() -> u32 {
    WEIGHTS_VERSION
}
fn default_rating_weight() -> f64 {
    COMPARISON_WEIGHTS.rating
}
fn default_travel_time_weight() -> f64 {
    COMPARISON_WEIGHTS.travel_time
}
fn default_distance_weight() -> f64 {
    COMPARISON_WEIGHTS.distance
}
fn default_services_weight() -> f64 {
    COMPARISON_WEIGHTS.services
}
fn default_specialists_weight() -> f64 {
    COMPARISON_WEIGHTS.specialists
}
fn default_reviews_weight() -> f64 {
    COMPARISON_WEIGHTS.reviews
}
fn default_beds_weight() -> f64 {
    COMPARISON_WEIGHTS.beds
}
