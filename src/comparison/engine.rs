//! Side-by-side facility comparison.
//!
//! [`ComparisonEngine::compare`] is pure: it reads the two facilities and
//! their routing lookups, applies the configured tie thresholds and weights,
//! and returns a fresh [`ComparisonData`]. Missing attributes degrade to
//! defaults instead of failing.

use super::comparators::{compare_counts, compare_higher_is_better, compare_lower_is_better};
use super::format::{format_distance, format_duration, format_optional, format_rating, plural};
use super::normalize::{scale_higher, scale_lower};
use super::types::{ComparisonData, ComparisonKey, ComparisonResult, ComparisonValue, Winner};
use crate::config::ComparisonConfig;
use crate::facility::{Facility, RouteLookup};
use tracing::{debug, debug_span};

/// Outcome of one field before it is folded into the aggregate.
struct FieldOutcome {
    result: ComparisonResult,
    reason: Option<String>,
    score_a: f64,
    score_b: f64,
}

impl FieldOutcome {
    fn new(
        key: ComparisonKey,
        value_a: ComparisonValue,
        value_b: ComparisonValue,
        winner: Winner,
        (score_a, score_b): (f64, f64),
    ) -> Self {
        Self {
            result: ComparisonResult {
                key,
                label: key.label().to_string(),
                value_a,
                value_b,
                winner,
            },
            reason: None,
            score_a,
            score_b,
        }
    }

    fn with_reason(mut self, reason: Option<String>) -> Self {
        if !self.result.winner.is_tie() {
            self.reason = reason;
        }
        self
    }
}

/// Pick `(winner's value, loser's value)` for a decided field.
fn ordered<T: Copy>(winner: Winner, a: T, b: T) -> Option<(T, T)> {
    match winner {
        Winner::A => Some((a, b)),
        Winner::B => Some((b, a)),
        Winner::Tie => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine {
    config: ComparisonConfig,
}

impl ComparisonEngine {
    pub fn new(config: ComparisonConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    /// Compare two facilities. Returns `None` until both are present.
    pub fn compare(
        &self,
        facility_a: Option<&Facility>,
        facility_b: Option<&Facility>,
        directions_a: &RouteLookup,
        directions_b: &RouteLookup,
    ) -> Option<ComparisonData> {
        let (a, b) = match (facility_a, facility_b) {
            (Some(a), Some(b)) => (a, b),
            _ => return None,
        };

        let _span = debug_span!(
            "compare_facilities",
            facility_a = a.display_name(),
            facility_b = b.display_name()
        )
        .entered();

        let outcomes = ComparisonKey::ALL
            .iter()
            .map(|&key| self.compare_field(key, a, b, directions_a, directions_b));

        let mut data = ComparisonData {
            reasons_a: Vec::new(),
            reasons_b: Vec::new(),
            detailed_results: Vec::with_capacity(ComparisonKey::ALL.len()),
            score_a: 0,
            score_b: 0,
        };
        let (mut total_a, mut total_b) = (0.0, 0.0);

        for outcome in outcomes {
            let weight = self.config.weights.for_key(outcome.result.key);
            total_a += outcome.score_a * weight;
            total_b += outcome.score_b * weight;

            debug!(
                field = outcome.result.key.as_str(),
                winner = %outcome.result.winner,
                "field compared"
            );

            if let Some(reason) = outcome.reason {
                match outcome.result.winner {
                    Winner::A => data.reasons_a.push(reason),
                    Winner::B => data.reasons_b.push(reason),
                    Winner::Tie => {}
                }
            }
            data.detailed_results.push(outcome.result);
        }

        data.score_a = to_percentage(total_a);
        data.score_b = to_percentage(total_b);

        debug!(
            score_a = data.score_a,
            score_b = data.score_b,
            "comparison complete"
        );

        Some(data)
    }

    fn compare_field(
        &self,
        key: ComparisonKey,
        a: &Facility,
        b: &Facility,
        route_a: &RouteLookup,
        route_b: &RouteLookup,
    ) -> FieldOutcome {
        let threshold = self.config.thresholds.for_key(key);
        match key {
            ComparisonKey::Rating => compare_rating(a, b, threshold),
            ComparisonKey::TravelTime => compare_travel_time(route_a, route_b, threshold),
            ComparisonKey::Distance => compare_distance(route_a, route_b, threshold),
            ComparisonKey::Services => compare_services(a, b, threshold),
            ComparisonKey::Specialists => compare_specialists(a, b, threshold),
            ComparisonKey::Reviews => compare_reviews(a, b, threshold),
            ComparisonKey::Beds => compare_beds(a, b, threshold),
        }
    }
}

fn compare_rating(a: &Facility, b: &Facility, threshold: f64) -> FieldOutcome {
    // Unrated facilities compete as 0 but display as N/A.
    let ra = a.rating().unwrap_or(0.0);
    let rb = b.rating().unwrap_or(0.0);
    let winner = compare_higher_is_better(Some(ra), Some(rb), threshold);
    let (da, db) = (format_rating(a.rating()), format_rating(b.rating()));

    let reason = ordered(winner, da.as_str(), db.as_str())
        .map(|(w, l)| format!("Higher average rating ({w} vs {l})"));

    FieldOutcome::new(
        ComparisonKey::Rating,
        da.into(),
        db.into(),
        winner,
        scale_higher(ra, rb),
    )
    .with_reason(reason)
}

fn compare_route_field(
    key: ComparisonKey,
    a: Option<f64>,
    b: Option<f64>,
    threshold: f64,
    format: fn(f64) -> String,
    shorter: &str,
    only_known: &str,
) -> FieldOutcome {
    let winner = compare_lower_is_better(a, b, threshold);
    let reason = ordered(winner, a, b).and_then(|pair| match pair {
        (Some(w), Some(l)) => Some(format!("{shorter} (by {})", format(l - w))),
        (Some(w), None) => Some(format!("{only_known} ({})", format(w))),
        _ => None,
    });

    FieldOutcome::new(
        key,
        format_optional(a, format).into(),
        format_optional(b, format).into(),
        winner,
        scale_lower(a, b),
    )
    .with_reason(reason)
}

fn compare_travel_time(a: &RouteLookup, b: &RouteLookup, threshold: f64) -> FieldOutcome {
    compare_route_field(
        ComparisonKey::TravelTime,
        a.duration(),
        b.duration(),
        threshold,
        format_duration,
        "Shorter travel time",
        "Only facility with a known travel time",
    )
}

fn compare_distance(a: &RouteLookup, b: &RouteLookup, threshold: f64) -> FieldOutcome {
    compare_route_field(
        ComparisonKey::Distance,
        a.distance(),
        b.distance(),
        threshold,
        format_distance,
        "Closer distance",
        "Only facility with a known distance",
    )
}

fn compare_services(a: &Facility, b: &Facility, threshold: f64) -> FieldOutcome {
    let (ca, cb) = (a.service_count() as u64, b.service_count() as u64);
    let winner = compare_counts(ca, cb, threshold as u64);
    let reason = ordered(winner, ca, cb)
        .map(|(w, l)| format!("Offers {} more", plural(w - l, "service")));

    FieldOutcome::new(
        ComparisonKey::Services,
        a.services_list.clone().into(),
        b.services_list.clone().into(),
        winner,
        scale_higher(ca as f64, cb as f64),
    )
    .with_reason(reason)
}

fn compare_specialists(a: &Facility, b: &Facility, threshold: f64) -> FieldOutcome {
    let (ca, cb) = (a.specialist_count() as u64, b.specialist_count() as u64);
    let winner = compare_counts(ca, cb, threshold as u64);
    let reason = ordered(winner, ca, cb)
        .map(|(w, l)| format!("Has {} more", plural(w - l, "specialist")));

    FieldOutcome::new(
        ComparisonKey::Specialists,
        a.specialists.clone().into(),
        b.specialists.clone().into(),
        winner,
        scale_higher(ca as f64, cb as f64),
    )
    .with_reason(reason)
}

fn compare_reviews(a: &Facility, b: &Facility, threshold: f64) -> FieldOutcome {
    let (ca, cb) = (a.review_count(), b.review_count());
    let winner = compare_counts(ca, cb, threshold as u64);
    let reason = ordered(winner, ca, cb).map(|(w, l)| format!("More patient reviews ({w} vs {l})"));

    FieldOutcome::new(
        ComparisonKey::Reviews,
        ca.into(),
        cb.into(),
        winner,
        scale_higher(ca as f64, cb as f64),
    )
    .with_reason(reason)
}

fn compare_beds(a: &Facility, b: &Facility, threshold: f64) -> FieldOutcome {
    let (ca, cb) = (a.inpatient_beds(), b.inpatient_beds());
    let winner = compare_counts(ca, cb, threshold as u64);
    let reason = ordered(winner, ca, cb).map(|(w, l)| format!("More inpatient beds ({w} vs {l})"));

    FieldOutcome::new(
        ComparisonKey::Beds,
        ca.into(),
        cb.into(),
        winner,
        scale_higher(ca as f64, cb as f64),
    )
    .with_reason(reason)
}

fn to_percentage(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// Compare with the default thresholds and weights.
pub fn compare(
    facility_a: Option<&Facility>,
    facility_b: Option<&Facility>,
    directions_a: &RouteLookup,
    directions_b: &RouteLookup,
) -> Option<ComparisonData> {
    ComparisonEngine::default().compare(facility_a, facility_b, directions_a, directions_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComparisonWeights;
    use crate::facility::DirectionsRoute;

    fn strong() -> Facility {
        Facility::new("Mercy General")
            .with_rating(4.5)
            .with_reviews(100)
            .with_services(["a", "b", "c"])
            .with_specialists(["x"])
            .with_beds(20)
    }

    fn weak() -> Facility {
        Facility::new("Valley Clinic")
            .with_rating(3.0)
            .with_reviews(10)
            .with_services(["a"])
            .with_beds(5)
    }

    #[test]
    fn test_missing_facility_returns_none() {
        let a = strong();
        let pending = RouteLookup::Pending;
        assert!(compare(Some(&a), None, &pending, &pending).is_none());
        assert!(compare(None, Some(&a), &pending, &pending).is_none());
        assert!(compare(None, None, &pending, &pending).is_none());
    }

    #[test]
    fn test_reason_templates() {
        let (a, b) = (strong(), weak());
        let pending = RouteLookup::Pending;
        let data = compare(Some(&a), Some(&b), &pending, &pending).unwrap();
        assert_eq!(
            data.reasons_a,
            vec![
                "Higher average rating (4.5 vs 3.0)",
                "Offers 2 more services",
                "Has 1 more specialist",
                "More patient reviews (100 vs 10)",
                "More inpatient beds (20 vs 5)",
            ]
        );
        assert!(data.reasons_b.is_empty());
    }

    #[test]
    fn test_only_known_route_wins() {
        let a = Facility::new("A");
        let route = RouteLookup::Resolved(DirectionsRoute::new(900.0, 5000.0));
        let data = compare(Some(&a), Some(&a), &route, &RouteLookup::Unavailable).unwrap();
        assert_eq!(data.winner_for(ComparisonKey::TravelTime), Some(Winner::A));
        assert!(data
            .reasons_a
            .contains(&"Only facility with a known travel time (15 minutes)".to_string()));
        assert!(data
            .reasons_a
            .contains(&"Only facility with a known distance (5.0 km)".to_string()));
        assert!(data.score_a >= data.score_b);
    }

    #[test]
    fn test_scores_use_weights() {
        let (a, b) = (strong(), weak());
        let pending = RouteLookup::Pending;
        let data = compare(Some(&a), Some(&b), &pending, &pending).unwrap();
        // A maxes every non-route field; route fields score 0 on both sides.
        assert_eq!(data.score_a, 75);
        assert!(data.score_b < data.score_a);
        assert_eq!(data.overall_winner(), Winner::A);

        let rating_only = ComparisonConfig::default().with_weights(ComparisonWeights {
            rating: 1.0,
            travel_time: 0.0,
            distance: 0.0,
            services: 0.0,
            specialists: 0.0,
            reviews: 0.0,
            beds: 0.0,
            ..ComparisonWeights::default()
        });
        let data = ComparisonEngine::new(rating_only)
            .compare(Some(&a), Some(&b), &pending, &pending)
            .unwrap();
        assert_eq!(data.score_a, 100);
        assert_eq!(data.score_b, 67);
    }

    #[test]
    fn test_threshold_turns_small_difference_into_tie() {
        let a = Facility::new("A").with_reviews(12);
        let b = Facility::new("B").with_reviews(10);
        let pending = RouteLookup::Pending;
        let data = compare(Some(&a), Some(&b), &pending, &pending).unwrap();
        assert_eq!(data.winner_for(ComparisonKey::Reviews), Some(Winner::Tie));
        assert!(data.reasons_a.is_empty());
    }

    #[test]
    fn test_ratings_one_tenth_apart_tie() {
        let pending = RouteLookup::Pending;
        for (high, low) in [(4.1, 4.0), (4.2, 4.1), (3.1, 3.0), (0.3, 0.2)] {
            let a = Facility::new("A").with_rating(high);
            let b = Facility::new("B").with_rating(low);
            let data = compare(Some(&a), Some(&b), &pending, &pending).unwrap();
            assert_eq!(
                data.winner_for(ComparisonKey::Rating),
                Some(Winner::Tie),
                "{high} vs {low}"
            );
            assert!(data.reasons_a.is_empty());
        }
    }
}
