//! Table rows for rendering a [`ComparisonData`].
//!
//! Location-dependent rows need the raw lookup state as well as the result,
//! because "no location permission" and "still loading" look the same to the
//! engine but not to the user.

use super::types::{ComparisonData, ComparisonKey, ComparisonValue, Winner};
use crate::facility::RouteLookup;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum RowCell {
    Value(String),
    /// Routing data is structurally unavailable for this side.
    EnableLocation,
    /// Routing lookup has not resolved yet.
    Loading,
}

impl RowCell {
    pub fn text(&self) -> &str {
        match self {
            Self::Value(text) => text,
            Self::EnableLocation => "Enable location",
            Self::Loading => "Loading...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub key: ComparisonKey,
    pub label: String,
    pub cell_a: RowCell,
    pub cell_b: RowCell,
    pub winner: Winner,
}

impl ComparisonRow {
    pub fn highlights(&self, side: Winner) -> bool {
        !side.is_tie() && self.winner == side
    }
}

fn cell(key: ComparisonKey, value: &ComparisonValue, lookup: &RouteLookup) -> RowCell {
    if key.is_location_dependent() {
        match lookup {
            RouteLookup::Pending => return RowCell::Loading,
            RouteLookup::Unavailable => return RowCell::EnableLocation,
            RouteLookup::Resolved(_) => {}
        }
    }
    RowCell::Value(value.display())
}

pub fn build_rows(
    data: &ComparisonData,
    directions_a: &RouteLookup,
    directions_b: &RouteLookup,
) -> Vec<ComparisonRow> {
    data.detailed_results
        .iter()
        .map(|result| ComparisonRow {
            key: result.key,
            label: result.label.clone(),
            cell_a: cell(result.key, &result.value_a, directions_a),
            cell_b: cell(result.key, &result.value_b, directions_b),
            winner: result.winner,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::compare;
    use crate::facility::{DirectionsRoute, Facility};

    #[test]
    fn test_location_rows_distinguish_pending_and_unavailable() {
        let a = Facility::new("A").with_services(["er", "lab"]);
        let route = RouteLookup::Resolved(DirectionsRoute::new(600.0, 850.0));
        let (pending, unavailable) = (RouteLookup::Pending, RouteLookup::Unavailable);

        let data = compare(Some(&a), Some(&a), &pending, &unavailable).unwrap();
        let rows = build_rows(&data, &pending, &unavailable);
        assert_eq!(rows[1].cell_a, RowCell::Loading);
        assert_eq!(rows[1].cell_b, RowCell::EnableLocation);
        assert_eq!(rows[2].cell_b.text(), "Enable location");

        let data = compare(Some(&a), Some(&a), &route, &route).unwrap();
        let rows = build_rows(&data, &route, &route);
        assert_eq!(rows[1].cell_a, RowCell::Value("10 minutes".into()));
        assert_eq!(rows[2].cell_a, RowCell::Value("850 m".into()));
    }

    #[test]
    fn test_list_rows_show_counts() {
        let a = Facility::new("A").with_services(["er", "lab"]);
        let b = Facility::new("B");
        let pending = RouteLookup::Pending;
        let data = compare(Some(&a), Some(&b), &pending, &pending).unwrap();
        let rows = build_rows(&data, &pending, &pending);

        let services = rows
            .iter()
            .find(|r| r.key == ComparisonKey::Services)
            .unwrap();
        assert_eq!(services.cell_a.text(), "2");
        assert_eq!(services.cell_b.text(), "0");
        assert!(services.highlights(Winner::A));
        assert!(!services.highlights(Winner::B));
    }
}
