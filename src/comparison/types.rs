use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a comparison is better on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Winner {
    A,
    B,
    Tie,
}

impl Winner {
    /// Winner after swapping the two sides.
    pub fn mirror(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
            Self::Tie => Self::Tie,
        }
    }

    pub fn is_tie(self) -> bool {
        self == Self::Tie
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::Tie => write!(f, "TIE"),
        }
    }
}

/// Compared dimension. Declaration order is the row order of every result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonKey {
    Rating,
    TravelTime,
    Distance,
    Services,
    Specialists,
    Reviews,
    Beds,
}

impl ComparisonKey {
    pub const ALL: [ComparisonKey; 7] = [
        ComparisonKey::Rating,
        ComparisonKey::TravelTime,
        ComparisonKey::Distance,
        ComparisonKey::Services,
        ComparisonKey::Specialists,
        ComparisonKey::Reviews,
        ComparisonKey::Beds,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::TravelTime => "travel_time",
            Self::Distance => "distance",
            Self::Services => "services",
            Self::Specialists => "specialists",
            Self::Reviews => "reviews",
            Self::Beds => "beds",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Rating => "Rating",
            Self::TravelTime => "Travel Time",
            Self::Distance => "Distance",
            Self::Services => "Services",
            Self::Specialists => "Specialists",
            Self::Reviews => "Reviews",
            Self::Beds => "Inpatient Beds",
        }
    }

    /// Rows whose value depends on the user's location.
    pub fn is_location_dependent(self) -> bool {
        matches!(self, Self::TravelTime | Self::Distance)
    }
}

impl fmt::Display for ComparisonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value shown for one side of a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparisonValue {
    Count(u64),
    Text(String),
    List(Vec<String>),
}

impl ComparisonValue {
    /// Table-cell text. Lists collapse to their item count.
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Count(n) => n.to_string(),
            Self::List(items) => items.len().to_string(),
        }
    }
}

impl From<&str> for ComparisonValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ComparisonValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<u64> for ComparisonValue {
    fn from(n: u64) -> Self {
        Self::Count(n)
    }
}

impl From<Vec<String>> for ComparisonValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub key: ComparisonKey,
    pub label: String,
    pub value_a: ComparisonValue,
    pub value_b: ComparisonValue,
    pub winner: Winner,
}

/// Full output of one comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonData {
    pub reasons_a: Vec<String>,
    pub reasons_b: Vec<String>,
    pub detailed_results: Vec<ComparisonResult>,
    pub score_a: i64,
    pub score_b: i64,
}

impl ComparisonData {
    pub fn result_for(&self, key: ComparisonKey) -> Option<&ComparisonResult> {
        self.detailed_results.iter().find(|r| r.key == key)
    }

    pub fn winner_for(&self, key: ComparisonKey) -> Option<Winner> {
        self.result_for(key).map(|r| r.winner)
    }

    /// Side with the higher aggregate score.
    pub fn overall_winner(&self) -> Winner {
        match self.score_a.cmp(&self.score_b) {
            std::cmp::Ordering::Greater => Winner::A,
            std::cmp::Ordering::Less => Winner::B,
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }

    pub fn fields_won(&self, side: Winner) -> usize {
        self.detailed_results
            .iter()
            .filter(|r| r.winner == side)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_is_involution() {
        for winner in [Winner::A, Winner::B, Winner::Tie] {
            assert_eq!(winner.mirror().mirror(), winner);
        }
        assert_eq!(Winner::Tie.mirror(), Winner::Tie);
    }

    #[test]
    fn test_key_order_is_fixed() {
        let keys: Vec<&str> = ComparisonKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "rating",
                "travel_time",
                "distance",
                "services",
                "specialists",
                "reviews",
                "beds"
            ]
        );
    }

    #[test]
    fn test_list_displays_as_count() {
        let value = ComparisonValue::List(vec!["x-ray".into(), "icu".into()]);
        assert_eq!(value.display(), "2");
        assert_eq!(ComparisonValue::Count(0).display(), "0");
    }

    #[test]
    fn test_winner_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Winner::Tie).unwrap(), "\"TIE\"");
    }
}
