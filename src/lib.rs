// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod errors;
pub mod facility;
pub mod formatting;
pub mod io;
pub mod observability;

// Re-export commonly used types
pub use crate::comparison::{
    build_rows, compare, ComparisonCache, ComparisonData, ComparisonEngine, ComparisonKey,
    ComparisonResult, ComparisonRow, ComparisonValue, RowCell, Winner,
};

pub use crate::config::{
    ComparisonConfig, ComparisonThresholds, ComparisonWeights, COMPARISON_THRESHOLDS,
    COMPARISON_WEIGHTS,
};

pub use crate::errors::{Error, Result};

pub use crate::facility::{DirectionsRoute, Facility, Infrastructure, Inventory, RouteLookup};

pub use crate::io::output::{create_writer, ComparisonReport, OutputFormat, OutputWriter};
