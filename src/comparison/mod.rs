pub mod cache;
pub mod comparators;
pub mod engine;
pub mod format;
pub mod normalize;
pub mod rows;
pub mod types;

pub use cache::{CacheStats, ComparisonCache};
pub use engine::{compare, ComparisonEngine};
pub use rows::{build_rows, ComparisonRow, RowCell};
pub use types::{ComparisonData, ComparisonKey, ComparisonResult, ComparisonValue, Winner};
