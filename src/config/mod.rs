// Sub-modules
mod core;
mod loader;
mod scoring;
mod thresholds;

pub use self::core::ComparisonConfig;
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, write_default_config, CONFIG_FILE_NAME,
};
pub use scoring::{ComparisonWeights, COMPARISON_WEIGHTS, WEIGHTS_VERSION};
pub use thresholds::{ComparisonThresholds, COMPARISON_THRESHOLDS};
