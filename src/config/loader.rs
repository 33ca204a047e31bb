use std::fs;
use std::path::{Path, PathBuf};

use super::core::ComparisonConfig;
use super::scoring::ComparisonWeights;
use super::thresholds::ComparisonThresholds;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".carecompare.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    fs::read_to_string(path)
}

/// Parse config from a TOML string, repairing invalid sections.
///
/// Out-of-range or all-zero weights are replaced by the defaults. In-range
/// weights that do not sum to 1.0 are rescaled.
pub fn parse_and_validate_config(contents: &str) -> Result<ComparisonConfig> {
    let mut config = toml::from_str::<ComparisonConfig>(contents)?;

    if let Err(e) = config.weights.validate_ranges() {
        log::warn!("Invalid comparison weights: {}. Using defaults.", e);
        config.weights = ComparisonWeights::default();
    } else if config.weights.total() <= 0.0 {
        log::warn!("Comparison weights are all zero. Using defaults.");
        config.weights = ComparisonWeights::default();
    } else if let Err(e) = config.weights.validate() {
        log::warn!("{}. Rescaling weights to sum to 1.0.", e);
        config.weights.normalize();
    }

    if let Err(e) = config.thresholds.validate() {
        log::warn!("Invalid comparison thresholds: {}. Using defaults.", e);
        config.thresholds = ComparisonThresholds::default();
    }

    Ok(config)
}

/// Load an explicitly requested config file. Unlike discovery, a missing or
/// malformed file here is an error.
pub fn load_config_file(path: &Path) -> Result<ComparisonConfig> {
    let contents = read_config_file(path).map_err(|e| Error::FileSystem {
        message: format!("Cannot read config {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;
    let config = parse_and_validate_config(&contents)?;
    tracing::debug!(path = %path.display(), "loaded comparison config");
    Ok(config)
}

/// Try loading config from a specific path during discovery
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ComparisonConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Failed to parse {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn load_config_from(start: PathBuf) -> ComparisonConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ComparisonConfig::default()
        })
}

pub fn load_config() -> ComparisonConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ComparisonConfig::default()
        }
    }
}

/// Write the default config to `path`, refusing to clobber an existing file
/// unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    let contents = toml::to_string_pretty(&ComparisonConfig::default())?;
    fs::write(path, contents).map_err(|e| Error::FileSystem {
        message: format!("Cannot write config {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [thresholds]
            reviews = 20
        "#})
        .unwrap();
        assert_eq!(config.thresholds.reviews, 20);
        assert_eq!(config.thresholds.rating, 0.1);
        assert_eq!(config.weights, ComparisonWeights::default());
    }

    #[test]
    fn test_invalid_weights_fall_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [weights]
            rating = 3.0
        "#})
        .unwrap();
        assert_eq!(config.weights, ComparisonWeights::default());
    }

    #[test]
    fn test_weights_off_one_are_rescaled() {
        let config = parse_and_validate_config(indoc! {r#"
            [weights]
            rating = 0.5
        "#})
        .unwrap();
        // 0.5 + 0.75 from the remaining defaults
        assert!((config.weights.total() - 1.0).abs() < 1e-9);
        assert!((config.weights.rating - 0.4).abs() < 1e-9);
        assert!((config.weights.services - 0.16).abs() < 1e-9);
        assert!(config.weights.validate().is_ok());
    }

    #[test]
    fn test_all_zero_weights_fall_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [weights]
            rating = 0.0
            travel_time = 0.0
            distance = 0.0
            services = 0.0
            specialists = 0.0
            reviews = 0.0
            beds = 0.0
        "#})
        .unwrap();
        assert_eq!(config.weights, ComparisonWeights::default());
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(parse_and_validate_config("[weights\nrating =").is_err());
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_discovery_finds_parent_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[thresholds]\nbeds = 3\n",
        )
        .unwrap();
        let nested = temp.path().join("deep").join("er");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.thresholds.beds, 3);
    }

    #[test]
    fn test_write_default_config_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        write_default_config(&path, false).unwrap();
        assert!(write_default_config(&path, false).is_err());
        write_default_config(&path, true).unwrap();

        let written = load_config_file(&path).unwrap();
        assert_eq!(written, ComparisonConfig::default());
    }
}
