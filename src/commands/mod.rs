//! CLI command implementations.
//!
//! - **compare**: compare two facility records and render the result
//! - **init**: write a default `.carecompare.toml`
//! - **show-config**: print the thresholds and weights in effect

pub mod compare;
pub mod init;

use anyhow::Result;
use std::path::Path;

pub fn show_config(path: Option<&Path>) -> Result<()> {
    let config = compare::resolve_config(path)?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
