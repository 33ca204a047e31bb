use crate::config::{write_default_config, CONFIG_FILE_NAME};
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    write_default_config(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
