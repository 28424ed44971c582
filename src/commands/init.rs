use crate::config::{default_settings_toml, SETTINGS_FILE};
use anyhow::Result;
use std::path::PathBuf;

pub fn init_settings(force: bool) -> Result<()> {
    let config_path = PathBuf::from(SETTINGS_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(&config_path, default_settings_toml())?;
    println!("Created {SETTINGS_FILE} configuration file");

    Ok(())
}
