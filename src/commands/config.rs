use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::config::AppConfig;

pub fn run(cfg: &AppConfig) -> Result<()> {
    let config_path = AppConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!();
    println!("{}", "Effective settings".bold());

    let settings = toml::to_string_pretty(cfg).context("Failed to serialize settings")?;
    print!("{settings}");

    Ok(())
}
