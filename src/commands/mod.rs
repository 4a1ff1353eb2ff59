pub mod config;
pub mod convert;
pub mod inspect;
pub mod occurrences;
pub mod quarters;

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use webreg_core::preprocess::{crop_schedule, normalize_whitespace};
use webreg_core::{QuarterCatalog, ScheduleParser};

use crate::config::AppConfig;

/// Read schedule text from a file, or from stdin when the path is "-".
pub async fn read_input(path: &Path, crop: bool) -> Result<String> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read stdin")?;
        text
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    if crop {
        let normalized = normalize_whitespace(&text);
        return Ok(crop_schedule(&normalized).to_string());
    }

    Ok(text)
}

pub fn build_parser(cfg: &AppConfig, location_links: bool) -> Result<ScheduleParser> {
    let mut options = cfg.parse_options()?;
    options.location_links &= location_links;

    Ok(ScheduleParser::new(cfg.vocabulary(), options)?)
}

/// The requested quarter key, or the catalog's current one.
pub fn resolve_quarter(catalog: &QuarterCatalog, requested: Option<&str>) -> Result<String> {
    if let Some(key) = requested {
        catalog.get(key)?;
        return Ok(key.to_lowercase());
    }

    let today = chrono::Local::now().date_naive();
    let key = catalog
        .default_key(today)
        .context("No quarters configured; add one under [quarters] in config.toml")?;

    tracing::info!(quarter = key, "Using default quarter");
    Ok(key.to_string())
}
