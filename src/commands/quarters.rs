use anyhow::Result;
use owo_colors::OwoColorize;
use webreg_core::quarter::label;

use crate::config::AppConfig;

pub fn run(cfg: &AppConfig) -> Result<()> {
    let catalog = cfg.catalog()?;
    let today = chrono::Local::now().date_naive();
    let default_key = catalog.default_key(today);

    println!("{} ({})", "Quarters".bold(), catalog.timezone());

    for (key, quarter) in catalog.sorted() {
        let marker = if Some(key) == default_key { "*" } else { " " };
        println!(
            "{} {:<24} {}  {} to {}  {} excluded",
            marker.green(),
            key,
            label(key).dimmed(),
            quarter.start,
            quarter.end,
            quarter.excluded_dates.len()
        );
    }

    Ok(())
}
