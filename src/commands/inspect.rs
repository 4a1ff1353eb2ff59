use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use webreg_core::event_builder::validate;

use super::{build_parser, read_input};
use crate::config::AppConfig;

/// Print every decoded row as JSON, marking the ones that won't become events.
pub async fn run(cfg: &AppConfig, input: &Path, crop: bool) -> Result<()> {
    let text = read_input(input, crop).await?;
    let parser = build_parser(cfg, true)?;
    let records = parser.course_events(&text);

    if records.is_empty() {
        eprintln!("{}", "No rows found".yellow());
        return Ok(());
    }

    for record in &records {
        match validate(record, parser.vocabulary()) {
            Ok(()) => println!("{}", "✓ kept".green()),
            Err(rejection) => println!("{}", format!("✗ skipped ({rejection:?})").red()),
        }
        println!("{}", serde_json::to_string_pretty(record)?);
    }

    Ok(())
}
