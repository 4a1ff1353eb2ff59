use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use webreg_core::ics::generate_ics;
use webreg_core::quarter::label;
use webreg_core::{CalendarEventDescriptor, Quarter};

use super::{build_parser, read_input, resolve_quarter};
use crate::OutputFormat;
use crate::config::AppConfig;

pub struct ConvertArgs {
    pub inputs: Vec<PathBuf>,
    pub quarter: Option<String>,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub crop: bool,
    pub no_links: bool,
}

pub async fn run(cfg: &AppConfig, args: ConvertArgs) -> Result<()> {
    let catalog = cfg.catalog()?;
    let key = resolve_quarter(&catalog, args.quarter.as_deref())?;
    let quarter: Quarter = catalog.get(&key)?.clone();
    let parser = Arc::new(build_parser(cfg, !args.no_links)?);

    // Parse every input on the blocking pool, keeping input order
    let mut handles = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        let text = read_input(path, args.crop).await?;
        let parser = Arc::clone(&parser);
        let quarter = quarter.clone();
        let key = key.clone();

        handles.push((
            path.clone(),
            tokio::task::spawn_blocking(move || parser.parse(&text, &key, &quarter)),
        ));
    }

    let mut events: Vec<CalendarEventDescriptor> = Vec::new();
    for (path, handle) in handles {
        let parsed = handle
            .await
            .context("Parser task failed")?
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        tracing::info!(input = %path.display(), events = parsed.len(), "Parsed input");
        events.extend(parsed);
    }

    if events.is_empty() {
        eprintln!("{}", "No events found".yellow());
        return Ok(());
    }

    let contents = match args.format {
        OutputFormat::Ics => {
            let name = cfg.calendar_name.clone().unwrap_or_else(|| label(&key));
            generate_ics(&events, &name)?
        }
        OutputFormat::Json => serde_json::to_string_pretty(&events)?,
    };

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, contents)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "Wrote {} events for {} to {}",
                events.len(),
                label(&key).bold(),
                path.display()
            );
        }
        None => print!("{contents}"),
    }

    Ok(())
}
