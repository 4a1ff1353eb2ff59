mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "webreg-ics")]
#[command(about = "Turn WebReg schedule text into calendar events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Ics,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert schedule text files into one calendar
    Convert {
        /// Schedule text files ("-" reads stdin)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Quarter the schedule is for (e.g. "winter2023"); defaults to the current one
        #[arg(short, long)]
        quarter: Option<String>,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Input is full page text; cut it down to the schedule table first
        #[arg(long)]
        crop: bool,

        /// Plain locations instead of campus map links
        #[arg(long)]
        no_links: bool,
    },
    /// Show the rows read from schedule text, including ones that are skipped
    Inspect {
        input: PathBuf,

        #[arg(long)]
        crop: bool,
    },
    /// List known quarters
    Quarters,
    /// List every meeting date of each event
    Occurrences {
        input: PathBuf,

        #[arg(short, long)]
        quarter: Option<String>,

        #[arg(long)]
        crop: bool,
    },
    /// Show config path and effective settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::load()?;

    init_tracing(&cfg.log_level);

    match cli.command {
        Commands::Convert {
            inputs,
            quarter,
            output,
            format,
            crop,
            no_links,
        } => {
            let args = commands::convert::ConvertArgs {
                inputs,
                quarter,
                output,
                format,
                crop,
                no_links,
            };
            commands::convert::run(&cfg, args).await
        }
        Commands::Inspect { input, crop } => commands::inspect::run(&cfg, &input, crop).await,
        Commands::Quarters => commands::quarters::run(&cfg),
        Commands::Occurrences {
            input,
            quarter,
            crop,
        } => commands::occurrences::run(&cfg, &input, quarter.as_deref(), crop).await,
        Commands::Config => commands::config::run(&cfg),
    }
}

/// Log to stderr so stdout stays clean for calendar output.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
