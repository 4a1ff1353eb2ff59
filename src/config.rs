//! User configuration at ~/.config/webreg-ics/config.toml

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ::config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::{Deserialize, Serialize};
use webreg_core::event_builder::DEFAULT_MAP_URL;
use webreg_core::quarter::parse_timezone;
use webreg_core::{Correction, ParseOptions, Quarter, QuarterCatalog, Vocabulary};

/// Environment variables override the file: `WEBREG_ICS_LOG_LEVEL=debug`.
const ENV_PREFIX: &str = "WEBREG_ICS";

const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_location_links() -> bool {
    true
}

fn default_map_url() -> String {
    DEFAULT_MAP_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tracing filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Timezone the quarter dates are in
    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_location_links")]
    pub location_links: bool,

    #[serde(default = "default_map_url")]
    pub map_url: String,

    /// X-WR-CALNAME of generated calendars (defaults to the quarter label)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_name: Option<String>,

    /// Extra or overriding quarters, keyed like `fall2023`
    #[serde(default)]
    pub quarters: BTreeMap<String, Quarter>,

    /// OCR fixes applied after the built-in ones
    #[serde(default)]
    pub corrections: Vec<Correction>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: default_log_level(),
            timezone: default_timezone(),
            location_links: default_location_links(),
            map_url: default_map_url(),
            calendar_name: None,
            quarters: BTreeMap::new(),
            corrections: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("webreg-ics");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (created on first run) with environment overrides.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::from_builder(Config::builder().add_source(File::from(config_path).required(false)))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Failed to parse configuration")
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let contents = indoc::formatdoc! {r#"
                # webreg-ics configuration

                # Log level when RUST_LOG is unset (error, warn, info, debug, trace):
                # log_level = "{log_level}"

                # Timezone of the quarter dates:
                # timezone = "{timezone}"

                # Link event locations to the campus map:
                # location_links = true
                # map_url = "{map_url}"

                # Calendar name shown by calendar apps:
                # calendar_name = "Winter 2023"

                # Quarters beyond the built-in ones:
                # [quarters.fall2023]
                # start = "2023-09-28"
                # end = "2023-12-16"
                # excluded_dates = ["20231110", "20231123", "20231124"]

                # Extra OCR fixes:
                # [[corrections]]
                # from = " AOO "
                # to = " A00 "
            "#,
            log_level = DEFAULT_LOG_LEVEL,
            timezone = DEFAULT_TIMEZONE,
            map_url = DEFAULT_MAP_URL,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create config directory {}", parent.display()))?;
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Could not write config file {}", path.display()))?;

        Ok(())
    }

    /// Built-in quarters overlaid with the configured ones.
    pub fn catalog(&self) -> Result<QuarterCatalog> {
        let timezone = parse_timezone(&self.timezone)?;

        let catalog = QuarterCatalog::with_quarters(timezone, self.quarters.clone());
        for (key, quarter) in self.quarters.iter() {
            quarter.validate(key)?;
        }

        Ok(catalog)
    }

    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::default().with_corrections(self.corrections.clone())
    }

    pub fn parse_options(&self) -> Result<ParseOptions> {
        Ok(ParseOptions {
            timezone: parse_timezone(&self.timezone)?,
            location_links: self.location_links,
            map_url: self.map_url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::FileFormat;

    fn from_toml(toml: &str) -> AppConfig {
        AppConfig::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
            .unwrap()
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = from_toml("");

        assert_eq!(cfg.log_level, "warn");
        assert_eq!(cfg.timezone, "America/Los_Angeles");
        assert!(cfg.location_links);
        assert_eq!(cfg.map_url, DEFAULT_MAP_URL);
        assert!(cfg.quarters.is_empty());
    }

    #[test]
    fn test_quarters_and_corrections() {
        let cfg = from_toml(
            r#"
            location_links = false

            [quarters.fall2023]
            start = "2023-09-28"
            end = "2023-12-16"
            excluded_dates = ["20231110", "2023-11-23"]

            [[corrections]]
            from = " AOO "
            to = " A00 "
            "#,
        );

        assert!(!cfg.location_links);
        assert!(!cfg.parse_options().unwrap().location_links);

        let catalog = cfg.catalog().unwrap();
        let fall = catalog.get("fall2023").unwrap();
        assert_eq!(fall.excluded_dates.len(), 2);
        assert!(catalog.get("winter2023").is_ok(), "Built-in quarters are kept");

        let vocabulary = cfg.vocabulary();
        assert_eq!(vocabulary.corrections.last(), Some(&Correction::new(" AOO ", " A00 ")));
    }

    #[test]
    fn test_invalid_configured_quarter_is_rejected() {
        let cfg = from_toml(
            r#"
            [quarters.broken]
            start = "2023-12-16"
            end = "2023-09-28"
            "#,
        );

        assert!(cfg.catalog().is_err());
    }

    #[test]
    fn test_bad_timezone_is_rejected() {
        let cfg = from_toml(r#"timezone = "Mars/Olympus_Mons""#);

        assert!(cfg.catalog().is_err());
        assert!(cfg.parse_options().is_err());
    }

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webreg-ics").join("config.toml");

        AppConfig::create_default_config(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();

        assert!(contents.starts_with("# webreg-ics configuration"), "{contents}");
        let cfg = from_toml(&contents);
        assert_eq!(cfg.log_level, "warn");
        assert!(cfg.calendar_name.is_none());
    }
}
