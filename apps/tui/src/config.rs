use std::env;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use dotenv::dotenv;

use crate::calendar::{CalendarMonth, ParseMonthError};
use crate::content::{ContentSource, FileSource, SampleSource, SanityClient, SanityConfig};

pub const DEFAULT_API_VERSION: &str = "2024-01-01";
pub const DEFAULT_LOG_FILE: &str = "apple-a-day.log";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Month(#[from] ParseMonthError),
    #[error("invalid {key} {value:?}, expected YYYY-MM-DD")]
    Date { key: &'static str, value: String },
    #[error("invalid {key} {value:?}, expected true or false")]
    Flag { key: &'static str, value: String },
    #[error("could not create the Sanity client: {0}")]
    Client(#[from] crate::content::ContentError),
}

/// Where apples are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    Sample,
    File(PathBuf),
    Sanity(SanityConfig),
}

impl SourceSelection {
    pub fn into_source(self) -> Result<Box<dyn ContentSource>, ConfigError> {
        Ok(match self {
            Self::Sample => Box::new(SampleSource),
            Self::File(path) => Box::new(FileSource::new(path)),
            Self::Sanity(config) => Box::new(SanityClient::new(config)?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source: SourceSelection,
    /// True when nothing picked a source and the sample apples stood in.
    pub source_defaulted: bool,
    pub calendar_month: CalendarMonth,
    pub today: NaiveDate,
    pub log_file: PathBuf,
    pub debug: bool,
}

/// Loads `.env`, then reads the configuration from the environment.
pub fn init_app_config() -> Result<AppConfig, ConfigError> {
    dotenv().ok();
    AppConfig::from_lookup(|key| env::var(key).ok(), Local::now().date_naive())
}

impl AppConfig {
    /// Builds the configuration from `lookup`, which maps variable names to
    /// values. Blank values count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        today: NaiveDate,
    ) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut source_defaulted = false;
        let source = if flag(&var, "APPLE_SAMPLE")? {
            SourceSelection::Sample
        } else if let Some(path) = var("APPLE_FILE") {
            SourceSelection::File(PathBuf::from(path))
        } else if let (Some(project_id), Some(dataset)) = (
            var("SANITY_PROJECT_ID").or_else(|| var("NEXT_PUBLIC_SANITY_PROJECT_ID")),
            var("SANITY_DATASET").or_else(|| var("NEXT_PUBLIC_SANITY_DATASET")),
        ) {
            SourceSelection::Sanity(SanityConfig {
                project_id,
                dataset,
                api_version: var("SANITY_API_VERSION")
                    .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
                use_cdn: flag(&var, "SANITY_USE_CDN")?,
                token: var("SANITY_TOKEN"),
            })
        } else {
            source_defaulted = true;
            SourceSelection::Sample
        };

        let calendar_month = var("CALENDAR_MONTH")
            .map(|value| value.parse::<CalendarMonth>())
            .transpose()?
            .unwrap_or_default();

        let today = match var("APPLE_TODAY") {
            Some(value) => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
                ConfigError::Date {
                    key: "APPLE_TODAY",
                    value,
                }
            })?,
            None => today,
        };

        let log_file = var("APPLE_LOG_FILE").map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from);

        Ok(Self {
            source,
            source_defaulted,
            calendar_month,
            today,
            log_file,
            debug: flag(&var, "DEBUG")?,
        })
    }
}

fn flag(var: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<bool, ConfigError> {
    let Some(value) = var(key) else {
        return Ok(false);
    };
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Flag { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned(), today())
    }

    #[test]
    fn defaults_to_sample_apples_in_january_2026() {
        let config = load(&[]).unwrap();
        assert_eq!(config.source, SourceSelection::Sample);
        assert!(config.source_defaulted);
        assert_eq!(config.calendar_month, CalendarMonth::new(2026, 1).unwrap());
        assert_eq!(config.today, today());
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert!(!config.debug);
    }

    #[test]
    fn sanity_settings_are_read() {
        let config = load(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_DATASET", "production"),
            ("SANITY_USE_CDN", "true"),
        ])
        .unwrap();

        assert_eq!(
            config.source,
            SourceSelection::Sanity(SanityConfig {
                project_id: "abc123".to_string(),
                dataset: "production".to_string(),
                api_version: DEFAULT_API_VERSION.to_string(),
                use_cdn: true,
                token: None,
            })
        );
    }

    #[test]
    fn next_public_names_are_accepted() {
        let config = load(&[
            ("NEXT_PUBLIC_SANITY_PROJECT_ID", "abc123"),
            ("NEXT_PUBLIC_SANITY_DATASET", "staging"),
        ])
        .unwrap();
        assert!(matches!(config.source, SourceSelection::Sanity(ref s) if s.dataset == "staging"));
    }

    #[test]
    fn file_and_sample_take_precedence() {
        let config = load(&[("APPLE_FILE", "apples.json"), ("SANITY_PROJECT_ID", "p"), ("SANITY_DATASET", "d")])
            .unwrap();
        assert_eq!(config.source, SourceSelection::File(PathBuf::from("apples.json")));

        let config = load(&[("APPLE_SAMPLE", "1"), ("APPLE_FILE", "apples.json")]).unwrap();
        assert_eq!(config.source, SourceSelection::Sample);
        assert!(!config.source_defaulted);
    }

    #[test]
    fn month_and_today_overrides() {
        let config = load(&[("CALENDAR_MONTH", "2024-02"), ("APPLE_TODAY", "2024-02-29")]).unwrap();
        assert_eq!(config.calendar_month, CalendarMonth::new(2024, 2).unwrap());
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(load(&[("CALENDAR_MONTH", "2024")]), Err(ConfigError::Month(_))));
        assert!(matches!(load(&[("APPLE_TODAY", "tomorrow")]), Err(ConfigError::Date { .. })));
        assert!(matches!(load(&[("DEBUG", "maybe")]), Err(ConfigError::Flag { key: "DEBUG", .. })));
    }
}
