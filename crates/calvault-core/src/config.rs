use std::path::PathBuf;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_CALENDAR_ID;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one subdirectory per calendar.
    pub root: PathBuf,
    /// Calendar used when a caller does not name one.
    pub default_calendar: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables and an optional
    /// `config.toml` in the working directory.
    ///
    /// Environment variables use the `CALVAULT_` prefix and `__` as the section
    /// separator, e.g. `CALVAULT_STORAGE__ROOT`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(config::File::with_name("config.toml").required(false))
    }

    /// ## Summary
    /// Loads configuration using `file` as the file-based source.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_from<S>(file: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        Ok(Config::builder()
            .set_default("storage.root", "data/calendars")?
            .set_default("storage.default_calendar", DEFAULT_CALENDAR_ID)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(file)
            // Env overrides
            .add_source(
                config::Environment::with_prefix("CALVAULT")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from the `.env` file, environment variables and
/// `config.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(root = %settings.storage.root.display(), "Storage settings resolved");

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toml_source(contents: &str) -> config::File<config::FileSourceString, config::FileFormat> {
        config::File::from_str(contents, config::FileFormat::Toml)
    }

    #[test_log::test]
    fn test_defaults_apply_without_file() {
        let settings = Settings::load_from(toml_source("")).unwrap();

        assert_eq!(settings.storage.default_calendar, DEFAULT_CALENDAR_ID);
        assert!(!settings.logging.level.is_empty());
    }

    #[test_log::test]
    fn test_file_values_override_defaults() {
        let settings = Settings::load_from(toml_source(
            "[storage]\nroot = \"/srv/calendars\"\ndefault_calendar = \"team\"\n\n[logging]\nlevel = \"warn\"\n",
        ))
        .unwrap();

        assert_eq!(settings.storage.root, PathBuf::from("/srv/calendars"));
        assert_eq!(settings.storage.default_calendar, "team");
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn test_settings_clone() {
        let settings = Settings {
            storage: StorageConfig {
                root: PathBuf::from("/tmp/cal"),
                default_calendar: "me".to_string(),
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        };

        let cloned = settings.clone();
        assert_eq!(cloned.storage.root, settings.storage.root);
        assert!(format!("{cloned:?}").contains("StorageConfig"));
    }
}
