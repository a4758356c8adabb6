//! Application configuration. Console and logging options.

use crate::domain::DomainError;
use serde::Deserialize;

/// Tracing filter used when neither RUST_LOG nor EDU_CATALOG_LOG_LEVEL is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// ANSI emphasis on status lines. Read from EDU_CATALOG_COLOR.
    #[serde(default)]
    pub color: Option<bool>,

    /// Tracing filter directive (e.g. "info", "edu_catalog=debug"). Read from EDU_CATALOG_LOG_LEVEL.
    #[serde(default)]
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Environment (EDU_CATALOG_*), then the file named by EDU_CATALOG_CONFIG if set.
    pub fn load() -> Result<Self, DomainError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("EDU_CATALOG"));
        if let Ok(path) = std::env::var("EDU_CATALOG_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        Self::from_builder(c)
    }

    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, DomainError> {
        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| DomainError::Config(e.to_string()))
    }

    /// Returns whether status lines are colored. Defaults to false.
    pub fn color_or_default(&self) -> bool {
        self.color.unwrap_or(false)
    }

    /// Returns the tracing filter directive. Defaults to DEFAULT_LOG_LEVEL.
    pub fn log_level_or_default(&self) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert!(!cfg.color_or_default());
        assert_eq!(cfg.log_level_or_default(), "warn");
    }

    #[test]
    fn test_from_toml() {
        let builder = Config::builder().add_source(File::from_str(
            "color = true\nlog_level = \"edu_catalog=debug\"",
            FileFormat::Toml,
        ));
        let cfg = AppConfig::from_builder(builder).unwrap();
        assert!(cfg.color_or_default());
        assert_eq!(cfg.log_level_or_default(), "edu_catalog=debug");
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let cfg = AppConfig::from_builder(Config::builder()).unwrap();
        assert!(cfg.color.is_none());
        assert!(cfg.log_level.is_none());
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let builder = Config::builder()
            .add_source(File::from_str("color = \"sometimes\"", FileFormat::Toml));
        let err = AppConfig::from_builder(builder).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }
}
