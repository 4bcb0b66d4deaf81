#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use self::toml_config::TomlConfig;

use crate::app::renderers::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};

/// Fully resolved settings for one report run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    pub input_path: String,
    pub output_path: Option<String>,
    pub format: OutputFormat,
    pub amount: usize,
    pub preset_title: Option<String>,
    pub preset_checksum: Option<String>,
}

impl ReportConfig {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            input_path: config.report.input_path.clone().unwrap_or_default(),
            output_path: config.report.output_path.clone(),
            format: config.report.format.unwrap_or_default(),
            amount: config.report.amount.unwrap_or(0),
            preset_title: config.preset_title().map(str::to_string),
            preset_checksum: config.preset_checksum().map(str::to_string),
        }
    }
}

impl ConfigProvider for ReportConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn amount(&self) -> usize {
        self.amount
    }

    fn preset_title(&self) -> Option<&str> {
        self.preset_title.as_deref()
    }

    fn preset_checksum(&self) -> Option<&str> {
        self.preset_checksum.as_deref()
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        if self.input_path.is_empty() {
            return Err(ReportError::MissingConfigError {
                field: "input".to_string(),
            });
        }
        validate_path("input", &self.input_path)?;
        if let Some(output) = &self.output_path {
            validate_path("output", output)?;
        }

        if let Some(title) = &self.preset_title {
            validate_non_empty_string("preset.title", title)?;
        }
        if let Some(checksum) = &self.preset_checksum {
            validate_non_empty_string("preset.checksum", checksum)?;
        }
        if self.preset_title.is_some() != self.preset_checksum.is_some() {
            tracing::warn!("Only one of preset title/checksum given; neither will be emitted");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ReportConfig {
        ReportConfig {
            input_path: "users.json".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_defaults() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut c = config();
        c.input_path.clear();
        assert!(matches!(
            c.validate(),
            Err(ReportError::MissingConfigError { .. })
        ));


        let mut c = config();
        c.preset_title = Some(" ".to_string());
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_any_amount_is_accepted() {
        for amount in [0, 256, 50_000, usize::MAX] {
            let mut c = config();
            c.amount = amount;
            assert!(c.validate().is_ok(), "amount {}", amount);
        }
    }

    #[test]
    fn test_from_toml_defaults() {
        let c = ReportConfig::from_toml(&TomlConfig::default());
        assert_eq!(c.format, OutputFormat::Plain);
        assert_eq!(c.amount, 0);
        assert!(c.output_path.is_none());
    }

    #[test]
    fn test_provider_exposes_preset() {
        let mut c = config();
        c.preset_title = Some("Austria".to_string());
        c.preset_checksum = Some("42".to_string());

        assert_eq!(ConfigProvider::preset_title(&c), Some("Austria"));
        assert_eq!(ConfigProvider::preset_checksum(&c), Some("42"));
        assert_eq!(ConfigProvider::input_path(&c), "users.json");
    }
}
