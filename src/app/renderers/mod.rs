//! Output encodings for ranked views.
//!
//! Renderers only consume [`rank_by`](crate::core::ranking::rank_by) and
//! [`top_organizations`](crate::core::organizations::top_organizations); none
//! of them orders or tallies on its own.

pub mod csv;
pub mod plain;
pub mod yaml;

use crate::domain::ports::Renderer;
use crate::utils::error::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use self::csv::CsvRenderer;
pub use self::plain::PlainRenderer;
pub use self::yaml::YamlRenderer;

/// Size of every organization ranking.
pub const TOP_ORGANIZATIONS: usize = 10;

/// Parsed through [`FromStr`] on the command line and in TOML alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    #[default]
    Plain,
    Csv,
    Yaml,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Plain => Box::new(PlainRenderer),
            OutputFormat::Csv => Box::new(CsvRenderer),
            OutputFormat::Yaml => Box::new(YamlRenderer),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Csv => "csv",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" | "txt" => Ok(OutputFormat::Plain),
            "csv" => Ok(OutputFormat::Csv),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(ReportError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: plain, csv, yaml".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = ReportError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
