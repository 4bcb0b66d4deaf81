use super::{ReportConfig, TomlConfig};
use crate::app::renderers::OutputFormat;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "top-contributors")]
#[command(about = "Rank users by contributions and tally their organizations")]
pub struct CliConfig {
    /// JSON document with the collected users
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// plain (txt), csv or yaml (yml)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Ranking size; 0 selects the default cap of 256
    #[arg(short, long)]
    pub amount: Option<usize>,

    #[arg(long)]
    pub preset_title: Option<String>,

    #[arg(long)]
    pub preset_checksum: Option<String>,

    /// Path to a TOML report configuration
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads the TOML file, if any, and applies command line overrides on top.
    pub fn resolve(&self) -> Result<ReportConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let mut resolved = ReportConfig::from_toml(&file);
        if let Some(input) = &self.input {
            resolved.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            resolved.output_path = Some(output.clone());
        }
        if let Some(format) = self.format {
            resolved.format = format;
        }
        if let Some(amount) = self.amount {
            resolved.amount = amount;
        }
        if let Some(title) = &self.preset_title {
            resolved.preset_title = Some(title.clone());
        }
        if let Some(checksum) = &self.preset_checksum {
            resolved.preset_checksum = Some(checksum.clone());
        }
        Ok(resolved)
    }
}
