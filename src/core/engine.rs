use crate::adapters::storage::LocalStorage;
use crate::app::renderers::OutputFormat;
use crate::core::{ConfigProvider, Renderer, RenderOptions, SearchResults};
use crate::domain::model::Provenance;
use crate::utils::error::Result;
use std::io::Write;

/// Runs one renderer against one sink.
pub struct ReportEngine {
    renderer: Box<dyn Renderer>,
    options: RenderOptions,
}

impl ReportEngine {
    pub fn new(renderer: Box<dyn Renderer>, options: RenderOptions) -> Self {
        Self { renderer, options }
    }

    pub fn for_format(format: OutputFormat, options: RenderOptions) -> Self {
        tracing::debug!("Using {} renderer", format);
        Self::new(format.renderer(), options)
    }

    /// Engine for the format, limit and preset named by `config`, stamped now.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let provenance = Provenance::now().with_preset(
            config.preset_title().map(str::to_string),
            config.preset_checksum().map(str::to_string),
        );
        let options = RenderOptions {
            amount: config.amount(),
            provenance,
        };
        Self::for_format(config.format(), options)
    }

    /// Renders into `writer` and flushes it. The first write error aborts.
    pub fn render_to<W: Write>(&self, results: &SearchResults, writer: &mut W) -> Result<()> {
        if results.users.is_empty() {
            tracing::warn!("No users to rank; output will contain headers only");
        }
        self.renderer.render(results, writer, &self.options)?;
        writer.flush()?;
        Ok(())
    }

    /// Renders into the sink described by `storage`, returning where it went.
    pub fn run(&self, results: &SearchResults, storage: &LocalStorage) -> Result<String> {
        tracing::info!(
            "Rendering {} users (amount {})",
            results.users.len(),
            self.options.amount
        );
        let mut sink = storage.open()?;
        self.render_to(results, &mut sink)?;
        Ok(storage.describe())
    }
}
