use crate::app::renderers::OutputFormat;
use crate::domain::model::{RenderOptions, SearchResults};
use crate::utils::error::Result;
use std::io::Write;

/// Serializes ranked views of a search result into one output encoding.
pub trait Renderer {
    fn render(
        &self,
        results: &SearchResults,
        writer: &mut dyn Write,
        options: &RenderOptions,
    ) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn format(&self) -> OutputFormat;
    fn amount(&self) -> usize;
    fn preset_title(&self) -> Option<&str>;
    fn preset_checksum(&self) -> Option<&str>;
}
