pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use self::config::cli::CliConfig;

pub use self::adapters::{input::load_results, storage::LocalStorage};
pub use self::app::renderers::OutputFormat;
pub use self::config::{ReportConfig, TomlConfig};
pub use self::core::{
    engine::ReportEngine,
    organizations::top_organizations,
    ranking::{min_followers, rank_by, Metric},
};
pub use self::domain::model::{
    OrganizationTally, Provenance, RankedView, RenderOptions, SearchResults, UserRecord,
};
pub use self::utils::error::{ReportError, Result};
