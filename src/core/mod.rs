pub mod engine;
pub mod organizations;
pub mod ranking;

pub use crate::domain::model::{OrganizationTally, RankedView, RenderOptions, SearchResults, UserRecord};
pub use crate::domain::ports::{ConfigProvider, Renderer};
pub use crate::utils::error::Result;
