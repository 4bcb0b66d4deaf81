use crate::core::ranking::min_followers;
use crate::domain::model::{SearchResults, UserRecord};
use crate::utils::error::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Document {
        #[serde(default)]
        users: Vec<UserRecord>,
        total_user_count: Option<u64>,
        minimum_follower_count: Option<u64>,
    },
    Users(Vec<UserRecord>),
}

/// Reads collected users from a JSON file.
pub fn load_results<P: AsRef<Path>>(path: P) -> Result<SearchResults> {
    let content = std::fs::read_to_string(&path)?;
    parse_results(&content)
}

/// Parses either `{"users": [...], ...}` or a bare user array.
///
/// A missing total count falls back to the number of users, a missing
/// follower threshold to the smallest follower count among them.
pub fn parse_results(content: &str) -> Result<SearchResults> {
    let (users, total, minimum) = match serde_json::from_str::<InputDocument>(content)? {
        InputDocument::Document {
            users,
            total_user_count,
            minimum_follower_count,
        } => (users, total_user_count, minimum_follower_count),
        InputDocument::Users(users) => (users, None, None),
    };

    let results = SearchResults {
        total_user_count: total.unwrap_or(users.len() as u64),
        minimum_follower_count: minimum.unwrap_or_else(|| min_followers(&users)),
        users,
    };
    tracing::debug!(
        "Loaded {} users (total observed {}, min followers {})",
        results.users.len(),
        results.total_user_count,
        results.minimum_follower_count
    );
    Ok(results)
}
