use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as received from the search source. Read-only to the ranking core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    pub name: String,
    pub login: String,
    #[serde(alias = "avatarURL")]
    pub avatar_url: String,
    pub company: String,
    pub organizations: Vec<String>,
    pub commits_count: u64,
    pub public_contribution_count: u64,
    /// Includes private activity; not checked against `public_contribution_count`.
    pub contribution_count: u64,
    pub follower_count: u64,
}

/// Number of distinct users affiliated with one normalized organization login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationTally {
    pub name: String,
    pub member_count: usize,
}

/// Users ordered by one metric, descending.
pub type RankedView = Vec<UserRecord>;

/// The already-materialized output of a search run.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub users: Vec<UserRecord>,
    pub total_user_count: u64,
    pub minimum_follower_count: u64,
}

/// Contextual values threaded through to the structured renderer.
#[derive(Debug, Clone)]
pub struct Provenance {
    pub generated: DateTime<Utc>,
    pub preset_title: Option<String>,
    pub preset_checksum: Option<String>,
}

impl Provenance {
    pub fn now() -> Self {
        Self {
            generated: Utc::now(),
            preset_title: None,
            preset_checksum: None,
        }
    }

    pub fn with_preset(mut self, title: Option<String>, checksum: Option<String>) -> Self {
        self.preset_title = title;
        self.preset_checksum = checksum;
        self
    }

    /// Title and checksum, only when both are present and non-empty.
    pub fn preset(&self) -> Option<(&str, &str)> {
        match (self.preset_title.as_deref(), self.preset_checksum.as_deref()) {
            (Some(title), Some(checksum)) if !title.is_empty() && !checksum.is_empty() => {
                Some((title, checksum))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Ranking limit; `0` means the default cap.
    pub amount: usize,
    pub provenance: Provenance,
}

impl RenderOptions {
    pub fn new(amount: usize) -> Self {
        Self {
            amount,
            provenance: Provenance::now(),
        }
    }
}
