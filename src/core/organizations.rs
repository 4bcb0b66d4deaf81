//! Organization affiliation inference and tallying.
//!
//! Affiliations come from a user's declared organizations plus, when the
//! `company` field is exactly `@handle`, the inferred `handle`. Dedup at the
//! inference step is case-sensitive; tallying is case-insensitive and counts
//! each user at most once per lowercase name.

use crate::domain::model::{OrganizationTally, UserRecord};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

static COMPANY_LOGIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@([a-zA-Z0-9]+)$").expect("company login pattern"));

/// Organization login inferred from a `company` value such as `" @acme "`.
pub fn company_login(company: &str) -> Option<&str> {
    COMPANY_LOGIN
        .captures(company.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Raw affiliation set of one user, declared organizations first.
pub fn affiliations(user: &UserRecord) -> Vec<&str> {
    let mut orgs: Vec<&str> = user.organizations.iter().map(String::as_str).collect();
    if let Some(login) = company_login(&user.company) {
        if !orgs.contains(&login) {
            orgs.push(login);
        }
    }
    orgs
}

/// Top `count` organizations across `population`, by member count descending.
///
/// Equal counts are ordered by ascending normalized name. Callers choose the
/// scope; renderers pass the members of one ranked view.
pub fn top_organizations(population: &[UserRecord], count: usize) -> Vec<OrganizationTally> {
    let mut tallies: BTreeMap<String, usize> = BTreeMap::new();

    for user in population {
        let normalized: BTreeSet<String> = affiliations(user)
            .into_iter()
            .map(str::to_lowercase)
            .collect();
        for org in normalized {
            *tallies.entry(org).or_insert(0) += 1;
        }
    }

    tracing::debug!(
        "Tallied {} organizations over {} users",
        tallies.len(),
        population.len()
    );

    let mut orgs: Vec<OrganizationTally> = tallies
        .into_iter()
        .map(|(name, member_count)| OrganizationTally { name, member_count })
        .collect();
    // 穩定排序：同數量時保留名稱的字母順序
    orgs.sort_by(|a, b| b.member_count.cmp(&a.member_count));
    orgs.truncate(count);
    orgs
}
