use crate::domain::model::{RankedView, UserRecord};

/// Limit applied when a caller asks for `0` entries.
pub const DEFAULT_LIMIT: usize = 256;

/// The counters a ranking can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Commits,
    PublicContributions,
    Contributions,
}

impl Metric {
    pub fn of(self, user: &UserRecord) -> u64 {
        match self {
            Metric::Commits => user.commits_count,
            Metric::PublicContributions => user.public_contribution_count,
            Metric::Contributions => user.contribution_count,
        }
    }
}

/// Ranks a copy of `population` by `selector`, descending.
///
/// Records failing `filter` are dropped first. Ties are broken by ascending
/// login, then by input order. A `limit` of `0` caps the view at
/// [`DEFAULT_LIMIT`] entries rather than leaving it unbounded.
pub fn rank_by<S>(
    population: &[UserRecord],
    selector: S,
    filter: Option<&dyn Fn(&UserRecord) -> bool>,
    limit: usize,
) -> RankedView
where
    S: Fn(&UserRecord) -> u64,
{
    let mut ranked: RankedView = match filter {
        Some(keep) => population.iter().filter(|u| keep(u)).cloned().collect(),
        None => population.to_vec(),
    };

    ranked.sort_by(|a, b| {
        selector(b)
            .cmp(&selector(a))
            .then_with(|| a.login.cmp(&b.login))
    });

    ranked.truncate(effective_limit(limit));
    tracing::debug!(
        "Ranked {} of {} users (limit {})",
        ranked.len(),
        population.len(),
        limit
    );
    ranked
}

fn effective_limit(limit: usize) -> usize {
    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit
    }
}

/// Smallest follower count in the population, `0` when it is empty.
pub fn min_followers(population: &[UserRecord]) -> u64 {
    population
        .iter()
        .map(|u| u.follower_count)
        .min()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(login: &str, contributions: u64) -> UserRecord {
        UserRecord {
            login: login.to_string(),
            contribution_count: contributions,
            ..Default::default()
        }
    }

    fn population(n: usize) -> Vec<UserRecord> {
        (0..n)
            .map(|i| user(&format!("user{:04}", i), (i * 7 % 13) as u64))
            .collect()
    }

    #[test]
    fn test_rank_by_orders_descending() {
        let users = vec![user("a", 50), user("b", 80), user("c", 10)];
        let ranked = rank_by(&users, |u| Metric::Contributions.of(u), None, 10);

        let logins: Vec<&str> = ranked.iter().map(|u| u.login.as_str()).collect();
        assert_eq!(logins, vec!["b", "a", "c"]);
        for pair in ranked.windows(2) {
            assert!(pair[0].contribution_count >= pair[1].contribution_count);
        }
    }

    #[test]
    fn test_rank_by_length_is_min_of_limit_and_population() {
        let users = population(20);
        for limit in [1, 5, 20, 21, 300] {
            let ranked = rank_by(&users, |u| u.contribution_count, None, limit);
            assert_eq!(ranked.len(), limit.min(users.len()));
        }
        assert!(rank_by(&[], |u| u.contribution_count, None, 5).is_empty());
    }

    #[test]
    fn test_zero_limit_caps_at_default() {
        let users = population(300);
        let zero = rank_by(&users, |u| u.contribution_count, None, 0);
        let capped = rank_by(&users, |u| u.contribution_count, None, DEFAULT_LIMIT);

        assert_eq!(zero.len(), DEFAULT_LIMIT);
        assert_eq!(zero, capped);
    }

    #[test]
    fn test_rank_by_does_not_mutate_input() {
        let users = vec![user("c", 10), user("a", 50), user("b", 80)];
        let before = users.clone();
        let _ = rank_by(&users, |u| u.contribution_count, None, 2);
        assert_eq!(users, before);
    }

    #[test]
    fn test_ties_break_by_login() {
        let users = vec![user("zed", 5), user("amy", 5), user("max", 9), user("bob", 5)];
        let ranked = rank_by(&users, |u| u.contribution_count, None, 0);

        let logins: Vec<&str> = ranked.iter().map(|u| u.login.as_str()).collect();
        assert_eq!(logins, vec!["max", "amy", "bob", "zed"]);
    }

    #[test]
    fn test_filter_is_applied_before_limit() {
        let users = vec![user("a", 50), user("b", 80), user("c", 10), user("d", 70)];
        let not_b = |u: &UserRecord| u.login != "b";
        let ranked = rank_by(&users, |u| u.contribution_count, Some(&not_b), 2);

        let logins: Vec<&str> = ranked.iter().map(|u| u.login.as_str()).collect();
        assert_eq!(logins, vec!["d", "a"]);
    }

    #[test]
    fn test_metric_selects_counter() {
        let u = UserRecord {
            commits_count: 1,
            public_contribution_count: 2,
            contribution_count: 3,
            ..Default::default()
        };
        assert_eq!(Metric::Commits.of(&u), 1);
        assert_eq!(Metric::PublicContributions.of(&u), 2);
        assert_eq!(Metric::Contributions.of(&u), 3);
    }

    #[test]
    fn test_min_followers() {
        assert_eq!(min_followers(&[]), 0);

        let users = vec![
            UserRecord {
                follower_count: 5,
                ..Default::default()
            },
            UserRecord {
                follower_count: 2,
                ..Default::default()
            },
        ];
        assert_eq!(min_followers(&users), 2);
    }
}
