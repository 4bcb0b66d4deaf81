use crate::core::ranking::{rank_by, Metric};
use crate::core::{Renderer, RenderOptions, SearchResults};
use crate::utils::error::Result;
use std::io::Write;

pub const HEADER: [&str; 6] = ["rank", "name", "login", "contributions", "company", "organizations"];

/// One row per user ranked by total contributions; no organization section.
pub struct CsvRenderer;

impl Renderer for CsvRenderer {
    fn render(
        &self,
        results: &SearchResults,
        writer: &mut dyn Write,
        options: &RenderOptions,
    ) -> Result<()> {
        let users = rank_by(
            &results.users,
            |u| Metric::Contributions.of(u),
            None,
            options.amount,
        );

        // 先寫入記憶體，sink 只收到一次寫入
        let mut w = csv::Writer::from_writer(Vec::new());
        w.write_record(HEADER)?;
        for (i, user) in users.iter().enumerate() {
            let rank = (i + 1).to_string();
            let contributions = user.contribution_count.to_string();
            let orgs = user.organizations.join(",");
            w.write_record([
                rank.as_str(),
                user.name.as_str(),
                user.login.as_str(),
                contributions.as_str(),
                user.company.as_str(),
                orgs.as_str(),
            ])?;
        }
        let bytes = w.into_inner().map_err(|e| e.into_error())?;
        writer.write_all(&bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UserRecord;

    #[test]
    fn test_csv_rows_and_quoting() {
        let results = SearchResults {
            users: vec![
                UserRecord {
                    name: "Ada, Countess".to_string(),
                    login: "ada".to_string(),
                    organizations: vec!["foo".to_string(), "bar".to_string()],
                    contribution_count: 5,
                    ..Default::default()
                },
                UserRecord {
                    name: "Bob".to_string(),
                    login: "bob".to_string(),
                    company: "Bob Inc".to_string(),
                    contribution_count: 9,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let mut out = Vec::new();
        CsvRenderer
            .render(&results, &mut out, &RenderOptions::new(0))
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "rank,name,login,contributions,company,organizations",
                "1,Bob,bob,9,Bob Inc,",
                "2,\"Ada, Countess\",ada,5,,\"foo,bar\"",
            ]
        );
    }
}
