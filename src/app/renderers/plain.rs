use super::TOP_ORGANIZATIONS;
use crate::core::organizations::top_organizations;
use crate::core::ranking::{rank_by, Metric};
use crate::core::{Renderer, RenderOptions, SearchResults};
use crate::utils::error::Result;
use std::io::Write;

/// Two enumerated sections: users by total contributions, then their organizations.
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
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

        writeln!(writer, "USERS\n--------")?;
        for (i, user) in users.iter().enumerate() {
            writeln!(
                writer,
                "#{}: {} ({}):{} ({}) {}",
                i + 1,
                user.name,
                user.login,
                user.contribution_count,
                user.company,
                user.organizations.join(",")
            )?;
        }

        writeln!(writer, "\nORGANIZATIONS\n--------")?;
        for (i, org) in top_organizations(&users, TOP_ORGANIZATIONS).iter().enumerate() {
            writeln!(writer, "#{}: {} ({})", i + 1, org.name, org.member_count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UserRecord;

    #[test]
    fn test_plain_layout() {
        let results = SearchResults {
            users: vec![
                UserRecord {
                    name: "Ada".to_string(),
                    login: "ada".to_string(),
                    company: "@Foo".to_string(),
                    contribution_count: 50,
                    ..Default::default()
                },
                UserRecord {
                    name: "Bob".to_string(),
                    login: "bob".to_string(),
                    organizations: vec!["Foo".to_string(), "bar".to_string()],
                    contribution_count: 80,
                    ..Default::default()
                },
            ],
            total_user_count: 2,
            minimum_follower_count: 0,
        };

        let mut out = Vec::new();
        PlainRenderer
            .render(&results, &mut out, &RenderOptions::new(10))
            .unwrap();

        let expected = "USERS\n--------\n\
                        #1: Bob (bob):80 () Foo,bar\n\
                        #2: Ada (ada):50 (@Foo) \n\
                        \n\
                        ORGANIZATIONS\n--------\n\
                        #1: foo (2)\n\
                        #2: bar (1)\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
