use super::TOP_ORGANIZATIONS;
use crate::core::organizations::top_organizations;
use crate::core::ranking::{rank_by, Metric};
use crate::core::{OrganizationTally, Renderer, RenderOptions, SearchResults, UserRecord};
use crate::utils::error::Result;
use crate::utils::quote::quote_ascii;
use chrono::SecondsFormat;
use std::io::Write;

/// Three rankings (commits, public contributions, total contributions), an
/// organization ranking scoped to each, and provenance scalars.
pub struct YamlRenderer;

impl YamlRenderer {
    fn write_users(writer: &mut dyn Write, users: &[UserRecord], metric: Metric) -> Result<()> {
        for (i, user) in users.iter().enumerate() {
            write!(
                writer,
                "\n  - rank: {}\n    name: {}\n    login: {}\n    avatarUrl: {}\n    contributions: {}\n    company: {}\n    organizations: {}\n",
                i + 1,
                quote_ascii(&user.name),
                quote_ascii(&user.login),
                user.avatar_url,
                metric.of(user),
                quote_ascii(&user.company),
                quote_ascii(&user.organizations.join(","))
            )?;
        }
        Ok(())
    }

    fn write_organizations(writer: &mut dyn Write, orgs: &[OrganizationTally]) -> Result<()> {
        for (i, org) in orgs.iter().enumerate() {
            write!(
                writer,
                "\n  - rank: {}\n    name: {}\n    membercount: {}\n",
                i + 1,
                quote_ascii(&org.name),
                org.member_count
            )?;
        }
        Ok(())
    }
}

impl Renderer for YamlRenderer {
    fn render(
        &self,
        results: &SearchResults,
        writer: &mut dyn Write,
        options: &RenderOptions,
    ) -> Result<()> {
        let rank = |metric: Metric| rank_by(&results.users, |u| metric.of(u), None, options.amount);
        let top_commits = rank(Metric::Commits);
        let top_public = rank(Metric::PublicContributions);
        let top_total = rank(Metric::Contributions);

        writeln!(writer, "users:")?;
        Self::write_users(writer, &top_commits, Metric::Commits)?;
        writeln!(writer, "users_public_contributions:")?;
        Self::write_users(writer, &top_public, Metric::PublicContributions)?;
        writeln!(writer, "\nprivate_users:")?;
        Self::write_users(writer, &top_total, Metric::Contributions)?;

        // 組織排名只統計各自排名內的使用者
        writeln!(writer, "\norganizations:")?;
        Self::write_organizations(writer, &top_organizations(&top_commits, TOP_ORGANIZATIONS))?;
        writeln!(writer, "\npublic_contributions_organizations:")?;
        Self::write_organizations(writer, &top_organizations(&top_public, TOP_ORGANIZATIONS))?;
        writeln!(writer, "\nprivate_organizations:")?;
        Self::write_organizations(writer, &top_organizations(&top_total, TOP_ORGANIZATIONS))?;

        let provenance = &options.provenance;
        writeln!(
            writer,
            "generated: {}",
            provenance.generated.to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
        writeln!(writer, "min_followers_required: {}", results.minimum_follower_count)?;
        writeln!(writer, "total_user_count: {}", results.total_user_count)?;

        match provenance.preset() {
            Some((title, checksum)) => {
                writeln!(writer, "title: {}", title)?;
                writeln!(writer, "definition_checksum: {}", checksum)?;
            }
            None if provenance.preset_title.is_some() || provenance.preset_checksum.is_some() => {
                tracing::warn!("Preset title and checksum must both be set; omitting them");
            }
            None => {}
        }
        Ok(())
    }
}
