use crate::commands::fetch_enterprise_orgs;
use crate::display;
use crate::error::Result;
use crate::gh_cli::GhCli;
use crate::github::GithubClient;

/// Runs `gh repo-stats` once per organization. The stats extension writes
/// its own output files; we only surface whether each invocation succeeded.
pub async fn run(client: &GithubClient, enterprise: &str, gh: &GhCli) -> Result<()> {
    display::section_header("Repo stats report");

    let orgs = fetch_enterprise_orgs(client, enterprise).await?;

    for org in &orgs {
        display::progress(&format!("Creating repo stats for {}", org.display_name()));

        let outcome = gh.repo_stats(&org.login).await?;
        if outcome.success() {
            display::success(&format!("Repo stats created for {}", org.display_name()));
        } else {
            display::warn(&format!(
                "gh repo-stats failed for {} ({})",
                org.display_name(),
                outcome.failure_summary()
            ));
        }
    }

    Ok(())
}
