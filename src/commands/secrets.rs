use crate::commands::fetch_enterprise_orgs;
use crate::display;
use crate::error::Result;
use crate::gh_cli::GhCli;
use crate::github::GithubClient;

/// Runs `gh export-secrets` once per organization, writing
/// `secrets_<org>.csv` into the working directory. A failing invocation is
/// reported and the remaining organizations still get processed; failing to
/// launch the binary at all aborts the report.
pub async fn run(client: &GithubClient, enterprise: &str, gh: &GhCli) -> Result<()> {
    display::section_header("Secrets report");

    let orgs = fetch_enterprise_orgs(client, enterprise).await?;

    for org in &orgs {
        let name = org.display_name();
        let output_file = format!("secrets_{name}.csv");
        display::progress(&format!("Exporting secrets for {name} to {output_file}"));

        let outcome = gh.export_secrets(name, &output_file).await?;
        if outcome.success() {
            display::success(&format!("Exported secrets for {name}"));
        } else {
            display::warn(&format!(
                "gh export-secrets failed for {name} ({})",
                outcome.failure_summary()
            ));
        }
    }

    Ok(())
}
