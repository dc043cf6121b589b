use crate::commands::fetch_enterprise_orgs;
use crate::display;
use crate::error::Result;
use crate::github::{GithubClient, Visibility};
use crate::report::{self, RepoRow};
use std::path::Path;

pub const PUBLIC_REPO_LIST: &str = "public_repo_list.csv";
pub const ALL_REPO_LIST: &str = "all_repo_list.csv";

pub fn output_file(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => PUBLIC_REPO_LIST,
        Visibility::All => ALL_REPO_LIST,
    }
}

/// Writes one CSV listing every matching repository across the enterprise,
/// one row per repository, in the order organizations and repositories come
/// back from the API. Nothing is written if any fetch fails.
pub async fn run(client: &GithubClient, enterprise: &str, visibility: Visibility) -> Result<()> {
    let output = output_file(visibility);
    match visibility {
        Visibility::Public => display::section_header("Public repo report"),
        Visibility::All => display::section_header("All repo report"),
    }

    let orgs = fetch_enterprise_orgs(client, enterprise).await?;

    let mut rows = Vec::new();
    for (i, org) in orgs.iter().enumerate() {
        display::progress(&format!(
            "Collecting {} repositories for {} ({}/{})",
            visibility.label(),
            org.display_name(),
            i + 1,
            orgs.len()
        ));
        let repos = client.list_org_repos(&org.login, visibility).await?;
        for repo in &repos {
            rows.push(RepoRow::new(org.display_name(), &repo.name, &repo.url));
        }
    }

    report::write_repo_csv(Path::new(output), &rows)?;
    display::success(&format!("Wrote {} row(s) to {output}", rows.len()));

    Ok(())
}
