use crate::display;
use crate::error::Result;
use crate::github::GithubClient;

/// Starting point for an environments report: fetches the organization's
/// repository data over REST and prints the response body.
///
/// TODO: walk each repository's environments and list their secrets instead
/// of dumping the raw repository payload.
pub async fn run(client: &GithubClient, org: &str) -> Result<()> {
    display::section_header("Environments report");
    display::progress(&format!("Fetching repository data for {org}"));

    let body = client.list_org_repos_rest(org).await?;
    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
