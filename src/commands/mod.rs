pub mod environments;
pub mod repo_stats;
pub mod repos;
pub mod secrets;

use crate::display;
use crate::error::Result;
use crate::github::{GithubClient, Org};

/// Lists the enterprise's organizations and narrates how many were found.
/// Every enterprise-wide report starts here.
pub async fn fetch_enterprise_orgs(client: &GithubClient, enterprise: &str) -> Result<Vec<Org>> {
    display::progress(&format!("Fetching organizations for {enterprise}"));
    let orgs = client.list_enterprise_orgs(enterprise).await?;
    display::progress(&format!("Found {} organization(s)", orgs.len()));
    Ok(orgs)
}
