use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const REPORT_HEADER: [&str; 3] = ["Organization", "Repository", "URL"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRow {
    #[serde(rename = "Organization")]
    pub organization: String,
    #[serde(rename = "Repository")]
    pub repository: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl RepoRow {
    pub fn new(organization: &str, repository: &str, url: &str) -> Self {
        Self {
            organization: organization.to_string(),
            repository: repository.to_string(),
            url: url.to_string(),
        }
    }
}

/// Writes rows in the order given. The header row goes out even when there
/// are no rows.
pub fn write_repo_csv(path: &Path, rows: &[RepoRow]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(REPORT_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
