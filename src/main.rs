mod commands;
mod config;
mod display;
mod error;
mod gh_cli;
mod github;
mod report;

use clap::Parser;
use config::load_config;
use error::{EntreportError, Result};
use gh_cli::GhCli;
use github::{GithubClient, Visibility};

#[derive(Parser)]
#[command(
    name = "entreport",
    version,
    about = "Create inventory and governance reports from GitHub Enterprise organizations"
)]
pub struct Cli {
    /// GitHub personal access token (falls back to auth.token in the config file)
    #[arg(long)]
    token: Option<String>,

    /// Enterprise slug the reports cover (falls back to defaults.enterprise)
    #[arg(long)]
    enterprise: Option<String>,

    /// Organization login targeted by --environments
    #[arg(long)]
    org: Option<String>,

    /// GitHub API base URL, for GitHub Enterprise Server installs
    #[arg(long)]
    api_url: Option<String>,

    /// Write the public repository report to public_repo_list.csv
    #[arg(long = "public_repos")]
    public_repos: bool,

    /// Write the every-visibility repository report to all_repo_list.csv
    #[arg(long = "all_repos")]
    all_repos: bool,

    /// Export each organization's secrets to secrets_<org>.csv via the gh CLI
    #[arg(long)]
    secrets: bool,

    /// Create repository statistics for each organization via the gh CLI
    #[arg(long = "repo_stats")]
    repo_stats: bool,

    /// Fetch repository data for the environments report of one organization
    #[arg(long)]
    environments: bool,
}

impl Cli {
    fn selects_a_report(&self) -> bool {
        self.public_repos || self.all_repos || self.secrets || self.repo_stats || self.environments
    }

    fn needs_enterprise(&self) -> bool {
        self.public_repos || self.all_repos || self.secrets || self.repo_stats
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        display::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if !cli.selects_a_report() {
        display::warn(
            "No report selected. Pass one or more of --public_repos, --all_repos, --secrets, --repo_stats, --environments.",
        );
        return Ok(());
    }

    let config = load_config()?;
    let token = config.resolve_token(cli.token.as_deref())?;
    let api_url = config.resolve_api_url(cli.api_url.as_deref());
    let client = GithubClient::new(&token, api_url.as_deref())?;

    if cli.needs_enterprise() {
        let enterprise = config.resolve_enterprise(cli.enterprise.as_deref())?;
        let gh = GhCli::from_env();

        if cli.public_repos {
            commands::repos::run(&client, &enterprise, Visibility::Public).await?;
        }
        if cli.all_repos {
            commands::repos::run(&client, &enterprise, Visibility::All).await?;
        }
        if cli.secrets {
            commands::secrets::run(&client, &enterprise, &gh).await?;
        }
        if cli.repo_stats {
            commands::repo_stats::run(&client, &enterprise, &gh).await?;
        }
    }

    if cli.environments {
        let org = cli.org.as_deref().ok_or(EntreportError::MissingOrg)?;
        commands::environments::run(&client, org).await?;
    }

    Ok(())
}
