use crate::error::Result;
use std::ffi::OsString;
use std::process::{ExitStatus, Output};
use tokio::process::Command;

/// Overrides the binary used for the companion reporting commands.
pub const GH_BIN_ENV: &str = "ENTREPORT_GH_BIN";

pub struct GhCli {
    program: OsString,
}

/// Captured result of one companion CLI invocation.
#[derive(Debug)]
pub struct CliOutcome {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutcome {
    fn from_output(output: Output) -> Self {
        Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// One line describing a failed invocation: the exit status plus the
    /// first non-empty stderr (or stdout) line, if any.
    pub fn failure_summary(&self) -> String {
        let status = match self.status.code() {
            Some(code) => format!("exit status {code}"),
            None => self.status.to_string(),
        };
        match first_line(&self.stderr).or_else(|| first_line(&self.stdout)) {
            Some(line) => format!("{status}: {line}"),
            None => status,
        }
    }
}

fn first_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

impl GhCli {
    pub fn from_env() -> Self {
        let program = std::env::var_os(GH_BIN_ENV).unwrap_or_else(|| "gh".into());
        Self { program }
    }

    /// Runs `gh export-secrets --output-file <output_file> <org>`.
    pub async fn export_secrets(&self, org: &str, output_file: &str) -> Result<CliOutcome> {
        self.run(&["export-secrets", "--output-file", output_file, org])
            .await
    }

    /// Runs `gh repo-stats -o <login>`.
    pub async fn repo_stats(&self, login: &str) -> Result<CliOutcome> {
        self.run(&["repo-stats", "-o", login]).await
    }

    async fn run(&self, args: &[&str]) -> Result<CliOutcome> {
        let output = Command::new(&self.program).args(args).output().await?;
        Ok(CliOutcome::from_output(output))
    }
}
