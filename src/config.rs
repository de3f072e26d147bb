use serde::Deserialize;

use crate::cli_args::Cli;
use crate::error::{RelnotesError, Result};

/// One commit as supplied on the command line. The `sha` is accepted for
/// compatibility with `git log` exports but never makes it into the prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    #[serde(default)]
    pub sha: Option<String>,
    pub message: String,
    pub author: String,
}

/// Final resolved configuration for one run. Immutable once built; the
/// process holds no state between runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub repo_owner: String,
    pub repo_name: String,
    pub version: String,
    pub model: String,
    pub commits: Vec<Commit>,
}

impl Config {
    /// Build the final config from parsed CLI flags.
    ///
    /// clap already enforces presence of the required flags (with env
    /// fallbacks for `--github-token` and `--model`); this layer validates
    /// the values clap cannot: a non-empty token and a well-formed commit
    /// array.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if cli.github_token.trim().is_empty() {
            return Err(RelnotesError::Config(
                "--github-token must not be empty".to_string(),
            ));
        }

        let commits = parse_commits(&cli.commits)?;

        Ok(Config {
            github_token: cli.github_token.clone(),
            repo_owner: cli.repo_owner.clone(),
            repo_name: cli.repo_name.clone(),
            version: cli.version.clone(),
            model: cli.model.clone(),
            commits,
        })
    }
}

/// Parse the `--commits` payload into commit records.
fn parse_commits(raw: &str) -> Result<Vec<Commit>> {
    serde_json::from_str(raw).map_err(|e| {
        RelnotesError::Config(format!(
            "--commits must be a JSON array of objects with 'message' and 'author': {e}"
        ))
    })
}
