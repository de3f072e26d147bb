use clap::{ArgAction, Parser};

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "relnotes",
    about = "Generate structured release notes with the GitHub Models API"
)]
pub struct Cli {
    /// GitHub PAT with models:read permission
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// Repository owner
    #[arg(long)]
    pub repo_owner: String,

    /// Repository name
    #[arg(long)]
    pub repo_name: String,

    /// Version being released (e.g. 1.2.0)
    #[arg(long)]
    pub version: String,

    /// JSON array of commits with sha, message, and author
    #[arg(long)]
    pub commits: String,

    /// Model to use
    #[arg(long, env = "RELNOTES_MODEL", default_value = "gpt-4o")]
    pub model: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
