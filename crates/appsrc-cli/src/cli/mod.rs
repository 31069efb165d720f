//! CLI for appsrc.

mod commands;

use anyhow::Result;
use appsrc_core::config;
use appsrc_core::credential::Credential;
use appsrc_core::github::GithubClient;
use clap::Parser;
use std::path::PathBuf;

use commands::run_discover;

/// Discover and list app sources uniquely.
///
/// Prints one line of `name` / `name#url` tokens, org repositories first,
/// then manual entries. Prints nothing if there is nothing to list.
#[derive(Debug, Parser)]
#[command(name = "appsrc", version)]
#[command(about = "Discover and list app source URLs uniquely", long_about = None)]
pub struct Cli {
    /// GitHub organization to scan.
    #[arg(long, value_name = "ORG")]
    pub org: Option<String>,

    /// Space-separated list of Git URLs or app names.
    #[arg(long, value_name = "APPS", allow_hyphen_values = true)]
    pub apps: Option<String>,

    /// Config file to use instead of ~/.config/appsrc/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(&self) -> Result<()> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_default(),
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let client = GithubClient::from_config(&cfg, Credential::from_env())?;
        if self.org.is_some() && !client.is_authenticated() {
            tracing::debug!("no API token set; listing public repositories only");
        }

        run_discover(&client, self.org.as_deref(), self.apps.as_deref())
    }
}
