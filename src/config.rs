//! Invocation configuration.
//!
//! All inputs arrive once, at startup, and are validated into an immutable
//! [`Config`] that the pipeline stages borrow. Flags double as
//! GitHub-Actions-style inputs via `INPUT_*` environment fallbacks, so the
//! binary runs unchanged as an action step.

use clap::Parser;
use thiserror::Error;

use crate::types::{EnvironmentName, InvalidRepoId, RepoId};

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "setup-environments",
    about = "Configures deployment environments and required reviewers for a GitHub repository"
)]
pub struct Cli {
    /// GitHub token with repository-admin scope.
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Target repository as {owner}/{repo}. Defaults to the ambient
    /// GITHUB_REPOSITORY context.
    #[arg(long, env = "INPUT_REPOSITORY")]
    pub repository: Option<String>,

    /// Comma-separated list of environments to configure.
    #[arg(long, env = "INPUT_ENVIRONMENTS")]
    pub environments: String,

    /// Comma-separated list of required reviewers, e.g. "org/team,user"
    /// (GitHub caps required reviewers at 6 per environment).
    #[arg(long, env = "INPUT_REVIEWERS", default_value = "")]
    pub reviewers: String,
}

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No repository given and no ambient repository context available.
    #[error("no repository given and GITHUB_REPOSITORY is not set")]
    MissingRepository,

    /// The repository string is not `owner/repo`.
    #[error(transparent)]
    InvalidRepository(#[from] InvalidRepoId),

    /// The environments list is empty.
    #[error("environments list is empty")]
    NoEnvironments,

    /// An environment name in the list is empty.
    #[error("environments list contains an empty name")]
    EmptyEnvironmentName,
}

/// Validated invocation configuration, built once and never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential used for all remote calls.
    pub token: String,

    /// The target repository.
    pub repo: RepoId,

    /// Environments to upsert, in input order.
    pub environments: Vec<EnvironmentName>,

    /// Raw reviewer specs, in input order. Parsed by the resolver.
    pub reviewers: Vec<String>,
}

impl Config {
    /// Builds a configuration from CLI inputs, falling back to the ambient
    /// `GITHUB_REPOSITORY` context when no repository flag is given.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let repository = cli
            .repository
            .or_else(|| std::env::var("GITHUB_REPOSITORY").ok());
        Self::new(cli.token, repository, &cli.environments, &cli.reviewers)
    }

    /// Builds and validates a configuration from raw inputs.
    pub fn new(
        token: String,
        repository: Option<String>,
        environments: &str,
        reviewers: &str,
    ) -> Result<Self, ConfigError> {
        let repository = repository.ok_or(ConfigError::MissingRepository)?;
        let repo = RepoId::parse(&repository)?;

        let environments = parse_environments(environments)?;
        let reviewers = parse_reviewers(reviewers);

        Ok(Config {
            token,
            repo,
            environments,
            reviewers,
        })
    }
}

/// Splits the comma-separated environments input.
///
/// Entries are trimmed; an empty entry (or an empty list) is a configuration
/// error rather than something to fail on remotely.
fn parse_environments(input: &str) -> Result<Vec<EnvironmentName>, ConfigError> {
    if input.trim().is_empty() {
        return Err(ConfigError::NoEnvironments);
    }
    input
        .split(',')
        .map(|name| {
            let name = name.trim();
            if name.is_empty() {
                Err(ConfigError::EmptyEnvironmentName)
            } else {
                Ok(EnvironmentName::new(name))
            }
        })
        .collect()
}

/// Splits the comma-separated reviewers input.
///
/// An empty input means "no reviewers". Entries are trimmed and empty entries
/// (stray commas) are dropped; order is otherwise preserved.
fn parse_reviewers(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|spec| !spec.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(
        repository: Option<&str>,
        environments: &str,
        reviewers: &str,
    ) -> Result<Config, ConfigError> {
        Config::new(
            "token".to_string(),
            repository.map(String::from),
            environments,
            reviewers,
        )
    }

    #[test]
    fn valid_inputs_produce_ordered_lists() {
        let config = config(Some("org/repo"), "dev, staging,prod", "alice, org/infra").unwrap();
        assert_eq!(config.repo, RepoId::new("org", "repo"));
        assert_eq!(
            config.environments,
            vec![
                EnvironmentName::from("dev"),
                EnvironmentName::from("staging"),
                EnvironmentName::from("prod"),
            ]
        );
        assert_eq!(config.reviewers, vec!["alice", "org/infra"]);
    }

    #[test]
    fn repository_without_slash_is_rejected() {
        let err = config(Some("not-a-valid-name"), "dev", "").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRepository(_)));
        assert!(err.to_string().contains("not-a-valid-name"));
    }

    #[test]
    fn missing_repository_is_rejected() {
        assert!(matches!(
            config(None, "dev", "").unwrap_err(),
            ConfigError::MissingRepository
        ));
    }

    #[test]
    fn empty_environments_are_rejected() {
        assert!(matches!(
            config(Some("org/repo"), "", "").unwrap_err(),
            ConfigError::NoEnvironments
        ));
        assert!(matches!(
            config(Some("org/repo"), "dev,,prod", "").unwrap_err(),
            ConfigError::EmptyEnvironmentName
        ));
    }

    #[test]
    fn empty_reviewers_input_means_none() {
        let config = config(Some("org/repo"), "dev", "").unwrap();
        assert!(config.reviewers.is_empty());

        let config = config_with_reviewers("  ");
        assert!(config.reviewers.is_empty());
    }

    #[test]
    fn stray_commas_in_reviewers_are_dropped() {
        let config = config_with_reviewers("alice,,bob,");
        assert_eq!(config.reviewers, vec!["alice", "bob"]);
    }

    fn config_with_reviewers(reviewers: &str) -> Config {
        config(Some("org/repo"), "dev", reviewers).unwrap()
    }
}
