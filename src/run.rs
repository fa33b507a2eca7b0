//! Top-level orchestration.
//!
//! The three stages run strictly in sequence: resolve reviewers, adjust
//! repository access, upsert environments. Resolver output feeds both later
//! stages. Any failure aborts the remaining work; changes already applied
//! remotely are left in place.

use thiserror::Error;
use tracing::debug;

use crate::access::{ensure_repo_access, AccessError};
use crate::config::{Config, ConfigError};
use crate::effects::GitHubInterpreter;
use crate::environments::{upsert_environments, EnvironmentError};
use crate::github::GitHubApiError;
use crate::resolver::{resolve_reviewers, ResolveError};

/// Any fatal error from the setup pipeline.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Environment(#[from] EnvironmentError),
}

/// Runs the full setup pipeline against the given interpreter.
pub async fn run<I>(config: &Config, github: &I) -> Result<(), SetupError>
where
    I: GitHubInterpreter<Error = GitHubApiError>,
{
    let reviewers = resolve_reviewers(github, &config.reviewers).await?;
    debug!(count = reviewers.len(), "resolved reviewers");

    ensure_repo_access(github, &reviewers).await?;

    upsert_environments(github, &config.environments, &reviewers).await?;

    Ok(())
}
