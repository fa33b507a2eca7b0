//! Environment upserting.
//!
//! Creates or updates each named deployment environment, attaching the
//! resolved reviewer list as its required reviewers. Upserts run strictly in
//! order and there is no rollback: a failure aborts the remaining sequence
//! but leaves environments already processed in their new state.

use thiserror::Error;
use tracing::debug;

use crate::effects::{GitHubEffect, GitHubInterpreter};
use crate::github::GitHubApiError;
use crate::types::{EnvReviewer, EnvironmentName};

/// Error upserting a deployment environment.
#[derive(Debug, Error)]
#[error("cannot setup environment \"{environment}\": {source}")]
pub struct EnvironmentError {
    /// The environment whose upsert failed.
    pub environment: EnvironmentName,
    pub source: GitHubApiError,
}

/// Upserts each environment with the full resolved reviewer list.
pub async fn upsert_environments<I>(
    github: &I,
    environments: &[EnvironmentName],
    reviewers: &[EnvReviewer],
) -> Result<(), EnvironmentError>
where
    I: GitHubInterpreter<Error = GitHubApiError>,
{
    for environment in environments {
        debug!(environment = %environment, "upserting environment");
        github
            .interpret(GitHubEffect::UpsertEnvironment {
                name: environment.clone(),
                reviewers: reviewers.to_vec(),
            })
            .await
            .map_err(|source| EnvironmentError {
                environment: environment.clone(),
                source,
            })?;
    }

    Ok(())
}
