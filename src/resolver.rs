//! Reviewer resolution.
//!
//! Turns raw reviewer strings into resolved [`EnvReviewer`] records, looking
//! each one up against the GitHub API. Resolution is strictly sequential and
//! all-or-nothing: the first entry that fails to resolve aborts the whole run
//! before any repository access is adjusted or any environment touched.

use thiserror::Error;
use tracing::debug;

use crate::effects::{GitHubEffect, GitHubInterpreter, GitHubResponse};
use crate::github::GitHubApiError;
use crate::types::{EnvReviewer, InvalidReviewerSpec, ReviewerSpec};

/// Error resolving a reviewer spec.
///
/// Every variant names the raw input string so the failure can be traced back
/// to the invocation configuration.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The raw string could not be parsed at all.
    #[error("cannot resolve reviewer \"{spec}\": {source}")]
    InvalidSpec {
        spec: String,
        source: InvalidReviewerSpec,
    },

    /// A team lookup failed.
    #[error("cannot resolve team \"{spec}\": {source}")]
    Team {
        spec: String,
        source: GitHubApiError,
    },

    /// A user lookup failed.
    #[error("cannot resolve user \"{spec}\": {source}")]
    User {
        spec: String,
        source: GitHubApiError,
    },

    /// The interpreter answered a lookup with the wrong response variant.
    #[error("unexpected response resolving reviewer \"{spec}\"")]
    UnexpectedResponse { spec: String },
}

/// Resolves an ordered list of raw reviewer strings.
///
/// Order is preserved and duplicates are kept: the output list mirrors the
/// input one-to-one. An empty input returns an empty list without touching
/// the API.
pub async fn resolve_reviewers<I>(
    github: &I,
    specs: &[String],
) -> Result<Vec<EnvReviewer>, ResolveError>
where
    I: GitHubInterpreter<Error = GitHubApiError>,
{
    let mut resolved = Vec::with_capacity(specs.len());

    for raw in specs {
        let spec = ReviewerSpec::parse(raw).map_err(|source| ResolveError::InvalidSpec {
            spec: raw.clone(),
            source,
        })?;

        match spec {
            ReviewerSpec::Team { org, slug } => {
                debug!(team = %slug, org = %org, "resolving team reviewer");
                let response = github
                    .interpret(GitHubEffect::GetTeam {
                        org: org.clone(),
                        slug: slug.clone(),
                    })
                    .await
                    .map_err(|source| ResolveError::Team {
                        spec: raw.clone(),
                        source,
                    })?;
                let GitHubResponse::Team(team) = response else {
                    return Err(ResolveError::UnexpectedResponse { spec: raw.clone() });
                };
                resolved.push(EnvReviewer::team(team.id, slug, org));
            }
            ReviewerSpec::User { login } => {
                debug!(user = %login, "resolving user reviewer");
                let response = github
                    .interpret(GitHubEffect::GetUser {
                        login: login.clone(),
                    })
                    .await
                    .map_err(|source| ResolveError::User {
                        spec: raw.clone(),
                        source,
                    })?;
                let GitHubResponse::User(user) = response else {
                    return Err(ResolveError::UnexpectedResponse { spec: raw.clone() });
                };
                resolved.push(EnvReviewer::user(user.id, login));
            }
        }
    }

    Ok(resolved)
}
