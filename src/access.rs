//! Repository access adjustment.
//!
//! Required reviewers are only eligible if they can see the repository, so
//! before any environment is touched each resolved reviewer is checked and,
//! if necessary, granted read ("pull") access. Existing permissions are never
//! changed: a team or user that already has any level of access is left
//! alone.
//!
//! The two paths deliberately differ in how check failures are handled:
//!
//! - Team checks treat only a typed 404 as "no permission record"; any other
//!   failure (auth, network, server) is fatal and no grant is attempted.
//! - User collaborator checks treat *any* failure as "not a collaborator"
//!   and proceed to the grant.
//!
//! This asymmetry is pinned by tests; see DESIGN.md for the rationale.

use thiserror::Error;
use tracing::{debug, info};

use crate::effects::{GitHubEffect, GitHubInterpreter, RepoPermission};
use crate::github::GitHubApiError;
use crate::types::EnvReviewer;

/// Error adjusting repository access for a reviewer.
#[derive(Debug, Error)]
pub enum AccessError {
    /// A team permission check failed for a reason other than "not found".
    #[error("cannot check permissions of team \"{team}\": {source}")]
    TeamCheck {
        team: String,
        source: GitHubApiError,
    },

    /// Granting a team pull access failed.
    #[error("cannot grant team \"{team}\" access to the repository: {source}")]
    TeamGrant {
        team: String,
        source: GitHubApiError,
    },

    /// Adding a user as a collaborator failed.
    #[error("cannot add user \"{user}\" as a collaborator: {source}")]
    UserAdd {
        user: String,
        source: GitHubApiError,
    },
}

/// Ensures each resolved reviewer has at least pull access to the repository.
///
/// Reviewers are processed strictly in order; the first fatal failure aborts
/// the run, leaving grants already applied in place.
pub async fn ensure_repo_access<I>(
    github: &I,
    reviewers: &[EnvReviewer],
) -> Result<(), AccessError>
where
    I: GitHubInterpreter<Error = GitHubApiError>,
{
    for reviewer in reviewers {
        match reviewer {
            EnvReviewer::Team { slug, org, .. } => {
                debug!(team = %slug, "checking if team has permissions over the repository");
                let check = github
                    .interpret(GitHubEffect::CheckTeamPermission {
                        org: org.clone(),
                        slug: slug.clone(),
                    })
                    .await;
                match check {
                    // Any existing permission level is left untouched.
                    Ok(_) => {}
                    Err(err) if err.is_not_found() => {
                        info!(team = %slug, "granting team read permissions over the repository");
                        github
                            .interpret(GitHubEffect::GrantTeamPermission {
                                org: org.clone(),
                                slug: slug.clone(),
                                permission: RepoPermission::Pull,
                            })
                            .await
                            .map_err(|source| AccessError::TeamGrant {
                                team: slug.clone(),
                                source,
                            })?;
                    }
                    Err(source) => {
                        return Err(AccessError::TeamCheck {
                            team: slug.clone(),
                            source,
                        });
                    }
                }
            }
            EnvReviewer::User { login, .. } => {
                debug!(user = %login, "checking if user has permissions over the repository");
                let check = github
                    .interpret(GitHubEffect::CheckCollaborator {
                        login: login.clone(),
                    })
                    .await;
                if check.is_err() {
                    // Any check failure is taken to mean "not a collaborator".
                    info!(user = %login, "granting user read permissions over the repository");
                    github
                        .interpret(GitHubEffect::AddCollaborator {
                            login: login.clone(),
                            permission: RepoPermission::Pull,
                        })
                        .await
                        .map_err(|source| AccessError::UserAdd {
                            user: login.clone(),
                            source,
                        })?;
                }
            }
        }
    }

    Ok(())
}
