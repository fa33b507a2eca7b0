//! GitHub effect interpreter using octocrab.
//!
//! This module implements the `GitHubInterpreter` trait, executing effects
//! against the real GitHub API via octocrab.
//!
//! Implementation notes:
//! - Team and user lookups deserialize only the fields the pipeline needs.
//! - The permission/collaborator checks and the environment upsert have no
//!   typed octocrab builders, so they go through octocrab's generic
//!   `_get`/`_put` plumbing with explicit error mapping. The check endpoints
//!   return 204 on success and 404 otherwise, which `map_github_error`
//!   surfaces as a not-found error.

use serde::{Deserialize, Serialize};

use crate::effects::{GitHubEffect, GitHubInterpreter, GitHubResponse, RepoPermission, TeamData, UserData};
use crate::types::{EnvReviewer, EnvironmentName, ReviewerId};

use super::client::OctocrabClient;
use super::error::GitHubApiError;

// ─── Wire Types ───────────────────────────────────────────────────────────────

/// Subset of the team object returned by `GET /orgs/{org}/teams/{slug}`.
#[derive(Debug, Deserialize)]
struct TeamPayload {
    id: u64,
    slug: String,
}

/// Subset of the user object returned by `GET /users/{login}`.
#[derive(Debug, Deserialize)]
struct UserPayload {
    id: u64,
    login: String,
}

/// Body for permission grants (`PUT .../repos/...` and `PUT .../collaborators/...`).
#[derive(Debug, Serialize)]
struct PermissionBody {
    permission: &'static str,
}

/// A required reviewer as the environments API expects it.
#[derive(Debug, Serialize)]
struct ReviewerPayload {
    #[serde(rename = "type")]
    kind: &'static str,
    id: u64,
}

impl From<&EnvReviewer> for ReviewerPayload {
    fn from(reviewer: &EnvReviewer) -> Self {
        let kind = match reviewer {
            EnvReviewer::User { .. } => "User",
            EnvReviewer::Team { .. } => "Team",
        };
        ReviewerPayload {
            kind,
            id: reviewer.id().0,
        }
    }
}

/// Body for `PUT /repos/{owner}/{repo}/environments/{name}`.
#[derive(Debug, Serialize)]
struct EnvironmentBody {
    reviewers: Vec<ReviewerPayload>,
}

// ─── Interpreter Implementation ───────────────────────────────────────────────

impl GitHubInterpreter for OctocrabClient {
    type Error = GitHubApiError;

    async fn interpret(&self, effect: GitHubEffect) -> Result<GitHubResponse, Self::Error> {
        execute_effect(self, effect).await
    }
}

/// Executes a single effect against the GitHub API.
async fn execute_effect(
    client: &OctocrabClient,
    effect: GitHubEffect,
) -> Result<GitHubResponse, GitHubApiError> {
    match effect {
        GitHubEffect::GetTeam { org, slug } => get_team(client, org, slug).await,
        GitHubEffect::GetUser { login } => get_user(client, login).await,
        GitHubEffect::CheckTeamPermission { org, slug } => {
            check_team_permission(client, org, slug).await
        }
        GitHubEffect::GrantTeamPermission {
            org,
            slug,
            permission,
        } => grant_team_permission(client, org, slug, permission).await,
        GitHubEffect::CheckCollaborator { login } => check_collaborator(client, login).await,
        GitHubEffect::AddCollaborator { login, permission } => {
            add_collaborator(client, login, permission).await
        }
        GitHubEffect::UpsertEnvironment { name, reviewers } => {
            upsert_environment(client, name, reviewers).await
        }
    }
}

// ─── Reviewer Lookups ─────────────────────────────────────────────────────────

async fn get_team(
    client: &OctocrabClient,
    org: String,
    slug: String,
) -> Result<GitHubResponse, GitHubApiError> {
    let team: TeamPayload = client
        .inner()
        .get(format!("/orgs/{}/teams/{}", org, slug), None::<&()>)
        .await
        .map_err(GitHubApiError::from_octocrab)?;

    Ok(GitHubResponse::Team(TeamData {
        id: ReviewerId(team.id),
        slug: team.slug,
    }))
}

async fn get_user(
    client: &OctocrabClient,
    login: String,
) -> Result<GitHubResponse, GitHubApiError> {
    let user: UserPayload = client
        .inner()
        .get(format!("/users/{}", login), None::<&()>)
        .await
        .map_err(GitHubApiError::from_octocrab)?;

    Ok(GitHubResponse::User(UserData {
        id: ReviewerId(user.id),
        login: user.login,
    }))
}

// ─── Repository Access ────────────────────────────────────────────────────────

async fn check_team_permission(
    client: &OctocrabClient,
    org: String,
    slug: String,
) -> Result<GitHubResponse, GitHubApiError> {
    let route = format!(
        "/orgs/{}/teams/{}/repos/{}/{}",
        org,
        slug,
        client.owner(),
        client.repo_name()
    );
    let response = client
        .inner()
        ._get(route)
        .await
        .map_err(GitHubApiError::from_octocrab)?;
    // 204 if the team holds any permission, 404 if it holds none.
    octocrab::map_github_error(response)
        .await
        .map_err(GitHubApiError::from_octocrab)?;

    Ok(GitHubResponse::Unit)
}

async fn grant_team_permission(
    client: &OctocrabClient,
    org: String,
    slug: String,
    permission: RepoPermission,
) -> Result<GitHubResponse, GitHubApiError> {
    let route = format!(
        "/orgs/{}/teams/{}/repos/{}/{}",
        org,
        slug,
        client.owner(),
        client.repo_name()
    );
    let body = PermissionBody {
        permission: permission.as_api_str(),
    };
    let response = client
        .inner()
        ._put(route, Some(&body))
        .await
        .map_err(GitHubApiError::from_octocrab)?;
    octocrab::map_github_error(response)
        .await
        .map_err(GitHubApiError::from_octocrab)?;

    Ok(GitHubResponse::Unit)
}

async fn check_collaborator(
    client: &OctocrabClient,
    login: String,
) -> Result<GitHubResponse, GitHubApiError> {
    let route = format!(
        "/repos/{}/{}/collaborators/{}",
        client.owner(),
        client.repo_name(),
        login
    );
    let response = client
        .inner()
        ._get(route)
        .await
        .map_err(GitHubApiError::from_octocrab)?;
    // 204 if the user is a collaborator, 404 otherwise.
    octocrab::map_github_error(response)
        .await
        .map_err(GitHubApiError::from_octocrab)?;

    Ok(GitHubResponse::Unit)
}

async fn add_collaborator(
    client: &OctocrabClient,
    login: String,
    permission: RepoPermission,
) -> Result<GitHubResponse, GitHubApiError> {
    let route = format!(
        "/repos/{}/{}/collaborators/{}",
        client.owner(),
        client.repo_name(),
        login
    );
    let body = PermissionBody {
        permission: permission.as_api_str(),
    };
    // 201 with an invitation body for new collaborators, 204 for no-op
    // re-additions; the body is not needed either way.
    let response = client
        .inner()
        ._put(route, Some(&body))
        .await
        .map_err(GitHubApiError::from_octocrab)?;
    octocrab::map_github_error(response)
        .await
        .map_err(GitHubApiError::from_octocrab)?;

    Ok(GitHubResponse::Unit)
}

// ─── Environments ─────────────────────────────────────────────────────────────

async fn upsert_environment(
    client: &OctocrabClient,
    name: EnvironmentName,
    reviewers: Vec<EnvReviewer>,
) -> Result<GitHubResponse, GitHubApiError> {
    let route = format!(
        "/repos/{}/{}/environments/{}",
        client.owner(),
        client.repo_name(),
        name
    );
    let body = EnvironmentBody {
        reviewers: reviewers.iter().map(ReviewerPayload::from).collect(),
    };
    let response = client
        .inner()
        ._put(route, Some(&body))
        .await
        .map_err(GitHubApiError::from_octocrab)?;
    octocrab::map_github_error(response)
        .await
        .map_err(GitHubApiError::from_octocrab)?;

    Ok(GitHubResponse::Unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reviewer_payload_uses_api_type_names() {
        let user = EnvReviewer::user(42u64, "alice");
        let team = EnvReviewer::team(7u64, "infra", "org");
        let payload = EnvironmentBody {
            reviewers: [&user, &team].into_iter().map(ReviewerPayload::from).collect(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "reviewers": [
                    { "type": "User", "id": 42 },
                    { "type": "Team", "id": 7 }
                ]
            })
        );
    }
}
