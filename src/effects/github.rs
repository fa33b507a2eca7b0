//! GitHub API effect types.
//!
//! These types describe GitHub API operations as data, without executing them.
//! The interpreter in `src/github` executes them against the real API; tests
//! execute them against scripted substitutes.

use serde::{Deserialize, Serialize};

use crate::types::{EnvReviewer, EnvironmentName, ReviewerId};

/// Repository permission levels this tool can grant.
///
/// Only read access is ever granted: being an eligible required reviewer
/// needs nothing more, and existing higher permissions are never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoPermission {
    /// Read access ("pull" in the GitHub API).
    Pull,
}

impl RepoPermission {
    /// Returns the GitHub API string for this permission level.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            RepoPermission::Pull => "pull",
        }
    }
}

/// A GitHub API effect.
///
/// Each variant describes one API operation. Effects are repo-scoped: the
/// interpreter is constructed with a `RepoId`, so effects don't include it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GitHubEffect {
    // ─── Reviewer resolution ──────────────────────────────────────────────────
    /// Look up a team by organization and slug.
    GetTeam { org: String, slug: String },

    /// Look up a user by login.
    GetUser { login: String },

    // ─── Repository access ────────────────────────────────────────────────────
    /// Check whether a team holds any permission on the repository.
    ///
    /// Succeeds if the team has a permission record at any level; fails with
    /// a not-found error if it has none.
    CheckTeamPermission { org: String, slug: String },

    /// Grant a team a permission on the repository.
    GrantTeamPermission {
        org: String,
        slug: String,
        permission: RepoPermission,
    },

    /// Check whether a user is a direct collaborator on the repository.
    CheckCollaborator { login: String },

    /// Add a user as a collaborator with the given permission.
    AddCollaborator {
        login: String,
        permission: RepoPermission,
    },

    // ─── Environments ─────────────────────────────────────────────────────────
    /// Create the environment if absent, otherwise update it in place,
    /// setting its required reviewers to exactly the given list.
    UpsertEnvironment {
        name: EnvironmentName,
        reviewers: Vec<EnvReviewer>,
    },
}

// ─── Response Types ───────────────────────────────────────────────────────────

/// Team data returned from the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamData {
    /// The numeric team id.
    pub id: ReviewerId,

    /// The team slug.
    pub slug: String,
}

/// User data returned from the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    /// The numeric user id.
    pub id: ReviewerId,

    /// The user's login.
    pub login: String,
}

/// Response to a GitHub effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GitHubResponse {
    /// Response to `GetTeam`.
    Team(TeamData),

    /// Response to `GetUser`.
    User(UserData),

    /// Response to effects that carry no payload on success (permission
    /// checks, grants, collaborator additions, environment upserts).
    Unit,
}
