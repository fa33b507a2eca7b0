//! Newtype wrappers for domain identifiers.
//!
//! These types prevent accidental mixing of different identifiers (e.g., using
//! an environment name where a reviewer id is expected) and make the code more
//! self-documenting.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A numeric reviewer identifier assigned by GitHub.
///
/// This is the immutable id GitHub assigns to a user or team; it is the key
/// the environments API expects in required-reviewer payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewerId(pub u64);

impl fmt::Display for ReviewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ReviewerId {
    fn from(n: u64) -> Self {
        ReviewerId(n)
    }
}

/// The name of a deployment environment.
///
/// Opaque to this tool; uniqueness is enforced by GitHub, not locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentName(pub String);

impl EnvironmentName {
    pub fn new(s: impl Into<String>) -> Self {
        EnvironmentName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EnvironmentName {
    fn from(s: &str) -> Self {
        EnvironmentName(s.to_string())
    }
}

/// Error returned when a repository string is not `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid repository '{input}'. Expected format {{owner}}/{{repo}}")]
pub struct InvalidRepoId {
    /// The rejected input.
    pub input: String,
}

/// A repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepoId {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parses an `owner/repo` string.
    ///
    /// The input must split into exactly two non-empty segments; anything else
    /// (no slash, extra slashes, empty owner or repo) is rejected.
    pub fn parse(input: &str) -> Result<Self, InvalidRepoId> {
        let mut segments = input.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
                Ok(RepoId::new(owner, repo))
            }
            _ => Err(InvalidRepoId {
                input: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_id_parses_owner_and_repo() {
        let repo = RepoId::parse("sv-oss/setup-environments").unwrap();
        assert_eq!(repo.owner, "sv-oss");
        assert_eq!(repo.repo, "setup-environments");
        assert_eq!(repo.to_string(), "sv-oss/setup-environments");
    }

    #[test]
    fn repo_id_rejects_missing_slash() {
        let err = RepoId::parse("not-a-valid-name").unwrap_err();
        assert_eq!(err.input, "not-a-valid-name");
    }

    #[test]
    fn repo_id_rejects_extra_segments() {
        assert!(RepoId::parse("a/b/c").is_err());
    }

    #[test]
    fn repo_id_rejects_empty_segments() {
        assert!(RepoId::parse("/repo").is_err());
        assert!(RepoId::parse("owner/").is_err());
        assert!(RepoId::parse("/").is_err());
        assert!(RepoId::parse("").is_err());
    }
}
