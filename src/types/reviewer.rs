//! Reviewer specs and resolved reviewers.
//!
//! A reviewer arrives as a raw string (`user`, `@user`, `org/team`, or
//! `@org/team`) and is parsed into a [`ReviewerSpec`] before any remote call
//! is made. Resolution against the GitHub API turns a spec into an
//! [`EnvReviewer`] carrying the numeric id the environments API expects.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::ids::ReviewerId;

/// Error returned when a raw reviewer string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReviewerSpec {
    /// The string was empty (after stripping a leading `@`).
    #[error("reviewer spec is empty")]
    Empty,

    /// A team-style spec had an empty organization or team segment.
    #[error("team spec '{input}' must have the form org/team")]
    MalformedTeam { input: String },
}

/// A parsed (but not yet resolved) reviewer.
///
/// Parsing is purely syntactic: a string containing `/` is a team within an
/// organization, anything else is a username. A single leading `@` is
/// stripped in both cases, so `@org/team` and `org/team` (and `@user` and
/// `user`) are equivalent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReviewerSpec {
    /// A plain username.
    User { login: String },

    /// A team within an organization (`org/team`).
    Team { org: String, slug: String },
}

impl ReviewerSpec {
    /// Parses a raw reviewer string.
    ///
    /// Exactly one leading `@` is stripped before classification; `@@user`
    /// therefore yields the (unresolvable) login `@user` rather than `user`.
    pub fn parse(raw: &str) -> Result<Self, InvalidReviewerSpec> {
        let normalized = raw.strip_prefix('@').unwrap_or(raw);
        if normalized.is_empty() {
            return Err(InvalidReviewerSpec::Empty);
        }
        match normalized.split_once('/') {
            Some((org, slug)) => {
                if org.is_empty() || slug.is_empty() || slug.contains('/') {
                    return Err(InvalidReviewerSpec::MalformedTeam {
                        input: raw.to_string(),
                    });
                }
                Ok(ReviewerSpec::Team {
                    org: org.to_string(),
                    slug: slug.to_string(),
                })
            }
            None => Ok(ReviewerSpec::User {
                login: normalized.to_string(),
            }),
        }
    }
}

impl fmt::Display for ReviewerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewerSpec::User { login } => write!(f, "{}", login),
            ReviewerSpec::Team { org, slug } => write!(f, "{}/{}", org, slug),
        }
    }
}

/// A resolved required reviewer for a deployment environment.
///
/// The enum shape guarantees the owning organization is present exactly when
/// the reviewer is a team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnvReviewer {
    /// An individual user, eligible once they are a repository collaborator.
    User { id: ReviewerId, login: String },

    /// An organization team, eligible once it holds a permission on the
    /// repository.
    Team {
        id: ReviewerId,
        slug: String,
        org: String,
    },
}

impl EnvReviewer {
    pub fn user(id: impl Into<ReviewerId>, login: impl Into<String>) -> Self {
        EnvReviewer::User {
            id: id.into(),
            login: login.into(),
        }
    }

    pub fn team(
        id: impl Into<ReviewerId>,
        slug: impl Into<String>,
        org: impl Into<String>,
    ) -> Self {
        EnvReviewer::Team {
            id: id.into(),
            slug: slug.into(),
            org: org.into(),
        }
    }

    /// The numeric id used as the API payload key.
    pub fn id(&self) -> ReviewerId {
        match self {
            EnvReviewer::User { id, .. } | EnvReviewer::Team { id, .. } => *id,
        }
    }

    /// The normalized identifier: login for users, team slug for teams.
    pub fn name(&self) -> &str {
        match self {
            EnvReviewer::User { login, .. } => login,
            EnvReviewer::Team { slug, .. } => slug,
        }
    }

    /// The owning organization, present only for teams.
    pub fn team_org(&self) -> Option<&str> {
        match self {
            EnvReviewer::User { .. } => None,
            EnvReviewer::Team { org, .. } => Some(org),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_username_is_a_user() {
        assert_eq!(
            ReviewerSpec::parse("alice").unwrap(),
            ReviewerSpec::User {
                login: "alice".to_string()
            }
        );
    }

    #[test]
    fn leading_at_is_stripped_from_usernames() {
        assert_eq!(
            ReviewerSpec::parse("@alice").unwrap(),
            ReviewerSpec::User {
                login: "alice".to_string()
            }
        );
    }

    #[test]
    fn slash_means_team() {
        assert_eq!(
            ReviewerSpec::parse("org/infra").unwrap(),
            ReviewerSpec::Team {
                org: "org".to_string(),
                slug: "infra".to_string()
            }
        );
    }

    #[test]
    fn leading_at_is_stripped_from_teams() {
        assert_eq!(
            ReviewerSpec::parse("@org/infra").unwrap(),
            ReviewerSpec::Team {
                org: "org".to_string(),
                slug: "infra".to_string()
            }
        );
    }

    #[test]
    fn only_one_at_is_stripped() {
        assert_eq!(
            ReviewerSpec::parse("@@alice").unwrap(),
            ReviewerSpec::User {
                login: "@alice".to_string()
            }
        );
    }

    #[test]
    fn empty_and_malformed_specs_are_rejected() {
        assert_eq!(ReviewerSpec::parse("").unwrap_err(), InvalidReviewerSpec::Empty);
        assert_eq!(ReviewerSpec::parse("@").unwrap_err(), InvalidReviewerSpec::Empty);
        assert!(matches!(
            ReviewerSpec::parse("org/").unwrap_err(),
            InvalidReviewerSpec::MalformedTeam { .. }
        ));
        assert!(matches!(
            ReviewerSpec::parse("/team").unwrap_err(),
            InvalidReviewerSpec::MalformedTeam { .. }
        ));
        assert!(matches!(
            ReviewerSpec::parse("a/b/c").unwrap_err(),
            InvalidReviewerSpec::MalformedTeam { .. }
        ));
    }

    #[test]
    fn team_org_is_present_iff_team() {
        let user = EnvReviewer::user(1u64, "alice");
        let team = EnvReviewer::team(2u64, "infra", "org");
        assert_eq!(user.team_org(), None);
        assert_eq!(team.team_org(), Some("org"));
        assert_eq!(user.name(), "alice");
        assert_eq!(team.name(), "infra");
    }

    proptest! {
        /// Any spec containing a slash classifies as a team, with at most one
        /// leading `@` stripped before splitting on the first `/`.
        #[test]
        fn specs_with_slash_are_teams(
            org in "[A-Za-z0-9-]{1,20}",
            slug in "[A-Za-z0-9-]{1,20}",
            at in proptest::bool::ANY,
        ) {
            let raw = if at {
                format!("@{}/{}", org, slug)
            } else {
                format!("{}/{}", org, slug)
            };
            prop_assert_eq!(
                ReviewerSpec::parse(&raw).unwrap(),
                ReviewerSpec::Team { org, slug }
            );
        }

        /// Any spec without a slash classifies as a user.
        #[test]
        fn specs_without_slash_are_users(login in "[A-Za-z0-9-]{1,30}") {
            prop_assert_eq!(
                ReviewerSpec::parse(&login).unwrap(),
                ReviewerSpec::User { login }
            );
        }
    }
}
