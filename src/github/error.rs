//! GitHub API error types.
//!
//! The only categorization the pipeline needs is "not found" versus
//! everything else: the access adjuster grants a team its permission exactly
//! when the permission check came back 404, and the resolver reports any
//! lookup failure as fatal. Nothing is retried, so there is no transient
//! versus permanent distinction.

use std::fmt;
use thiserror::Error;

/// The kind of GitHub API error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitHubErrorKind {
    /// The requested entity does not exist (HTTP 404).
    ///
    /// For permission and collaborator checks this is a meaningful signal
    /// ("no permission record"), not a failure of the check itself.
    NotFound,

    /// Any other failure: auth errors, validation errors, server errors,
    /// network-level errors.
    Other,
}

/// A GitHub API error with just enough categorization for the pipeline.
#[derive(Debug, Error)]
pub struct GitHubApiError {
    /// The kind of error.
    pub kind: GitHubErrorKind,

    /// The HTTP status code, if available.
    pub status_code: Option<u16>,

    /// A human-readable description of the error.
    pub message: String,

    /// The underlying octocrab error, if available.
    #[source]
    pub source: Option<octocrab::Error>,
}

impl fmt::Display for GitHubApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "GitHub API error (HTTP {}): {}", code, self.message),
            None => write!(f, "GitHub API error: {}", self.message),
        }
    }
}

impl GitHubApiError {
    /// Returns true if the error is a typed "not found" signal.
    pub fn is_not_found(&self) -> bool {
        self.kind == GitHubErrorKind::NotFound
    }

    /// Creates a not-found error without an octocrab source.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: GitHubErrorKind::NotFound,
            status_code: Some(404),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a generic error without an octocrab source.
    pub fn other(message: impl Into<String>) -> Self {
        Self {
            kind: GitHubErrorKind::Other,
            status_code: None,
            message: message.into(),
            source: None,
        }
    }

    /// Categorizes an octocrab error.
    ///
    /// GitHub-level errors carry a typed status code; for transport-level
    /// errors we fall back to sniffing the message, which can only ever widen
    /// categorization from `Other` to `NotFound`.
    pub fn from_octocrab(err: octocrab::Error) -> Self {
        let message = err.to_string();
        let status_code = match &err {
            octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
            _ => status_from_message(&message),
        };
        let kind = match status_code {
            Some(404) => GitHubErrorKind::NotFound,
            _ => GitHubErrorKind::Other,
        };
        Self {
            kind,
            status_code,
            message,
            source: Some(err),
        }
    }
}

/// Extracts an HTTP status code from an error message, if one is present.
///
/// Used only for octocrab error variants that don't expose a typed status
/// code. The fallback behavior (returning `None`) categorizes the error as
/// `Other`, which every caller treats as fatal.
fn status_from_message(message: &str) -> Option<u16> {
    let lower = message.to_lowercase();
    if message.contains("404") && lower.contains("not found") {
        return Some(404);
    }
    for code in [401u16, 403, 422, 500, 502, 503] {
        if message.contains(&code.to_string()) {
            return Some(code);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_sniffing_finds_not_found() {
        assert_eq!(status_from_message("GitHub returned 404 Not Found"), Some(404));
        assert_eq!(status_from_message("status 422: validation failed"), Some(422));
        assert_eq!(status_from_message("connection reset by peer"), None);
        // A bare "404" without "not found" context is not trusted.
        assert_eq!(status_from_message("id 404 is odd"), None);
    }

    #[test]
    fn constructors_set_kind() {
        assert!(GitHubApiError::not_found("no permission record").is_not_found());
        assert!(!GitHubApiError::other("boom").is_not_found());
    }

    #[test]
    fn display_includes_status_code_when_known() {
        let err = GitHubApiError::not_found("team has no permission");
        assert_eq!(
            err.to_string(),
            "GitHub API error (HTTP 404): team has no permission"
        );
        let err = GitHubApiError::other("socket closed");
        assert_eq!(err.to_string(), "GitHub API error: socket closed");
    }
}
