//! Effect interpreter trait.
//!
//! The trait-based design enables:
//! - Mock interpreters for testing the three pipeline stages
//! - Logging/tracing of intended operations
//!
//! The octocrab-backed implementation lives in `src/github`.

use std::future::Future;

use super::github::{GitHubEffect, GitHubResponse};

/// Interprets GitHub effects against the GitHub API.
///
/// Implementations are constructed with a `RepoId`, so all effects executed
/// through a single interpreter instance are scoped to that repository.
///
/// # Example (mock for testing)
///
/// ```ignore
/// struct ScriptedInterpreter {
///     responses: Mutex<VecDeque<Result<GitHubResponse, GitHubApiError>>>,
/// }
///
/// impl GitHubInterpreter for ScriptedInterpreter {
///     type Error = GitHubApiError;
///
///     async fn interpret(&self, effect: GitHubEffect) -> Result<GitHubResponse, Self::Error> {
///         self.responses.lock().unwrap().pop_front()
///             .unwrap_or_else(|| Err(GitHubApiError::other("unscripted effect")))
///     }
/// }
/// ```
pub trait GitHubInterpreter {
    /// The error type returned by this interpreter.
    type Error;

    /// Execute a GitHub effect and return its response.
    fn interpret(
        &self,
        effect: GitHubEffect,
    ) -> impl Future<Output = Result<GitHubResponse, Self::Error>> + Send;
}
