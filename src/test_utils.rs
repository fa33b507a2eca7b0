//! Shared test utilities.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::effects::{GitHubEffect, GitHubInterpreter, GitHubResponse};
use crate::github::GitHubApiError;

/// A scripted interpreter that records every effect it receives and replays
/// a fixed sequence of responses.
pub struct ScriptedInterpreter {
    responses: Mutex<VecDeque<Result<GitHubResponse, GitHubApiError>>>,
    calls: Mutex<Vec<GitHubEffect>>,
}

impl ScriptedInterpreter {
    pub fn new(responses: impl IntoIterator<Item = Result<GitHubResponse, GitHubApiError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The effects interpreted so far, in order.
    pub fn calls(&self) -> Vec<GitHubEffect> {
        self.calls.lock().unwrap().clone()
    }
}

impl GitHubInterpreter for ScriptedInterpreter {
    type Error = GitHubApiError;

    async fn interpret(&self, effect: GitHubEffect) -> Result<GitHubResponse, Self::Error> {
        self.calls.lock().unwrap().push(effect.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(GitHubApiError::other(format!(
                    "no scripted response for effect {:?}",
                    effect
                )))
            })
    }
}
