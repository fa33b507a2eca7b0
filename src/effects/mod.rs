//! Effects-as-data for GitHub operations.
//!
//! This module defines effect types that describe remote operations without
//! executing them. This enables:
//! - Pure pipeline logic driven through a single seam
//! - Testability via mock interpreters that record calls
//! - Logging/tracing of intended operations

pub mod github;
pub mod interpreter;

pub use github::{GitHubEffect, GitHubResponse, RepoPermission, TeamData, UserData};
pub use interpreter::GitHubInterpreter;
