//! Core domain types for environment setup.
//!
//! This module contains the fundamental types used throughout the tool,
//! designed to encode invariants via the type system.

pub mod ids;
pub mod reviewer;

// Re-export commonly used types at the module level
pub use ids::{EnvironmentName, InvalidRepoId, RepoId, ReviewerId};
pub use reviewer::{EnvReviewer, InvalidReviewerSpec, ReviewerSpec};
