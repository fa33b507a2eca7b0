//! Setup Environments - configures GitHub deployment environments and their
//! required reviewers.
//!
//! This library provides the pipeline stages and the effect types they drive.

pub mod access;
pub mod config;
pub mod effects;
pub mod environments;
pub mod github;
pub mod resolver;
pub mod run;
pub mod types;

#[cfg(test)]
mod test_utils;
