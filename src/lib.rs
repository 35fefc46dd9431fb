//! backport - label-driven backports of merged pull requests
//!
//! Watches for `backport <base> [<head>]` labels on a merged pull request,
//! cherry-picks the merge commit onto each named maintenance branch, and
//! opens one backport pull request per target. Failures on a target are
//! reported as a comment on the original pull request with manual recovery
//! instructions; the remaining targets are still attempted.

pub mod backport;
pub mod config;
pub mod error;
pub mod event;
pub mod git;
pub mod platform;
pub mod types;
