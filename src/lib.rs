//! Decide which open GitHub pull requests are ready to be merged.
//!
//! A PR qualifies when GitHub reports it mergeable, the combined CI status of
//! its head commit is `success`, and the `+1`/`-1` votes in its discussion
//! thread reach the required score. [`review::build_all`] gathers those
//! signals through any [`github::HostingClient`]; [`report`] turns them into
//! verdicts.

pub mod config;
pub mod github;
pub mod report;
pub mod review;
