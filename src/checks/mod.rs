//! Smoke checks against the status-check API
//!
//! This module provides the `Check` trait, the three scenario checks and the
//! `ApiChecker` that runs them and keeps the pass/fail tally.
//!
//! ## Sequence
//!
//! 1. **root**: `GET /`
//! 2. **create-status**: `POST /status`
//! 3. **list-status**: `GET /status`
//!
//! Every check runs exactly once, in this order. A failure is reported and
//! the next check still runs.

pub mod registry;
pub mod report;
mod root;
mod runner;
mod status;
mod traits;

pub use registry::CHECKS;
pub use root::RootCheck;
pub use runner::ApiChecker;
pub use status::{CreateStatusCheck, ListStatusChecks};
pub use traits::*;
