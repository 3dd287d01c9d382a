//! Statusprobe - smoke checks for a status-check REST API
//!
//! Issues a fixed sequence of requests against an API's base URL and reports
//! how many answered with the expected status.
//!
//! ## Modules
//!
//! - [`client`] - HTTP client for the status API
//! - [`checks`] - `Check` trait, the scenario checks and the `ApiChecker` runner
//! - [`config`] - Configuration parsing (file, environment, flags)

pub mod checks;
pub mod client;
pub mod config;
