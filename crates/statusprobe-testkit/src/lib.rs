//! Statusprobe Test Kit
//!
//! Test infrastructure for exercising the checker without a real backend.
//!
//! This crate provides:
//! - A `wiremock`-backed mock of the status-check API with per-endpoint overrides
//!
//! # Example
//!
//! ```rust,no_run
//! use statusprobe_testkit::MockStatusApi;
//!
//! # async fn example() {
//! let api = MockStatusApi::start().await;
//! let base_url = api.base_url();
//! # }
//! ```

pub mod mock;

pub use mock::{MockStatusApi, MockStatusApiBuilder, StatusStore};
pub use wiremock::ResponseTemplate;
