//! Status API Client
//!
//! Hand-written client for the status-check REST API under test.

mod api;
mod types;

pub use api::{ApiClient, ApiError, ApiResult};
pub use types::*;
