//! Status Checks
//!
//! Exercises the status-check resource: create one record, then list them.
//! Response bodies are not validated beyond the status code.
//!
//! ## What it checks
//!
//! 1. `POST {base_url}/status` with `{"client_name": ...}` returns 200
//! 2. `GET {base_url}/status` returns 200

use super::traits::{Check, CheckContext};
use crate::client::{HttpMethod, StatusCheckCreate};

/// Creates a status check named after the run's client name
pub struct CreateStatusCheck;

impl Check for CreateStatusCheck {
    fn name(&self) -> &'static str {
        "Create Status Check"
    }

    fn description(&self) -> &'static str {
        "POST /status with a generated client name answers 200"
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn endpoint(&self) -> &'static str {
        "status"
    }

    fn payload(&self, ctx: &CheckContext) -> Option<serde_json::Value> {
        serde_json::to_value(StatusCheckCreate::new(&ctx.client_name)).ok()
    }

    fn failure_hint(&self) -> &'static str {
        "Status check creation failed"
    }
}

/// Lists all status checks
pub struct ListStatusChecks;

impl Check for ListStatusChecks {
    fn name(&self) -> &'static str {
        "Get Status Checks"
    }

    fn description(&self) -> &'static str {
        "GET /status answers 200"
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn endpoint(&self) -> &'static str {
        "status"
    }

    fn failure_hint(&self) -> &'static str {
        "Getting status checks failed"
    }
}
