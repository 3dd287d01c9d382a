//! Check trait and supporting types
//!
//! A `Check` describes one request against the status API: method, endpoint,
//! expected status and optional payload. The `ApiChecker` executes it and
//! returns a `CheckOutcome`, recording it in the shared `TestRun` tally.

use chrono::Timelike;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::client::HttpMethod;

/// Default prefix for generated client names
pub const DEFAULT_CLIENT_NAME_PREFIX: &str = "test_client";

/// Pass/fail tally for one run of the checker
///
/// Both counters only move through [`TestRun::record`], so
/// `passed <= attempted` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRun {
    attempted: u32,
    passed: u32,
}

impl TestRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one attempted check, and one passed check if `success`
    pub fn record(&mut self, success: bool) {
        self.attempted += 1;
        if success {
            self.passed += 1;
        }
    }

    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    pub fn passed(&self) -> u32 {
        self.passed
    }

    pub fn failed(&self) -> u32 {
        self.attempted - self.passed
    }

    /// True when every attempted check passed (vacuously true for an empty run)
    pub fn all_passed(&self) -> bool {
        self.passed == self.attempted
    }
}

impl std::fmt::Display for TestRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.passed, self.attempted)
    }
}

/// Result of a single check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Name of the check
    pub name: String,
    /// Whether the observed status matched the expected one
    pub success: bool,
    /// Decoded response body; an empty object unless the check passed with a JSON body
    pub body: serde_json::Value,
    /// Observed status code, absent on transport failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Error or mismatch description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// How long the request took
    pub duration: Duration,
}

impl CheckOutcome {
    /// Create a passing outcome
    pub fn passed(
        name: impl Into<String>,
        status: u16,
        body: serde_json::Value,
        duration: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            success: true,
            body,
            status: Some(status),
            error: None,
            duration,
        }
    }

    /// Create a failing outcome with an empty body
    pub fn failed(
        name: impl Into<String>,
        status: Option<u16>,
        error: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            success: false,
            body: empty_body(),
            status,
            error: Some(error.into()),
            duration,
        }
    }

    /// Decode the body into a typed view, if it has that shape
    pub fn parse<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_value(self.body.clone()).ok()
    }
}

pub(crate) fn empty_body() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Build a client name of the form `<prefix>_HHMMSS`
pub fn client_name(prefix: &str, time: &impl Timelike) -> String {
    format!(
        "{prefix}_{:02}{:02}{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Values shared by every check in one run
#[derive(Debug, Clone)]
pub struct CheckContext {
    /// Client name sent when creating a status check
    pub client_name: String,
}

impl CheckContext {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
        }
    }

    /// Context with a client name stamped from the local wall clock
    pub fn from_clock(prefix: &str) -> Self {
        Self::new(client_name(prefix, &chrono::Local::now()))
    }
}

impl Default for CheckContext {
    fn default() -> Self {
        Self::from_clock(DEFAULT_CLIENT_NAME_PREFIX)
    }
}

/// One request in the smoke sequence
///
/// Checks are registered in the `CHECKS` registry and run in registration order.
///
/// ## Example Implementation
///
/// ```ignore
/// use statusprobe::checks::{Check, CheckContext};
/// use statusprobe::client::HttpMethod;
///
/// pub struct HealthCheck;
///
/// impl Check for HealthCheck {
///     fn name(&self) -> &'static str { "Health Endpoint" }
///     fn description(&self) -> &'static str { "GET /health answers 200" }
///     fn method(&self) -> HttpMethod { HttpMethod::Get }
///     fn endpoint(&self) -> &'static str { "health" }
///     fn failure_hint(&self) -> &'static str { "Health endpoint failed" }
/// }
/// ```
pub trait Check: Send + Sync {
    /// Display name, printed in progress lines
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    fn method(&self) -> HttpMethod;

    /// Path segment appended to the base URL
    fn endpoint(&self) -> &'static str;

    fn expected_status(&self) -> u16 {
        200
    }

    /// JSON body to send, if any
    fn payload(&self, _ctx: &CheckContext) -> Option<serde_json::Value> {
        None
    }

    /// Line printed after the check fails
    fn failure_hint(&self) -> &'static str;
}
