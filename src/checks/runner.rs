//! Check runner
//!
//! Executes checks one at a time against the status API, printing progress
//! lines and keeping the `TestRun` tally.

use std::time::Instant;
use tracing::{debug, info, warn};

use super::registry::CHECKS;
use super::report;
use super::traits::{Check, CheckContext, CheckOutcome, TestRun};
use crate::client::{ApiClient, HttpMethod, StatusCheck};

/// Runs smoke checks and counts how many passed
#[derive(Debug)]
pub struct ApiChecker {
    client: ApiClient,
    run: TestRun,
}

impl ApiChecker {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            run: TestRun::new(),
        }
    }

    /// Tally so far
    pub fn test_run(&self) -> &TestRun {
        &self.run
    }

    /// Issue one request and compare its status to `expected_status`
    ///
    /// Never fails: transport errors and status mismatches are reported and
    /// returned as a failed outcome. `attempted` is incremented on every call.
    pub async fn run_test(
        &mut self,
        name: &str,
        method: HttpMethod,
        endpoint: &str,
        expected_status: u16,
        payload: Option<&serde_json::Value>,
    ) -> CheckOutcome {
        println!("{}", report::testing(name));
        debug!(check = %name, method = %method, endpoint = %endpoint, expected_status, "Running check");

        let start = Instant::now();
        let result = self.client.send(method, endpoint, payload).await;
        let duration = start.elapsed();

        let outcome = match result {
            Ok(resp) if resp.status == expected_status => {
                println!("{}", report::passed(resp.status));
                info!(
                    check = %name,
                    status = resp.status,
                    duration_ms = duration.as_millis(),
                    "Check PASSED"
                );
                CheckOutcome::passed(name, resp.status, resp.json_or_empty(), duration)
            }
            Ok(resp) => {
                println!("{}", report::status_mismatch(expected_status, resp.status));
                println!("{}", report::response_body(&resp.body));
                warn!(
                    check = %name,
                    expected = expected_status,
                    actual = resp.status,
                    body = %resp.body,
                    "Check FAILED: unexpected status"
                );
                CheckOutcome::failed(
                    name,
                    Some(resp.status),
                    format!("Expected {expected_status}, got {}", resp.status),
                    duration,
                )
            }
            Err(e) => {
                println!("{}", report::transport_error(&e));
                let error = report::error_chain(&e);
                warn!(check = %name, error = %error, "Check FAILED: request error");
                CheckOutcome::failed(name, None, error, duration)
            }
        };

        self.run.record(outcome.success);
        outcome
    }

    /// Run one registered check, printing its hint if it fails
    pub async fn run_check(&mut self, check: &dyn Check, ctx: &CheckContext) -> CheckOutcome {
        let payload = check.payload(ctx);
        let outcome = self
            .run_test(
                check.name(),
                check.method(),
                check.endpoint(),
                check.expected_status(),
                payload.as_ref(),
            )
            .await;

        if !outcome.success {
            println!("{}", report::hint(check.failure_hint()));
        }
        outcome
    }

    /// Run the whole registered sequence, in order, and return the tally
    ///
    /// A failing check never stops the checks after it.
    pub async fn run_all(&mut self, ctx: &CheckContext) -> TestRun {
        info!(
            base_url = %self.client.base_url(),
            client_name = %ctx.client_name,
            checks = CHECKS.len(),
            "Starting smoke checks"
        );

        for check in CHECKS.values() {
            let outcome = self.run_check(check.as_ref(), ctx).await;
            if let Some(record) = outcome.parse::<StatusCheck>() {
                debug!(id = ?record.id, client_name = %record.client_name, "Status check record");
            }
        }

        println!("{}", report::summary(&self.run));
        if self.run.all_passed() {
            info!(tally = %self.run, "All checks PASSED");
        } else {
            warn!(tally = %self.run, failed = self.run.failed(), "Some checks FAILED");
        }
        self.run
    }
}
