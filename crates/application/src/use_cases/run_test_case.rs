//! Run Test Case Use Case
//!
//! Builds the request, executes it once and assembles the result record.
//! The expectation is echoed, not evaluated: every completed run passes.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, SecondsFormat};
use restcase_domain::{TestCase, TestResult};

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{Clock, HttpClient};
use crate::use_cases::build_request;

/// Formats a timestamp as RFC 3339 with second precision.
///
/// A zero offset is written as `Z`.
#[must_use]
pub fn format_timestamp(now: DateTime<FixedOffset>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Use case for running a single test case.
///
/// # Example
///
/// ```ignore
/// let client = ReqwestHttpClient::new(&RunnerSettings::default())?;
/// let use_case = RunTestCase::new(Arc::new(client), Arc::new(SystemClock::new()));
///
/// let result = use_case.run(&case).await?;
/// ```
pub struct RunTestCase<C: HttpClient, K: Clock> {
    client: Arc<C>,
    clock: Arc<K>,
}

impl<C: HttpClient, K: Clock> RunTestCase<C, K> {
    /// Creates a new `RunTestCase` use case.
    pub const fn new(client: Arc<C>, clock: Arc<K>) -> Self {
        Self { client, clock }
    }

    /// Runs the test case and returns the result record.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Http` if the request cannot be built,
    /// the exchange fails, or the response body is not JSON.
    pub async fn run(&self, case: &TestCase) -> ApplicationResult<TestResult> {
        let built = build_request(case);

        tracing::info!(
            id = %built.test_info.id,
            verb = %built.request.verb,
            url = %built.request.url,
            "executing test case"
        );

        let response = self.client.execute(&built.request).await?;

        tracing::info!(
            status = response.status,
            success = response.is_success(),
            latency_ms = response.latency_ms(),
            "response received"
        );
        tracing::debug!(headers = ?response.headers, body = %response.body, "response detail");
        if let Some(expected) = built.expect.body.as_json() {
            tracing::debug!(%expected, "expected body (not evaluated)");
        } else if built.expect.body.is_absent() {
            tracing::debug!("no expected body");
        }
        tracing::debug!(actual = ?response.to_actual(), "observed outcome (not evaluated)");

        let timestamp = format_timestamp(self.clock.now());
        Ok(TestResult::pass(
            timestamp,
            built.test_info,
            built.request,
            built.expect,
        ))
    }

    /// Runs the test case unless `cancel` resolves first.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Cancelled` if `cancel` completes before the
    /// run, otherwise the same errors as [`Self::run`].
    pub async fn run_with_cancellation<F>(
        &self,
        case: &TestCase,
        cancel: F,
    ) -> ApplicationResult<TestResult>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            result = self.run(case) => result,
            () = cancel => {
                tracing::warn!(id = %case.test_info.id, "test case cancelled");
                Err(ApplicationError::Cancelled)
            }
        }
    }
}
