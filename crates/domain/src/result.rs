//! Test result envelope

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::case::{Expect, Header, Request, TestInfo};

/// Verdict of a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassFail {
    /// The run passed.
    #[default]
    Pass,
    /// The run failed.
    Fail,
}

impl PassFail {
    /// Returns the verdict as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for PassFail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observed outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actual {
    /// Observed HTTP status code.
    pub http_code: i64,
    /// Observed latency in milliseconds.
    pub latency_ms: i64,
    /// Observed response headers.
    pub headers: Option<Vec<Header>>,
    /// Observed body as raw text.
    pub body: Body,
}

impl Default for Actual {
    fn default() -> Self {
        Self {
            http_code: 0,
            latency_ms: 0,
            headers: None,
            body: Body::Text(String::new()),
        }
    }
}

/// The record written to standard output after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Verdict.
    pub pass_fail: PassFail,
    /// RFC 3339 time of emission.
    pub timestamp: String,
    /// Echoed metadata.
    pub test_info: TestInfo,
    /// Echoed request (verb and URL only).
    pub request: Request,
    /// Echoed expectation.
    pub expect: Expect,
    /// Observed outcome. Always zero-valued in emitted results.
    pub actual: Actual,
}

impl TestResult {
    /// Creates a passing result with a zero-valued `actual`.
    #[must_use]
    pub fn pass(
        timestamp: impl Into<String>,
        test_info: TestInfo,
        request: Request,
        expect: Expect,
    ) -> Self {
        Self {
            pass_fail: PassFail::Pass,
            timestamp: timestamp.into(),
            test_info,
            request,
            expect,
            actual: Actual::default(),
        }
    }
}
