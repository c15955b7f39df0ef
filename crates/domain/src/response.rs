//! Observed HTTP response

use std::time::Duration;

use serde_json::Value;

use crate::body::Body;
use crate::case::Header;
use crate::result::Actual;

/// A fully received HTTP response whose body decoded as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers in wire order.
    pub headers: Vec<Header>,
    /// Decoded JSON body.
    pub body: Value,
    /// Time from send until the body was fully read.
    pub latency: Duration,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(status: u16, headers: Vec<Header>, body: Value, latency: Duration) -> Self {
        Self {
            status,
            headers,
            body,
            latency,
        }
    }

    /// Returns the latency in whole milliseconds, saturating at `i64::MAX`.
    #[must_use]
    pub fn latency_ms(&self) -> i64 {
        i64::try_from(self.latency.as_millis()).unwrap_or(i64::MAX)
    }

    /// Returns true if this is a 2xx success status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Projects this response onto the `Actual` shape.
    #[must_use]
    pub fn to_actual(&self) -> Actual {
        Actual {
            http_code: i64::from(self.status),
            latency_ms: self.latency_ms(),
            headers: Some(self.headers.clone()),
            body: Body::Text(self.body.to_string()),
        }
    }
}
