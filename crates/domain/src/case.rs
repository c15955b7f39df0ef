//! Test case input types
//!
//! A test case is read once per run: metadata, the request to issue and the
//! expected outcome. Decoding is lenient in the same way everywhere: unknown
//! fields are ignored, and a missing or `null` field takes its zero value.

use serde::{Deserialize, Deserializer, Serialize};

use crate::body::Body;

/// Decodes `null` as the type's default value.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identifying metadata for a test case. Not used during execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestInfo {
    /// Test case identifier.
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    /// Free-form description.
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Version of the test case.
    #[serde(deserialize_with = "nullable")]
    pub version: String,
    /// Date the test case was last uploaded.
    #[serde(deserialize_with = "nullable")]
    pub date_uploaded: String,
    /// Author of the test case.
    #[serde(deserialize_with = "nullable")]
    pub author: String,
}

/// A single header name/value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    /// Header name (e.g., "Content-Type").
    #[serde(deserialize_with = "nullable")]
    pub header: String,
    /// Header value.
    #[serde(deserialize_with = "nullable")]
    pub value: String,
}

impl Header {
    /// Creates a new header.
    #[must_use]
    pub fn new(header: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            value: value.into(),
        }
    }
}

/// Request body and headers as declared by the test case.
///
/// The payload is decoded and echoed but never sent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payload {
    /// Headers to send. `None` is written as `null`.
    pub headers: Option<Vec<Header>>,
    /// Raw request body.
    #[serde(deserialize_with = "nullable")]
    pub body: String,
}

/// The request to issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    /// HTTP method string, passed through unvalidated.
    #[serde(deserialize_with = "nullable")]
    pub verb: String,
    /// Target URL, passed through unvalidated.
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    /// Declared payload.
    #[serde(deserialize_with = "nullable")]
    pub payload: Payload,
}

impl Request {
    /// Creates a request with an empty payload.
    #[must_use]
    pub fn new(verb: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            url: url.into(),
            payload: Payload::default(),
        }
    }
}

/// The expected outcome of a test case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expect {
    /// How the response body should be interpreted.
    #[serde(deserialize_with = "nullable")]
    pub parse_as: String,
    /// Expected HTTP status code.
    #[serde(deserialize_with = "nullable")]
    pub http_code: i64,
    /// Maximum allowed latency in milliseconds.
    #[serde(deserialize_with = "nullable")]
    pub max_latency_ms: i64,
    /// Expected response headers.
    pub headers: Option<Vec<Header>>,
    /// Expected response body.
    pub body: Body,
}

/// A complete test case as read from input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestCase {
    /// Metadata.
    #[serde(deserialize_with = "nullable")]
    pub test_info: TestInfo,
    /// Request to issue.
    #[serde(deserialize_with = "nullable")]
    pub request: Request,
    /// Expected outcome.
    #[serde(deserialize_with = "nullable")]
    pub expect: Expect,
}
