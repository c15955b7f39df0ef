//! HTTP Client port

use std::future::Future;
use std::pin::Pin;

use restcase_domain::{HttpResponse, Request};
use thiserror::Error;

/// Boxed future returned by [`HttpClient::execute`].
pub type HttpFuture<'a> =
    Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError>> + Send + 'a>>;

/// Errors raised while building, sending or decoding an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// The verb is not a valid HTTP method token.
    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The URL could not be parsed or uses an unsupported scheme.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The exchange did not finish within the deadline.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The deadline that was exceeded.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("could not resolve host `{host}`: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying error text.
        message: String,
    },

    /// The remote end refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The redirect limit was exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Redirect limit.
        max: usize,
    },

    /// The response body is not valid JSON.
    #[error("response body (status {status}) is not valid JSON: {message}")]
    InvalidJsonBody {
        /// Status code of the response.
        status: u16,
        /// Decoder error text.
        message: String,
    },

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

impl HttpClientError {
    /// Returns true if the error was raised before any network I/O.
    #[must_use]
    pub const fn is_construction_error(&self) -> bool {
        matches!(self, Self::InvalidMethod(_) | Self::InvalidUrl(_))
    }
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
pub trait HttpClient: Send + Sync {
    /// Executes the request's verb against its URL and returns the response
    /// with its body decoded as JSON.
    ///
    /// The payload is not sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, the exchange fails,
    /// or the body is not JSON.
    fn execute<'a>(&'a self, request: &Request) -> HttpFuture<'a>;
}
