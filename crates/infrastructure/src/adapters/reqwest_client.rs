//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It sends the verb and URL of a request with no body and no custom
//! headers, then decodes the response body as JSON.

use std::error::Error as StdError;
use std::time::Instant;

use reqwest::{Client, Method};
use restcase_application::ports::{HttpClient, HttpClientError, HttpFuture};
use restcase_domain::{Header, HttpResponse, Request, RunnerSettings};
use serde_json::Value;
use url::Url;

use crate::serialization::lossy_utf8;

/// Maximum number of redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
///
/// Every request carries the deadline from [`RunnerSettings`], so a run can
/// never block indefinitely on the network.
pub struct ReqwestHttpClient {
    client: Client,
    timeout_ms: u64,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client from runner settings.
    ///
    /// Configuration:
    /// - Timeout: `settings.timeout_ms` for the whole exchange
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: `settings.user_agent`
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(settings: &RunnerSettings) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self {
            client,
            timeout_ms: settings.timeout_ms,
        })
    }

    /// Parses a verb into a method token. An empty verb means `GET`.
    fn parse_method(verb: &str) -> Result<Method, HttpClientError> {
        if verb.is_empty() {
            return Ok(Method::GET);
        }
        Method::from_bytes(verb.as_bytes())
            .map_err(|_| HttpClientError::InvalidMethod(verb.to_string()))
    }

    /// Parses a URL and requires an `http` or `https` scheme.
    fn parse_url(raw: &str) -> Result<Url, HttpClientError> {
        let url = Url::parse(raw).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {raw}")))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(HttpClientError::InvalidUrl(format!(
                "unsupported scheme `{other}`: {raw}"
            ))),
        }
    }

    /// Decodes the first JSON value in the body. Trailing bytes are ignored
    /// and invalid UTF-8 is replaced with U+FFFD.
    fn decode_body(status: u16, bytes: &[u8]) -> Result<Value, HttpClientError> {
        let bytes = lossy_utf8(bytes);
        let mut values = serde_json::Deserializer::from_slice(&bytes).into_iter::<Value>();
        match values.next() {
            Some(Ok(value)) => Ok(value),
            Some(Err(e)) => Err(HttpClientError::InvalidJsonBody {
                status,
                message: e.to_string(),
            }),
            None => Err(HttpClientError::InvalidJsonBody {
                status,
                message: "empty body".to_string(),
            }),
        }
    }

    /// Joins an error with all of its sources.
    fn error_chain(error: &reqwest::Error) -> String {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(inner) = source {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            source = inner.source();
        }
        message
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        let host = error
            .url()
            .and_then(Url::host_str)
            .unwrap_or("unknown")
            .to_string();

        if error.is_connect() {
            let message = Self::error_chain(error);
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                let port = error
                    .url()
                    .and_then(Url::port_or_known_default)
                    .unwrap_or(80);
                return HttpClientError::ConnectionRefused { host, port };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        HttpClientError::Other(Self::error_chain(error))
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute<'a>(&'a self, request: &Request) -> HttpFuture<'a> {
        let verb = request.verb.clone();
        let url = request.url.clone();
        let timeout_ms = self.timeout_ms;

        Box::pin(async move {
            let method = Self::parse_method(&verb)?;
            let parsed_url = Self::parse_url(&url)?;

            tracing::debug!(%method, url = %parsed_url, timeout_ms, "sending request");

            let start = Instant::now();

            let response = self
                .client
                .request(method, parsed_url)
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();

            let headers: Vec<Header> = response
                .headers()
                .iter()
                .map(|(k, v)| Header::new(k.as_str(), v.to_str().unwrap_or("<binary>")))
                .collect();

            let bytes = response
                .bytes()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let latency = start.elapsed();
            let body = Self::decode_body(status, &bytes)?;

            Ok(HttpResponse::new(status, headers, body, latency))
        })
    }
}
