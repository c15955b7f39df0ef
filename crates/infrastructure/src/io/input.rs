//! Input Reader
//!
//! Reads one test case document from an async byte source, normally stdin.

use restcase_domain::TestCase;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::serialization::{SerializationError, from_json_bytes};

/// Errors raised while reading a test case.
#[derive(Debug, Error)]
pub enum InputError {
    /// The source could not be read.
    #[error("error reading test case input: {0}")]
    Read(#[from] std::io::Error),

    /// The input is not a valid test case document.
    #[error("error parsing test case input: {source}")]
    Parse {
        /// The raw input, lossily decoded for diagnostics.
        raw: String,
        /// The decoder error.
        #[source]
        source: SerializationError,
    },
}

impl InputError {
    /// Returns the raw input that failed to parse, if any.
    #[must_use]
    pub fn raw_input(&self) -> Option<&str> {
        match self {
            Self::Read(_) => None,
            Self::Parse { raw, .. } => Some(raw),
        }
    }
}

/// Reads all bytes from `reader` and decodes them as a test case.
///
/// # Errors
///
/// Returns `InputError::Read` if reading fails and `InputError::Parse`
/// if the bytes are not a structurally valid test case.
pub async fn read_test_case<R>(mut reader: R) -> Result<TestCase, InputError>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;

    tracing::debug!(bytes = bytes.len(), "read test case input");

    from_json_bytes(&bytes).map_err(|source| InputError::Parse {
        raw: String::from_utf8_lossy(&bytes).into_owned(),
        source,
    })
}
