//! Result Emitter
//!
//! Writes a result record as indented JSON, normally to stdout.

use restcase_domain::TestResult;
use thiserror::Error;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::serialization::{SerializationError, to_json_pretty};

/// Errors raised while emitting a result.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The result could not be serialized.
    #[error("error serializing test result: {0}")]
    Serialize(#[from] SerializationError),

    /// The result could not be written.
    #[error("error writing test result: {0}")]
    Write(#[from] std::io::Error),
}

/// Serializes `result` with two-space indentation and a trailing newline,
/// writes it to `writer` and flushes.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub async fn emit_result<W>(mut writer: W, result: &TestResult) -> Result<(), OutputError>
where
    W: AsyncWrite + Unpin,
{
    let json = to_json_pretty(result)?;
    writer.write_all(json.as_bytes()).await?;
    writer.flush().await?;

    tracing::info!(pass_fail = %result.pass_fail, "result emitted");
    Ok(())
}
