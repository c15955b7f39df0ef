//! restcase - Main Entry Point
//!
//! Reads one test case from stdin, executes its request and writes the
//! result record to stdout. Diagnostics go to stderr; any failure exits
//! with status 1 and writes nothing to stdout.

use std::process::ExitCode;
use std::sync::Arc;

use restcase_application::{ApplicationError, RunTestCase};
use restcase_domain::RunnerSettings;
use restcase_infrastructure::{
    InputError, OutputError, ReqwestHttpClient, SystemClock, emit_result, read_test_case,
};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "RESTCASE_LOG";

/// Any error that ends a run.
#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the result
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(RunError::Input(error)) => {
            tracing::error!(%error, "failed to read test case");
            if let Some(raw) = error.raw_input() {
                tracing::error!(input = %raw, "input that failed to parse");
            }
            ExitCode::FAILURE
        }
        Err(error) => {
            tracing::error!(%error, "test case aborted");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), RunError> {
    let settings = RunnerSettings::from_lookup(|key| std::env::var(key).ok())
        .map_err(ApplicationError::from)?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        timeout_ms = settings.timeout_ms,
        "starting restcase"
    );

    let case = read_test_case(tokio::io::stdin()).await?;
    tracing::debug!(?case, "test case");

    let client = ReqwestHttpClient::new(&settings).map_err(ApplicationError::from)?;
    let use_case = RunTestCase::new(Arc::new(client), Arc::new(SystemClock::new()));

    let result = use_case
        .run_with_cancellation(&case, interrupted())
        .await?;

    emit_result(tokio::io::stdout(), &result).await?;
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed, never resolves.
async fn interrupted() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "could not listen for interrupt");
        std::future::pending::<()>().await;
    }
}
