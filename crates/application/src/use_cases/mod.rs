//! Use cases
//!
//! Use cases orchestrate domain types and ports to implement a run.

mod build_request;
mod run_test_case;

pub use build_request::{BuiltRequest, build_request};
pub use run_test_case::{RunTestCase, format_timestamp};
