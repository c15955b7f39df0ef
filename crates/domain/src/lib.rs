//! Restcase Domain - Core test case types
//!
//! This crate defines the data model for the restcase test runner.
//! All types here are pure Rust with no I/O dependencies.

pub mod body;
pub mod case;
pub mod error;
pub mod response;
pub mod result;
pub mod settings;

pub use body::Body;
pub use case::{Expect, Header, Payload, Request, TestCase, TestInfo};
pub use error::{DomainError, DomainResult};
pub use response::HttpResponse;
pub use result::{Actual, PassFail, TestResult};
pub use settings::RunnerSettings;
