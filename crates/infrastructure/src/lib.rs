//! Restcase Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus the stdin reader and
//! stdout emitter used by the binary.

pub mod adapters;
pub mod io;
pub mod serialization;

pub use adapters::{ReqwestHttpClient, SystemClock};
pub use io::{InputError, OutputError, emit_result, read_test_case};
pub use serialization::{SerializationError, from_json_bytes, lossy_utf8, to_json_pretty};
