//! Serialization helpers.

mod json;

pub use json::{SerializationError, from_json_bytes, lossy_utf8, to_json_pretty};
