//! Clock port for time-related operations

use chrono::{DateTime, FixedOffset};

/// Port for getting the current time.
///
/// This abstraction allows testing time-dependent code by providing
/// a mock implementation.
pub trait Clock: Send + Sync {
    /// Returns the current time with the offset it should be reported in.
    fn now(&self) -> DateTime<FixedOffset>;
}
