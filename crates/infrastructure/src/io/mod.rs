//! Standard stream adapters.

mod input;
mod output;

pub use input::{InputError, read_test_case};
pub use output::{OutputError, emit_result};
