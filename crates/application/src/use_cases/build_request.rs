//! Request Builder
//!
//! Projects a parsed test case into the parts the rest of the run needs.

use restcase_domain::{Expect, Request, TestCase, TestInfo};

/// The projection of a test case used for execution and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRequest {
    /// Metadata, copied as-is.
    pub test_info: TestInfo,
    /// Verb and URL. The payload is left empty.
    pub request: Request,
    /// Expectation, copied as-is.
    pub expect: Expect,
}

/// Builds the request projection of a test case.
///
/// The payload is dropped here and never reaches the wire. Verb and URL
/// are not validated; the HTTP adapter reports bad values.
#[must_use]
pub fn build_request(case: &TestCase) -> BuiltRequest {
    BuiltRequest {
        test_info: case.test_info.clone(),
        request: Request::new(case.request.verb.clone(), case.request.url.clone()),
        expect: case.expect.clone(),
    }
}
