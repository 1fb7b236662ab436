//! API types for HTTP handlers.

use serde::Serialize;

/// Body returned when no mock handler answered a request.
#[derive(Debug, Serialize)]
pub struct NotMockedResponse<'a> {
    /// Error kind, always `not_found`
    pub error: &'a str,
    /// Human readable message
    pub message: &'a str,
    /// HTTP method of the unmatched request
    pub method: &'a str,
    /// Path of the unmatched request
    pub path: &'a str,
}

impl<'a> NotMockedResponse<'a> {
    /// Describe an unmatched request.
    pub fn new(method: &'a str, path: &'a str) -> Self {
        Self { error: "not_found", message: "no mock handler matched", method, path }
    }
}
