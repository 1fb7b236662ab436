//! Mock handlers and the respond-or-decline contract they share.
//!
//! A mock handler inspects an incoming request and either produces a JSON body
//! or declines by returning `None`, letting the request fall through to the
//! next handler in the [`HandlerChain`](crate::chain::HandlerChain).

pub mod random;
pub mod stub;
pub mod users;

use async_trait::async_trait;
use axum::http::Method;
use serde_json::Value;

pub use random::RandomNumberHandler;
pub use stub::StubHandler;
pub use users::{users_handler, User, UserRole, UserStatus};

/// The parts of an incoming request a mock handler may inspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    /// HTTP method of the request
    pub method: Method,
    /// URL path without the query string
    pub path: String,
}

impl MockRequest {
    /// Create a new mock request.
    ///
    /// # Parameters
    ///
    /// - `method` - HTTP method
    /// - `path` - URL path, any query string is stripped
    ///
    /// # Returns
    ///
    /// Returns a new `MockRequest` instance.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let mut path = path.into();
        if let Some(idx) = path.find('?') {
            path.truncate(idx);
        }
        Self { method, path }
    }

    /// Shorthand for a `GET` request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }
}

/// A function simulating one backend endpoint.
///
/// Implementations must check the request path (and method, where they care)
/// before producing a body. Returning `None` declines the request.
#[async_trait]
pub trait MockHandler: Send + Sync + std::fmt::Debug {
    /// Respond to the request, or decline with `None`.
    async fn handle(&self, request: &MockRequest) -> Option<Value>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}
