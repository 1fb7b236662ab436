//! Static responder bound to a path and optional method.

use std::time::Duration;

use async_trait::async_trait;
use axum::http::Method;
use serde_json::Value;
use tokio::time::sleep;

use crate::handlers::{MockHandler, MockRequest};

/// Responds with a fixed JSON body after an optional delay.
///
/// The delay is unconditional once the request matched: there is no
/// cancellation or retry. Non-matching requests are declined immediately.
#[derive(Debug, Clone)]
pub struct StubHandler {
    name: String,
    path: String,
    method: Option<Method>,
    delay: Duration,
    body: Value,
}

impl StubHandler {
    /// Create a stub that matches `path` with any method and no delay.
    ///
    /// # Parameters
    ///
    /// - `path` - Exact URL path to answer
    /// - `body` - JSON body returned on every match
    ///
    /// # Returns
    ///
    /// Returns a new `StubHandler` instance.
    pub fn new(path: impl Into<String>, body: Value) -> Self {
        let path = path.into();
        Self { name: format!("stub {path}"), path, method: None, delay: Duration::ZERO, body }
    }

    /// Restrict the stub to a single HTTP method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Delay every response by `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Override the name used in logs.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Path this stub answers.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Method restriction, `None` for any method.
    pub fn method(&self) -> Option<&Method> {
        self.method.as_ref()
    }

    /// Artificial delay applied before responding.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Check whether this stub owns the request.
    pub fn matches(&self, request: &MockRequest) -> bool {
        if request.path != self.path {
            return false;
        }
        self.method.as_ref().map_or(true, |m| *m == request.method)
    }
}

#[async_trait]
impl MockHandler for StubHandler {
    async fn handle(&self, request: &MockRequest) -> Option<Value> {
        if !self.matches(request) {
            return None;
        }
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        Some(self.body.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
