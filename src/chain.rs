//! Ordered registry of mock handlers.
//!
//! Each registered handler is a mock route record. Requests are offered to the
//! handlers in registration order and the first one that responds wins; a
//! declined request falls through to the next handler.

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::fixtures::FixtureBook;
use crate::handlers::{users_handler, MockHandler, MockRequest, RandomNumberHandler};

/// Immutable, shareable list of mock handlers.
#[derive(Debug, Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn MockHandler>>,
}

impl HandlerChain {
    /// Create an empty chain. Every request is declined.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chain with the built-in console handlers.
    ///
    /// # Parameters
    ///
    /// - `users_delay` - Artificial delay for `GET /users`
    ///
    /// # Returns
    ///
    /// Returns a chain serving `/random/number` and `GET /users`.
    ///
    /// # Errors
    ///
    /// Returns error if the users fixture cannot be encoded.
    pub fn with_builtins(users_delay: Duration) -> serde_json::Result<Self> {
        Ok(Self::new().with(RandomNumberHandler::new()).with(users_handler(users_delay)?))
    }

    /// Assemble the server chain: fixture stubs first, then the built-ins.
    ///
    /// Fixture stubs come first so they can override built-in routes.
    ///
    /// # Parameters
    ///
    /// - `fixtures` - Optional YAML fixture file
    /// - `users_delay` - Artificial delay for `GET /users`
    ///
    /// # Errors
    ///
    /// Returns `io::ErrorKind::InvalidInput` if the fixture file cannot be
    /// loaded or describes an invalid route.
    pub fn from_config(fixtures: Option<&Path>, users_delay: Duration) -> io::Result<Self> {
        let overrides = match fixtures {
            Some(path) => FixtureBook::load_from_path(path)
                .and_then(FixtureBook::into_chain)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?,
            None => Self::new(),
        };
        let builtins = Self::with_builtins(users_delay).map_err(io::Error::other)?;
        Ok(overrides.extend(builtins))
    }

    /// Append a handler after the ones already registered.
    pub fn with(mut self, handler: impl MockHandler + 'static) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Append all handlers of `other` after the ones already registered.
    pub fn extend(mut self, other: HandlerChain) -> Self {
        self.handlers.extend(other.handlers);
        self
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Offer the request to each handler in order.
    ///
    /// # Parameters
    ///
    /// - `request` - Incoming request
    ///
    /// # Returns
    ///
    /// Returns the body of the first handler that responds, or `None` if every
    /// handler declined.
    pub async fn dispatch(&self, request: &MockRequest) -> Option<Value> {
        for handler in &self.handlers {
            if let Some(body) = handler.handle(request).await {
                debug!(
                    handler = handler.name(),
                    method = %request.method,
                    path = %request.path,
                    "mock responded"
                );
                return Some(body);
            }
        }
        debug!(method = %request.method, path = %request.path, "all mock handlers declined");
        None
    }
}
