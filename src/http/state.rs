//! Application state and configuration for the HTTP server.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::chain::HandlerChain;

/// Mock behavior configuration applied to every mocked request.
///
/// Settings for simulating latency and errors on top of whatever the
/// individual handlers do.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Artificial delay added before dispatch
    pub latency: Duration,
    /// Probability (0.0-1.0) of returning 503 errors
    pub error_rate: f32,
}

/// Application state shared across all HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Mock handlers consulted for every request
    pub chain: Arc<HandlerChain>,
    /// Mock behavior configuration
    pub mock: MockConfig,
}

impl AppState {
    /// Create new application state.
    ///
    /// # Parameters
    ///
    /// - `chain` - Mock handlers in match order
    /// - `latency` - Artificial delay to add before dispatch
    /// - `error_rate` - Probability (0.0-1.0) of returning 503 errors
    ///
    /// # Returns
    ///
    /// Returns configured `AppState` instance.
    pub fn new(chain: HandlerChain, latency: Duration, error_rate: f32) -> Self {
        Self { chain: Arc::new(chain), mock: MockConfig { latency, error_rate } }
    }

    /// Get a builder for configuring application state step by step.
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new()
    }
}

/// Builder for constructing `AppState` with a fluent interface.
#[derive(Debug, Default)]
pub struct AppStateBuilder {
    chain: Option<HandlerChain>,
    latency: Option<Duration>,
    error_rate: Option<f32>,
}

impl AppStateBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the handler chain.
    ///
    /// # Parameters
    ///
    /// - `chain` - Mock handlers in match order
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_chain(mut self, chain: HandlerChain) -> Self {
        self.chain = Some(chain);
        self
    }

    /// Set artificial latency for response simulation.
    ///
    /// # Parameters
    ///
    /// - `latency` - Delay to add before dispatch
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Set error rate for response simulation.
    ///
    /// # Parameters
    ///
    /// - `error_rate` - Probability (0.0-1.0) of returning errors
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_error_rate(mut self, error_rate: f32) -> Self {
        self.error_rate = Some(error_rate);
        self
    }

    /// Build the final `AppState` with validation.
    ///
    /// An unset chain leaves every request unmocked.
    ///
    /// # Errors
    ///
    /// Returns error if error_rate is outside `0.0..=1.0`.
    pub fn build(self) -> io::Result<AppState> {
        if let Some(rate) = self.error_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Error rate must be between 0.0 and 1.0, got: {rate}"),
                ));
            }
        }

        let chain = self.chain.unwrap_or_default();
        let latency = self.latency.unwrap_or_default();
        let error_rate = self.error_rate.unwrap_or(0.0);

        Ok(AppState::new(chain, latency, error_rate))
    }
}
