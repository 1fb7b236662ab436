//! Numeric generator handler.

use async_trait::async_trait;
use rand::Rng;
use serde_json::{json, Value};

use crate::handlers::{MockHandler, MockRequest};

/// Path served by [`RandomNumberHandler`].
pub const RANDOM_NUMBER_PATH: &str = "/random/number";

/// Responds to `/random/number` (any method) with `{"value": "ddd"}`,
/// a zero-padded random integer in `1..=100`.
#[derive(Debug, Clone, Default)]
pub struct RandomNumberHandler;

impl RandomNumberHandler {
    /// Create a new numeric generator.
    pub fn new() -> Self {
        Self
    }
}

/// Format a number as a 3-digit zero-padded decimal string.
pub fn format_value(n: u32) -> String {
    format!("{n:03}")
}

fn roll() -> u32 {
    rand::thread_rng().gen_range(1..=100)
}

#[async_trait]
impl MockHandler for RandomNumberHandler {
    async fn handle(&self, request: &MockRequest) -> Option<Value> {
        if request.path != RANDOM_NUMBER_PATH {
            return None;
        }
        Some(json!({ "value": format_value(roll()) }))
    }

    fn name(&self) -> &str {
        "random-number"
    }
}
