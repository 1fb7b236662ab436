//! Health check and utility handlers.

use axum::http::StatusCode;
use tokio::time::sleep;

use crate::http::state::AppState;

/// Health check endpoint.
///
/// # Returns
///
/// Returns "ok" if the server is healthy.
pub async fn healthz() -> &'static str {
    "ok"
}

/// Apply the global latency and error rate ahead of chain dispatch.
///
/// Runs before any mock handler sees the request, so a request every handler
/// would decline is delayed too and, when the error roll hits, gets 503
/// instead of 404.
///
/// # Parameters
///
/// - `state` - Application state with latency and error rate configuration
///
/// # Returns
///
/// Returns `Ok(())` to continue dispatch, or `Err(StatusCode::SERVICE_UNAVAILABLE)` when a failure is simulated.
pub async fn maybe_latency_and_error(state: &AppState) -> Result<(), StatusCode> {
    if !state.mock.latency.is_zero() {
        sleep(state.mock.latency).await;
    }
    if state.mock.error_rate > 0.0 && rand::random::<f32>() < state.mock.error_rate {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;

    use super::*;

    /// Test health endpoint.
    #[tokio::test]
    async fn test_healthz() {
        assert_eq!(healthz().await, "ok");
    }

    /// Test that zero error rate never fails.
    #[tokio::test]
    async fn test_no_simulated_error() {
        let state = AppState::builder().build().expect("valid configuration");
        for _ in 0..100 {
            assert!(maybe_latency_and_error(&state).await.is_ok());
        }
    }

    /// Test that full error rate always fails.
    #[tokio::test]
    async fn test_full_error_rate() {
        let state = AppState::builder().with_error_rate(1.0).build().expect("valid configuration");
        assert_eq!(maybe_latency_and_error(&state).await, Err(StatusCode::SERVICE_UNAVAILABLE));
    }

    /// Test that latency is applied.
    #[tokio::test(start_paused = true)]
    async fn test_latency_applied() {
        let state = AppState::builder()
            .with_latency(Duration::from_millis(300))
            .build()
            .expect("valid configuration");

        let started = Instant::now();
        maybe_latency_and_error(&state).await.expect("no simulated error");
        assert!(started.elapsed() >= Duration::from_millis(300));
    }
}
