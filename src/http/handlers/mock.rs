//! Fallback handler that forwards requests to the mock handler chain.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};

use crate::handlers::MockRequest;
use crate::http::handlers::health::maybe_latency_and_error;
use crate::http::state::AppState;
use crate::http::types::NotMockedResponse;

/// Offer the request to the mock handler chain.
///
/// # Parameters
///
/// - `state` - Application state with the handler chain
/// - `method` - Request method
/// - `uri` - Request URI, only the path is inspected
///
/// # Returns
///
/// Returns 200 with the first handler's body, or 404 if every handler declined.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> impl IntoResponse {
    if let Err(code) = maybe_latency_and_error(&state).await {
        return (code, "simulated failure").into_response();
    }

    let request = MockRequest::new(method, uri.path());
    if let Some(body) = state.chain.dispatch(&request).await {
        return (StatusCode::OK, Json(body)).into_response();
    }

    (
        StatusCode::NOT_FOUND,
        Json(NotMockedResponse::new(request.method.as_str(), &request.path)),
    )
        .into_response()
}
