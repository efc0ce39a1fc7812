//! HTTP API
//!
//! - [`health`] - health check
//! - [`hotels`] - `/api/hotels` CRUD
//! - [`rooms`] - `/api/room` CRUD
//!
//! [`crud`] holds the handler logic both resources share.

pub mod crud;
pub mod health;
pub mod hotels;
pub mod rooms;

use axum::error_handling::HandleErrorLayer;
use axum::{BoxError, Router};
use std::time::Duration;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware::{REQUEST_ID_HEADER, logging_middleware};
use crate::utils::{AppError, ErrorCode};

/// UUID v4 request ids
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(hotels::router())
        .merge(rooms::router())
}

/// Requests running longer than `timeout` answer 408 with the error envelope
pub fn with_request_timeout(router: Router, timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_timeout))
            .timeout(timeout),
    )
}

async fn handle_timeout(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("Request timed out");
        AppError::new(ErrorCode::RequestTimeout)
    } else {
        AppError::internal(format!("Unhandled middleware error: {err}"))
    }
}

/// Build the fully configured application: routes, middleware and state.
///
/// Used by the HTTP server and by in-process tests.
pub fn build_app(state: ServerState) -> Router {
    let timeout = state.config.request_timeout();

    with_request_timeout(build_router().with_state(state), timeout).layer(
        // Listed outermost first
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(
                HeaderName::from_static(REQUEST_ID_HEADER),
                XRequestId,
            ))
            .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                REQUEST_ID_HEADER,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(axum_middleware::from_fn(logging_middleware))
            .layer(CorsLayer::permissive()),
    )
}
