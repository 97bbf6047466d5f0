//! Router assembly
//!
//! Registers every API router and wraps them in the tower-http stack.

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request id generator
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
        // Contract CRUD
        .merge(api::contratos::router())
        // Liveness
        .merge(api::health::router())
}

/// Build the application with all middleware; state is attached by the caller
///
/// Used by the HTTP server and by the integration tests
pub fn build_app() -> Router<ServerState> {
    build_router()
        // CORS - any origin, method and header
        .layer(CorsLayer::permissive())
        // Compression - gzip when the client accepts it
        .layer(CompressionLayer::new())
        // Trace - one span per request
        .layer(TraceLayer::new_for_http())
        // Echo the request ID on the response (inner: sees the id set below)
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - generated unless the client sent one (outermost)
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
