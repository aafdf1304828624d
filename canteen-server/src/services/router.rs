use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::{BoxError, Router, middleware};
use http::{Method, Uri};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;
use crate::utils::{AppError, ErrorCode};

/// Request bodies are small JSON documents
const MAX_BODY_BYTES: usize = 64 * 1024;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = std::time::Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();

    tracing::info!(target: "http_access", "{} {} {} {}ms", method, uri, status, elapsed_ms);

    response
}

/// Errors raised by the tower layers, rendered in the shared envelope
async fn handle_layer_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::new(ErrorCode::RequestTimeout)
    } else {
        AppError::internal(format!("unhandled layer error: {err}"))
    }
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::with_message(
        ErrorCode::MethodNotAllowed,
        format!("{} is not supported on {}", method, uri.path()),
    )
    .with_detail("method", method.as_str())
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::menu::router())
        .merge(crate::api::orders::router())
        // Applies to the routes merged above
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
}

/// Router with state and the cross-cutting layers applied
///
/// Layer order, outermost first: access log, CORS, timeout, body limit.
pub fn build_router(state: ServerState) -> Router {
    let timeout = state.config.request_timeout();

    build_app()
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(log_request))
                .layer(CorsLayer::permissive())
                .layer(HandleErrorLayer::new(handle_layer_error))
                .layer(TimeoutLayer::new(timeout)),
        )
}
