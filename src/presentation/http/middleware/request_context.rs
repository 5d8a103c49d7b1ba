use crate::context::{RequestContext, RequestId};
use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Outermost middleware: assigns a fresh request id, attaches the
/// [`RequestContext`] (id + deadline) to the request, and logs arrival and
/// timing. The id is echoed in the `x-request-id` response header.
pub async fn request_context(
    State(timeout): State<Duration>,
    mut req: Request,
    next: Next,
) -> Response {
    let request_id = RequestId::generate();
    let ctx = RequestContext::new(request_id.clone()).with_timeout(timeout);

    tracing::debug!(
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
        "request arrived"
    );
    req.extensions_mut().insert(ctx);

    let started = Instant::now();
    let mut response = next.run(req).await;

    tracing::debug!(
        request_id = %request_id,
        status = response.status().as_u16(),
        duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "request timing"
    );

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(X_REQUEST_ID, value);
    }
    response
}
