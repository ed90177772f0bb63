use axum::{
    body::Body,
    extract::{Query, Request},
    http::{header, HeaderValue, StatusCode, Uri},
    middleware::Next,
    response::Response,
};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

use crate::shared::constants::{HEALTH_PATH_MARKER, HEALTH_QUERY_KEY, HEALTH_RESPONSE_BODY};

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

/// True when the request is a load balancer health check.
///
/// Matches a `health` query key (with or without a value, percent-encoded
/// or in `health[]` array form) or any path containing `/health`.
pub fn is_health_check(uri: &Uri) -> bool {
    if uri.path().contains(HEALTH_PATH_MARKER) {
        return true;
    }

    // An undecodable query string carries no usable flag
    let Ok(Query(pairs)) = Query::<Vec<(String, String)>>::try_from_uri(uri) else {
        return false;
    };

    pairs.iter().any(|(key, _)| query_key_name(key) == HEALTH_QUERY_KEY)
}

/// Base name of a query key, dropping an array suffix (`health[]`, `health[x]`).
fn query_key_name(key: &str) -> &str {
    key.split_once('[')
        .filter(|(_, rest)| rest.ends_with(']'))
        .map_or(key, |(name, _)| name)
}

/// Answers health checks before routing, for every method and path.
pub async fn health_check_middleware(req: Request, next: Next) -> Response {
    if !is_health_check(req.uri()) {
        return next.run(req).await;
    }

    tracing::debug!("Health check answered");

    let mut response = Response::new(Body::from(HEALTH_RESPONSE_BODY));
    *response.status_mut() = StatusCode::OK;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}
