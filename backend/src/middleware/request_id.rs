use axum::{
    extract::Request,
    http::{header::HeaderName, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Identifier of the current request, available as a request extension.
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

fn inbound_id(headers: &HeaderMap) -> Option<String> {
    [REQUEST_ID_HEADER, CORRELATION_ID_HEADER]
        .into_iter()
        .filter_map(|name| headers.get(name))
        .filter_map(|value| value.to_str().ok())
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Reuses the caller's request or correlation id, or mints a UUID, and echoes
/// it back in `x-request-id`.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = inbound_id(req.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());
    req.extensions_mut().insert(RequestId(id.clone()));

    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}
