//! Bearer token authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info_span, Instrument};

use common::{AppError, AppResult};
use domain::BEARER_TOKEN_PREFIX;

use crate::http::AppState;

/// Reject requests without a valid bearer token.
///
/// A missing or non-bearer header is `UNAUTHORIZED`; a token that fails
/// verification reports its `AuthError` kind. The rest of the request runs
/// inside a span carrying the caller's id.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&request)?;
    let user_id = state.auth_service.verify_token(token)?;

    let span = info_span!("authenticated", user_id = %user_id);
    Ok(next.run(request).instrument(span).await)
}

/// Extract bearer token from Authorization header.
fn extract_token(request: &Request<Body>) -> AppResult<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with(header: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/products");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_token() {
        let request = request_with(Some("Bearer abc.def.ghi"));
        assert_eq!(extract_token(&request).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_extract_token_rejects_missing_or_wrong_scheme() {
        for header in [None, Some("Basic dXNlcjpwdw=="), Some("Bearer "), Some("abc.def.ghi")] {
            let request = request_with(header);
            assert!(matches!(extract_token(&request), Err(AppError::Unauthorized)));
        }
    }
}
