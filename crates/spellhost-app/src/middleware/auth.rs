//! Token check for the catalog endpoint.
//!
//! The token may arrive as `Authorization: token <t>`,
//! `Authorization: Bearer <t>` or a `?token=<t>` query parameter.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::errors::AppError;
use crate::state::AppState;

fn header_token(request: &Request) -> Option<&str> {
    let value = request.headers().get(AUTHORIZATION)?.to_str().ok()?;
    value
        .strip_prefix("token ")
        .or_else(|| value.strip_prefix("Bearer "))
        .map(str::trim)
}

/// First `token` parameter of the query string. Other parameters, repeats
/// and malformed pairs are ignored.
fn query_token(request: &Request) -> Option<&str> {
    request
        .uri()
        .query()?
        .split('&')
        .find_map(|pair| pair.strip_prefix("token="))
}

pub async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = state.config.auth.token.as_deref() else {
        return Ok(next.run(request).await);
    };

    let presented = header_token(&request).or_else(|| query_token(&request));
    if presented != Some(expected) {
        tracing::debug!(path = %request.uri().path(), "rejected request without a valid token");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
