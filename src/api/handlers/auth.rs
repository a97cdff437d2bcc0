//! Authentication handlers: login, logout, session lookup, and the
//! bearer-token guard used by the admin endpoints.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use crate::api::dto::{LoginRequest, SessionResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};
use crate::service::auth_service::Session;

/// Extracts the bearer session token from the `Authorization` header.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] when the header is missing,
/// not a bearer credential, or not a UUID.
pub fn bearer_token(headers: &HeaderMap) -> Result<Uuid, GatewayError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(GatewayError::Unauthorized("missing bearer token"))?;
    let token = value
        .strip_prefix("Bearer ")
        .ok_or(GatewayError::Unauthorized("missing bearer token"))?;
    Uuid::parse_str(token.trim()).map_err(|_| GatewayError::Unauthorized("malformed session token"))
}

/// Guard for the admin endpoints: resolves the caller's session or
/// rejects with 401.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] for a missing/expired session
/// and a persistence error when the lookup fails.
pub async fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<Session, GatewayError> {
    let token = bearer_token(headers)?;
    state.auth.require_session(token).await
}

/// `POST /auth/login` — Sign in with an email/password pair.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidCredentials`] when the pair does not
/// match an admin user.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Auth",
    summary = "Admin sign-in",
    description = "Verifies credentials against the store and returns a bearer session token.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session created", body = SessionResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let session = state.auth.sign_in(&req.email, &req.password).await?;
    Ok(Json(SessionResponse::from(session)))
}

/// `POST /auth/logout` — End the current session.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] on a malformed token.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = "Auth",
    summary = "Admin sign-out",
    description = "Deletes the session named by the bearer token. Unknown tokens are ignored.",
    responses(
        (status = 204, description = "Session ended"),
        (status = 401, description = "Malformed token", body = ErrorResponse),
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    let token = bearer_token(&headers)?;
    state.auth.sign_out(token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /auth/session` — Fetch the current session, if any.
///
/// Used by the admin UI at startup to decide whether to show the login
/// form. An absent or expired session is a 401, not an error page.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] when no valid session exists.
#[utoipa::path(
    get,
    path = "/api/v1/auth/session",
    tag = "Auth",
    summary = "Current session",
    description = "Returns the session for the presented bearer token when it is still valid.",
    responses(
        (status = 200, description = "Valid session", body = SessionResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    let session = require_admin(&state, &headers).await?;
    Ok(Json(SessionResponse::from(session)))
}

/// Auth routes mounted under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let Ok(value) = HeaderValue::from_str(value) else {
            panic!("header value");
        };
        headers.insert(header::AUTHORIZATION, value);
        headers
    }

    #[test]
    fn bearer_token_parses_valid_header() {
        let token = Uuid::new_v4();
        let headers = headers_with_authorization(&format!("Bearer {token}"));
        assert_eq!(bearer_token(&headers).ok(), Some(token));
    }

    #[test]
    fn bearer_token_rejects_missing_header() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(GatewayError::Unauthorized(_))
        ));
    }

    #[test]
    fn bearer_token_rejects_non_bearer_scheme() {
        let headers = headers_with_authorization("Basic abc123");
        assert!(matches!(
            bearer_token(&headers),
            Err(GatewayError::Unauthorized(_))
        ));
    }

    #[test]
    fn bearer_token_rejects_non_uuid_token() {
        let headers = headers_with_authorization("Bearer not-a-uuid");
        assert!(matches!(
            bearer_token(&headers),
            Err(GatewayError::Unauthorized(_))
        ));
    }
}
