//! Authentication DTOs for the admin area.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::service::auth_service::Session;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Admin email.
    pub email: String,
    /// Admin password.
    pub password: String,
}

/// Response body for `POST /auth/login` and `GET /auth/session`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Opaque bearer token for subsequent admin requests.
    pub token: uuid::Uuid,
    /// Signed-in admin's email.
    pub email: String,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            token: session.token,
            email: session.email,
            expires_at: session.expires_at,
        }
    }
}
