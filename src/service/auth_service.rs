//! Admin authentication backed by store-held sessions.
//!
//! Admin credentials live in the store as SHA-256 digests; a successful
//! sign-in creates a session row whose token the client presents as a
//! bearer credential. The service itself keeps no session state.

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::GatewayError;
use crate::persistence::CatalogStore;
use crate::persistence::models::SessionRow;

/// An established admin session, as returned to the client.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque bearer token.
    pub token: Uuid,
    /// Signed-in admin's email.
    pub email: String,
    /// When the session stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Self {
            token: row.token,
            email: row.email,
            expires_at: row.expires_at,
        }
    }
}

/// Authentication operations: sign-in, sign-out, session lookup.
#[derive(Debug, Clone)]
pub struct AuthService {
    store: CatalogStore,
    session_ttl: Duration,
}

impl AuthService {
    /// Creates a new `AuthService` with the given session lifetime.
    #[must_use]
    pub fn new(store: CatalogStore, session_ttl_hours: i64) -> Self {
        Self {
            store,
            session_ttl: Duration::hours(session_ttl_hours),
        }
    }

    /// Verifies credentials and creates a session.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidCredentials`] when the email is
    /// unknown or the password does not match, and a persistence error
    /// when the store is unreachable.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, GatewayError> {
        let admin = self
            .store
            .find_admin(email)
            .await?
            .ok_or(GatewayError::InvalidCredentials)?;

        if password_digest(password) != admin.password_digest {
            return Err(GatewayError::InvalidCredentials);
        }

        let token = Uuid::new_v4();
        let expires_at = Utc::now() + self.session_ttl;
        self.store.create_session(token, admin.id, expires_at).await?;

        tracing::info!(email, "admin signed in");
        Ok(Session {
            token,
            email: admin.email,
            expires_at,
        })
    }

    /// Ends a session. Unknown tokens are ignored.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the delete fails.
    pub async fn sign_out(&self, token: Uuid) -> Result<(), GatewayError> {
        self.store.delete_session(token).await
    }

    /// Returns the session for `token` when it exists and has not
    /// expired, or `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the lookup fails.
    pub async fn current_session(&self, token: Uuid) -> Result<Option<Session>, GatewayError> {
        let Some(row) = self.store.find_session(token).await? else {
            return Ok(None);
        };
        if row.expires_at <= Utc::now() {
            return Ok(None);
        }
        Ok(Some(Session::from(row)))
    }

    /// Requires a valid session, for the admin endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Unauthorized`] when the token is unknown
    /// or expired, and a persistence error when the lookup fails.
    pub async fn require_session(&self, token: Uuid) -> Result<Session, GatewayError> {
        self.current_session(token)
            .await?
            .ok_or(GatewayError::Unauthorized("unknown or expired session"))
    }
}

/// Hex-encoded SHA-256 digest of a password, as stored in `admin_users`.
#[must_use]
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_and_hex_encoded() {
        let a = password_digest("hunter2");
        let b = password_digest("hunter2");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_passwords_have_different_digests() {
        assert_ne!(password_digest("hunter2"), password_digest("hunter3"));
    }

    #[test]
    fn session_lookup_carries_the_admin_email() {
        let row = SessionRow {
            token: Uuid::new_v4(),
            admin_id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
            created_at: Utc::now(),
        };
        let session = Session::from(row.clone());
        assert_eq!(session.token, row.token);
        assert_eq!(session.email, "admin@example.com");
        assert_eq!(session.expires_at, row.expires_at);
    }
}
