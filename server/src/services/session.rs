//! Session-token validation.
//!
//! Sessions are issued outside this service; the dashboard only resolves a
//! token to the tenant whose data the caller may read.

use sqlx::{PgPool, Row};

/// Tenant identity attached to a valid session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTenant {
    pub tenant_id: String,
    pub user_name: String,
}

/// Validate a session token and return its tenant, or `None` if the token
/// is unknown or expired.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionTenant>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT tenant_id, user_name
          FROM sessions
          WHERE token = $1 AND expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| SessionTenant { tenant_id: r.get("tenant_id"), user_name: r.get("user_name") }))
}
