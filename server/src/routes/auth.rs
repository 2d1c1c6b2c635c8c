//! Tenant authentication for dashboard routes.
//!
//! A request is authenticated by a session token taken from the
//! `Authorization: Bearer` header or, failing that, the `session_token`
//! cookie the browser sends on same-origin requests.

use axum::extract::FromRef;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::services::catalog::normalize_tenant_id;
use crate::services::session;
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

/// Pull the session token out of request headers. The bearer header wins
/// over the cookie.
pub(crate) fn session_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_owned());
    }

    let jar = CookieJar::from_headers(headers);
    jar.get(COOKIE_NAME)
        .map(Cookie::value)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Tenant resolved from the caller's session.
/// Use as a handler parameter to require authentication.
#[derive(Debug)]
pub struct AuthTenant {
    pub tenant_id: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthTenant
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let Some(token) = session_token(&parts.headers) else {
            return match app_state.dev_auth_tenant {
                Some(tenant) => Ok(Self { tenant_id: normalize_tenant_id(&tenant).to_owned() }),
                None => Err(StatusCode::UNAUTHORIZED),
            };
        };

        let tenant = session::validate_session(&app_state.pool, &token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        tracing::debug!(tenant_id = %tenant.tenant_id, user = %tenant.user_name, "session resolved");
        Ok(Self { tenant_id: normalize_tenant_id(&tenant.tenant_id).to_owned() })
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
