// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bearer-token extraction at the HTTP boundary.
//!
//! Protected routes take a [`SessionAccount`] argument; axum runs the
//! extractor before the handler body, so a handler that receives one is
//! guaranteed a live, non-expired session for an enabled account.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use folkcal_api::{AuthenticatedAccount, AuthenticationService};
use tracing::{debug, warn};

use crate::AppState;

/// The account behind the request's `Authorization: Bearer <token>` header.
///
/// Rejects with 401 when the header is missing or malformed, the token is
/// unknown, the session has expired, or the account has been disabled.
/// Every successful extraction also touches the session's activity
/// timestamp.
pub struct SessionAccount(pub AuthenticatedAccount);

impl FromRequestParts<AppState> for SessionAccount {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token: &str = bearer_token(parts)?;

        let mut persistence = state.persistence.lock().await;
        let account: AuthenticatedAccount =
            AuthenticationService::validate_session(&mut persistence, token).map_err(|e| {
                warn!(error = %e, "Session validation failed");
                SessionError::InvalidSession(e.to_string())
            })?;

        debug!(
            account_id = account.account_id,
            "Session validated successfully"
        );

        Ok(Self(account))
    }
}

/// Extractor for the raw bearer token, without validating the session.
///
/// Logout needs the token itself rather than the account it resolves to.
pub struct SessionToken(pub String);

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = SessionError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(bearer_token(parts)?.to_string()))
    }
}

/// Extracts the bearer token from the Authorization header.
fn bearer_token(parts: &Parts) -> Result<&str, SessionError> {
    let auth_header: &str = parts
        .headers
        .get("Authorization")
        .ok_or_else(|| {
            debug!("Missing Authorization header");
            SessionError::MissingAuthorizationHeader
        })?
        .to_str()
        .map_err(|_| {
            warn!("Invalid Authorization header encoding");
            SessionError::InvalidAuthorizationHeader
        })?;

    auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Authorization header does not start with 'Bearer '");
        SessionError::InvalidAuthorizationHeader
    })
}

/// Session extraction errors.
///
/// These errors are returned when session validation fails and are
/// automatically converted to HTTP responses.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// Session validation failed.
    InvalidSession(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingAuthorizationHeader => {
                (StatusCode::UNAUTHORIZED, "Missing Authorization header")
            }
            Self::InvalidAuthorizationHeader => (
                StatusCode::UNAUTHORIZED,
                "Invalid Authorization header format. Expected: 'Bearer <token>'",
            ),
            Self::InvalidSession(reason) => {
                return (
                    StatusCode::UNAUTHORIZED,
                    format!("Session validation failed: {reason}"),
                )
                    .into_response();
            }
        };

        (status, message).into_response()
    }
}
