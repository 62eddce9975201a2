// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Principal extraction for the server boundary.
//!
//! Authentication and token validation belong to the external identity
//! gate; by the time a request arrives here, the gate has attached the
//! caller's identity as a trusted `X-Principal-Id` header. This module
//! resolves that header against the principals table and hands the
//! handlers a fully populated principal.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use eventhub_api::{AuthenticatedPrincipal, Role};
use eventhub_persistence::PrincipalData;
use tracing::{debug, warn};

use crate::AppState;

/// The header the identity gate uses to convey the caller's identity.
const PRINCIPAL_HEADER: &str = "X-Principal-Id";

/// Extractor for the requesting principal.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     RequesterPrincipal(principal): RequesterPrincipal,
/// ) -> Result<Json<Response>, HttpError> {
///     // principal: AuthenticatedPrincipal
///     Ok(Json(Response { ... }))
/// }
/// ```
///
/// # Errors
///
/// Returns HTTP 401 Unauthorized if:
/// - The `X-Principal-Id` header is missing or not a number
/// - No principal with that ID exists
///
/// Returns HTTP 500 if the stored role cannot be parsed.
pub struct RequesterPrincipal(pub AuthenticatedPrincipal);

impl FromRequestParts<AppState> for RequesterPrincipal {
    type Rejection = PrincipalError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(PRINCIPAL_HEADER)
            .ok_or_else(|| {
                debug!("Missing {} header", PRINCIPAL_HEADER);
                PrincipalError::MissingHeader
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid {} header encoding", PRINCIPAL_HEADER);
                PrincipalError::InvalidHeader
            })?;

        let principal_id: i64 = header.parse().map_err(|_| {
            warn!("Non-numeric {} header", PRINCIPAL_HEADER);
            PrincipalError::InvalidHeader
        })?;

        let mut persistence = state.persistence.lock().await;
        let principal: Option<PrincipalData> =
            persistence.get_principal(principal_id).map_err(|e| {
                warn!(error = %e, "Principal lookup failed");
                PrincipalError::LookupFailed
            })?;
        drop(persistence);

        let principal: PrincipalData = principal.ok_or_else(|| {
            debug!(principal_id, "Unknown principal");
            PrincipalError::UnknownPrincipal
        })?;

        let role: Role = Role::parse(&principal.role).ok_or_else(|| {
            warn!(principal_id, role = %principal.role, "Stored role is invalid");
            PrincipalError::CorruptRole
        })?;

        debug!(principal_id, role = ?role, "Principal resolved");

        Ok(Self(AuthenticatedPrincipal::new(
            principal.principal_id,
            principal.name,
            principal.email,
            role,
        )))
    }
}

/// Principal extraction errors.
///
/// These errors are returned when the trusted header cannot be resolved
/// and are automatically converted to HTTP responses.
#[derive(Debug)]
pub enum PrincipalError {
    /// The `X-Principal-Id` header is missing.
    MissingHeader,
    /// The header is not a valid principal ID.
    InvalidHeader,
    /// No principal with the given ID exists.
    UnknownPrincipal,
    /// The principal row carries an unparseable role.
    CorruptRole,
    /// The lookup itself failed.
    LookupFailed,
}

impl IntoResponse for PrincipalError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingHeader => (
                StatusCode::UNAUTHORIZED,
                "Missing X-Principal-Id header",
            ),
            Self::InvalidHeader => (
                StatusCode::UNAUTHORIZED,
                "Invalid X-Principal-Id header. Expected a numeric principal ID",
            ),
            Self::UnknownPrincipal => (StatusCode::UNAUTHORIZED, "Unknown principal"),
            Self::CorruptRole | Self::LookupFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to resolve principal",
            ),
        };

        (status, message).into_response()
    }
}
