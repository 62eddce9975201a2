// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use eventhub_domain::DomainError;
use eventhub_persistence::PersistenceError;
use eventhub_qr::QrError;
use tracing::error;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the
/// API contract: every variant maps to one HTTP status, and the
/// messages are stable, human-readable, and free of internals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the principal lacks the required role or
    /// ownership.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A state-machine precondition was violated (already sold,
    /// duplicate purchase, duplicate email).
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "{message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidEventName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidEventDescription(msg) => ApiError::InvalidInput {
            field: String::from("description"),
            message: msg,
        },
        DomainError::InvalidEventGenre(msg) => ApiError::InvalidInput {
            field: String::from("genre"),
            message: msg,
        },
        DomainError::InvalidEventCategory(msg) => ApiError::InvalidInput {
            field: String::from("category"),
            message: msg,
        },
        DomainError::InvalidPrice(msg) => ApiError::InvalidInput {
            field: String::from("price"),
            message: msg,
        },
        DomainError::InvalidTicketType(msg) => ApiError::InvalidInput {
            field: String::from("ticketType"),
            message: msg,
        },
        DomainError::InvalidPrincipalName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidPrincipalEmail(msg) => ApiError::InvalidInput {
            field: String::from("email"),
            message: msg,
        },
        DomainError::TicketNotAvailable | DomainError::TicketAlreadyPurchased => {
            ApiError::Conflict {
                message: err.to_string(),
            }
        }
        DomainError::StateFlagMismatch { .. } => ApiError::Internal {
            message: String::from("Ticket state is inconsistent"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Storage failures are the one category that surfaces as `Internal`;
/// the stored detail is logged here and replaced with a stable message
/// so internals never leak to callers.
#[must_use]
pub fn translate_persistence_error(err: &PersistenceError) -> ApiError {
    error!(error = %err, "Persistence operation failed");
    ApiError::Internal {
        message: String::from("Storage operation failed"),
    }
}

/// Translates a QR renderer error into an API error.
///
/// Renderer failure is fatal to the operation that needed the image.
#[must_use]
pub fn translate_qr_error(err: &QrError) -> ApiError {
    error!(error = %err, "QR rendering failed");
    ApiError::Internal {
        message: String::from("Failed to render ticket QR code"),
    }
}
