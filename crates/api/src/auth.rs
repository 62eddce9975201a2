// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authorization types and services.
//!
//! Authentication itself is owned by the external identity gate; by the
//! time a request reaches this layer it carries a resolved principal.
//! This module decides what that principal's role permits.

use crate::error::AuthError;

/// Principal roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Attendee role: browses the catalog and purchases tickets.
    Attendee,
    /// Organizer role: owns events, issues tickets against them, and
    /// may update or delete only its own events.
    Organizer,
    /// Admin role: moderates all entities — deletes any ticket, any
    /// event, and any principal account.
    Admin,
}

impl Role {
    /// Parses a stored role string.
    ///
    /// # Arguments
    ///
    /// * `s` - The role string (`attendee`, `organizer`, or `admin`)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "attendee" => Some(Self::Attendee),
            "organizer" => Some(Self::Organizer),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Attendee => "attendee",
            Self::Organizer => "organizer",
            Self::Admin => "admin",
        }
    }
}

/// An authenticated principal with an associated role.
///
/// The identity gate supplies `{id, role}`; the contact fields are
/// carried along because the handlers need them for QR payloads and
/// notification composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedPrincipal {
    /// The canonical identifier for this principal.
    pub id: i64,
    /// The principal's display name.
    pub name: String,
    /// The principal's email address.
    pub email: String,
    /// The role assigned to this principal.
    pub role: Role,
}

impl AuthenticatedPrincipal {
    /// Creates a new authenticated principal.
    ///
    /// # Arguments
    ///
    /// * `id` - The canonical identifier
    /// * `name` - The display name
    /// * `email` - The email address
    /// * `role` - The role assigned to this principal
    #[must_use]
    pub const fn new(id: i64, name: String, email: String, role: Role) -> Self {
        Self {
            id,
            name,
            email,
            role,
        }
    }
}

/// Authorization service for enforcing role-based access control.
///
/// This service performs the role gate only; ownership checks (an
/// organizer touching its own event) happen against storage, in the
/// handlers or in the conditional statements themselves.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if a principal is authorized to create an event.
    ///
    /// Only Organizer principals may create events.
    ///
    /// # Arguments
    ///
    /// * `principal` - The authenticated principal
    ///
    /// # Errors
    ///
    /// Returns an error if the principal does not have the Organizer role.
    pub fn authorize_create_event(principal: &AuthenticatedPrincipal) -> Result<(), AuthError> {
        match principal.role {
            Role::Organizer => Ok(()),
            Role::Attendee | Role::Admin => Err(AuthError::Unauthorized {
                action: String::from("create_event"),
                required_role: String::from("Organizer"),
            }),
        }
    }

    /// Checks if a principal is authorized to update an event.
    ///
    /// Only Organizer principals may update events (and only their own,
    /// enforced at the storage conditional).
    ///
    /// # Arguments
    ///
    /// * `principal` - The authenticated principal
    ///
    /// # Errors
    ///
    /// Returns an error if the principal does not have the Organizer role.
    pub fn authorize_update_event(principal: &AuthenticatedPrincipal) -> Result<(), AuthError> {
        match principal.role {
            Role::Organizer => Ok(()),
            Role::Attendee | Role::Admin => Err(AuthError::Unauthorized {
                action: String::from("update_event"),
                required_role: String::from("Organizer"),
            }),
        }
    }

    /// Checks if a principal is authorized to delete an event.
    ///
    /// The owning organizer and admins may delete events; the ownership
    /// half of the rule is checked against the stored event.
    ///
    /// # Arguments
    ///
    /// * `principal` - The authenticated principal
    ///
    /// # Errors
    ///
    /// Returns an error if the principal is an attendee.
    pub fn authorize_delete_event(principal: &AuthenticatedPrincipal) -> Result<(), AuthError> {
        match principal.role {
            Role::Organizer | Role::Admin => Ok(()),
            Role::Attendee => Err(AuthError::Unauthorized {
                action: String::from("delete_event"),
                required_role: String::from("Organizer or Admin"),
            }),
        }
    }

    /// Checks if a principal is authorized to create tickets.
    ///
    /// Only Organizer principals may issue tickets (and only against
    /// their own events, checked in the handler).
    ///
    /// # Arguments
    ///
    /// * `principal` - The authenticated principal
    ///
    /// # Errors
    ///
    /// Returns an error if the principal does not have the Organizer role.
    pub fn authorize_create_ticket(principal: &AuthenticatedPrincipal) -> Result<(), AuthError> {
        match principal.role {
            Role::Organizer => Ok(()),
            Role::Attendee | Role::Admin => Err(AuthError::Unauthorized {
                action: String::from("create_ticket"),
                required_role: String::from("Organizer"),
            }),
        }
    }

    /// Checks if a principal is authorized to purchase a ticket.
    ///
    /// Only Attendee principals may purchase tickets.
    ///
    /// # Arguments
    ///
    /// * `principal` - The authenticated principal
    ///
    /// # Errors
    ///
    /// Returns an error if the principal does not have the Attendee role.
    pub fn authorize_purchase_ticket(principal: &AuthenticatedPrincipal) -> Result<(), AuthError> {
        match principal.role {
            Role::Attendee => Ok(()),
            Role::Organizer | Role::Admin => Err(AuthError::Unauthorized {
                action: String::from("purchase_ticket"),
                required_role: String::from("Attendee"),
            }),
        }
    }

    /// Checks if a principal is authorized to delete a ticket.
    ///
    /// Only Admin principals may hard-delete tickets.
    ///
    /// # Arguments
    ///
    /// * `principal` - The authenticated principal
    ///
    /// # Errors
    ///
    /// Returns an error if the principal does not have the Admin role.
    pub fn authorize_delete_ticket(principal: &AuthenticatedPrincipal) -> Result<(), AuthError> {
        match principal.role {
            Role::Admin => Ok(()),
            Role::Attendee | Role::Organizer => Err(AuthError::Unauthorized {
                action: String::from("delete_ticket"),
                required_role: String::from("Admin"),
            }),
        }
    }

    /// Checks if a principal is authorized to provision or delete
    /// principal accounts.
    ///
    /// Only Admin principals may moderate accounts.
    ///
    /// # Arguments
    ///
    /// * `principal` - The authenticated principal
    ///
    /// # Errors
    ///
    /// Returns an error if the principal does not have the Admin role.
    pub fn authorize_manage_principals(
        principal: &AuthenticatedPrincipal,
    ) -> Result<(), AuthError> {
        match principal.role {
            Role::Admin => Ok(()),
            Role::Attendee | Role::Organizer => Err(AuthError::Unauthorized {
                action: String::from("manage_principals"),
                required_role: String::from("Admin"),
            }),
        }
    }
}
