// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Event;

/// Validates that an event's field constraints are met.
///
/// This function checks that required fields are not empty and that the
/// price is non-negative. It does NOT check ownership (that requires
/// context).
///
/// # Arguments
///
/// * `event` - The event to validate
///
/// # Returns
///
/// * `Ok(())` if the event's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The name, description, genre, or category is empty
/// - The price is negative or not a finite number
pub fn validate_event_fields(event: &Event) -> Result<(), DomainError> {
    if event.name.is_empty() {
        return Err(DomainError::InvalidEventName(String::from(
            "Name cannot be empty",
        )));
    }

    if event.description.is_empty() {
        return Err(DomainError::InvalidEventDescription(String::from(
            "Description cannot be empty",
        )));
    }

    if event.genre.is_empty() {
        return Err(DomainError::InvalidEventGenre(String::from(
            "Genre cannot be empty",
        )));
    }

    if event.category.is_empty() {
        return Err(DomainError::InvalidEventCategory(String::from(
            "Category cannot be empty",
        )));
    }

    // Rule: price is informational only, but may never be negative
    if !event.price.is_finite() {
        return Err(DomainError::InvalidPrice(String::from(
            "Price must be a finite number",
        )));
    }
    if event.price < 0.0 {
        return Err(DomainError::InvalidPrice(String::from(
            "Price cannot be negative",
        )));
    }

    Ok(())
}

/// Validates a ticket type label.
///
/// # Arguments
///
/// * `ticket_type` - The ticket label to validate (expected pre-trimmed)
///
/// # Errors
///
/// Returns `DomainError::InvalidTicketType` if the label is empty.
pub fn validate_ticket_type(ticket_type: &str) -> Result<(), DomainError> {
    if ticket_type.trim().is_empty() {
        return Err(DomainError::InvalidTicketType(String::from(
            "Ticket type is required",
        )));
    }
    Ok(())
}

/// Validates principal provisioning fields.
///
/// The identity service owns credential validation; this only guards
/// the fields the ticketing core stores and renders (display name and
/// contact address).
///
/// # Arguments
///
/// * `name` - The principal's display name
/// * `email` - The principal's email address
///
/// # Errors
///
/// Returns an error if the name is empty or the email is empty or
/// missing an `@`.
pub fn validate_principal_fields(name: &str, email: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidPrincipalName(String::from(
            "Name cannot be empty",
        )));
    }

    let email = email.trim();
    if email.is_empty() {
        return Err(DomainError::InvalidPrincipalEmail(String::from(
            "Email cannot be empty",
        )));
    }
    if !email.contains('@') {
        return Err(DomainError::InvalidPrincipalEmail(String::from(
            "Email must contain '@'",
        )));
    }

    Ok(())
}
