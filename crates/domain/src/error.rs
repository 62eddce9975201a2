// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Event name is empty or invalid.
    InvalidEventName(String),
    /// Event description is empty or invalid.
    InvalidEventDescription(String),
    /// Event genre is empty or invalid.
    InvalidEventGenre(String),
    /// Event category is empty or invalid.
    InvalidEventCategory(String),
    /// Event price is negative or otherwise invalid.
    InvalidPrice(String),
    /// Ticket type is empty or invalid.
    InvalidTicketType(String),
    /// Principal name is empty or invalid.
    InvalidPrincipalName(String),
    /// Principal email is empty or invalid.
    InvalidPrincipalEmail(String),
    /// The ticket has already been sold to another attendee.
    TicketNotAvailable,
    /// The requesting attendee is already bound to this ticket.
    TicketAlreadyPurchased,
    /// The stored availability flag contradicts the attendee binding.
    StateFlagMismatch {
        /// Whether an attendee is bound to the ticket.
        attendee_bound: bool,
        /// The stored availability flag.
        is_available: bool,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEventName(msg) => write!(f, "Invalid event name: {msg}"),
            Self::InvalidEventDescription(msg) => {
                write!(f, "Invalid event description: {msg}")
            }
            Self::InvalidEventGenre(msg) => write!(f, "Invalid event genre: {msg}"),
            Self::InvalidEventCategory(msg) => write!(f, "Invalid event category: {msg}"),
            Self::InvalidPrice(msg) => write!(f, "Invalid price: {msg}"),
            Self::InvalidTicketType(msg) => write!(f, "Invalid ticket type: {msg}"),
            Self::InvalidPrincipalName(msg) => write!(f, "Invalid principal name: {msg}"),
            Self::InvalidPrincipalEmail(msg) => write!(f, "Invalid principal email: {msg}"),
            Self::TicketNotAvailable => write!(f, "Ticket is no longer available"),
            Self::TicketAlreadyPurchased => {
                write!(f, "You have already purchased this ticket")
            }
            Self::StateFlagMismatch {
                attendee_bound,
                is_available,
            } => {
                write!(
                    f,
                    "Ticket state flags diverge: attendee_bound={attendee_bound}, is_available={is_available}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
