// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Represents the lifecycle state of a ticket.
///
/// A ticket starts `Available` and transitions exactly once to `Sold`
/// when an attendee purchases it. The reverse transition (`release`)
/// happens only when the bound attendee account is deleted.
///
/// The persistence layer projects this tagged state onto a redundant
/// `(attendee_id, is_available)` column pair so that availability can
/// be indexed cheaply; the invariant `is_available == attendee_id
/// IS NULL` must hold for every stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TicketState {
    /// Unsold and purchasable.
    #[default]
    Available,
    /// Purchased and bound to exactly one attendee.
    Sold {
        /// The canonical identifier of the purchasing attendee.
        attendee_id: i64,
    },
}

impl TicketState {
    /// Returns whether the ticket can still be purchased.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Returns the bound attendee, if the ticket has been sold.
    #[must_use]
    pub const fn attendee_id(&self) -> Option<i64> {
        match self {
            Self::Available => None,
            Self::Sold { attendee_id } => Some(*attendee_id),
        }
    }

    /// Reconstructs the state from the stored column pair.
    ///
    /// # Arguments
    ///
    /// * `attendee_id` - The stored attendee binding, if any
    /// * `is_available` - The stored availability flag
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StateFlagMismatch` if the two columns
    /// contradict each other (an available ticket with an attendee, or a
    /// sold ticket without one). Rows that violate the invariant must
    /// never be observable as tickets.
    pub const fn from_flags(
        attendee_id: Option<i64>,
        is_available: bool,
    ) -> Result<Self, DomainError> {
        match (attendee_id, is_available) {
            (None, true) => Ok(Self::Available),
            (Some(attendee_id), false) => Ok(Self::Sold { attendee_id }),
            (attendee, available) => Err(DomainError::StateFlagMismatch {
                attendee_bound: attendee.is_some(),
                is_available: available,
            }),
        }
    }

    /// Projects the state back onto the stored column pair.
    #[must_use]
    pub const fn as_flags(&self) -> (Option<i64>, bool) {
        match self {
            Self::Available => (None, true),
            Self::Sold { attendee_id } => (Some(*attendee_id), false),
        }
    }

    /// Attempts the `Available` → `Sold` transition.
    ///
    /// # Arguments
    ///
    /// * `attendee_id` - The attendee attempting the purchase
    ///
    /// # Errors
    ///
    /// * `DomainError::TicketAlreadyPurchased` if the same attendee is
    ///   already bound to this ticket
    /// * `DomainError::TicketNotAvailable` if the ticket is sold to
    ///   someone else
    pub const fn purchase(&self, attendee_id: i64) -> Result<Self, DomainError> {
        match self {
            Self::Available => Ok(Self::Sold { attendee_id }),
            Self::Sold {
                attendee_id: bound,
            } if *bound == attendee_id => Err(DomainError::TicketAlreadyPurchased),
            Self::Sold { .. } => Err(DomainError::TicketNotAvailable),
        }
    }

    /// Reverts the ticket to `Available`, dropping any attendee binding.
    ///
    /// Used when the bound attendee account is deleted. Releasing an
    /// already-available ticket is a no-op.
    #[must_use]
    pub const fn release(&self) -> Self {
        Self::Available
    }
}

/// Represents an event in the catalog.
///
/// An event is exclusively owned by one organizer principal; the
/// `organizer_id` is immutable after creation. Deleting an event
/// cascades to every ticket that references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the event has not been persisted yet.
    pub event_id: Option<i64>,
    /// The event name.
    pub name: String,
    /// The event description.
    pub description: String,
    /// The event genre (e.g., "Rock").
    pub genre: String,
    /// The event category (e.g., "Concert").
    pub category: String,
    /// The ticket price in dollars. Informational only; must be non-negative.
    pub price: f64,
    /// The owning organizer principal.
    pub organizer_id: i64,
    /// Creation timestamp (ISO 8601 string, assigned at persistence time).
    pub created_at: String,
}

impl Event {
    /// Creates a new `Event` without a persisted ID.
    ///
    /// Text fields are trimmed; the creation timestamp is assigned by
    /// the persistence layer.
    ///
    /// # Arguments
    ///
    /// * `name` - The event name
    /// * `description` - The event description
    /// * `genre` - The event genre
    /// * `category` - The event category
    /// * `price` - The ticket price in dollars
    /// * `organizer_id` - The owning organizer principal
    #[must_use]
    pub fn new(
        name: &str,
        description: &str,
        genre: &str,
        category: &str,
        price: f64,
        organizer_id: i64,
    ) -> Self {
        Self {
            event_id: None,
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            genre: genre.trim().to_string(),
            category: category.trim().to_string(),
            price,
            organizer_id,
            created_at: String::new(),
        }
    }

    /// Creates an `Event` with an existing persisted ID.
    ///
    /// # Arguments
    ///
    /// * `event_id` - The canonical identifier
    /// * `name` - The event name
    /// * `description` - The event description
    /// * `genre` - The event genre
    /// * `category` - The event category
    /// * `price` - The ticket price in dollars
    /// * `organizer_id` - The owning organizer principal
    /// * `created_at` - The stored creation timestamp
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn with_id(
        event_id: i64,
        name: String,
        description: String,
        genre: String,
        category: String,
        price: f64,
        organizer_id: i64,
        created_at: String,
    ) -> Self {
        Self {
            event_id: Some(event_id),
            name,
            description,
            genre,
            category,
            price,
            organizer_id,
            created_at,
        }
    }
}

/// Represents one purchasable unit of admission to an event.
///
/// A ticket is exclusively owned by one event and weakly references at
/// most one attendee. Its QR payload is regenerated on every transition
/// that changes the ticket's descriptive content (creation and
/// purchase); release deliberately leaves it stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the ticket has not been persisted yet.
    pub ticket_id: Option<i64>,
    /// The owning event. Required and immutable.
    pub event_id: i64,
    /// Free-text ticket label (e.g., "VIP").
    pub ticket_type: String,
    /// The lifecycle state, including any attendee binding.
    pub state: TicketState,
    /// The rendered QR image as a data URI, once generated.
    pub qr_code: Option<String>,
    /// Creation timestamp (ISO 8601 string, assigned at persistence time).
    pub created_at: String,
}

impl Ticket {
    /// Creates a new `Ticket` in the `Available` state without a
    /// persisted ID.
    ///
    /// # Arguments
    ///
    /// * `event_id` - The owning event
    /// * `ticket_type` - The ticket label (will be trimmed)
    #[must_use]
    pub fn new(event_id: i64, ticket_type: &str) -> Self {
        Self {
            ticket_id: None,
            event_id,
            ticket_type: ticket_type.trim().to_string(),
            state: TicketState::Available,
            qr_code: None,
            created_at: String::new(),
        }
    }

    /// Creates a `Ticket` with an existing persisted ID.
    ///
    /// # Arguments
    ///
    /// * `ticket_id` - The canonical identifier
    /// * `event_id` - The owning event
    /// * `ticket_type` - The ticket label
    /// * `state` - The lifecycle state
    /// * `qr_code` - The stored QR image data URI, if any
    /// * `created_at` - The stored creation timestamp
    #[must_use]
    pub const fn with_id(
        ticket_id: i64,
        event_id: i64,
        ticket_type: String,
        state: TicketState,
        qr_code: Option<String>,
        created_at: String,
    ) -> Self {
        Self {
            ticket_id: Some(ticket_id),
            event_id,
            ticket_type,
            state,
            qr_code,
            created_at,
        }
    }
}
