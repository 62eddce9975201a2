// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs for the API boundary.
//!
//! Wire names are camelCase to preserve the original JSON contract.

use eventhub_domain::{Event, Ticket};
use serde::{Deserialize, Serialize};

/// Request to create an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// The event name.
    pub name: String,
    /// The event description.
    pub description: String,
    /// The event genre.
    pub genre: String,
    /// The event category.
    pub category: String,
    /// The ticket price in dollars.
    pub price: f64,
}

/// Request to partially update an event.
///
/// Absent fields are left unchanged. The owning organizer is immutable
/// and not part of the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    /// New event name, if changing.
    pub name: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
    /// New genre, if changing.
    pub genre: Option<String>,
    /// New category, if changing.
    pub category: Option<String>,
    /// New price, if changing.
    pub price: Option<f64>,
}

/// Request to create a ticket against an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    /// The ticket label (e.g., "VIP").
    pub ticket_type: String,
}

/// Request to provision a principal on behalf of the identity gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrincipalRequest {
    /// The display name.
    pub name: String,
    /// The unique email address.
    pub email: String,
    /// The role string (`attendee`, `organizer`, or `admin`).
    pub role: String,
}

/// Event facts on the wire, including organizer contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    /// The event ID.
    pub id: i64,
    /// The event name.
    pub name: String,
    /// The event description.
    pub description: String,
    /// The event genre.
    pub genre: String,
    /// The event category.
    pub category: String,
    /// The ticket price in dollars.
    pub price: f64,
    /// The owning organizer principal.
    pub organizer_id: i64,
    /// The organizer's display name, if the account still exists.
    pub organizer_name: Option<String>,
    /// The organizer's email address, if the account still exists.
    pub organizer_email: Option<String>,
    /// The stored creation timestamp.
    pub created_at: String,
}

impl EventInfo {
    /// Builds the wire representation from a stored event and the
    /// organizer's contact fields.
    #[must_use]
    pub fn from_event(
        event: &Event,
        organizer_name: Option<String>,
        organizer_email: Option<String>,
    ) -> Self {
        Self {
            id: event.event_id.unwrap_or_default(),
            name: event.name.clone(),
            description: event.description.clone(),
            genre: event.genre.clone(),
            category: event.category.clone(),
            price: event.price,
            organizer_id: event.organizer_id,
            organizer_name,
            organizer_email,
            created_at: event.created_at.clone(),
        }
    }
}

/// Ticket facts on the wire.
///
/// `isAvailable` and `attendeeId` are the legacy-compatible projection
/// of the internal tagged state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketInfo {
    /// The ticket ID.
    pub id: i64,
    /// The owning event ID.
    pub event_id: i64,
    /// The ticket label.
    pub ticket_type: String,
    /// The bound attendee, if sold.
    pub attendee_id: Option<i64>,
    /// The rendered QR image data URI, if generated.
    pub qr_code: Option<String>,
    /// Whether the ticket can still be purchased.
    pub is_available: bool,
    /// The stored creation timestamp.
    pub created_at: String,
}

impl From<&Ticket> for TicketInfo {
    fn from(ticket: &Ticket) -> Self {
        let (attendee_id, is_available) = ticket.state.as_flags();
        Self {
            id: ticket.ticket_id.unwrap_or_default(),
            event_id: ticket.event_id,
            ticket_type: ticket.ticket_type.clone(),
            attendee_id,
            qr_code: ticket.qr_code.clone(),
            is_available,
            created_at: ticket.created_at.clone(),
        }
    }
}

/// Response for event creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventResponse {
    /// A success message.
    pub message: String,
    /// The created event.
    pub event: EventInfo,
}

/// Response for event updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventResponse {
    /// A success message.
    pub message: String,
    /// The event after the update.
    pub event: EventInfo,
}

/// Response for event retrieval, including its tickets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWithTicketsResponse {
    /// The event.
    pub event: EventInfo,
    /// All tickets issued against the event.
    pub tickets: Vec<TicketInfo>,
}

/// Response for event deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEventResponse {
    /// A success message.
    pub message: String,
    /// The number of tickets removed by the cascade.
    pub deleted_tickets: usize,
}

/// Response for ticket creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketResponse {
    /// A success message.
    pub message: String,
    /// The created ticket, including its QR image.
    pub ticket: TicketInfo,
}

/// Response for a successful purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseTicketResponse {
    /// A success message.
    pub message: String,
    /// The sold ticket, including its re-rendered QR image.
    pub ticket: TicketInfo,
}

/// Response for ticket deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTicketResponse {
    /// A success message.
    pub message: String,
}

/// Response for principal provisioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrincipalResponse {
    /// A success message.
    pub message: String,
    /// The new principal's canonical ID.
    pub id: i64,
    /// The display name.
    pub name: String,
    /// The email address.
    pub email: String,
    /// The role string.
    pub role: String,
}

/// Response for principal deletion, with role-dependent cascade counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePrincipalResponse {
    /// A success message.
    pub message: String,
    /// Tickets released back to Available (attendee deletion).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released_tickets: Option<usize>,
    /// Events removed (organizer deletion).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_events: Option<usize>,
    /// Tickets removed with those events (organizer deletion).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_tickets: Option<usize>,
}
