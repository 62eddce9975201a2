// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket lifecycle mutations.
//!
//! The Available→Sold transition is a single conditional UPDATE
//! (`mark_ticket_sold`): the availability check and the write happen in
//! one statement, so two attendees racing for the same ticket cannot
//! both win — the loser's update affects zero rows. Cascade and release
//! operations are bulk statements scoped by foreign key, never per-row
//! loops.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::tickets;
use crate::error::PersistenceError;
use crate::mutations::current_timestamp;

backend_fn! {
/// Creates a new ticket in the Available state.
///
/// The QR image is stored separately once rendered; a freshly inserted
/// row has no payload yet.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event_id` - The owning event
/// * `ticket_type` - The ticket label
///
/// # Errors
///
/// Returns an error if the ticket cannot be created.
pub fn create_ticket(
    conn: &mut _,
    event_id: i64,
    ticket_type: &str,
) -> Result<i64, PersistenceError> {
    info!(event_id, ticket_type, "Creating ticket");

    diesel::insert_into(tickets::table)
        .values((
            tickets::event_id.eq(event_id),
            tickets::ticket_type.eq(ticket_type),
            tickets::attendee_id.eq(None::<i64>),
            tickets::qr_code.eq(None::<String>),
            tickets::is_available.eq(1),
            tickets::created_at.eq(current_timestamp()),
        ))
        .execute(conn)?;

    let ticket_id: i64 = conn.get_last_insert_rowid()?;

    info!(ticket_id, event_id, "Ticket created");
    Ok(ticket_id)
}
}

backend_fn! {
/// Stores the rendered QR image for a ticket.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `ticket_id` - The ticket ID
/// * `qr_code` - The rendered image data URI
///
/// # Errors
///
/// Returns an error if the database update fails or the ticket does not
/// exist.
pub fn set_ticket_qr_code(
    conn: &mut _,
    ticket_id: i64,
    qr_code: &str,
) -> Result<(), PersistenceError> {
    debug!(ticket_id, "Storing ticket QR code");

    let rows_affected: usize = diesel::update(tickets::table)
        .filter(tickets::ticket_id.eq(ticket_id))
        .set(tickets::qr_code.eq(qr_code))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Ticket with ID {ticket_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Transitions a ticket from Available to Sold, conditionally.
///
/// The statement binds the attendee, clears availability, and stores
/// the re-rendered QR image only if the ticket is currently Available
/// with no attendee bound. This is the double-sale guard: under any
/// interleaving of concurrent purchases, at most one update matches.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `ticket_id` - The ticket ID
/// * `attendee_id` - The purchasing attendee principal
/// * `qr_code` - The re-rendered image data URI for the sold ticket
///
/// # Returns
///
/// The number of rows updated: 1 if this caller won the transition,
/// 0 if the ticket was missing or no longer Available. Callers must
/// report the zero-row case exactly as an already-sold conflict.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn mark_ticket_sold(
    conn: &mut _,
    ticket_id: i64,
    attendee_id: i64,
    qr_code: &str,
) -> Result<usize, PersistenceError> {
    info!(ticket_id, attendee_id, "Attempting ticket sale");

    let rows_affected: usize = diesel::update(tickets::table)
        .filter(tickets::ticket_id.eq(ticket_id))
        .filter(tickets::is_available.eq(1))
        .filter(tickets::attendee_id.is_null())
        .set((
            tickets::attendee_id.eq(Some(attendee_id)),
            tickets::is_available.eq(0),
            tickets::qr_code.eq(qr_code),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        info!(ticket_id, attendee_id, "Ticket sale lost: not available");
    } else {
        info!(ticket_id, attendee_id, "Ticket sold");
    }

    Ok(rows_affected)
}
}

backend_fn! {
/// Deletes a ticket unconditionally (admin path).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `ticket_id` - The ticket ID
///
/// # Returns
///
/// The number of rows deleted (0 if the ticket did not exist).
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_ticket(conn: &mut _, ticket_id: i64) -> Result<usize, PersistenceError> {
    info!(ticket_id, "Deleting ticket");

    let rows_affected: usize = diesel::delete(tickets::table)
        .filter(tickets::ticket_id.eq(ticket_id))
        .execute(conn)?;

    Ok(rows_affected)
}
}

backend_fn! {
/// Deletes every ticket belonging to an event.
///
/// One bulk statement keyed by the foreign key; the event-deletion
/// cascade runs this before removing the event row.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event_id` - The owning event
///
/// # Returns
///
/// The number of tickets deleted.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_tickets_for_event(conn: &mut _, event_id: i64) -> Result<usize, PersistenceError> {
    info!(event_id, "Deleting all tickets for event");

    let rows_affected: usize = diesel::delete(tickets::table)
        .filter(tickets::event_id.eq(event_id))
        .execute(conn)?;

    info!(rows_affected, event_id, "Deleted event tickets");
    Ok(rows_affected)
}
}

backend_fn! {
/// Deletes every ticket belonging to any of the given events.
///
/// Used by the organizer-deletion cascade: one statement over the
/// organizer's whole event set.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event_ids` - The owning events
///
/// # Returns
///
/// The number of tickets deleted.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_tickets_for_events(
    conn: &mut _,
    event_ids: &[i64],
) -> Result<usize, PersistenceError> {
    if event_ids.is_empty() {
        return Ok(0);
    }

    info!(event_count = event_ids.len(), "Deleting tickets for events");

    let rows_affected: usize = diesel::delete(tickets::table)
        .filter(tickets::event_id.eq_any(event_ids))
        .execute(conn)?;

    info!(rows_affected, "Deleted tickets across events");
    Ok(rows_affected)
}
}

backend_fn! {
/// Releases every ticket bound to an attendee back to Available.
///
/// Attendee deletion reverts tickets instead of destroying them:
/// tickets are organizer inventory, not attendee possessions. The QR
/// payload is left as-is; it never contained attendee data.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `attendee_id` - The attendee whose bindings are cleared
///
/// # Returns
///
/// The number of tickets released.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn release_tickets_for_attendee(
    conn: &mut _,
    attendee_id: i64,
) -> Result<usize, PersistenceError> {
    info!(attendee_id, "Releasing all tickets for attendee");

    let rows_affected: usize = diesel::update(tickets::table)
        .filter(tickets::attendee_id.eq(attendee_id))
        .set((
            tickets::attendee_id.eq(None::<i64>),
            tickets::is_available.eq(1),
        ))
        .execute(conn)?;

    info!(rows_affected, attendee_id, "Released attendee tickets");
    Ok(rows_affected)
}
}
