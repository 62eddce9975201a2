// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket queries.
//!
//! Backend-agnostic queries over the tickets table. The row→domain
//! projection is where the `(attendee_id, is_available)` column pair is
//! folded back into the tagged [`TicketState`]; a row whose flags
//! diverge fails to load rather than surfacing as a ticket.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use eventhub_domain::{Ticket, TicketState};
use tracing::debug;

use crate::diesel_schema::tickets;
use crate::error::PersistenceError;

/// Diesel Queryable struct for ticket rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = tickets)]
struct TicketRow {
    ticket_id: i64,
    event_id: i64,
    ticket_type: String,
    attendee_id: Option<i64>,
    qr_code: Option<String>,
    is_available: i32,
    created_at: String,
}

/// Projects a stored row into the domain ticket, enforcing the state
/// invariant at the boundary.
fn ticket_from_row(row: TicketRow) -> Result<Ticket, PersistenceError> {
    let state: TicketState = TicketState::from_flags(row.attendee_id, row.is_available != 0)
        .map_err(|e| PersistenceError::StateInvariantViolation {
            ticket_id: row.ticket_id,
            details: e.to_string(),
        })?;

    Ok(Ticket::with_id(
        row.ticket_id,
        row.event_id,
        row.ticket_type,
        state,
        row.qr_code,
        row.created_at,
    ))
}

backend_fn! {
/// Retrieves a ticket by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `ticket_id` - The ticket ID
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row
/// violates the availability invariant.
/// Returns `Ok(None)` if the ticket is not found.
pub fn get_ticket(conn: &mut _, ticket_id: i64) -> Result<Option<Ticket>, PersistenceError> {
    debug!("Looking up ticket by ID: {}", ticket_id);

    let result: Result<TicketRow, diesel::result::Error> = tickets::table
        .filter(tickets::ticket_id.eq(ticket_id))
        .select(TicketRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(ticket_from_row(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all tickets belonging to an event.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event_id` - The owning event ID
///
/// # Errors
///
/// Returns an error if the database query fails or any stored row
/// violates the availability invariant.
pub fn list_tickets_for_event(
    conn: &mut _,
    event_id: i64,
) -> Result<Vec<Ticket>, PersistenceError> {
    debug!("Listing tickets for event: {}", event_id);

    let rows: Vec<TicketRow> = tickets::table
        .filter(tickets::event_id.eq(event_id))
        .select(TicketRow::as_select())
        .order(tickets::ticket_id.asc())
        .load(conn)?;

    rows.into_iter().map(ticket_from_row).collect()
}
}

backend_fn! {
/// Lists all tickets bound to an attendee.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `attendee_id` - The bound attendee principal
///
/// # Errors
///
/// Returns an error if the database query fails or any stored row
/// violates the availability invariant.
pub fn list_tickets_for_attendee(
    conn: &mut _,
    attendee_id: i64,
) -> Result<Vec<Ticket>, PersistenceError> {
    debug!("Listing tickets for attendee: {}", attendee_id);

    let rows: Vec<TicketRow> = tickets::table
        .filter(tickets::attendee_id.eq(attendee_id))
        .select(TicketRow::as_select())
        .order(tickets::ticket_id.asc())
        .load(conn)?;

    rows.into_iter().map(ticket_from_row).collect()
}
}
