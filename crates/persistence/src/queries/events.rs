// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event catalog queries.
//!
//! Backend-agnostic queries over the events table. All queries use
//! Diesel DSL and work across all supported database backends.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use eventhub_domain::Event;
use tracing::debug;

use crate::diesel_schema::events;
use crate::error::PersistenceError;

/// Diesel Queryable struct for event rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = events)]
struct EventRow {
    event_id: i64,
    name: String,
    description: String,
    genre: String,
    category: String,
    price: f64,
    organizer_id: i64,
    created_at: String,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Self::with_id(
            row.event_id,
            row.name,
            row.description,
            row.genre,
            row.category,
            row.price,
            row.organizer_id,
            row.created_at,
        )
    }
}

backend_fn! {
/// Retrieves an event by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event_id` - The event ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the event is not found.
pub fn get_event(conn: &mut _, event_id: i64) -> Result<Option<Event>, PersistenceError> {
    debug!("Looking up event by ID: {}", event_id);

    let result: Result<EventRow, diesel::result::Error> = events::table
        .filter(events::event_id.eq(event_id))
        .select(EventRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Event::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists the event IDs owned by an organizer.
///
/// The organizer-deletion cascade uses this set to scope the bulk
/// ticket delete before the events themselves are removed.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `organizer_id` - The owning organizer principal
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_event_ids_for_organizer(
    conn: &mut _,
    organizer_id: i64,
) -> Result<Vec<i64>, PersistenceError> {
    debug!("Listing event IDs for organizer: {}", organizer_id);

    Ok(events::table
        .filter(events::organizer_id.eq(organizer_id))
        .select(events::event_id)
        .order(events::event_id.asc())
        .load(conn)?)
}
}
