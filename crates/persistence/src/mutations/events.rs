// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event catalog mutations.
//!
//! Ownership is enforced at the storage conditional: the owner-scoped
//! update and delete carry `organizer_id` in their WHERE clause, so a
//! non-owner's request affects zero rows instead of relying on a prior
//! read.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::EventChangeset;
use crate::diesel_schema::events;
use crate::error::PersistenceError;
use crate::mutations::current_timestamp;

backend_fn! {
/// Creates a new event.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The event name
/// * `description` - The event description
/// * `genre` - The event genre
/// * `category` - The event category
/// * `price` - The ticket price in dollars (validated non-negative upstream)
/// * `organizer_id` - The owning organizer principal
///
/// # Errors
///
/// Returns an error if the event cannot be created.
pub fn create_event(
    conn: &mut _,
    name: &str,
    description: &str,
    genre: &str,
    category: &str,
    price: f64,
    organizer_id: i64,
) -> Result<i64, PersistenceError> {
    info!(name, organizer_id, "Creating event");

    diesel::insert_into(events::table)
        .values((
            events::name.eq(name),
            events::description.eq(description),
            events::genre.eq(genre),
            events::category.eq(category),
            events::price.eq(price),
            events::organizer_id.eq(organizer_id),
            events::created_at.eq(current_timestamp()),
        ))
        .execute(conn)?;

    let event_id: i64 = conn.get_last_insert_rowid()?;

    info!(event_id, "Event created");
    Ok(event_id)
}
}

backend_fn! {
/// Applies a partial update to an event, scoped to its owner.
///
/// The `organizer_id` filter makes ownership part of the conditional:
/// updating someone else's event affects zero rows. `organizer_id`
/// itself is immutable and not part of the changeset.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event_id` - The event ID
/// * `organizer_id` - The requesting organizer; must own the event
/// * `changes` - The fields to update
///
/// # Returns
///
/// The number of rows updated (0 if the event does not exist or is not
/// owned by `organizer_id`).
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_event_for_organizer(
    conn: &mut _,
    event_id: i64,
    organizer_id: i64,
    changes: &EventChangeset,
) -> Result<usize, PersistenceError> {
    info!(event_id, organizer_id, "Updating event");

    let rows_affected: usize = diesel::update(events::table)
        .filter(events::event_id.eq(event_id))
        .filter(events::organizer_id.eq(organizer_id))
        .set(changes.clone())
        .execute(conn)?;

    Ok(rows_affected)
}
}

backend_fn! {
/// Deletes an event unconditionally (admin path).
///
/// Tickets referencing the event must already be deleted.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event_id` - The event ID
///
/// # Returns
///
/// The number of rows deleted (0 if the event did not exist).
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_event(conn: &mut _, event_id: i64) -> Result<usize, PersistenceError> {
    info!(event_id, "Deleting event");

    let rows_affected: usize = diesel::delete(events::table)
        .filter(events::event_id.eq(event_id))
        .execute(conn)?;

    Ok(rows_affected)
}
}

backend_fn! {
/// Deletes every event owned by an organizer.
///
/// One bulk statement scoped by the foreign key, used by the
/// organizer-deletion cascade after the tickets of those events are
/// gone.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `organizer_id` - The owning organizer principal
///
/// # Returns
///
/// The number of events deleted.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_events_for_organizer(
    conn: &mut _,
    organizer_id: i64,
) -> Result<usize, PersistenceError> {
    info!(organizer_id, "Deleting all events for organizer");

    let rows_affected: usize = diesel::delete(events::table)
        .filter(events::organizer_id.eq(organizer_id))
        .execute(conn)?;

    info!(rows_affected, organizer_id, "Deleted organizer events");
    Ok(rows_affected)
}
}
