// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Principal mutations.
//!
//! Provisioning and deletion of principal rows on behalf of the
//! external identity gate. Role-dependent cascades (releasing an
//! attendee's tickets, removing an organizer's events) are composed in
//! the API layer from the bulk ticket/event mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::principals;
use crate::error::PersistenceError;
use crate::mutations::current_timestamp;

backend_fn! {
/// Creates a new principal.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The display name
/// * `email` - The unique email address
/// * `role` - The role string (`attendee`, `organizer`, or `admin`)
///
/// # Errors
///
/// Returns an error if the principal cannot be created, including when
/// the email is already registered.
pub fn create_principal(
    conn: &mut _,
    name: &str,
    email: &str,
    role: &str,
) -> Result<i64, PersistenceError> {
    info!(email, role, "Creating principal");

    diesel::insert_into(principals::table)
        .values((
            principals::name.eq(name),
            principals::email.eq(email),
            principals::role.eq(role),
            principals::created_at.eq(current_timestamp()),
        ))
        .execute(conn)?;

    let principal_id: i64 = conn.get_last_insert_rowid()?;

    info!(principal_id, "Principal created");
    Ok(principal_id)
}
}

backend_fn! {
/// Deletes a principal row.
///
/// Callers must run the role-dependent cascade first: an organizer's
/// events and tickets must already be gone, and an attendee's tickets
/// must already be released, or foreign key enforcement rejects the
/// delete.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `principal_id` - The principal ID
///
/// # Returns
///
/// The number of rows deleted (0 if the principal did not exist).
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_principal(conn: &mut _, principal_id: i64) -> Result<usize, PersistenceError> {
    info!(principal_id, "Deleting principal");

    let rows_affected: usize = diesel::delete(principals::table)
        .filter(principals::principal_id.eq(principal_id))
        .execute(conn)?;

    Ok(rows_affected)
}
}
