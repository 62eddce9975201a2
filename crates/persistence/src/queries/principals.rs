// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Principal queries.
//!
//! Backend-agnostic lookups for stored principals. All queries use
//! Diesel DSL and work across all supported database backends.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::PrincipalData;
use crate::diesel_schema::principals;
use crate::error::PersistenceError;

/// Diesel Queryable struct for principal rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = principals)]
struct PrincipalRow {
    principal_id: i64,
    name: String,
    email: String,
    role: String,
    created_at: String,
}

impl From<PrincipalRow> for PrincipalData {
    fn from(row: PrincipalRow) -> Self {
        Self {
            principal_id: row.principal_id,
            name: row.name,
            email: row.email,
            role: row.role,
            created_at: row.created_at,
        }
    }
}

backend_fn! {
/// Retrieves a principal by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `principal_id` - The principal ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the principal is not found.
pub fn get_principal(
    conn: &mut _,
    principal_id: i64,
) -> Result<Option<PrincipalData>, PersistenceError> {
    debug!("Looking up principal by ID: {}", principal_id);

    let result: Result<PrincipalRow, diesel::result::Error> = principals::table
        .filter(principals::principal_id.eq(principal_id))
        .select(PrincipalRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(PrincipalData::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a principal by email address.
///
/// Used to enforce email uniqueness at provisioning time.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `email` - The email address to search for
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no principal has this email.
pub fn get_principal_by_email(
    conn: &mut _,
    email: &str,
) -> Result<Option<PrincipalData>, PersistenceError> {
    debug!("Looking up principal by email");

    let result: Result<PrincipalRow, diesel::result::Error> = principals::table
        .filter(principals::email.eq(email))
        .select(PrincipalRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(PrincipalData::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}
