// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain data carriers crossing the persistence boundary.

use diesel::prelude::*;

use crate::diesel_schema::events;

/// A stored principal row.
///
/// Principals mirror the external identity gate's accounts; the
/// ticketing core stores them for ownership checks, cascade rules, and
/// QR payload contact fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalData {
    /// The canonical identifier.
    pub principal_id: i64,
    /// The display name.
    pub name: String,
    /// The unique email address.
    pub email: String,
    /// The role string (`attendee`, `organizer`, or `admin`).
    pub role: String,
    /// The stored creation timestamp.
    pub created_at: String,
}

/// Partial update for an event row.
///
/// `None` fields are left untouched; `organizer_id` and `created_at`
/// are immutable and deliberately absent.
#[derive(Debug, Clone, PartialEq, Default, AsChangeset)]
#[diesel(table_name = events)]
pub struct EventChangeset {
    /// New event name, if changing.
    pub name: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
    /// New genre, if changing.
    pub genre: Option<String>,
    /// New category, if changing.
    pub category: Option<String>,
    /// New price, if changing. Must be re-validated before applying.
    pub price: Option<f64>,
}

impl EventChangeset {
    /// Returns whether the changeset carries no field updates.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.genre.is_none()
            && self.category.is_none()
            && self.price.is_none()
    }
}
