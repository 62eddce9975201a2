// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Most mutations use Diesel DSL and are backend-agnostic, with minimal use of
//! backend-specific helpers (e.g., `last_insert_rowid()` for `SQLite`).
//!
//! ## Module Organization
//!
//! - `principals` — Principal provisioning and deletion
//! - `events` — Event catalog mutations, including the owner-scoped
//!   conditional update
//! - `tickets` — Ticket lifecycle mutations: the conditional sold
//!   transition and the bulk cascade/release statements
//!
//! ## Backend-Specific Code
//!
//! Backend-specific helpers (e.g., `get_last_insert_rowid()`) are imported from
//! the `backend` module. All other code uses Diesel DSL exclusively.

pub mod events;
pub mod principals;
pub mod tickets;

use time::OffsetDateTime;
use time::macros::format_description;

/// Produces the stored `YYYY-MM-DD HH:MM:SS` UTC timestamp for new rows.
///
/// Timestamps are assigned here rather than by column defaults so both
/// backends store identical representations.
pub(crate) fn current_timestamp() -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::now_utc()
        .format(&format)
        .unwrap_or_else(|_| String::from("1970-01-01 00:00:00"))
}
