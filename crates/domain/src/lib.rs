// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use types::{Event, Ticket, TicketState};
pub use validation::{validate_event_fields, validate_principal_fields, validate_ticket_type};
