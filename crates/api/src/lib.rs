// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the EventHub ticketing backend.
//!
//! This crate owns the ticket lifecycle engine and event catalog
//! orchestration: authorization checks, domain validation, persistence
//! calls, QR payload generation, and the composition of outbound
//! notifications. Handlers return an [`ApiResult`] pairing the wire
//! response with the notification (if any) the server should fire after
//! responding; notification delivery is never part of operation
//! success.

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
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod notifications;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedPrincipal, AuthorizationService, Role};
pub use error::{
    ApiError, AuthError, translate_domain_error, translate_persistence_error,
    translate_qr_error,
};
pub use handlers::{
    ApiResult, create_event, create_principal, create_ticket, delete_event, delete_principal,
    delete_ticket, get_event, get_ticket, purchase_ticket, update_event,
};
pub use request_response::{
    CreateEventRequest, CreateEventResponse, CreatePrincipalRequest, CreatePrincipalResponse,
    CreateTicketRequest, CreateTicketResponse, DeleteEventResponse, DeletePrincipalResponse,
    DeleteTicketResponse, EventInfo, EventWithTicketsResponse, PurchaseTicketResponse,
    TicketInfo, UpdateEventRequest, UpdateEventResponse,
};
