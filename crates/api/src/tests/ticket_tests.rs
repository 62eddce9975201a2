// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use eventhub_domain::TicketState;
use eventhub_persistence::Persistence;

use crate::auth::{AuthenticatedPrincipal, Role};
use crate::error::ApiError;
use crate::handlers::{create_event, create_ticket, delete_ticket, get_ticket, purchase_ticket};
use crate::request_response::CreateTicketRequest;
use crate::tests::{
    create_test_event_request, create_test_persistence, create_test_renderer, seed_admin,
    seed_attendee, seed_organizer, seed_principal,
};

const QR_PREFIX: &str = "data:image/svg+xml;base64,";

fn vip_request() -> CreateTicketRequest {
    CreateTicketRequest {
        ticket_type: String::from("VIP"),
    }
}

/// Seeds an organizer with one event and returns `(organizer, event_id)`.
fn seed_catalog(persistence: &mut Persistence) -> (AuthenticatedPrincipal, i64) {
    let organizer: AuthenticatedPrincipal = seed_organizer(persistence);
    let created = create_event(persistence, create_test_event_request(), &organizer)
        .expect("create event should succeed");
    (organizer, created.response.event.id)
}

#[test]
fn test_create_ticket_stores_qr_payload() {
    let mut persistence: Persistence = create_test_persistence();
    let renderer = create_test_renderer();
    let (organizer, event_id) = seed_catalog(&mut persistence);

    let result = create_ticket(&mut persistence, &renderer, event_id, vip_request(), &organizer)
        .expect("create should succeed");

    let ticket = &result.response.ticket;
    assert_eq!(ticket.event_id, event_id);
    assert_eq!(ticket.ticket_type, "VIP");
    assert!(ticket.is_available);
    assert_eq!(ticket.attendee_id, None);
    assert!(
        ticket
            .qr_code
            .as_deref()
            .is_some_and(|uri| uri.starts_with(QR_PREFIX))
    );
    // No attendee-facing notification on creation.
    assert!(result.notification.is_none());
}

#[test]
fn test_create_ticket_requires_type_and_owned_event() {
    let mut persistence: Persistence = create_test_persistence();
    let renderer = create_test_renderer();
    let (organizer, event_id) = seed_catalog(&mut persistence);
    let rival: AuthenticatedPrincipal = seed_principal(
        &mut persistence,
        "Eve Organizer",
        "eve@example.com",
        Role::Organizer,
    );

    assert!(matches!(
        create_ticket(
            &mut persistence,
            &renderer,
            event_id,
            CreateTicketRequest {
                ticket_type: String::from("   "),
            },
            &organizer,
        ),
        Err(ApiError::InvalidInput { field, .. }) if field == "ticketType"
    ));

    assert!(matches!(
        create_ticket(&mut persistence, &renderer, 999, vip_request(), &organizer),
        Err(ApiError::ResourceNotFound { .. })
    ));

    assert!(matches!(
        create_ticket(&mut persistence, &renderer, event_id, vip_request(), &rival),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_purchase_ticket_binds_attendee_and_composes_email() {
    let mut persistence: Persistence = create_test_persistence();
    let renderer = create_test_renderer();
    let (organizer, event_id) = seed_catalog(&mut persistence);
    let attendee: AuthenticatedPrincipal = seed_attendee(&mut persistence);

    let created =
        create_ticket(&mut persistence, &renderer, event_id, vip_request(), &organizer)
            .expect("create should succeed");
    let ticket_id: i64 = created.response.ticket.id;

    let result = purchase_ticket(&mut persistence, &renderer, ticket_id, &attendee)
        .expect("purchase should succeed");

    let ticket = &result.response.ticket;
    assert_eq!(result.response.message, "Ticket purchased successfully");
    assert!(!ticket.is_available);
    assert_eq!(ticket.attendee_id, Some(attendee.id));
    assert!(
        ticket
            .qr_code
            .as_deref()
            .is_some_and(|uri| uri.starts_with(QR_PREFIX))
    );

    let notification = result.notification.expect("purchase confirmation composed");
    assert_eq!(notification.to, "bob@example.com");
    assert_eq!(
        notification.subject,
        "EventHub - Ticket Purchase Confirmation"
    );
    let attachment = notification.attachment.expect("QR image attached");
    assert_eq!(attachment.filename, "ticket-qr-code.svg");
    assert_eq!(attachment.content_type, "image/svg+xml");
}

#[test]
fn test_purchase_conflicts_are_distinguished() {
    let mut persistence: Persistence = create_test_persistence();
    let renderer = create_test_renderer();
    let (organizer, event_id) = seed_catalog(&mut persistence);
    let winner: AuthenticatedPrincipal = seed_attendee(&mut persistence);
    let loser: AuthenticatedPrincipal =
        seed_principal(&mut persistence, "Cyn", "cyn@example.com", Role::Attendee);

    let created =
        create_ticket(&mut persistence, &renderer, event_id, vip_request(), &organizer)
            .expect("create should succeed");
    let ticket_id: i64 = created.response.ticket.id;

    purchase_ticket(&mut persistence, &renderer, ticket_id, &winner)
        .expect("first purchase should succeed");

    // A rival attendee gets the availability conflict.
    assert!(matches!(
        purchase_ticket(&mut persistence, &renderer, ticket_id, &loser),
        Err(ApiError::Conflict { message }) if message == "Ticket is no longer available"
    ));

    // The winner retrying gets the duplicate-purchase conflict.
    assert!(matches!(
        purchase_ticket(&mut persistence, &renderer, ticket_id, &winner),
        Err(ApiError::Conflict { message }) if message == "You have already purchased this ticket"
    ));

    // The losing attempts changed nothing.
    let ticket = persistence
        .get_ticket(ticket_id)
        .expect("query should succeed")
        .expect("ticket should exist");
    assert_eq!(ticket.state, TicketState::Sold { attendee_id: winner.id });
}

#[test]
fn test_purchase_missing_ticket_reports_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let renderer = create_test_renderer();
    let attendee: AuthenticatedPrincipal = seed_attendee(&mut persistence);

    assert!(matches!(
        purchase_ticket(&mut persistence, &renderer, 999, &attendee),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_get_ticket_supports_availability_polling() {
    let mut persistence: Persistence = create_test_persistence();
    let renderer = create_test_renderer();
    let (organizer, event_id) = seed_catalog(&mut persistence);
    let attendee: AuthenticatedPrincipal = seed_attendee(&mut persistence);

    let created =
        create_ticket(&mut persistence, &renderer, event_id, vip_request(), &organizer)
            .expect("create should succeed");
    let ticket_id: i64 = created.response.ticket.id;

    assert!(
        get_ticket(&mut persistence, ticket_id)
            .expect("get should succeed")
            .is_available
    );

    purchase_ticket(&mut persistence, &renderer, ticket_id, &attendee)
        .expect("purchase should succeed");

    let polled = get_ticket(&mut persistence, ticket_id).expect("get should succeed");
    assert!(!polled.is_available);
    assert_eq!(polled.attendee_id, Some(attendee.id));
}

#[test]
fn test_delete_ticket_is_admin_only_and_unconditional() {
    let mut persistence: Persistence = create_test_persistence();
    let renderer = create_test_renderer();
    let (organizer, event_id) = seed_catalog(&mut persistence);
    let attendee: AuthenticatedPrincipal = seed_attendee(&mut persistence);
    let admin: AuthenticatedPrincipal = seed_admin(&mut persistence);

    let created =
        create_ticket(&mut persistence, &renderer, event_id, vip_request(), &organizer)
            .expect("create should succeed");
    let ticket_id: i64 = created.response.ticket.id;

    // Sold tickets delete just the same: no state precondition.
    purchase_ticket(&mut persistence, &renderer, ticket_id, &attendee)
        .expect("purchase should succeed");

    let result =
        delete_ticket(&mut persistence, ticket_id, &admin).expect("delete should succeed");
    assert_eq!(result.response.message, "Ticket deleted successfully");

    assert!(matches!(
        delete_ticket(&mut persistence, ticket_id, &admin),
        Err(ApiError::ResourceNotFound { .. })
    ));
}
