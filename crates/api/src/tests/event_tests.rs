// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use eventhub_persistence::Persistence;

use crate::auth::AuthenticatedPrincipal;
use crate::error::ApiError;
use crate::handlers::{create_event, create_ticket, delete_event, get_event, update_event};
use crate::request_response::{
    CreateEventRequest, CreateTicketRequest, EventWithTicketsResponse, UpdateEventRequest,
};
use crate::tests::{
    create_test_event_request, create_test_persistence, create_test_renderer, seed_admin,
    seed_organizer, seed_principal,
};

#[test]
fn test_create_event_succeeds_with_confirmation() {
    let mut persistence: Persistence = create_test_persistence();
    let organizer: AuthenticatedPrincipal = seed_organizer(&mut persistence);

    let result = create_event(&mut persistence, create_test_event_request(), &organizer)
        .expect("create should succeed");

    assert_eq!(result.response.message, "Event created successfully");
    assert_eq!(result.response.event.name, "Rock Night");
    assert_eq!(result.response.event.organizer_id, organizer.id);
    assert_eq!(
        result.response.event.organizer_email.as_deref(),
        Some("ada@example.com")
    );
    assert!(!result.response.event.created_at.is_empty());

    let notification = result.notification.expect("confirmation email composed");
    assert_eq!(notification.to, "ada@example.com");
    assert_eq!(notification.subject, "EventHub - Event Created Successfully");
    assert!(notification.body.contains("Rock Night"));
    assert!(notification.attachment.is_none());
}

#[test]
fn test_create_event_trims_and_validates_fields() {
    let mut persistence: Persistence = create_test_persistence();
    let organizer: AuthenticatedPrincipal = seed_organizer(&mut persistence);

    let mut request: CreateEventRequest = create_test_event_request();
    request.name = String::from("  Rock Night  ");
    let result = create_event(&mut persistence, request, &organizer)
        .expect("create should succeed");
    assert_eq!(result.response.event.name, "Rock Night");

    let mut request: CreateEventRequest = create_test_event_request();
    request.description = String::from("   ");
    assert!(matches!(
        create_event(&mut persistence, request, &organizer),
        Err(ApiError::InvalidInput { field, .. }) if field == "description"
    ));

    let mut request: CreateEventRequest = create_test_event_request();
    request.price = -1.0;
    assert!(matches!(
        create_event(&mut persistence, request, &organizer),
        Err(ApiError::InvalidInput { field, .. }) if field == "price"
    ));
}

#[test]
fn test_get_event_includes_tickets() {
    let mut persistence: Persistence = create_test_persistence();
    let renderer = create_test_renderer();
    let organizer: AuthenticatedPrincipal = seed_organizer(&mut persistence);

    let created = create_event(&mut persistence, create_test_event_request(), &organizer)
        .expect("create should succeed");
    let event_id: i64 = created.response.event.id;

    create_ticket(
        &mut persistence,
        &renderer,
        event_id,
        CreateTicketRequest {
            ticket_type: String::from("VIP"),
        },
        &organizer,
    )
    .expect("ticket creation should succeed");

    let response: EventWithTicketsResponse =
        get_event(&mut persistence, event_id).expect("get should succeed");
    assert_eq!(response.event.id, event_id);
    assert_eq!(response.tickets.len(), 1);
    assert_eq!(response.tickets[0].ticket_type, "VIP");
    assert!(response.tickets[0].is_available);

    assert!(matches!(
        get_event(&mut persistence, 999),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_update_event_owner_only() {
    let mut persistence: Persistence = create_test_persistence();
    let organizer: AuthenticatedPrincipal = seed_organizer(&mut persistence);
    let rival: AuthenticatedPrincipal = seed_principal(
        &mut persistence,
        "Eve Organizer",
        "eve@example.com",
        crate::auth::Role::Organizer,
    );

    let created = create_event(&mut persistence, create_test_event_request(), &organizer)
        .expect("create should succeed");
    let event_id: i64 = created.response.event.id;

    let changes: UpdateEventRequest = UpdateEventRequest {
        name: Some(String::from("Rock Night II")),
        price: Some(30.0),
        ..UpdateEventRequest::default()
    };

    // A non-owner reads as not-found, indistinguishable from absence.
    assert!(matches!(
        update_event(&mut persistence, event_id, changes.clone(), &rival),
        Err(ApiError::ResourceNotFound { .. })
    ));

    let result = update_event(&mut persistence, event_id, changes, &organizer)
        .expect("update should succeed");
    assert_eq!(result.response.event.name, "Rock Night II");
    assert!((result.response.event.price - 30.0).abs() < f64::EPSILON);
    // Untouched fields survive a partial update.
    assert_eq!(result.response.event.description, "An evening of rock");
    assert!(result.notification.is_none());
}

#[test]
fn test_update_event_rejects_bad_fields() {
    let mut persistence: Persistence = create_test_persistence();
    let organizer: AuthenticatedPrincipal = seed_organizer(&mut persistence);
    let created = create_event(&mut persistence, create_test_event_request(), &organizer)
        .expect("create should succeed");
    let event_id: i64 = created.response.event.id;

    assert!(matches!(
        update_event(
            &mut persistence,
            event_id,
            UpdateEventRequest {
                price: Some(-5.0),
                ..UpdateEventRequest::default()
            },
            &organizer,
        ),
        Err(ApiError::InvalidInput { field, .. }) if field == "price"
    ));

    assert!(matches!(
        update_event(
            &mut persistence,
            event_id,
            UpdateEventRequest {
                name: Some(String::from("   ")),
                ..UpdateEventRequest::default()
            },
            &organizer,
        ),
        Err(ApiError::InvalidInput { field, .. }) if field == "name"
    ));
}

#[test]
fn test_update_event_with_no_changes_returns_current_state() {
    let mut persistence: Persistence = create_test_persistence();
    let organizer: AuthenticatedPrincipal = seed_organizer(&mut persistence);
    let created = create_event(&mut persistence, create_test_event_request(), &organizer)
        .expect("create should succeed");

    let result = update_event(
        &mut persistence,
        created.response.event.id,
        UpdateEventRequest::default(),
        &organizer,
    )
    .expect("no-op update should succeed");
    assert_eq!(result.response.event.name, "Rock Night");
}

#[test]
fn test_delete_event_cascades_tickets() {
    let mut persistence: Persistence = create_test_persistence();
    let renderer = create_test_renderer();
    let organizer: AuthenticatedPrincipal = seed_organizer(&mut persistence);

    let created = create_event(&mut persistence, create_test_event_request(), &organizer)
        .expect("create should succeed");
    let event_id: i64 = created.response.event.id;

    for label in ["VIP", "Regular"] {
        create_ticket(
            &mut persistence,
            &renderer,
            event_id,
            CreateTicketRequest {
                ticket_type: label.to_string(),
            },
            &organizer,
        )
        .expect("ticket creation should succeed");
    }

    let result = delete_event(&mut persistence, event_id, &organizer)
        .expect("delete should succeed");
    assert_eq!(result.response.deleted_tickets, 2);
    assert!(result.notification.is_some());

    // Cascade completeness: no event, no tickets.
    assert!(matches!(
        get_event(&mut persistence, event_id),
        Err(ApiError::ResourceNotFound { .. })
    ));
    assert!(
        persistence
            .list_tickets_for_event(event_id)
            .expect("query should succeed")
            .is_empty()
    );
}

#[test]
fn test_delete_event_admin_can_delete_any() {
    let mut persistence: Persistence = create_test_persistence();
    let organizer: AuthenticatedPrincipal = seed_organizer(&mut persistence);
    let admin: AuthenticatedPrincipal = seed_admin(&mut persistence);

    let created = create_event(&mut persistence, create_test_event_request(), &organizer)
        .expect("create should succeed");

    let result = delete_event(&mut persistence, created.response.event.id, &admin)
        .expect("admin delete should succeed");
    assert_eq!(result.response.deleted_tickets, 0);
}

#[test]
fn test_delete_event_foreign_organizer_reads_as_missing() {
    let mut persistence: Persistence = create_test_persistence();
    let organizer: AuthenticatedPrincipal = seed_organizer(&mut persistence);
    let rival: AuthenticatedPrincipal = seed_principal(
        &mut persistence,
        "Eve Organizer",
        "eve@example.com",
        crate::auth::Role::Organizer,
    );

    let created = create_event(&mut persistence, create_test_event_request(), &organizer)
        .expect("create should succeed");

    assert!(matches!(
        delete_event(&mut persistence, created.response.event.id, &rival),
        Err(ApiError::ResourceNotFound { .. })
    ));
}
