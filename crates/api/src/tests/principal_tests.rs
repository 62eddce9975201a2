// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use eventhub_domain::TicketState;
use eventhub_persistence::Persistence;

use crate::auth::AuthenticatedPrincipal;
use crate::error::ApiError;
use crate::handlers::{
    create_event, create_principal, create_ticket, delete_principal, purchase_ticket,
};
use crate::request_response::{CreatePrincipalRequest, CreateTicketRequest};
use crate::tests::{
    create_test_event_request, create_test_persistence, create_test_renderer, seed_admin,
    seed_attendee, seed_organizer,
};

fn provision_request(email: &str, role: &str) -> CreatePrincipalRequest {
    CreatePrincipalRequest {
        name: String::from("New User"),
        email: email.to_string(),
        role: role.to_string(),
    }
}

#[test]
fn test_create_principal_validates_and_stores() {
    let mut persistence: Persistence = create_test_persistence();
    let admin: AuthenticatedPrincipal = seed_admin(&mut persistence);

    let result = create_principal(
        &mut persistence,
        provision_request("new@example.com", "attendee"),
        &admin,
    )
    .expect("create should succeed");
    assert_eq!(result.response.role, "attendee");
    assert!(result.response.id > 0);

    // Duplicate email is a conflict, not a storage error.
    assert!(matches!(
        create_principal(
            &mut persistence,
            provision_request("new@example.com", "organizer"),
            &admin,
        ),
        Err(ApiError::Conflict { message }) if message == "Email already registered"
    ));

    // Unknown roles are rejected up front.
    assert!(matches!(
        create_principal(
            &mut persistence,
            provision_request("other@example.com", "superuser"),
            &admin,
        ),
        Err(ApiError::InvalidInput { field, .. }) if field == "role"
    ));

    assert!(matches!(
        create_principal(
            &mut persistence,
            provision_request("not-an-email", "attendee"),
            &admin,
        ),
        Err(ApiError::InvalidInput { field, .. }) if field == "email"
    ));
}

#[test]
fn test_delete_attendee_releases_tickets() {
    let mut persistence: Persistence = create_test_persistence();
    let renderer = create_test_renderer();
    let organizer: AuthenticatedPrincipal = seed_organizer(&mut persistence);
    let attendee: AuthenticatedPrincipal = seed_attendee(&mut persistence);
    let admin: AuthenticatedPrincipal = seed_admin(&mut persistence);

    let event = create_event(&mut persistence, create_test_event_request(), &organizer)
        .expect("create event should succeed");
    let event_id: i64 = event.response.event.id;

    let mut ticket_ids: Vec<i64> = Vec::new();
    for label in ["VIP", "Regular"] {
        let created = create_ticket(
            &mut persistence,
            &renderer,
            event_id,
            CreateTicketRequest {
                ticket_type: label.to_string(),
            },
            &organizer,
        )
        .expect("create ticket should succeed");
        let ticket_id: i64 = created.response.ticket.id;
        purchase_ticket(&mut persistence, &renderer, ticket_id, &attendee)
            .expect("purchase should succeed");
        ticket_ids.push(ticket_id);
    }

    let result = delete_principal(&mut persistence, attendee.id, &admin)
        .expect("delete should succeed");
    assert_eq!(result.response.released_tickets, Some(2));
    assert_eq!(result.response.deleted_events, None);

    let notification = result.notification.expect("admin summary composed");
    assert_eq!(notification.to, "mia@example.com");
    assert!(notification.body.contains("Bob Attendee"));

    // Release, not delete: same tickets, same labels, Available again.
    for (ticket_id, label) in ticket_ids.iter().zip(["VIP", "Regular"]) {
        let ticket = persistence
            .get_ticket(*ticket_id)
            .expect("query should succeed")
            .expect("ticket should survive attendee deletion");
        assert_eq!(ticket.state, TicketState::Available);
        assert_eq!(ticket.ticket_type, label);
        assert_eq!(ticket.event_id, event_id);
    }

    assert_eq!(
        persistence
            .get_principal(attendee.id)
            .expect("query should succeed"),
        None
    );
}

#[test]
fn test_delete_organizer_runs_two_level_cascade() {
    let mut persistence: Persistence = create_test_persistence();
    let renderer = create_test_renderer();
    let organizer: AuthenticatedPrincipal = seed_organizer(&mut persistence);
    let admin: AuthenticatedPrincipal = seed_admin(&mut persistence);

    let mut event_ids: Vec<i64> = Vec::new();
    for _ in 0..2 {
        let mut request = create_test_event_request();
        request.name = format!("Event {}", event_ids.len() + 1);
        let created = create_event(&mut persistence, request, &organizer)
            .expect("create event should succeed");
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
            .expect("create ticket should succeed");
        }
        event_ids.push(event_id);
    }

    let result = delete_principal(&mut persistence, organizer.id, &admin)
        .expect("delete should succeed");
    assert_eq!(result.response.deleted_events, Some(2));
    assert_eq!(result.response.deleted_tickets, Some(4));

    // Cascade completeness: none of the organizer's events or tickets
    // remain.
    for event_id in event_ids {
        assert_eq!(
            persistence.get_event(event_id).expect("query should succeed"),
            None
        );
        assert!(
            persistence
                .list_tickets_for_event(event_id)
                .expect("query should succeed")
                .is_empty()
        );
    }
}

#[test]
fn test_delete_admin_refuses_self_deletion() {
    let mut persistence: Persistence = create_test_persistence();
    let admin: AuthenticatedPrincipal = seed_admin(&mut persistence);
    let other_admin = create_principal(
        &mut persistence,
        provision_request("second-admin@example.com", "admin"),
        &admin,
    )
    .expect("create should succeed");

    assert!(matches!(
        delete_principal(&mut persistence, admin.id, &admin),
        Err(ApiError::Conflict { message }) if message == "You cannot delete your own admin account"
    ));

    let result = delete_principal(&mut persistence, other_admin.response.id, &admin)
        .expect("deleting another admin should succeed");
    assert_eq!(result.response.message, "Admin deleted successfully");
}

#[test]
fn test_delete_missing_principal_reports_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let admin: AuthenticatedPrincipal = seed_admin(&mut persistence);

    assert!(matches!(
        delete_principal(&mut persistence, 999, &admin),
        Err(ApiError::ResourceNotFound { .. })
    ));
}
