// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod event_tests;
mod principal_tests;
mod ticket_tests;

use eventhub_persistence::Persistence;
use eventhub_qr::SvgQrRenderer;

use crate::auth::{AuthenticatedPrincipal, Role};
use crate::request_response::CreateEventRequest;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_test_renderer() -> SvgQrRenderer {
    SvgQrRenderer::new()
}

/// Seeds a principal row and returns the matching authenticated
/// principal, as the identity gate would supply it.
pub fn seed_principal(
    persistence: &mut Persistence,
    name: &str,
    email: &str,
    role: Role,
) -> AuthenticatedPrincipal {
    let id: i64 = persistence
        .create_principal(name, email, role.as_str())
        .expect("Failed to create principal");
    AuthenticatedPrincipal::new(id, name.to_string(), email.to_string(), role)
}

pub fn seed_organizer(persistence: &mut Persistence) -> AuthenticatedPrincipal {
    seed_principal(
        persistence,
        "Ada Organizer",
        "ada@example.com",
        Role::Organizer,
    )
}

pub fn seed_attendee(persistence: &mut Persistence) -> AuthenticatedPrincipal {
    seed_principal(persistence, "Bob Attendee", "bob@example.com", Role::Attendee)
}

pub fn seed_admin(persistence: &mut Persistence) -> AuthenticatedPrincipal {
    seed_principal(persistence, "Mia Admin", "mia@example.com", Role::Admin)
}

pub fn create_test_event_request() -> CreateEventRequest {
    CreateEventRequest {
        name: String::from("Rock Night"),
        description: String::from("An evening of rock"),
        genre: String::from("Rock"),
        category: String::from("Concert"),
        price: 25.0,
    }
}
