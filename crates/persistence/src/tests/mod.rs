// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod event_tests;

use eventhub_domain::Event;

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Seeds one principal and returns its ID.
pub fn seed_principal(persistence: &mut Persistence, name: &str, email: &str, role: &str) -> i64 {
    persistence
        .create_principal(name, email, role)
        .expect("Failed to create principal")
}

/// Seeds an organizer with an event and returns `(organizer_id, event_id)`.
pub fn seed_event(persistence: &mut Persistence, organizer_email: &str) -> (i64, i64) {
    let organizer_id: i64 =
        seed_principal(persistence, "Ada Organizer", organizer_email, "organizer");
    let event: Event = Event::new(
        "Rock Night",
        "An evening of rock",
        "Rock",
        "Concert",
        25.0,
        organizer_id,
    );
    let event_id: i64 = persistence
        .create_event(&event)
        .expect("Failed to create event");
    (organizer_id, event_id)
}
