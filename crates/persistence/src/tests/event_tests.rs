// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use eventhub_domain::Event;

use crate::Persistence;
use crate::data_models::EventChangeset;
use crate::tests::{create_test_persistence, seed_event, seed_principal};

#[test]
fn test_create_and_get_event() {
    let mut persistence: Persistence = create_test_persistence();
    let (organizer_id, event_id) = seed_event(&mut persistence, "ada@example.com");

    let event: Event = persistence
        .get_event(event_id)
        .expect("query should succeed")
        .expect("event should exist");

    assert_eq!(event.event_id, Some(event_id));
    assert_eq!(event.name, "Rock Night");
    assert_eq!(event.genre, "Rock");
    assert_eq!(event.category, "Concert");
    assert!((event.price - 25.0).abs() < f64::EPSILON);
    assert_eq!(event.organizer_id, organizer_id);
    assert!(!event.created_at.is_empty());
}

#[test]
fn test_update_event_scoped_to_owner() {
    let mut persistence: Persistence = create_test_persistence();
    let (organizer_id, event_id) = seed_event(&mut persistence, "ada@example.com");
    let other_organizer: i64 =
        seed_principal(&mut persistence, "Eve", "eve@example.com", "organizer");

    let changes: EventChangeset = EventChangeset {
        name: Some(String::from("Rock Night II")),
        price: Some(30.0),
        ..EventChangeset::default()
    };

    // Non-owner update matches zero rows.
    assert_eq!(
        persistence
            .update_event_for_organizer(event_id, other_organizer, &changes)
            .expect("update should succeed"),
        0
    );

    // Owner update applies the changed fields only.
    assert_eq!(
        persistence
            .update_event_for_organizer(event_id, organizer_id, &changes)
            .expect("update should succeed"),
        1
    );

    let event: Event = persistence
        .get_event(event_id)
        .expect("query should succeed")
        .expect("event should exist");
    assert_eq!(event.name, "Rock Night II");
    assert!((event.price - 30.0).abs() < f64::EPSILON);
    assert_eq!(event.description, "An evening of rock");
    assert_eq!(event.organizer_id, organizer_id);
}

#[test]
fn test_changeset_is_empty() {
    assert!(EventChangeset::default().is_empty());
    assert!(
        !EventChangeset {
            genre: Some(String::from("Jazz")),
            ..EventChangeset::default()
        }
        .is_empty()
    );
}

#[test]
fn test_delete_event() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, event_id) = seed_event(&mut persistence, "ada@example.com");

    assert_eq!(
        persistence
            .delete_event(event_id)
            .expect("delete should succeed"),
        1
    );
    assert_eq!(
        persistence.get_event(event_id).expect("query should succeed"),
        None
    );
}

#[test]
fn test_list_event_ids_for_organizer() {
    let mut persistence: Persistence = create_test_persistence();
    let (organizer_id, first_event) = seed_event(&mut persistence, "ada@example.com");

    let second: Event = Event::new("Jazz Eve", "Smooth", "Jazz", "Concert", 10.0, organizer_id);
    let second_event: i64 = persistence
        .create_event(&second)
        .expect("create should succeed");

    assert_eq!(
        persistence
            .list_event_ids_for_organizer(organizer_id)
            .expect("query should succeed"),
        vec![first_event, second_event]
    );
}

#[test]
fn test_delete_events_for_organizer() {
    let mut persistence: Persistence = create_test_persistence();
    let (organizer_id, _) = seed_event(&mut persistence, "ada@example.com");
    let second: Event = Event::new("Jazz Eve", "Smooth", "Jazz", "Concert", 10.0, organizer_id);
    persistence
        .create_event(&second)
        .expect("create should succeed");

    assert_eq!(
        persistence
            .delete_events_for_organizer(organizer_id)
            .expect("delete should succeed"),
        2
    );
    assert!(
        persistence
            .list_event_ids_for_organizer(organizer_id)
            .expect("query should succeed")
            .is_empty()
    );
}

#[test]
fn test_event_with_unknown_organizer_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let event: Event = Event::new("Ghost Gig", "No owner", "Rock", "Concert", 5.0, 999);
    assert!(persistence.create_event(&event).is_err());
}
