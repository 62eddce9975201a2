// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.


use crate::codec::QrPayloadFacts;

pub fn create_test_facts() -> QrPayloadFacts {
    QrPayloadFacts {
        ticket_id: 17,
        ticket_type: String::from("VIP"),
        event_name: String::from("Rock Night"),
        event_genre: String::from("Rock"),
        event_price: 25.0,
        organizer_name: Some(String::from("Ada Organizer")),
        organizer_email: Some(String::from("ada@example.com")),
        created_at: String::from("2026-01-05 14:30:05"),
    }
}
