// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::PrimitiveDateTime;
use time::macros::format_description;

/// Width of the label column in the rendered payload.
const LABEL_WIDTH: usize = 15;

/// Literal rendered for missing organizer contact fields.
const MISSING: &str = "N/A";

/// The point-in-time facts embedded in a ticket's QR payload.
///
/// The struct deliberately has no attendee fields: the payload proves
/// ticket authenticity, it does not record the purchase. The facts are
/// captured at encode time, so a later change to the event or organizer
/// does not retroactively alter an already-rendered payload.
#[derive(Debug, Clone, PartialEq)]
pub struct QrPayloadFacts {
    /// The ticket's canonical identifier.
    pub ticket_id: i64,
    /// The ticket label (e.g., "VIP").
    pub ticket_type: String,
    /// The owning event's name.
    pub event_name: String,
    /// The owning event's genre.
    pub event_genre: String,
    /// The owning event's price in dollars.
    pub event_price: f64,
    /// The organizer's display name, if known.
    pub organizer_name: Option<String>,
    /// The organizer's email address, if known.
    pub organizer_email: Option<String>,
    /// The ticket's creation timestamp as stored (`YYYY-MM-DD HH:MM:SS`).
    pub created_at: String,
}

/// Encodes payload facts into the fixed-order plain-text block.
///
/// The function is pure and deterministic: identical facts always yield
/// byte-identical output. Each line renders the label padded right to a
/// fixed column width, followed by `: ` and the value, with surrounding
/// whitespace trimmed per line. Missing organizer contact fields render
/// the literal `N/A`.
///
/// # Arguments
///
/// * `facts` - The ticket/event/organizer facts to encode
#[must_use]
pub fn encode(facts: &QrPayloadFacts) -> String {
    let ticket_id: String = facts.ticket_id.to_string();
    let price: String = format!("${}", facts.event_price);
    let organizer_name: &str = facts.organizer_name.as_deref().unwrap_or(MISSING);
    let organizer_email: &str = facts.organizer_email.as_deref().unwrap_or(MISSING);
    let created_at: String = format_timestamp(&facts.created_at);

    let fields: [(&str, &str); 8] = [
        ("Ticket ID", &ticket_id),
        ("Ticket Type", &facts.ticket_type),
        ("Event Name", &facts.event_name),
        ("Event Genre", &facts.event_genre),
        ("Event Price", &price),
        ("Organizer Name", organizer_name),
        ("Organizer Email", organizer_email),
        ("Created At", &created_at),
    ];

    fields
        .iter()
        .map(|(label, value)| format!("{label:<LABEL_WIDTH$}: {value}").trim().to_string())
        .collect::<Vec<String>>()
        .join("\n")
}

/// Formats a stored `YYYY-MM-DD HH:MM:SS` timestamp in the locale style
/// used on the payload (`M/D/YYYY, H:MM:SS AM`).
///
/// Falls back to the raw stored string if it does not parse; the codec
/// must stay infallible so that payload generation never invents a
/// failure mode of its own.
fn format_timestamp(stored: &str) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let Ok(parsed) = PrimitiveDateTime::parse(stored, &format) else {
        return stored.to_string();
    };

    let hour: u8 = parsed.hour();
    let (hour_12, meridiem): (u8, &str) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };

    format!(
        "{}/{}/{}, {}:{:02}:{:02} {}",
        u8::from(parsed.month()),
        parsed.day(),
        parsed.year(),
        hour_12,
        parsed.minute(),
        parsed.second(),
        meridiem
    )
}
