// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Outbound notification composition.
//!
//! Handlers build notifications here and hand them back in their
//! [`crate::ApiResult`]; the server fires them after responding.
//! Composition must never fail an operation, so attachment parsing
//! degrades to a plain message.

use eventhub_domain::{Event, Ticket};
use eventhub_notify::{Notification, NotificationAttachment};
use time::OffsetDateTime;
use tracing::warn;

use crate::auth::AuthenticatedPrincipal;

/// Filename used for the QR attachment on purchase confirmations.
const QR_ATTACHMENT_FILENAME: &str = "ticket-qr-code.svg";

/// Formats today's date in the `M/D/YYYY` style used in email bodies.
fn today() -> String {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    format!("{}/{}/{}", u8::from(now.month()), now.day(), now.year())
}

/// Composes the organizer confirmation sent after event creation.
#[must_use]
pub fn event_created(organizer: &AuthenticatedPrincipal, event: &Event) -> Notification {
    let body: String = format!(
        "Dear {},\n\n\
         Congratulations! You have successfully created a new event.\n\n\
         Event Details:\n\
         - Name: {}\n\
         - Description: {}\n\
         - Genre: {}\n\
         - Price: ${}\n\
         - Created Date: {}\n\n\
         Your event is now live and attendees can view it. You can create tickets \
         for this event from your organizer dashboard.\n\n\
         Best regards,\n\
         EventHub Team",
        organizer.name,
        event.name,
        event.description,
        event.genre,
        event.price,
        today(),
    );

    Notification::new(
        organizer.email.clone(),
        String::from("EventHub - Event Created Successfully"),
        body,
    )
}

/// Composes the confirmation sent to the requester after event
/// deletion, covering both the owner and the admin path.
#[must_use]
pub fn event_deleted(
    requester: &AuthenticatedPrincipal,
    event: &Event,
    deleted_tickets: usize,
) -> Notification {
    let body: String = format!(
        "Dear {},\n\n\
         You have successfully deleted an event.\n\n\
         Deleted Event Details:\n\
         - Name: {}\n\
         - Description: {}\n\
         - Genre: {}\n\
         - Price: ${}\n\
         - Deleted Date: {}\n\
         - Tickets Deleted: {}\n\n\
         All associated tickets have also been removed.\n\n\
         Best regards,\n\
         EventHub Team",
        requester.name,
        event.name,
        event.description,
        event.genre,
        event.price,
        today(),
        deleted_tickets,
    );

    Notification::new(
        requester.email.clone(),
        String::from("EventHub - Event Deleted"),
        body,
    )
}

/// Composes the purchase confirmation carrying the rendered QR image.
///
/// If the ticket's stored QR data URI cannot be parsed into an
/// attachment, the confirmation goes out without it.
#[must_use]
pub fn ticket_purchased(
    attendee: &AuthenticatedPrincipal,
    ticket: &Ticket,
    event: &Event,
) -> Notification {
    let body: String = format!(
        "Dear {},\n\n\
         Congratulations! You have successfully purchased a ticket.\n\n\
         Ticket Details:\n\
         - Event: {}\n\
         - Ticket Type: {}\n\
         - Genre: {}\n\
         - Price: ${}\n\
         - Purchase Date: {}\n\n\
         Event Details:\n\
         - Description: {}\n\n\
         Your QR Code Ticket:\n\
         Please find your QR code attached to this email. You can also scan it \
         from your dashboard.\n\n\
         Best regards,\n\
         EventHub Team",
        attendee.name,
        event.name,
        ticket.ticket_type,
        event.genre,
        event.price,
        today(),
        event.description,
    );

    let notification: Notification = Notification::new(
        attendee.email.clone(),
        String::from("EventHub - Ticket Purchase Confirmation"),
        body,
    );

    match ticket.qr_code.as_deref() {
        Some(data_uri) => {
            match NotificationAttachment::from_data_uri(QR_ATTACHMENT_FILENAME, data_uri) {
                Ok(attachment) => notification.with_attachment(attachment),
                Err(err) => {
                    warn!(error = %err, "Skipping unparseable QR attachment");
                    notification
                }
            }
        }
        None => notification,
    }
}

/// Composes the admin summary sent after deleting an attendee account.
#[must_use]
pub fn attendee_deleted(
    admin: &AuthenticatedPrincipal,
    deleted_name: &str,
    deleted_email: &str,
    released_tickets: usize,
) -> Notification {
    let body: String = format!(
        "Dear {},\n\n\
         You have successfully deleted an attendee account.\n\n\
         Deleted Attendee Details:\n\
         - Name: {}\n\
         - Email: {}\n\
         - Deleted Date: {}\n\
         - Tickets Released: {}\n\n\
         All tickets purchased by this attendee have been made available again.\n\n\
         Best regards,\n\
         EventHub Team",
        admin.name,
        deleted_name,
        deleted_email,
        today(),
        released_tickets,
    );

    Notification::new(
        admin.email.clone(),
        String::from("EventHub - Attendee Deleted (Admin Action)"),
        body,
    )
}

/// Composes the admin summary sent after deleting an organizer account.
#[must_use]
pub fn organizer_deleted(
    admin: &AuthenticatedPrincipal,
    deleted_name: &str,
    deleted_email: &str,
    deleted_events: usize,
    deleted_tickets: usize,
) -> Notification {
    let body: String = format!(
        "Dear {},\n\n\
         You have successfully deleted an organizer account.\n\n\
         Deleted Organizer Details:\n\
         - Name: {}\n\
         - Email: {}\n\
         - Deleted Date: {}\n\
         - Events Deleted: {}\n\
         - Tickets Deleted: {}\n\n\
         All events and tickets created by this organizer have been removed.\n\n\
         Best regards,\n\
         EventHub Team",
        admin.name,
        deleted_name,
        deleted_email,
        today(),
        deleted_events,
        deleted_tickets,
    );

    Notification::new(
        admin.email.clone(),
        String::from("EventHub - Organizer Deleted (Admin Action)"),
        body,
    )
}

/// Composes the admin summary sent after deleting another admin account.
#[must_use]
pub fn admin_deleted(
    admin: &AuthenticatedPrincipal,
    deleted_name: &str,
    deleted_email: &str,
) -> Notification {
    let body: String = format!(
        "Dear {},\n\n\
         You have successfully deleted an admin account.\n\n\
         Deleted Admin Details:\n\
         - Name: {}\n\
         - Email: {}\n\
         - Deleted Date: {}\n\n\
         Best regards,\n\
         EventHub Team",
        admin.name,
        deleted_name,
        deleted_email,
        today(),
    );

    Notification::new(
        admin.email.clone(),
        String::from("EventHub - Admin Account Deleted"),
        body,
    )
}
