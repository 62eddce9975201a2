// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::NotifyError;
use crate::message::{Notification, NotificationAttachment};
use crate::notifier::{Notifier, NullNotifier};

#[test]
fn test_attachment_from_data_uri() {
    let attachment: NotificationAttachment =
        NotificationAttachment::from_data_uri("ticket-qr-code.svg", "data:image/svg+xml;base64,AAAA")
            .expect("valid data URI");

    assert_eq!(attachment.filename, "ticket-qr-code.svg");
    assert_eq!(attachment.content_type, "image/svg+xml");
    assert_eq!(attachment.content_base64, "AAAA");
}

#[test]
fn test_attachment_rejects_malformed_uris() {
    assert!(matches!(
        NotificationAttachment::from_data_uri("x.svg", "image/svg+xml;base64,AAAA"),
        Err(NotifyError::InvalidAttachment(_))
    ));
    assert!(matches!(
        NotificationAttachment::from_data_uri("x.svg", "data:image/svg+xml,plain"),
        Err(NotifyError::InvalidAttachment(_))
    ));
    assert!(matches!(
        NotificationAttachment::from_data_uri("x.svg", "data:;base64,AAAA"),
        Err(NotifyError::InvalidAttachment(_))
    ));
}

#[test]
fn test_notification_builder() {
    let attachment: NotificationAttachment =
        NotificationAttachment::from_data_uri("x.svg", "data:image/svg+xml;base64,AAAA")
            .expect("valid data URI");

    let notification: Notification = Notification::new(
        String::from("ada@example.com"),
        String::from("Subject"),
        String::from("Body"),
    )
    .with_attachment(attachment.clone());

    assert_eq!(notification.to, "ada@example.com");
    assert_eq!(notification.attachment, Some(attachment));
}

#[test]
fn test_null_notifier_swallows_everything() {
    let notification: Notification = Notification::new(
        String::from("ada@example.com"),
        String::from("Subject"),
        String::from("Body"),
    );
    assert_eq!(NullNotifier::new().send(&notification), Ok(()));
}
