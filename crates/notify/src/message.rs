// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::NotifyError;

/// A binary attachment carried by a notification.
///
/// Attachments are built from the data URIs produced by the QR
/// renderer; the payload stays base64-encoded until the transport
/// assembles the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationAttachment {
    /// The attachment filename shown to the recipient.
    pub filename: String,
    /// The MIME content type (e.g., `image/svg+xml`).
    pub content_type: String,
    /// The base64-encoded attachment payload.
    pub content_base64: String,
}

impl NotificationAttachment {
    /// Builds an attachment from a `data:<type>;base64,<payload>` URI.
    ///
    /// # Arguments
    ///
    /// * `filename` - The filename shown to the recipient
    /// * `data_uri` - The data URI to split
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::InvalidAttachment` if the URI is not a
    /// base64 data URI.
    pub fn from_data_uri(filename: &str, data_uri: &str) -> Result<Self, NotifyError> {
        let rest: &str = data_uri.strip_prefix("data:").ok_or_else(|| {
            NotifyError::InvalidAttachment(String::from("missing 'data:' prefix"))
        })?;

        let (content_type, payload) = rest.split_once(";base64,").ok_or_else(|| {
            NotifyError::InvalidAttachment(String::from("missing ';base64,' separator"))
        })?;

        if content_type.is_empty() {
            return Err(NotifyError::InvalidAttachment(String::from(
                "missing content type",
            )));
        }

        Ok(Self {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            content_base64: payload.to_string(),
        })
    }
}

/// An outbound transactional email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The recipient address.
    pub to: String,
    /// The subject line.
    pub subject: String,
    /// The plain-text body.
    pub body: String,
    /// An optional binary attachment.
    pub attachment: Option<NotificationAttachment>,
}

impl Notification {
    /// Creates a plain-text notification without an attachment.
    ///
    /// # Arguments
    ///
    /// * `to` - The recipient address
    /// * `subject` - The subject line
    /// * `body` - The plain-text body
    #[must_use]
    pub const fn new(to: String, subject: String, body: String) -> Self {
        Self {
            to,
            subject,
            body,
            attachment: None,
        }
    }

    /// Attaches a binary payload to this notification.
    #[must_use]
    pub fn with_attachment(mut self, attachment: NotificationAttachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}
