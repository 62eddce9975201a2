// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Message, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};
use tracing::info;

use crate::error::NotifyError;
use crate::message::Notification;

/// Delivers transactional email.
///
/// Implementations block on I/O; async callers run `send` under a
/// blocking task. Delivery errors are returned so the caller can log
/// them, but no caller treats them as operation failures.
pub trait Notifier: Send + Sync {
    /// Delivers a notification.
    ///
    /// # Arguments
    ///
    /// * `notification` - The notification to deliver
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be assembled or the
    /// transport fails. Callers log the error and never propagate it.
    fn send(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// SMTP connection configuration.
///
/// Mirrors the deployment environment surface: `SMTP_HOST`,
/// `SMTP_PORT`, `EMAIL_USER`, `EMAIL_PASS`, and `EMAIL_FROM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    /// The SMTP relay host.
    pub host: String,
    /// The SMTP relay port.
    pub port: u16,
    /// The authentication username.
    pub username: String,
    /// The authentication password.
    pub password: String,
    /// The sender address placed in the `From` header.
    pub from_address: String,
}

impl SmtpConfig {
    /// Reads the SMTP configuration from the process environment.
    ///
    /// Returns `None` unless `SMTP_HOST`, `EMAIL_USER`, and
    /// `EMAIL_PASS` are all present; deployments without them fall back
    /// to the [`NullNotifier`]. `SMTP_PORT` defaults to 587 and
    /// `EMAIL_FROM` defaults to the authentication username.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let host: String = std::env::var("SMTP_HOST").ok()?;
        let username: String = std::env::var("EMAIL_USER").ok()?;
        let password: String = std::env::var("EMAIL_PASS").ok()?;

        let port: u16 = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(587);
        let from_address: String =
            std::env::var("EMAIL_FROM").unwrap_or_else(|_| username.clone());

        Some(Self {
            host,
            port,
            username,
            password,
            from_address,
        })
    }
}

/// Production notifier delivering mail over SMTP via `lettre`.
#[derive(Clone)]
pub struct SmtpNotifier {
    /// The SMTP relay host.
    host: String,
    /// The SMTP relay port.
    port: u16,
    /// The SMTP credentials.
    credentials: Credentials,
    /// The sender address.
    from_address: String,
}

impl SmtpNotifier {
    /// Creates a notifier from the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The SMTP connection configuration
    #[must_use]
    pub fn new(config: SmtpConfig) -> Self {
        Self {
            host: config.host,
            port: config.port,
            credentials: Credentials::new(config.username, config.password),
            from_address: config.from_address,
        }
    }

    /// Builds a transport for a single send.
    ///
    /// A fresh transport per message avoids holding pooled connections
    /// open between infrequent transactional sends.
    fn build_transport(&self) -> Result<SmtpTransport, NotifyError> {
        Ok(SmtpTransport::relay(&self.host)
            .map_err(|e| NotifyError::TransportFailed(format!("SMTP relay error: {e}")))?
            .port(self.port)
            .credentials(self.credentials.clone())
            .build())
    }

    /// Assembles the lettre message for a notification.
    fn build_message(&self, notification: &Notification) -> Result<Message, NotifyError> {
        let builder = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|e| NotifyError::InvalidAddress(format!("from: {e}")))?,
            )
            .to(notification
                .to
                .parse()
                .map_err(|e| NotifyError::InvalidAddress(format!("to: {e}")))?)
            .subject(&notification.subject);

        match &notification.attachment {
            Some(attachment) => {
                let content: Vec<u8> = STANDARD
                    .decode(&attachment.content_base64)
                    .map_err(|e| NotifyError::InvalidAttachment(e.to_string()))?;
                let content_type: ContentType = ContentType::parse(&attachment.content_type)
                    .map_err(|e| NotifyError::InvalidAttachment(e.to_string()))?;

                builder
                    .multipart(
                        MultiPart::mixed()
                            .singlepart(SinglePart::plain(notification.body.clone()))
                            .singlepart(
                                Attachment::new(attachment.filename.clone())
                                    .body(content, content_type),
                            ),
                    )
                    .map_err(|e| NotifyError::BuildFailed(e.to_string()))
            }
            None => builder
                .body(notification.body.clone())
                .map_err(|e| NotifyError::BuildFailed(e.to_string())),
        }
    }
}

impl Notifier for SmtpNotifier {
    fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        let message: Message = self.build_message(notification)?;
        let transport: SmtpTransport = self.build_transport()?;

        transport
            .send(&message)
            .map_err(|e| NotifyError::TransportFailed(e.to_string()))?;

        info!(to = %notification.to, subject = %notification.subject, "Email sent");
        Ok(())
    }
}

/// Notifier used when no SMTP configuration is present.
///
/// Logs the notification and discards it, keeping notification-sending
/// call sites unconditional.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl NullNotifier {
    /// Creates a new null notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for NullNotifier {
    fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        info!(
            to = %notification.to,
            subject = %notification.subject,
            has_attachment = notification.attachment.is_some(),
            "SMTP not configured; discarding notification"
        );
        Ok(())
    }
}
