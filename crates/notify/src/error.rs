// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while composing or delivering a notification.
///
/// These errors never cross the API boundary; callers log them and move
/// on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// A sender or recipient address could not be parsed.
    InvalidAddress(String),
    /// An attachment data URI was malformed.
    InvalidAttachment(String),
    /// The message could not be assembled.
    BuildFailed(String),
    /// The SMTP transport rejected or failed the send.
    TransportFailed(String),
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAddress(msg) => write!(f, "Invalid email address: {msg}"),
            Self::InvalidAttachment(msg) => write!(f, "Invalid attachment: {msg}"),
            Self::BuildFailed(msg) => write!(f, "Failed to build email: {msg}"),
            Self::TransportFailed(msg) => write!(f, "Failed to send email: {msg}"),
        }
    }
}

impl std::error::Error for NotifyError {}
