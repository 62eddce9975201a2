// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transactional email boundary for the EventHub ticketing backend.
//!
//! Notifications are strictly best-effort: delivery happens outside the
//! transactional boundary of every operation that composes one, and a
//! failed send is logged, never retried, and never surfaced to the
//! caller. The [`Notifier`] trait keeps the transport swappable; the
//! production implementation ([`SmtpNotifier`]) speaks SMTP via
//! `lettre`, and [`NullNotifier`] stands in when no SMTP configuration
//! is present.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod message;
mod notifier;

#[cfg(test)]
mod tests;

pub use error::NotifyError;
pub use message::{Notification, NotificationAttachment};
pub use notifier::{Notifier, NullNotifier, SmtpConfig, SmtpNotifier};
