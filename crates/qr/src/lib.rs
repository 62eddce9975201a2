// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! QR payload codec and renderer boundary for the EventHub ticketing
//! backend.
//!
//! The codec produces the plain-text proof-of-purchase payload embedded
//! in every ticket's QR image. The payload is a ticket-authenticity
//! artifact, not a personal record: it carries ticket, event, and
//! organizer facts only. Attendee data never appears in it, in any
//! lifecycle state — the [`QrPayloadFacts`] input type cannot even
//! represent attendee fields.
//!
//! The renderer boundary ([`QrRenderer`]) turns the payload into a
//! scannable image delivered as a data URI. The production
//! implementation ([`SvgQrRenderer`]) renders an SVG via the `qrcode`
//! crate; callers treat renderer failure as fatal to the operation that
//! needed the image.

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

mod codec;
mod error;
mod render;

#[cfg(test)]
mod tests;

pub use codec::{QrPayloadFacts, encode};
pub use error::QrError;
pub use render::{QrRenderer, SvgQrRenderer};
