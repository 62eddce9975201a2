// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use qrcode::QrCode;
use qrcode::render::svg;

use crate::error::QrError;

/// Renders an encoded payload into a scannable image data URI.
///
/// The trait exists so that the ticket lifecycle handlers can be tested
/// without producing real images, and so the image format stays a
/// boundary concern: the codec never touches image bytes.
pub trait QrRenderer: Send + Sync {
    /// Renders the payload text into an image data URI.
    ///
    /// # Arguments
    ///
    /// * `payload` - The encoded payload text
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded as a QR symbol.
    /// Callers treat this as fatal to the operation that needed the
    /// image.
    fn render(&self, payload: &str) -> Result<String, QrError>;
}

/// Production renderer producing a base64-encoded SVG data URI.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgQrRenderer;

impl SvgQrRenderer {
    /// Minimum rendered image edge in pixels.
    const MIN_DIMENSION: u32 = 240;

    /// Creates a new renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl QrRenderer for SvgQrRenderer {
    fn render(&self, payload: &str) -> Result<String, QrError> {
        let code: QrCode =
            QrCode::new(payload.as_bytes()).map_err(|e| QrError::EncodingFailed(e.to_string()))?;

        let image: String = code
            .render()
            .min_dimensions(Self::MIN_DIMENSION, Self::MIN_DIMENSION)
            .quiet_zone(true)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build();

        let encoded: String = STANDARD.encode(image.as_bytes());
        Ok(format!("data:image/svg+xml;base64,{encoded}"))
    }
}
