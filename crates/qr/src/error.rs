// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while rendering a QR payload into an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// The payload could not be encoded as a QR symbol.
    EncodingFailed(String),
}

impl std::fmt::Display for QrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EncodingFailed(msg) => write!(f, "QR encoding failed: {msg}"),
        }
    }
}

impl std::error::Error for QrError {}
