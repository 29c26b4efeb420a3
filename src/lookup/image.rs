// ABOUTME: Image input encoding for remote recognition transports
// ABOUTME: Accepts raw bytes or a data URL and yields bare base64 without a media-type prefix
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use crate::errors::{AppError, AppResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// An image handed to the recognition pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageInput {
    /// Raw image file bytes
    Bytes(Vec<u8>),
    /// A `data:<mime>;base64,<payload>` URL as produced by browser file readers
    DataUrl(String),
}

impl ImageInput {
    /// Whether the input carries no image data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bytes(bytes) => bytes.is_empty(),
            Self::DataUrl(url) => url.trim().is_empty(),
        }
    }
}

impl From<Vec<u8>> for ImageInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Encode an image to standard-alphabet base64 with any media-type prefix stripped
///
/// # Errors
///
/// Returns `InvalidInput` when the input is empty or a data URL has no payload separator
pub fn encode_image(input: &ImageInput) -> AppResult<String> {
    if input.is_empty() {
        return Err(AppError::invalid_input("image input is empty"));
    }

    match input {
        ImageInput::Bytes(bytes) => Ok(STANDARD.encode(bytes)),
        ImageInput::DataUrl(url) => {
            let url = url.trim();
            if !url.starts_with("data:") {
                return Ok(url.to_owned());
            }
            url.split_once(',')
                .map(|(_, payload)| payload.to_owned())
                .filter(|payload| !payload.is_empty())
                .ok_or_else(|| AppError::invalid_input("data URL has no base64 payload"))
        }
    }
}
