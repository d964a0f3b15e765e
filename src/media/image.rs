// SPDX-License-Identifier: MPL-2.0
//! Image decoding and encoding (PNG, JPEG, GIF, WebP, BMP) plus data URIs.
//!
//! All bitmaps are handled as straight-alpha RGBA8 ([`RgbaImage`]).

use crate::domain::editing::CropRect;
use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image_rs::{imageops, ImageFormat, RgbaImage};
use std::io::Cursor;

/// MIME type of every exported image.
pub const PNG_MIME: &str = "image/png";

/// Extensions accepted by the open dialog.
pub const OPEN_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "gif"];

const DATA_URI_MIME_TYPES: &[&str] = &["png", "jpeg", "jpg", "webp"];

/// Decodes an encoded image held in memory. Animated formats yield their first frame.
///
/// # Errors
///
/// Returns [`Error::Image`] if the bytes are not a supported image.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image_rs::load_from_memory(bytes)?;
    Ok(img.to_rgba8())
}

/// Shrinks `image` so its longest side is at most `max_edge`, keeping the
/// aspect ratio. Returns `None` when it already fits.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn downscale_to_fit(image: &RgbaImage, max_edge: u32) -> Option<RgbaImage> {
    let (width, height) = image.dimensions();
    let longest = width.max(height);
    if longest <= max_edge || max_edge == 0 {
        return None;
    }
    let scale = f64::from(max_edge) / f64::from(longest);
    let target = |side: u32| ((f64::from(side) * scale).round() as u32).max(1);
    Some(imageops::thumbnail(image, target(width), target(height)))
}

/// Encodes a bitmap as PNG.
///
/// # Errors
///
/// Returns [`Error::Image`] if the encoder fails.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Encodes a bitmap as a `data:image/png;base64,...` URI.
///
/// # Errors
///
/// Returns [`Error::Image`] if PNG encoding fails.
pub fn encode_data_uri(image: &RgbaImage) -> Result<String> {
    let png = encode_png(image)?;
    Ok(format!("data:{PNG_MIME};base64,{}", STANDARD.encode(png)))
}

/// Removes a leading `data:image/<png|jpeg|jpg|webp>;base64,` prefix if present.
#[must_use]
pub fn strip_data_uri_prefix(input: &str) -> &str {
    let Some(rest) = input.strip_prefix("data:image/") else {
        return input;
    };
    DATA_URI_MIME_TYPES
        .iter()
        .find_map(|mime| rest.strip_prefix(mime)?.strip_prefix(";base64,"))
        .unwrap_or(input)
}

/// Decodes base64 image data, with or without a data URI prefix.
///
/// # Errors
///
/// Returns [`Error::Image`] if the payload is not valid base64 or not an image.
pub fn decode_base64(input: &str) -> Result<RgbaImage> {
    let payload = strip_data_uri_prefix(input.trim());
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| Error::Image(format!("invalid base64 payload: {e}")))?;
    decode(&bytes)
}

/// Copies the region described by `rect` into a new bitmap.
#[must_use]
pub fn crop(image: &RgbaImage, rect: &CropRect) -> RgbaImage {
    let (x, y, width, height) = rect.pixel_bounds(image.width(), image.height());
    imageops::crop_imm(image, x, y, width, height).to_image()
}

/// Returns a copy of `base` with `overlay` alpha-composited on top.
#[must_use]
pub fn overlay(base: &RgbaImage, layer: &RgbaImage) -> RgbaImage {
    let mut out = base.clone();
    imageops::overlay(&mut out, layer, 0, 0);
    out
}
