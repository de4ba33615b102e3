//! Image encoding: RGB raster → JPEG bytes → base64 string.
//!
//! The Ollama generate API accepts images as plain base64 strings in the
//! JSON request body. JPEG is used because question-answering over photos
//! tolerates lossy compression, and the smaller payload keeps request bodies
//! comfortably inside local-server limits even for large rasters.

use crate::error::QaError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use std::io::Cursor;
use tracing::debug;

/// Encode an RGB raster as a base64 JPEG string ready for the generate API.
pub fn encode_image(img: &RgbImage, quality: u8) -> Result<String, QaError> {
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut buf), quality);
    img.write_with_encoder(encoder)
        .map_err(|e| QaError::ImageEncoding {
            detail: format!("JPEG encoding failed: {e}"),
        })?;

    let b64 = STANDARD.encode(&buf);
    debug!("Encoded {}x{} image → {} bytes base64", img.width(), img.height(), b64.len());

    Ok(b64)
}

/// Encode a raw 3-channel (RGB, row-major, 8-bit) pixel buffer.
///
/// The buffer length must equal `width * height * 3`; anything else is a
/// shape mismatch and is rejected rather than silently reinterpreted.
pub fn encode_raw(width: u32, height: u32, pixels: Vec<u8>, quality: u8) -> Result<String, QaError> {
    let expected = width as usize * height as usize * 3;
    let actual = pixels.len();
    let img = RgbImage::from_raw(width, height, pixels).ok_or(QaError::ImageEncoding {
        detail: format!(
            "buffer shape mismatch: {width}x{height} RGB needs {expected} bytes, got {actual}"
        ),
    })?;
    encode_image(&img, quality)
}
