//! Image normalization: bounded downscale plus lossy re-encode.
//!
//! Uploaded product images are stored inline in the product record, so
//! every upload is decoded, scaled to fit within [`MAX_DIMENSION`] on
//! both axes (aspect ratio preserved), re-encoded as JPEG at
//! [`JPEG_QUALITY`], and returned as a self-describing data URL. No disk
//! or network I/O happens here.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use crate::error::GatewayError;

/// Upper bound for either image dimension after normalization.
pub const MAX_DIMENSION: u32 = 800;

/// JPEG quality factor used for re-encoding (0–100 scale).
pub const JPEG_QUALITY: u8 = 70;

/// Normalizes one uploaded image into an inline JPEG data URL.
///
/// Images already within bounds keep their dimensions and are still
/// re-encoded, so the output is always a JPEG regardless of the input
/// format.
///
/// # Errors
///
/// Returns [`GatewayError::ImageDecode`] when the bytes are not a
/// decodable image. Callers processing a batch must skip the failed file
/// and continue with the rest.
pub fn normalize(bytes: &[u8]) -> Result<String, GatewayError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| GatewayError::ImageDecode(e.to_string()))?;

    let (width, height) = (decoded.width(), decoded.height());
    let (target_w, target_h) = scaled_dimensions(width, height);

    let scaled = if (target_w, target_h) == (width, height) {
        decoded
    } else {
        decoded.resize_exact(target_w, target_h, FilterType::Triangle)
    };

    // JPEG has no alpha channel; flatten before encoding.
    let rgb = scaled.to_rgb8();

    let mut jpeg = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    encoder
        .encode_image(&rgb)
        .map_err(|e| GatewayError::Internal(format!("jpeg encode failed: {e}")))?;

    Ok(format!("data:image/jpeg;base64,{}", BASE64.encode(&jpeg)))
}

/// Computes target dimensions such that neither side exceeds
/// [`MAX_DIMENSION`], preserving aspect ratio. Dimensions already within
/// bounds are returned unchanged.
#[must_use]
pub fn scaled_dimensions(width: u32, height: u32) -> (u32, u32) {
    if width > height {
        if width > MAX_DIMENSION {
            let scaled = f64::from(height) * f64::from(MAX_DIMENSION) / f64::from(width);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let scaled = (scaled.round() as u32).max(1);
            return (MAX_DIMENSION, scaled);
        }
    } else if height > MAX_DIMENSION {
        let scaled = f64::from(width) * f64::from(MAX_DIMENSION) / f64::from(height);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scaled = (scaled.round() as u32).max(1);
        return (scaled, MAX_DIMENSION);
    }
    (width, height)
}
