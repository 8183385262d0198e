//! Reference-image normalization.
//!
//! The generation service accepts exactly one input shape: an opaque RGB
//! JPEG at 1280x720, base64-encoded inside the request body. This module
//! turns arbitrary uploaded or fetched image bytes into that shape.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{GenericImageView, Rgb, RgbImage, RgbaImage};

use crate::error::{ReelGenError, Result};
use crate::models::ReferenceImage;

pub const TARGET_WIDTH: u32 = 1280;
pub const TARGET_HEIGHT: u32 = 720;
pub const JPEG_QUALITY: u8 = 95;

/// Normalize arbitrary image bytes into the canonical encoded payload.
///
/// Dimensions other than 1280x720 are stretched to fit with a Lanczos
/// filter; no cropping, no aspect-ratio preservation. Transparency is
/// composited onto an opaque white background. The result is a base64
/// JPEG at quality 95, ready to embed in a request.
pub fn normalize(image_bytes: &[u8]) -> Result<ReferenceImage> {
    let mut img = image::load_from_memory(image_bytes)
        .map_err(|e| ReelGenError::InvalidImage(e.to_string()))?;

    let (width, height) = img.dimensions();
    if (width, height) != (TARGET_WIDTH, TARGET_HEIGHT) {
        log::info!(
            "📐 Optimizing image resolution from {}x{} to {}x{}",
            width,
            height,
            TARGET_WIDTH,
            TARGET_HEIGHT
        );
        img = img.resize_exact(TARGET_WIDTH, TARGET_HEIGHT, FilterType::Lanczos3);
    }

    let rgb = if img.color().has_alpha() {
        log::info!("🎨 Converting image format for compatibility");
        composite_onto_white(&img.to_rgba8())
    } else {
        img.to_rgb8()
    };

    let mut encoded = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY);
    encoder
        .encode_image(&rgb)
        .map_err(|e| ReelGenError::InvalidImage(e.to_string()))?;

    Ok(ReferenceImage::jpeg(STANDARD.encode(&encoded)))
}

/// Alpha-blend every pixel onto a white background.
fn composite_onto_white(rgba: &RgbaImage) -> RgbImage {
    let (width, height) = rgba.dimensions();
    let mut rgb = RgbImage::new(width, height);

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = pixel[3] as f32 / 255.0;
        let blend = |channel: u8| (channel as f32 * alpha + 255.0 * (1.0 - alpha)).round() as u8;
        rgb.put_pixel(x, y, Rgb([blend(pixel[0]), blend(pixel[1]), blend(pixel[2])]));
    }

    rgb
}
