// SPDX-License-Identifier: GPL-3.0-only

//! Bounded, aspect-preserving image post-processing
//!
//! Capture results can be arbitrarily large; callers bound them before
//! upload. The scale-down is deterministic: a height pass followed by a
//! width pass that overrides it, so the most restrictive dimension sets the
//! true scale factor. Images already within bounds pass through untouched —
//! this never upscales.

use serde::{Deserialize, Serialize};
use std::io::Cursor;
use tracing::debug;

use crate::constants::{DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, RESIZE_JPEG_QUALITY};
use crate::errors::{ResizeError, ResizeResult};

/// Maximum output dimensions for a resize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeBounds {
    /// Maximum output width in pixels
    pub max_width: u32,
    /// Maximum output height in pixels
    pub max_height: u32,
}

impl ResizeBounds {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Equal bounds in both dimensions
    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }
}

impl Default for ResizeBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WIDTH, DEFAULT_MAX_HEIGHT)
    }
}

/// Scale image bytes down to fit `bounds`, preserving aspect ratio
///
/// Returns the input bytes unchanged when the image already fits. Scaled
/// output is re-encoded as JPEG at quality 95 regardless of the input
/// container.
///
/// # Errors
///
/// [`ResizeError::Decode`] when the input is not a decodable image,
/// [`ResizeError::Encode`] when re-encoding fails.
pub fn resize(data: &[u8], bounds: ResizeBounds) -> ResizeResult<Vec<u8>> {
    let original = image::load_from_memory(data)?;

    let original_width = original.width();
    let original_height = original.height();

    if original_width <= bounds.max_width && original_height <= bounds.max_height {
        debug!(
            width = original_width,
            height = original_height,
            "image already fits bounds, returning unchanged"
        );
        return Ok(data.to_vec());
    }

    let mut resized_width = original_width as f32;
    let mut resized_height = original_height as f32;

    // Height pass
    if resized_height > bounds.max_height as f32 {
        resized_height = bounds.max_height as f32;
        let factor = original_height as f32 / bounds.max_height as f32;
        resized_width = original_width as f32 / factor;
    }

    // Width pass, applied after and overriding the height pass
    if resized_width > bounds.max_width as f32 {
        resized_width = bounds.max_width as f32;
        let factor = original_width as f32 / bounds.max_width as f32;
        resized_height = original_height as f32 / factor;
    }

    // Extreme aspect ratios can round a dimension down to zero
    let target_width = (resized_width.round() as u32).max(1);
    let target_height = (resized_height.round() as u32).max(1);

    debug!(
        from_width = original_width,
        from_height = original_height,
        to_width = target_width,
        to_height = target_height,
        "resizing image"
    );

    let resized = original.resize_exact(
        target_width,
        target_height,
        image::imageops::FilterType::Lanczos3,
    );

    encode_jpeg(&resized.to_rgb8())
}

/// Run [`resize`] on a blocking worker thread
///
/// Decode and scale are CPU-bound; this keeps them off the async executor.
pub async fn resize_in_background(data: Vec<u8>, bounds: ResizeBounds) -> ResizeResult<Vec<u8>> {
    tokio::task::spawn_blocking(move || resize(&data, bounds))
        .await
        .map_err(|e| ResizeError::Encode(format!("resize task error: {}", e)))?
}

fn encode_jpeg(image: &image::RgbImage) -> ResizeResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = Cursor::new(&mut buffer);

    let mut encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, RESIZE_JPEG_QUALITY);
    encoder
        .encode(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ResizeError::Encode(e.to_string()))?;

    Ok(buffer)
}
