// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// JPEG quality used when re-encoding resized captures
pub const RESIZE_JPEG_QUALITY: u8 = 95;

/// Default maximum width applied when no resize bounds are configured
pub const DEFAULT_MAX_WIDTH: u32 = 1024;

/// Default maximum height applied when no resize bounds are configured
pub const DEFAULT_MAX_HEIGHT: u32 = 1024;

/// Subdirectory under the photos root used when no capture directory is configured
pub const DEFAULT_MEDIA_DIR: &str = "media-picker";

/// chrono format string for timestamped fallback file names (IMG_20260805_142233)
pub const FALLBACK_NAME_FORMAT: &str = "IMG_%Y%m%d_%H%M%S";
