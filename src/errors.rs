// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the media picker

use std::fmt;

/// Result type alias for capture operations
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Result type alias for image post-processing
pub type ResizeResult<T> = Result<T, ResizeError>;

/// Errors surfaced by capture coordination
///
/// The first four variants are raised synchronously before any external
/// activity starts; the rest arrive through the pending capture future once
/// the platform layer reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// No camera hardware is present on this device
    CameraUnavailable,
    /// The platform has no image library to pick from
    PhotosUnsupported,
    /// The supplied capture options are unusable
    InvalidOptions(String),
    /// Another capture operation is still outstanding
    AlreadyInProgress,
    /// The user dismissed the platform capture UI
    Canceled,
    /// The platform layer reported a failure, surfaced verbatim
    Failed(String),
    /// The operation was discarded before an outcome arrived
    Abandoned,
}

impl CaptureError {
    /// Whether this error was raised before the operation was started
    ///
    /// Precondition and conflict errors leave no pending state behind; the
    /// caller can adjust input and retry immediately.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            CaptureError::CameraUnavailable
                | CaptureError::PhotosUnsupported
                | CaptureError::InvalidOptions(_)
                | CaptureError::AlreadyInProgress
        )
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::CameraUnavailable => write!(f, "No camera available on this device"),
            CaptureError::PhotosUnsupported => write!(f, "Picking photos is not supported"),
            CaptureError::InvalidOptions(msg) => write!(f, "Invalid capture options: {}", msg),
            CaptureError::AlreadyInProgress => {
                write!(f, "Only one capture operation can be active at a time")
            }
            CaptureError::Canceled => write!(f, "Capture was canceled"),
            CaptureError::Failed(msg) => write!(f, "Capture failed: {}", msg),
            CaptureError::Abandoned => write!(f, "Capture was abandoned before completing"),
        }
    }
}

impl std::error::Error for CaptureError {}

/// Image post-processing errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeError {
    /// The input bytes are not a decodable image
    Decode(String),
    /// Re-encoding the scaled image failed
    Encode(String),
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResizeError::Decode(msg) => write!(f, "Failed to decode image: {}", msg),
            ResizeError::Encode(msg) => write!(f, "Failed to encode image: {}", msg),
        }
    }
}

impl std::error::Error for ResizeError {}

impl From<image::ImageError> for ResizeError {
    fn from(err: image::ImageError) -> Self {
        ResizeError::Decode(err.to_string())
    }
}
