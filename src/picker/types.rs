// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for capture coordination

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Identifier correlating a launch request with its completion event
///
/// Ids wrap to zero after `u32::MAX`. They only need to be unique among
/// operations that are outstanding at the same time, and the single-flight
/// slot keeps that set at one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u32);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Media category requested from the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    /// Still images
    Image,
}

impl MediaKind {
    /// MIME pattern the platform picker should filter on
    pub fn mime_pattern(&self) -> &'static str {
        match self {
            MediaKind::Image => "image/*",
        }
    }
}

/// How the platform layer should obtain the media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureAction {
    /// Open the camera and capture a new photo
    CapturePhoto,
    /// Open the image library and let the user pick an existing photo
    PickPhoto,
}

/// Storage options for a capture operation
///
/// `directory` is resolved by the platform layer relative to its media root;
/// an absolute path is rejected before the operation starts. `name` is a
/// file-name hint, without extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureOptions {
    /// Directory to store the captured media in, relative to the media root
    pub directory: PathBuf,
    /// File name hint for the captured media
    pub name: String,
}

impl CaptureOptions {
    pub fn new(directory: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            name: name.into(),
        }
    }
}

/// Media produced by the platform layer
///
/// The platform layer owns the storage lifecycle of the file; this crate
/// only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    /// Where the platform layer stored the media
    pub path: PathBuf,
    /// MIME type of the stored media (e.g. "image/jpeg")
    pub mime_type: String,
}

impl MediaFile {
    pub fn new(path: impl Into<PathBuf>, mime_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Read the media bytes from disk
    pub async fn read(&self) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}

/// Terminal outcome of a capture operation, reported by the platform layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureOutcome {
    /// The capture produced a media file
    Success(MediaFile),
    /// The user dismissed the platform UI without capturing
    Canceled,
    /// The platform layer failed; the message is surfaced to the caller verbatim
    Failed(String),
}

/// Everything the platform launcher needs to start one capture operation
///
/// The completion event for this request must carry the same `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRequest {
    pub id: RequestId,
    pub kind: MediaKind,
    pub action: CaptureAction,
    pub options: CaptureOptions,
}
