// SPDX-License-Identifier: GPL-3.0-only

//! Single-flight media capture coordination
//!
//! This library coordinates capture operations ("take a photo", "pick a
//! photo") against a platform capture UI that runs outside the caller's
//! control flow and reports completion later, out of band. It correlates
//! those completions back to the request that triggered them, enforces that
//! at most one operation is outstanding at a time, and bounds the resulting
//! image without distorting it.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`picker`]: request-id allocation, the single-flight pending slot,
//!   completion correlation and the capture coordinator
//! - [`resize`]: deterministic, aspect-preserving image scale-down
//! - [`storage`]: file placement helpers for launcher implementations
//! - [`config`]: user configuration handling
//! - [`errors`]: error taxonomy shared across the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use media_picker::{CaptureOptions, ChannelLauncher, MediaPicker};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (launcher, requests) = ChannelLauncher::new();
//! let picker = MediaPicker::new(Arc::new(launcher));
//! let correlator = picker.correlator();
//! // Platform glue services `requests` and answers through `correlator`.
//!
//! let photo = picker
//!     .take_photo(CaptureOptions::new("reports", "incident"))?
//!     .await?;
//! println!("captured {}", photo.path.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod picker;
pub mod resize;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use errors::{CaptureError, CaptureResult, ResizeError, ResizeResult};
pub use picker::{
    CaptureAction, CaptureOptions, CaptureOutcome, ChannelLauncher, CompletionCorrelator,
    LaunchRequest, MediaFile, MediaKind, MediaLauncher, MediaPicker, PendingCapture, RequestId,
};
pub use resize::{ResizeBounds, resize, resize_in_background};
