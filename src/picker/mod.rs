// SPDX-License-Identifier: GPL-3.0-only

//! Single-flight capture coordination
//!
//! This module implements the request side of an out-of-process capture
//! flow:
//!
//! ```text
//! caller → MediaPicker::take_photo ─→ validate → allocate id → claim slot
//!                                         │
//!                                         ▼
//!                              MediaLauncher::start (fire-and-forget)
//!                                         │ (platform UI, arbitrary delay)
//!                                         ▼
//!                        CompletionCorrelator::complete(id, outcome)
//!                                         │
//!                                         ▼
//!                          release slot → resolve PendingCapture
//! ```
//!
//! At most one operation is outstanding at any instant; the pending slot
//! enforces that as a hard contract rather than a convention. The request
//! and its completion run on independent execution contexts, so the slot is
//! the only shared mutable state and every access to it is atomic.

pub mod correlator;
pub mod launcher;
pub mod pending;
pub mod request_id;
pub mod types;

pub use correlator::CompletionCorrelator;
pub use launcher::{ChannelLauncher, MediaLauncher};
pub use types::{
    CaptureAction, CaptureOptions, CaptureOutcome, LaunchRequest, MediaFile, MediaKind, RequestId,
};

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tracing::info;

use crate::errors::{CaptureError, CaptureResult};
use pending::{PendingOperation, PendingSlot};
use request_id::RequestIdAllocator;

/// Coordinates capture requests against the platform launcher
///
/// The picker validates preconditions, claims the single pending slot and
/// hands the launch off to the platform layer, returning a future that the
/// correlator resolves when the matching completion event arrives.
pub struct MediaPicker {
    launcher: Arc<dyn MediaLauncher>,
    slot: Arc<PendingSlot>,
    ids: RequestIdAllocator,
}

impl MediaPicker {
    pub fn new(launcher: Arc<dyn MediaLauncher>) -> Self {
        Self {
            launcher,
            slot: Arc::new(PendingSlot::new()),
            ids: RequestIdAllocator::new(),
        }
    }

    /// Completion endpoint for the platform layer
    ///
    /// The correlator shares this picker's pending slot; platform glue calls
    /// it from whatever context its capture UI reports on.
    pub fn correlator(&self) -> CompletionCorrelator {
        CompletionCorrelator::new(Arc::clone(&self.slot))
    }

    /// Whether camera hardware is present
    pub fn is_camera_available(&self) -> bool {
        self.launcher.is_camera_available()
    }

    /// Whether picking from the image library is supported
    pub fn is_photos_supported(&self) -> bool {
        self.launcher.is_photos_supported()
    }

    /// Capture a new photo with the camera
    ///
    /// Fails synchronously with [`CaptureError::CameraUnavailable`],
    /// [`CaptureError::InvalidOptions`] or [`CaptureError::AlreadyInProgress`]
    /// before the platform layer is involved. On success the returned
    /// [`PendingCapture`] resolves once the platform layer reports back.
    pub fn take_photo(&self, options: CaptureOptions) -> CaptureResult<PendingCapture> {
        if !self.launcher.is_camera_available() {
            return Err(CaptureError::CameraUnavailable);
        }
        self.take_media(MediaKind::Image, CaptureAction::CapturePhoto, options)
    }

    /// Pick an existing photo from the image library
    pub fn pick_photo(&self, options: CaptureOptions) -> CaptureResult<PendingCapture> {
        if !self.launcher.is_photos_supported() {
            return Err(CaptureError::PhotosUnsupported);
        }
        self.take_media(MediaKind::Image, CaptureAction::PickPhoto, options)
    }

    fn take_media(
        &self,
        kind: MediaKind,
        action: CaptureAction,
        options: CaptureOptions,
    ) -> CaptureResult<PendingCapture> {
        validate_options(&options)?;

        let id = self.ids.next();
        let (operation, receiver) = PendingOperation::new(id);

        // Claim before launching: a lost race must not start platform UI.
        // The id advance on failure is fine, ids only need to be unique
        // among outstanding operations.
        if !self.slot.claim(operation) {
            return Err(CaptureError::AlreadyInProgress);
        }

        info!(
            id = %id,
            action = ?action,
            directory = %options.directory.display(),
            "starting capture operation"
        );
        self.launcher.start(LaunchRequest {
            id,
            kind,
            action,
            options,
        });

        Ok(PendingCapture { receiver })
    }
}

fn validate_options(options: &CaptureOptions) -> CaptureResult<()> {
    if options.name.trim().is_empty() {
        return Err(CaptureError::InvalidOptions(
            "file name hint must not be empty".into(),
        ));
    }
    if options.directory.is_absolute() {
        return Err(CaptureError::InvalidOptions(
            "storage directory must be a relative path".into(),
        ));
    }
    Ok(())
}

/// Caller-visible handle for an in-flight capture operation
///
/// Resolves exactly once, when the correlator routes the matching completion
/// event: a successful capture yields the media file, cancellation and
/// platform failures surface as errors. If the operation is discarded before
/// any outcome arrives (a stale event released the slot), the future
/// resolves with [`CaptureError::Abandoned`]. Dropping the future is the
/// caller's way of giving up; a completion arriving afterwards is ignored.
#[derive(Debug)]
pub struct PendingCapture {
    receiver: oneshot::Receiver<CaptureOutcome>,
}

impl Future for PendingCapture {
    type Output = CaptureResult<MediaFile>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(CaptureOutcome::Success(file))) => Poll::Ready(Ok(file)),
            Poll::Ready(Ok(CaptureOutcome::Canceled)) => Poll::Ready(Err(CaptureError::Canceled)),
            Poll::Ready(Ok(CaptureOutcome::Failed(reason))) => {
                Poll::Ready(Err(CaptureError::Failed(reason)))
            }
            Poll::Ready(Err(_)) => Poll::Ready(Err(CaptureError::Abandoned)),
        }
    }
}
