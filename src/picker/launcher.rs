// SPDX-License-Identifier: GPL-3.0-only

//! Platform launcher abstraction
//!
//! The launcher is the seam between capture coordination and whatever
//! platform mechanism actually opens a camera or gallery UI.

use tokio::sync::mpsc;
use tracing::warn;

use super::types::LaunchRequest;

/// Platform seam that opens the actual capture UI
///
/// `start` is fire-and-forget: the implementation must eventually report
/// the outcome through the [`CompletionCorrelator`], tagged with the same
/// request id, exactly once — or never report at all, in which case the
/// operation stays pending.
///
/// [`CompletionCorrelator`]: super::CompletionCorrelator
pub trait MediaLauncher: Send + Sync {
    /// Whether camera hardware is present on this device
    fn is_camera_available(&self) -> bool;

    /// Whether an image library is available to pick from
    fn is_photos_supported(&self) -> bool;

    /// Begin the platform capture flow for `request`
    fn start(&self, request: LaunchRequest);
}

/// Launcher that forwards requests over a channel
///
/// Platform glue receives [`LaunchRequest`]s from the paired receiver in its
/// own task and answers through the correlator. Keeps the coordinator free
/// of any platform callback machinery.
#[derive(Debug)]
pub struct ChannelLauncher {
    requests: mpsc::UnboundedSender<LaunchRequest>,
    camera_available: bool,
    photos_supported: bool,
}

impl ChannelLauncher {
    /// Create a launcher reporting full capability
    pub fn new() -> (Self, mpsc::UnboundedReceiver<LaunchRequest>) {
        Self::with_capabilities(true, true)
    }

    /// Create a launcher with explicit capability flags
    pub fn with_capabilities(
        camera_available: bool,
        photos_supported: bool,
    ) -> (Self, mpsc::UnboundedReceiver<LaunchRequest>) {
        let (requests, receiver) = mpsc::unbounded_channel();
        (
            Self {
                requests,
                camera_available,
                photos_supported,
            },
            receiver,
        )
    }
}

impl MediaLauncher for ChannelLauncher {
    fn is_camera_available(&self) -> bool {
        self.camera_available
    }

    fn is_photos_supported(&self) -> bool {
        self.photos_supported
    }

    fn start(&self, request: LaunchRequest) {
        // The operation stays pending if the service task is gone; the
        // contract allows a launcher that never answers.
        if let Err(err) = self.requests.send(request) {
            warn!(id = %err.0.id, "no task is servicing launch requests, dropping");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::types::{CaptureAction, CaptureOptions, MediaKind, RequestId};

    fn request(id: u32) -> LaunchRequest {
        LaunchRequest {
            id: RequestId(id),
            kind: MediaKind::Image,
            action: CaptureAction::CapturePhoto,
            options: CaptureOptions::new("reports", "incident"),
        }
    }

    #[tokio::test]
    async fn forwards_requests_to_receiver() {
        let (launcher, mut receiver) = ChannelLauncher::new();

        launcher.start(request(1));
        launcher.start(request(2));

        assert_eq!(receiver.recv().await.unwrap().id, RequestId(1));
        assert_eq!(receiver.recv().await.unwrap().id, RequestId(2));
    }

    #[test]
    fn capability_flags_are_reported() {
        let (launcher, _receiver) = ChannelLauncher::with_capabilities(false, true);
        assert!(!launcher.is_camera_available());
        assert!(launcher.is_photos_supported());
    }

    #[test]
    fn start_without_receiver_does_not_panic() {
        let (launcher, receiver) = ChannelLauncher::new();
        drop(receiver);
        launcher.start(request(3));
    }
}
