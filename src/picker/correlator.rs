// SPDX-License-Identifier: GPL-3.0-only

//! Completion event routing
//!
//! The platform layer reports capture outcomes out of band, on whatever
//! thread or callback context it happens to run on. The correlator matches
//! each event to the outstanding operation by request id and resolves the
//! caller's future, exactly once.

use std::sync::Arc;
use tracing::{debug, info};

use super::pending::PendingSlot;
use super::types::{CaptureOutcome, RequestId};

/// Routes completion events back to the pending capture operation
///
/// Cloneable handle sharing the coordinator's pending slot. Platform glue
/// holds one of these and calls [`complete`](Self::complete) when its
/// capture UI finishes.
#[derive(Debug, Clone)]
pub struct CompletionCorrelator {
    slot: Arc<PendingSlot>,
}

impl CompletionCorrelator {
    pub(crate) fn new(slot: Arc<PendingSlot>) -> Self {
        Self { slot }
    }

    /// Handle one completion event from the platform layer
    ///
    /// The slot is released before the id comparison, so even a mismatched
    /// event frees it for the next request instead of wedging the registry.
    /// Events that match nothing (late, duplicate, or stale) are discarded
    /// without raising an error.
    pub fn complete(&self, id: RequestId, outcome: CaptureOutcome) {
        let Some(current) = self.slot.release() else {
            debug!(event = %id, "completion event with no pending operation, discarding");
            return;
        };

        if current.id() != id {
            // Dropping the mismatched operation closes its resolver; the
            // caller observes an abandonment instead of waiting forever.
            debug!(
                event = %id,
                pending = %current.id(),
                "stale completion event, discarding pending operation"
            );
            return;
        }

        info!(id = %id, outcome = outcome_label(&outcome), "capture operation completed");
        current.resolve(outcome);
    }
}

fn outcome_label(outcome: &CaptureOutcome) -> &'static str {
    match outcome {
        CaptureOutcome::Success(_) => "success",
        CaptureOutcome::Canceled => "canceled",
        CaptureOutcome::Failed(_) => "failed",
    }
}
