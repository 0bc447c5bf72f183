// SPDX-License-Identifier: GPL-3.0-only

//! Single-slot registry for the outstanding capture operation

use std::sync::Mutex;
use tokio::sync::oneshot;
use tracing::debug;

use super::types::{CaptureOutcome, RequestId};

/// A claimed capture operation waiting for its completion event
///
/// The resolver is a write-once channel: delivering an outcome consumes the
/// operation, so resolving twice is unrepresentable. Dropping an unresolved
/// operation closes the channel and the caller's future completes with an
/// abandonment error.
#[derive(Debug)]
pub struct PendingOperation {
    id: RequestId,
    resolver: oneshot::Sender<CaptureOutcome>,
}

impl PendingOperation {
    /// Create an operation together with the receiving half of its resolver
    pub fn new(id: RequestId) -> (Self, oneshot::Receiver<CaptureOutcome>) {
        let (resolver, receiver) = oneshot::channel();
        (Self { id, resolver }, receiver)
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Deliver the outcome to the waiting caller
    ///
    /// The send only fails when the caller has already dropped its future,
    /// which is not an error: the caller gave up and nobody is listening.
    pub fn resolve(self, outcome: CaptureOutcome) {
        if self.resolver.send(outcome).is_err() {
            debug!(id = %self.id, "caller dropped its pending capture before completion");
        }
    }
}

/// Single-slot store enforcing one outstanding capture at a time
///
/// The slot is the only shared mutable state in the capture path. `claim`
/// is a test-and-set under the slot lock, `release` an atomic take; a claim
/// that finds the slot occupied leaves the occupant untouched.
#[derive(Debug, Default)]
pub struct PendingSlot {
    slot: Mutex<Option<PendingOperation>>,
}

impl PendingSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the slot with `operation` if it is currently empty
    ///
    /// Returns whether the claim succeeded. A losing operation is dropped,
    /// which closes its resolver channel.
    pub fn claim(&self, operation: PendingOperation) -> bool {
        let mut slot = self.slot.lock().unwrap();
        match *slot {
            Some(_) => false,
            None => {
                *slot = Some(operation);
                true
            }
        }
    }

    /// Empty the slot, returning the operation that occupied it
    pub fn release(&self) -> Option<PendingOperation> {
        self.slot.lock().unwrap().take()
    }

    /// Whether an operation is currently outstanding
    pub fn is_claimed(&self) -> bool {
        self.slot.lock().unwrap().is_some()
    }
}
