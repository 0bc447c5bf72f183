// SPDX-License-Identifier: GPL-3.0-only

//! Request identifier allocation

use std::sync::atomic::{AtomicU32, Ordering};

use super::types::RequestId;

/// Allocates correlation identifiers for capture requests
///
/// Each call returns the current counter value and advances it. After
/// `u32::MAX` the counter wraps to zero instead of faulting; `fetch_add`
/// gives exactly that wrap.
#[derive(Debug, Default)]
pub struct RequestIdAllocator {
    next: AtomicU32,
}

impl RequestIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from a specific value
    pub fn starting_at(value: u32) -> Self {
        Self {
            next: AtomicU32::new(value),
        }
    }

    /// Return the current identifier and advance the counter
    pub fn next(&self) -> RequestId {
        RequestId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
