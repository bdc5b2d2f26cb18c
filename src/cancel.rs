//! Per-call cancellation scope.
//!
//! Every `perform_actions` call runs under a [`CancelScope`] combining two
//! sources: an engine-owned token (triggered by `reset_input_state`) and the
//! caller-supplied token. Either one aborts all remaining work in the call.
//! The scope is created at call entry and does not outlive the call.
//!
//! Cancellation is cooperative: it is observed at sequence and interaction
//! boundaries and during timed pauses, never by preempting an event already
//! in flight.

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};

// ============================================================================
// CancelScope
// ============================================================================

/// Combined cancellation signal for one engine call.
#[derive(Debug, Clone)]
pub struct CancelScope {
    /// Engine-owned source, triggered by `reset_input_state`.
    internal: CancellationToken,

    /// Caller-supplied signal.
    external: CancellationToken,
}

impl CancelScope {
    /// Creates a scope from an internal source and the caller's token.
    #[inline]
    #[must_use]
    pub fn new(internal: CancellationToken, external: CancellationToken) -> Self {
        Self { internal, external }
    }

    /// Returns `true` if either source has been triggered.
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.internal.is_cancelled() || self.external.is_cancelled()
    }

    /// Fails with [`Error::Cancelled`] if the scope has been triggered.
    ///
    /// Checked at the start of each sequence and, redundantly, at the start
    /// of each interaction: the prior await may have run long.
    #[inline]
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Resolves when either source is triggered.
    pub async fn cancelled(&self) {
        tokio::select! {
            () = self.internal.cancelled() => {}
            () = self.external.cancelled() => {}
        }
    }

    /// Suspends for `duration`, resolving early with [`Error::Cancelled`]
    /// if the scope is triggered first.
    pub async fn sleep(&self, duration: Duration) -> Result<()> {
        tokio::select! {
            () = tokio::time::sleep(duration) => Ok(()),
            () = self.cancelled() => Err(Error::Cancelled),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
