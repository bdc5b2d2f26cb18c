//! Per-session input state.
//!
//! One [`SessionState`] exists per browser session and outlives individual
//! `perform_actions` calls. It owns the single authoritative "current mouse
//! position" that pointer interactions read and update.
//!
//! Writer discipline: the action engine is the only writer. Concurrent
//! `perform_actions` calls on the same session are not mutually excluded;
//! one logical user is assumed to drive one session at a time.

// ============================================================================
// Imports
// ============================================================================

use parking_lot::Mutex;

use crate::geometry::Point;

// ============================================================================
// SessionState
// ============================================================================

/// Shared mutable input state for one browser session.
///
/// Created once per session, typically behind an `Arc`, and handed to the
/// [`ActionEngine`](crate::ActionEngine) at construction.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Current mouse position in viewport coordinates.
    mouse_position: Mutex<Point>,
}

impl SessionState {
    /// Creates session state with the pointer at the viewport origin.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current mouse position.
    #[inline]
    #[must_use]
    pub fn mouse_position(&self) -> Point {
        *self.mouse_position.lock()
    }

    /// Replaces the current mouse position.
    #[inline]
    pub fn set_mouse_position(&self, point: Point) {
        *self.mouse_position.lock() = point;
    }
}

// ============================================================================
// Tests
// ============================================================================
