//! Screen-coordinate geometry.
//!
//! Pointer primitives and the session pointer state all speak in
//! viewport-relative [`Point`] values.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Point
// ============================================================================

/// A viewport-relative point in CSS pixels.
///
/// # Example
///
/// ```
/// use cdp_actions::Point;
///
/// let origin = Point::new(100, 50);
/// let moved = origin.offset(10, -20);
/// assert_eq!(moved, Point::new(110, 30));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i64,

    /// Vertical coordinate.
    pub y: i64,
}

impl Point {
    /// Creates a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns this point translated by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ============================================================================
// Tests
// ============================================================================
