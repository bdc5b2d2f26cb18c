//! Input sources and pointer classification.
//!
//! Every action sequence originates from one logical input device. Pointer
//! devices additionally carry a [`PointerKind`] that selects which primitive
//! family their interactions lower into.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// ElementId
// ============================================================================

/// Opaque handle to a DOM element held by the remote end.
///
/// The engine never inspects the handle; it only forwards it to the
/// [`ElementLocator`](crate::primitives::ElementLocator) when a pointer move
/// targets an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(String);

impl ElementId {
    /// Creates an element ID from its wire representation.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the wire representation.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    #[inline]
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// ============================================================================
// PointerKind
// ============================================================================

/// Classification of a pointer input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    /// A mouse.
    Mouse,
    /// A touch contact.
    Touch,
    /// A pen. Reserved; every pen interaction fails as not implemented.
    Pen,
}

impl fmt::Display for PointerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mouse => f.write_str("mouse"),
            Self::Touch => f.write_str("touch"),
            Self::Pen => f.write_str("pen"),
        }
    }
}

// ============================================================================
// MouseButton
// ============================================================================

/// W3C pointer button.
///
/// Only [`Left`](Self::Left) and [`Right`](Self::Right) dispatch; the
/// remaining buttons are explicit capability failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Primary button (W3C button 0).
    Left,
    /// Middle button (W3C button 1).
    Middle,
    /// Secondary button (W3C button 2).
    Right,
    /// Back navigation button (W3C button 3).
    Back,
    /// Forward navigation button (W3C button 4).
    Forward,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Middle => f.write_str("middle"),
            Self::Right => f.write_str("right"),
            Self::Back => f.write_str("back"),
            Self::Forward => f.write_str("forward"),
        }
    }
}

// ============================================================================
// InputSource
// ============================================================================

/// The logical input device an action sequence originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    /// A pointer device of the given kind.
    Pointer(PointerKind),
    /// A keyboard.
    Key,
}

impl InputSource {
    /// Returns the pointer kind, or `None` for non-pointer sources.
    #[inline]
    #[must_use]
    pub fn pointer_kind(&self) -> Option<PointerKind> {
        match self {
            Self::Pointer(kind) => Some(*kind),
            Self::Key => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
