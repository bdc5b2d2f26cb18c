//! Error types for CDP action execution.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use cdp_actions::{Result, Error};
//!
//! async fn example(keyboard: &Keyboard) -> Result<()> {
//!     keyboard.press_key("\u{e007}").await?; // Enter
//!     keyboard.release_key("\u{e007}").await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Argument | [`Error::InvalidArgument`] |
//! | Capability | [`Error::UnsupportedCapability`], [`Error::NotImplemented`] |
//! | Completion | [`Error::Cancelled`] |
//! | Element | [`Error::ElementLocation`] |
//! | Transport | [`Error::Connection`], [`Error::Json`] |

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;

use crate::actions::ElementId;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Capability failures and not-implemented failures are distinct variants
/// so callers can branch on which case occurred instead of matching on a
/// generic error kind.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Argument Errors
    // ========================================================================
    /// Invalid argument.
    ///
    /// Returned when a key operation receives other than exactly one
    /// character, or a parameter is otherwise out of range.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },

    // ========================================================================
    // Capability Errors
    // ========================================================================
    /// Unsupported device/interaction/button combination.
    ///
    /// Returned when a combination is explicitly deemed unsupported,
    /// such as a touch right-button press or a middle mouse button.
    #[error("Unsupported: {message}")]
    UnsupportedCapability {
        /// Description of the unsupported combination.
        message: String,
    },

    /// Interaction reserved for future support.
    ///
    /// Returned for pen-device interactions.
    #[error("Not implemented: {feature}")]
    NotImplemented {
        /// The feature that is not yet implemented.
        feature: String,
    },

    // ========================================================================
    // Completion Errors
    // ========================================================================
    /// Call aborted because its cancellation scope was triggered.
    ///
    /// A normal aborted-completion outcome, not a protocol fault.
    #[error("Cancelled")]
    Cancelled,

    // ========================================================================
    // Element Errors
    // ========================================================================
    /// Element location could not be resolved.
    ///
    /// Returned when a mouse move targets an element whose location
    /// the resolver reports as absent.
    #[error("No location for element: {element_id}")]
    ElementLocation {
        /// The element whose location is absent.
        element_id: ElementId,
    },

    // ========================================================================
    // Transport Errors
    // ========================================================================
    /// Failure surfaced by the underlying connection or a primitive call.
    ///
    /// Propagated unchanged; this crate adds no retry.
    #[error("Connection failed: {message}")]
    Connection {
        /// Description of the connection error.
        message: String,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates an invalid argument error.
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates an unsupported capability error.
    #[inline]
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedCapability {
            message: message.into(),
        }
    }

    /// Creates a not implemented error.
    #[inline]
    pub fn not_implemented(feature: impl Into<String>) -> Self {
        Self::NotImplemented {
            feature: feature.into(),
        }
    }

    /// Creates an element location error.
    #[inline]
    pub fn element_location(element_id: ElementId) -> Self {
        Self::ElementLocation { element_id }
    }

    /// Creates a connection error.
    #[inline]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this call was cancelled rather than failed.
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns `true` if this is a capability error.
    ///
    /// Covers both explicitly unsupported combinations and features
    /// reserved for future support.
    #[inline]
    #[must_use]
    pub fn is_capability_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedCapability { .. } | Self::NotImplemented { .. }
        )
    }

    /// Returns `true` if this is a transport error.
    #[inline]
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Json(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
