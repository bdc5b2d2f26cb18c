//! Action sequence model and interpretation.
//!
//! This module provides the engine's public surface:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ActionSequence`] | Ordered interactions from one input device |
//! | [`Interaction`] | A single atomic input event description |
//! | [`ActionEngine`] | Lowers sequences into primitive dispatches |
//! | [`ActionExecutor`] | The capability trait a front end consumes |
//!
//! # Example
//!
//! ```ignore
//! use cdp_actions::{
//!     ActionEngine, ActionExecutor, ActionSequence, InputSource, Interaction,
//!     MouseButton, PointerKind,
//! };
//!
//! let click = ActionSequence::new(InputSource::Pointer(PointerKind::Mouse))
//!     .then(Interaction::PointerDown { button: MouseButton::Left })
//!     .then(Interaction::PointerUp { button: MouseButton::Left });
//!
//! engine.perform_actions(&[click], cancel_token).await?;
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Action sequence interpretation.
pub mod executor;

/// Action sequences and interactions.
pub mod sequence;

/// Input sources and pointer classification.
pub mod source;

// ============================================================================
// Re-exports
// ============================================================================

pub use executor::{ActionEngine, ActionExecutor};
pub use sequence::{ActionSequence, Interaction};
pub use source::{ElementId, InputSource, MouseButton, PointerKind};
