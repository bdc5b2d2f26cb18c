//! CDP Actions - W3C action sequence execution over the Chrome DevTools Protocol.
//!
//! This library lowers high-level, device-abstracted action sequences
//! (pointer, key, and pause interactions grouped per input device, in the
//! W3C WebDriver style) into primitive input events dispatched through a
//! DevTools connection.
//!
//! # Architecture
//!
//! Two components, consumed in dependency order:
//!
//! - **[`Keyboard`]**: per character, decides between a known virtual key
//!   code and literal text, and emits the matching key events
//! - **[`ActionEngine`]**: walks sequences in submission order, dispatching
//!   each interaction to the right primitive under one cancellation scope
//!
//! The transport, the pointer primitives, and element location are external
//! collaborators supplied as trait implementations; the engine composes them
//! over one session and enforces strict in-order delivery (every dispatch is
//! awaited before the next interaction starts).
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use cdp_actions::{
//!     ActionEngine, ActionExecutor, ActionSequence, InputSource, Interaction,
//!     Keyboard, MouseButton, PointerKind, SessionState,
//! };
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example(
//! #     mouse: Arc<dyn cdp_actions::Mouse>,
//! #     touch: Arc<dyn cdp_actions::TouchScreen>,
//! #     locator: Arc<dyn cdp_actions::ElementLocator>,
//! #     sink: Arc<dyn cdp_actions::KeyEventSink>,
//! # ) -> cdp_actions::Result<()> {
//! let session = Arc::new(SessionState::new());
//! let engine = ActionEngine::new(mouse, touch, locator, Keyboard::new(sink), session);
//!
//! let click = ActionSequence::new(InputSource::Pointer(PointerKind::Mouse))
//!     .then(Interaction::PointerDown { button: MouseButton::Left })
//!     .then(Interaction::PointerUp { button: MouseButton::Left });
//!
//! engine.perform_actions(&[click], CancellationToken::new()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`actions`] | Sequence model, [`ActionEngine`], [`ActionExecutor`] |
//! | [`keyboard`] | Key dispatch translation |
//! | [`primitives`] | External collaborator traits |
//! | [`protocol`] | DevTools `Input` domain wire shapes |
//! | [`cancel`] | Per-call cancellation scope |
//! | [`session`] | Shared per-session input state |
//! | [`geometry`] | Viewport points |
//! | [`error`] | Error types and [`Result`] alias |
//!
//! # Cancellation
//!
//! Every `perform_actions` call opens a fresh scope combining the caller's
//! token with an engine-owned source; `reset_input_state` triggers the
//! latter. Cancellation is cooperative and observed at sequence and
//! interaction boundaries; it does not release already-pressed buttons or
//! keys.

// ============================================================================
// Modules
// ============================================================================

/// Action sequence model and interpretation.
pub mod actions;

/// Per-call cancellation scope.
pub mod cancel;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Viewport geometry.
pub mod geometry;

/// Key dispatch translation.
pub mod keyboard;

/// External collaborator traits.
///
/// Implemented by the driver layer that owns the DevTools connection.
pub mod primitives;

/// DevTools protocol wire shapes.
pub mod protocol;

/// Per-session input state.
pub mod session;

// ============================================================================
// Re-exports
// ============================================================================

// Action types
pub use actions::{
    ActionEngine, ActionExecutor, ActionSequence, ElementId, InputSource, Interaction,
    MouseButton, PointerKind,
};

// Cancellation
pub use cancel::CancelScope;

// Error types
pub use error::{Error, Result};

// Geometry
pub use geometry::Point;

// Keyboard
pub use keyboard::Keyboard;

// Collaborator traits
pub use primitives::{ElementLocator, KeyEventSink, Mouse, TouchScreen};

// Protocol types
pub use protocol::{KeyEvent, KeyEventType};

// Session state
pub use session::SessionState;
