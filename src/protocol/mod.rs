//! Chrome DevTools Protocol message types.
//!
//! This module defines the wire shapes the engine emits toward a DevTools
//! connection. Only the `Input` domain is modelled: pointer primitives are
//! external collaborators, so the engine itself serializes key events only.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `key_event` | `Input.dispatchKeyEvent` parameters |

// ============================================================================
// Submodules
// ============================================================================

/// Key event parameter types.
pub mod key_event;

// ============================================================================
// Re-exports
// ============================================================================

pub use key_event::{KeyEvent, KeyEventType};
