//! Key dispatch translation.
//!
//! [`Keyboard`] decides, per character, whether key input travels as a
//! known virtual key code or as literal text, and emits the corresponding
//! key events through a [`KeyEventSink`].
//!
//! # Resolution
//!
//! | Table lookup | `press_key` | `release_key` | `send_keys` |
//! |--------------|-------------|---------------|-------------|
//! | Code | `rawKeyDown` + code | `keyUp` + code | `rawKeyDown` then `keyUp` |
//! | None sentinel | nothing | nothing | nothing |
//! | Absent | `keyDown` + text | `keyUp` + text | single `char` |
//!
//! The translator keeps no state; every call is independently dispatchable,
//! but events reach the sink strictly in call order.

// ============================================================================
// Submodules
// ============================================================================

mod keys;

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use tracing::trace;

use crate::error::{Error, Result};
use crate::primitives::KeyEventSink;
use crate::protocol::KeyEvent;

use keys::KeyMapping;

// ============================================================================
// Keyboard
// ============================================================================

/// Translates characters into DevTools key events.
///
/// # Example
///
/// ```ignore
/// let keyboard = Keyboard::new(sink);
///
/// keyboard.send_keys("hello").await?;
/// keyboard.press_key("\u{e008}").await?;   // Shift down
/// keyboard.send_keys("x").await?;
/// keyboard.release_key("\u{e008}").await?; // Shift up
/// ```
#[derive(Clone)]
pub struct Keyboard {
    /// Destination for dispatched key events.
    sink: Arc<dyn KeyEventSink>,
}

impl Keyboard {
    /// Creates a keyboard over a key event sink.
    #[inline]
    #[must_use]
    pub fn new(sink: Arc<dyn KeyEventSink>) -> Self {
        Self { sink }
    }

    /// Presses a single key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] unless `key` is exactly one
    /// character.
    pub async fn press_key(&self, key: &str) -> Result<()> {
        let ch = single_char(key)?;
        trace!(key = %ch.escape_unicode(), "Pressing key");

        match keys::lookup(ch) {
            KeyMapping::Code(code) => {
                self.sink.dispatch_key_event(KeyEvent::raw_key_down(code)).await
            }
            KeyMapping::NoOp => Ok(()),
            KeyMapping::Text => {
                self.sink.dispatch_key_event(KeyEvent::key_down_text(ch)).await
            }
        }
    }

    /// Releases a single key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] unless `key` is exactly one
    /// character.
    pub async fn release_key(&self, key: &str) -> Result<()> {
        let ch = single_char(key)?;
        trace!(key = %ch.escape_unicode(), "Releasing key");

        match keys::lookup(ch) {
            KeyMapping::Code(code) => {
                self.sink.dispatch_key_event(KeyEvent::key_up(code)).await
            }
            KeyMapping::NoOp => Ok(()),
            KeyMapping::Text => {
                self.sink.dispatch_key_event(KeyEvent::key_up_text(ch)).await
            }
        }
    }

    /// Types a character sequence.
    ///
    /// Mapped characters get a full press-then-release pair before the next
    /// character starts; unmapped characters get a single `char` event.
    /// There is no inter-character delay.
    pub async fn send_keys(&self, text: &str) -> Result<()> {
        trace!(length = text.chars().count(), "Sending keys");

        for ch in text.chars() {
            match keys::lookup(ch) {
                KeyMapping::Code(code) => {
                    self.sink.dispatch_key_event(KeyEvent::raw_key_down(code)).await?;
                    self.sink.dispatch_key_event(KeyEvent::key_up(code)).await?;
                }
                KeyMapping::NoOp => {}
                KeyMapping::Text => {
                    self.sink.dispatch_key_event(KeyEvent::char_text(ch)).await?;
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Extracts the single character of `key`.
fn single_char(key: &str) -> Result<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(Error::invalid_argument(
            "key must be exactly one character",
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================
