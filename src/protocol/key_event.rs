//! `Input.dispatchKeyEvent` parameter types.
//!
//! Key input reaches the browser as a stream of key events. Each event
//! carries either a Windows virtual key code (for keys the platform knows
//! about) or literal text (for arbitrary Unicode the key table cannot
//! express).
//!
//! # Format
//!
//! ```json
//! { "type": "rawKeyDown", "windowsVirtualKeyCode": 13 }
//! { "type": "keyDown", "text": "é" }
//! { "type": "char", "text": "é" }
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

// ============================================================================
// KeyEventType
// ============================================================================

/// Key event type discriminator.
///
/// Browsers interpret key event order as typing order, so emitters must
/// preserve call order when dispatching these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyEventType {
    /// Key pressed, no character produced yet.
    RawKeyDown,
    /// Key pressed, possibly producing a character.
    KeyDown,
    /// Key released.
    KeyUp,
    /// Character input with press and release fused.
    Char,
}

// ============================================================================
// KeyEvent
// ============================================================================

/// Parameters for one `Input.dispatchKeyEvent` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    /// Event type.
    #[serde(rename = "type")]
    pub event_type: KeyEventType,

    /// Windows virtual key code, for table-mapped keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_virtual_key_code: Option<u16>,

    /// Literal text, for keys with no virtual key code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// ============================================================================
// KeyEvent - Constructors
// ============================================================================

impl KeyEvent {
    /// Creates a `rawKeyDown` event carrying a virtual key code.
    #[inline]
    #[must_use]
    pub fn raw_key_down(code: u16) -> Self {
        Self {
            event_type: KeyEventType::RawKeyDown,
            windows_virtual_key_code: Some(code),
            text: None,
        }
    }

    /// Creates a `keyUp` event carrying a virtual key code.
    #[inline]
    #[must_use]
    pub fn key_up(code: u16) -> Self {
        Self {
            event_type: KeyEventType::KeyUp,
            windows_virtual_key_code: Some(code),
            text: None,
        }
    }

    /// Creates a `keyDown` event carrying literal text.
    #[inline]
    #[must_use]
    pub fn key_down_text(ch: char) -> Self {
        Self {
            event_type: KeyEventType::KeyDown,
            windows_virtual_key_code: None,
            text: Some(ch.to_string()),
        }
    }

    /// Creates a `keyUp` event carrying literal text.
    #[inline]
    #[must_use]
    pub fn key_up_text(ch: char) -> Self {
        Self {
            event_type: KeyEventType::KeyUp,
            windows_virtual_key_code: None,
            text: Some(ch.to_string()),
        }
    }

    /// Creates a `char` event carrying literal text.
    ///
    /// Press and release semantically fused; used when typing unmapped
    /// characters through `send_keys`.
    #[inline]
    #[must_use]
    pub fn char_text(ch: char) -> Self {
        Self {
            event_type: KeyEventType::Char,
            windows_virtual_key_code: None,
            text: Some(ch.to_string()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
