//! WebDriver key character to Windows virtual key code table.
//!
//! The WebDriver wire protocol encodes non-text keys as characters in the
//! Unicode private use area (U+E000..U+E03D). This table maps each of them
//! to the Windows virtual key code DevTools expects. The code `0` marks a
//! key that exists conceptually but has nothing to dispatch.

// ============================================================================
// Imports
// ============================================================================

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

// ============================================================================
// KeyMapping
// ============================================================================

/// Resolution outcome for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyMapping {
    /// Mapped to a virtual key code; dispatch raw key events.
    Code(u16),
    /// Mapped to the "none" sentinel; dispatch nothing.
    NoOp,
    /// Not in the table; dispatch as literal text.
    Text,
}

// ============================================================================
// Virtual Key Table
// ============================================================================

/// WebDriver control characters to Windows virtual key codes.
static KEY_TO_VIRTUAL_KEY_CODE: Lazy<FxHashMap<char, u16>> = Lazy::new(|| {
    let mut table = FxHashMap::default();

    table.insert('\u{e000}', 0); // Null
    table.insert('\u{e001}', 3); // Cancel
    table.insert('\u{e002}', 47); // Help
    table.insert('\u{e003}', 8); // Backspace
    table.insert('\u{e004}', 9); // Tab
    table.insert('\u{e005}', 12); // Clear
    table.insert('\u{e006}', 13); // Return
    table.insert('\u{e007}', 13); // Enter
    table.insert('\u{e008}', 16); // Shift
    table.insert('\u{e009}', 17); // Control
    table.insert('\u{e00a}', 18); // Alt
    table.insert('\u{e00b}', 19); // Pause
    table.insert('\u{e00c}', 27); // Escape
    table.insert('\u{e00d}', 32); // Space
    table.insert('\u{e00e}', 33); // PageUp
    table.insert('\u{e00f}', 34); // PageDown
    table.insert('\u{e010}', 35); // End
    table.insert('\u{e011}', 36); // Home
    table.insert('\u{e012}', 37); // ArrowLeft
    table.insert('\u{e013}', 38); // ArrowUp
    table.insert('\u{e014}', 39); // ArrowRight
    table.insert('\u{e015}', 40); // ArrowDown
    table.insert('\u{e016}', 45); // Insert
    table.insert('\u{e017}', 46); // Delete
    table.insert('\u{e018}', 186); // Semicolon
    table.insert('\u{e019}', 187); // Equal

    // NumPad0..NumPad9
    for (i, ch) in ('\u{e01a}'..='\u{e023}').enumerate() {
        table.insert(ch, 96 + i as u16);
    }

    table.insert('\u{e024}', 106); // Multiply
    table.insert('\u{e025}', 107); // Add
    table.insert('\u{e026}', 108); // Separator
    table.insert('\u{e027}', 109); // Subtract
    table.insert('\u{e028}', 110); // Decimal
    table.insert('\u{e029}', 111); // Divide

    // F1..F12
    for (i, ch) in ('\u{e031}'..='\u{e03c}').enumerate() {
        table.insert(ch, 112 + i as u16);
    }

    table.insert('\u{e03d}', 91); // Meta

    table
});

/// Resolves a character against the virtual key table.
#[inline]
pub(crate) fn lookup(ch: char) -> KeyMapping {
    match KEY_TO_VIRTUAL_KEY_CODE.get(&ch) {
        Some(&0) => KeyMapping::NoOp,
        Some(&code) => KeyMapping::Code(code),
        None => KeyMapping::Text,
    }
}

// ============================================================================
// Tests
// ============================================================================
