//! Action sequences and interactions.
//!
//! An [`ActionSequence`] is an ordered list of [`Interaction`]s originating
//! from one logical input device. Sequences are immutable once built and
//! read-only to the engine; order within a sequence is significant, and a
//! submitted collection of sequences executes in submission order without
//! interleaving.

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use super::source::{ElementId, InputSource, MouseButton};

// ============================================================================
// Interaction
// ============================================================================

/// A single atomic input event description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Suspend the sequence for `duration`.
    Pause {
        /// How long to suspend.
        duration: Duration,
    },

    /// Press a pointer button.
    PointerDown {
        /// The button being pressed.
        button: MouseButton,
    },

    /// Release a pointer button.
    PointerUp {
        /// The button being released.
        button: MouseButton,
    },

    /// Move the pointer.
    ///
    /// With a target and a nonzero offset, the destination is the target's
    /// location plus `(x, y)`. With a target and a zero offset, the
    /// destination is the target's clickable location. Without a target,
    /// `(x, y)` offsets the session's current pointer position.
    PointerMove {
        /// Optional element the move is relative to.
        target: Option<ElementId>,
        /// Horizontal offset.
        x: i64,
        /// Vertical offset.
        y: i64,
    },

    /// Cancel the current pointer input. Currently a no-op.
    PointerCancel,

    /// Press a key.
    KeyDown {
        /// The literal character, including WebDriver control characters.
        value: char,
    },

    /// Release a key.
    KeyUp {
        /// The literal character, including WebDriver control characters.
        value: char,
    },
}

// ============================================================================
// ActionSequence
// ============================================================================

/// An ordered sequence of interactions from one input device.
///
/// # Example
///
/// ```
/// use cdp_actions::{ActionSequence, InputSource, Interaction, MouseButton, PointerKind};
///
/// let click = ActionSequence::new(InputSource::Pointer(PointerKind::Mouse))
///     .then(Interaction::PointerDown { button: MouseButton::Left })
///     .then(Interaction::PointerUp { button: MouseButton::Left });
///
/// assert_eq!(click.interactions().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSequence {
    /// Originating device.
    source: InputSource,

    /// Interactions in execution order.
    interactions: Vec<Interaction>,
}

impl ActionSequence {
    /// Creates an empty sequence for the given device.
    #[inline]
    #[must_use]
    pub fn new(source: InputSource) -> Self {
        Self {
            source,
            interactions: Vec::new(),
        }
    }

    /// Creates a sequence from a pre-built interaction list.
    #[inline]
    #[must_use]
    pub fn with_interactions(source: InputSource, interactions: Vec<Interaction>) -> Self {
        Self {
            source,
            interactions,
        }
    }

    /// Appends an interaction, builder style.
    #[inline]
    #[must_use]
    pub fn then(mut self, interaction: Interaction) -> Self {
        self.interactions.push(interaction);
        self
    }

    /// Returns the originating device.
    #[inline]
    #[must_use]
    pub fn source(&self) -> InputSource {
        self.source
    }

    /// Returns the interactions in execution order.
    #[inline]
    #[must_use]
    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }
}

// ============================================================================
// Tests
// ============================================================================
