//! External collaborator traits.
//!
//! The engine lowers interactions into calls on these traits but does not
//! implement them: a driver crate supplies session-scoped implementations
//! that serialize the corresponding DevTools commands. Transport failures
//! returned here propagate out of the engine unchanged.
//!
//! | Trait | Role |
//! |-------|------|
//! | [`Mouse`] | Mouse press/release/move/context-click |
//! | [`TouchScreen`] | Touch down/up/move |
//! | [`ElementLocator`] | Element handle to viewport point |
//! | [`KeyEventSink`] | `Input.dispatchKeyEvent` call |

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;

use crate::actions::ElementId;
use crate::cancel::CancelScope;
use crate::error::Result;
use crate::geometry::Point;
use crate::protocol::KeyEvent;

// ============================================================================
// Mouse
// ============================================================================

/// Session-scoped mouse primitives.
#[async_trait]
pub trait Mouse: Send + Sync {
    /// Presses the left button at `point`.
    async fn mouse_down(&self, point: Point, cancel: &CancelScope) -> Result<()>;

    /// Releases the left button at `point`.
    async fn mouse_up(&self, point: Point, cancel: &CancelScope) -> Result<()>;

    /// Moves the cursor to `point`.
    async fn mouse_move(&self, point: Point, cancel: &CancelScope) -> Result<()>;

    /// Issues a context click (right button press and release) at `point`.
    async fn context_click(&self, point: Point, cancel: &CancelScope) -> Result<()>;
}

// ============================================================================
// TouchScreen
// ============================================================================

/// Session-scoped touch screen primitives.
#[async_trait]
pub trait TouchScreen: Send + Sync {
    /// Starts a touch contact at `(x, y)`.
    async fn touch_down(&self, x: i64, y: i64, cancel: &CancelScope) -> Result<()>;

    /// Ends the touch contact at `(x, y)`.
    async fn touch_up(&self, x: i64, y: i64, cancel: &CancelScope) -> Result<()>;

    /// Moves the touch contact to `(x, y)`.
    async fn touch_move(&self, x: i64, y: i64, cancel: &CancelScope) -> Result<()>;
}

// ============================================================================
// ElementLocator
// ============================================================================

/// Resolves element handles to viewport points.
///
/// Either method may report the location as absent, e.g. for a detached
/// element; the engine decides per device kind whether that skips the move
/// or fails the call.
#[async_trait]
pub trait ElementLocator: Send + Sync {
    /// Returns the element's top-left location.
    ///
    /// Used as the base for target moves carrying a nonzero offset.
    async fn location(&self, element: &ElementId, cancel: &CancelScope)
        -> Result<Option<Point>>;

    /// Returns a point inside the element suitable for clicking.
    ///
    /// Used for target moves with a zero offset.
    async fn clickable_location(
        &self,
        element: &ElementId,
        cancel: &CancelScope,
    ) -> Result<Option<Point>>;
}

// ============================================================================
// KeyEventSink
// ============================================================================

/// The DevTools `Input.dispatchKeyEvent` call.
///
/// Implementations must deliver events to the connection in call order;
/// browsers interpret key event order as typing order.
#[async_trait]
pub trait KeyEventSink: Send + Sync {
    /// Dispatches one key event.
    async fn dispatch_key_event(&self, event: KeyEvent) -> Result<()>;
}
