//! Action sequence interpretation.
//!
//! [`ActionEngine`] walks a collection of per-device action sequences in
//! submission order and lowers every interaction into one primitive call,
//! each awaited to completion before the next starts. Physical input devices
//! have sequential semantics, so no interleaving happens across sequences
//! within one call.
//!
//! # Dispatch
//!
//! | device | down/up | move | cancel | pause |
//! |--------|---------|------|--------|-------|
//! | mouse | left → press/release, right → context click, else capability failure | three-way resolution below | no-op | timed wait |
//! | touch | left → touch down/up, right up → context click, right down fails | same, absent location skips | no-op | timed wait |
//! | pen | not implemented | not implemented | no-op | timed wait |
//!
//! Move resolution: target with nonzero offset → element location plus
//! offset; target with zero offset → element clickable location; no target →
//! session position plus offset. Every executed move writes its destination
//! back into the session state.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::cancel::CancelScope;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::keyboard::Keyboard;
use crate::primitives::{ElementLocator, Mouse, TouchScreen};
use crate::session::SessionState;

use super::sequence::{ActionSequence, Interaction};
use super::source::{ElementId, InputSource, MouseButton, PointerKind};

// ============================================================================
// ActionExecutor
// ============================================================================

/// The action-executor capability consumed by a protocol front end.
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    /// Reports whether this session can execute action sequences.
    async fn is_action_executor(&self) -> bool;

    /// Executes the given sequences in submission order.
    ///
    /// A fresh cancellation scope is opened for the whole call; either the
    /// caller's token or a later `reset_input_state` aborts all remaining
    /// interactions.
    async fn perform_actions(
        &self,
        sequences: &[ActionSequence],
        cancel: CancellationToken,
    ) -> Result<()>;

    /// Cancels any in-flight `perform_actions` call.
    ///
    /// Does not release already-pressed buttons or keys; callers issue
    /// explicit releases if they need recovery. Always succeeds.
    async fn reset_input_state(&self, cancel: CancellationToken) -> Result<()>;
}

// ============================================================================
// ActionEngine
// ============================================================================

/// Lowers action sequences into primitive input dispatches.
///
/// The engine owns no transport; it composes externally supplied pointer
/// primitives, an element locator, and a [`Keyboard`] over one session.
/// Concurrent `perform_actions` calls on the same session are not mutually
/// excluded; one logical user is assumed to drive one session at a time.
pub struct ActionEngine {
    /// Mouse primitives.
    mouse: Arc<dyn Mouse>,

    /// Touch screen primitives.
    touch: Arc<dyn TouchScreen>,

    /// Element handle to point resolution.
    locator: Arc<dyn ElementLocator>,

    /// Key dispatch translator.
    keyboard: Keyboard,

    /// Shared session input state.
    session: Arc<SessionState>,

    /// Cancel source of the current `perform_actions` call, if any.
    current_cancel: Mutex<Option<CancellationToken>>,
}

// ============================================================================
// ActionEngine - Constructor
// ============================================================================

impl ActionEngine {
    /// Creates an engine over session-scoped collaborators.
    #[must_use]
    pub fn new(
        mouse: Arc<dyn Mouse>,
        touch: Arc<dyn TouchScreen>,
        locator: Arc<dyn ElementLocator>,
        keyboard: Keyboard,
        session: Arc<SessionState>,
    ) -> Self {
        Self {
            mouse,
            touch,
            locator,
            keyboard,
            session,
            current_cancel: Mutex::new(None),
        }
    }

    /// Returns the key dispatch translator for this session.
    #[inline]
    #[must_use]
    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }
}

// ============================================================================
// ActionEngine - Dispatch
// ============================================================================

impl ActionEngine {
    /// Executes one interaction.
    async fn dispatch(
        &self,
        source: InputSource,
        interaction: &Interaction,
        scope: &CancelScope,
    ) -> Result<()> {
        trace!(?interaction, "Dispatching interaction");

        match interaction {
            Interaction::Pause { duration } => scope.sleep(*duration).await,

            Interaction::KeyDown { value } => {
                self.keyboard.press_key(&value.to_string()).await
            }
            Interaction::KeyUp { value } => {
                self.keyboard.release_key(&value.to_string()).await
            }

            Interaction::PointerDown { button } => {
                self.pointer_down(pointer_kind(source)?, *button, scope).await
            }
            Interaction::PointerUp { button } => {
                self.pointer_up(pointer_kind(source)?, *button, scope).await
            }
            Interaction::PointerMove { target, x, y } => {
                self.pointer_move(pointer_kind(source)?, target.as_ref(), *x, *y, scope)
                    .await
            }
            Interaction::PointerCancel => Ok(()),
        }
    }

    /// Presses a pointer button at the session's current position.
    async fn pointer_down(
        &self,
        kind: PointerKind,
        button: MouseButton,
        scope: &CancelScope,
    ) -> Result<()> {
        let position = self.session.mouse_position();

        match (kind, button) {
            (PointerKind::Mouse, MouseButton::Left) => {
                self.mouse.mouse_down(position, scope).await
            }
            (PointerKind::Mouse, MouseButton::Right) => {
                self.mouse.context_click(position, scope).await
            }
            (PointerKind::Mouse, other) => Err(Error::unsupported(format!(
                "Mouse with MouseButton::{other:?}"
            ))),

            (PointerKind::Touch, MouseButton::Left) => {
                self.touch.touch_down(position.x, position.y, scope).await
            }
            (PointerKind::Touch, other) => Err(Error::unsupported(format!(
                "Touch down with MouseButton::{other:?}"
            ))),

            (PointerKind::Pen, _) => Err(Error::not_implemented("PointerKind::Pen")),
        }
    }

    /// Releases a pointer button at the session's current position.
    async fn pointer_up(
        &self,
        kind: PointerKind,
        button: MouseButton,
        scope: &CancelScope,
    ) -> Result<()> {
        let position = self.session.mouse_position();

        match (kind, button) {
            (PointerKind::Mouse, MouseButton::Left) => {
                self.mouse.mouse_up(position, scope).await
            }
            (PointerKind::Mouse, MouseButton::Right) => {
                self.mouse.context_click(position, scope).await
            }
            (PointerKind::Mouse, other) => Err(Error::unsupported(format!(
                "Mouse with MouseButton::{other:?}"
            ))),

            (PointerKind::Touch, MouseButton::Left) => {
                self.touch.touch_up(position.x, position.y, scope).await
            }
            (PointerKind::Touch, MouseButton::Right) => {
                self.mouse.context_click(position, scope).await
            }
            (PointerKind::Touch, other) => Err(Error::unsupported(format!(
                "Touch up with MouseButton::{other:?}"
            ))),

            (PointerKind::Pen, _) => Err(Error::not_implemented("PointerKind::Pen")),
        }
    }

    /// Moves the pointer, updating the session position on success.
    async fn pointer_move(
        &self,
        kind: PointerKind,
        target: Option<&ElementId>,
        x: i64,
        y: i64,
        scope: &CancelScope,
    ) -> Result<()> {
        if kind == PointerKind::Pen {
            return Err(Error::not_implemented("PointerKind::Pen"));
        }

        let Some(destination) = self.resolve_move(kind, target, x, y, scope).await? else {
            // Touch target whose location is absent: skip silently.
            return Ok(());
        };

        match kind {
            PointerKind::Mouse => self.mouse.mouse_move(destination, scope).await?,
            PointerKind::Touch => {
                self.touch
                    .touch_move(destination.x, destination.y, scope)
                    .await?
            }
            PointerKind::Pen => unreachable!("pen rejected above"),
        }

        self.session.set_mouse_position(destination);
        Ok(())
    }

    /// Three-way move destination resolution.
    async fn resolve_move(
        &self,
        kind: PointerKind,
        target: Option<&ElementId>,
        x: i64,
        y: i64,
        scope: &CancelScope,
    ) -> Result<Option<Point>> {
        let Some(element) = target else {
            return Ok(Some(self.session.mouse_position().offset(x, y)));
        };

        let resolved = if x != 0 || y != 0 {
            self.locator
                .location(element, scope)
                .await?
                .map(|base| base.offset(x, y))
        } else {
            self.locator.clickable_location(element, scope).await?
        };

        match (resolved, kind) {
            (Some(point), _) => Ok(Some(point)),
            (None, PointerKind::Touch) => Ok(None),
            (None, _) => Err(Error::element_location(element.clone())),
        }
    }
}

// ============================================================================
// ActionEngine - ActionExecutor
// ============================================================================

#[async_trait]
impl ActionExecutor for ActionEngine {
    async fn is_action_executor(&self) -> bool {
        true
    }

    async fn perform_actions(
        &self,
        sequences: &[ActionSequence],
        cancel: CancellationToken,
    ) -> Result<()> {
        debug!(sequences = sequences.len(), "Performing actions");

        let internal = CancellationToken::new();
        *self.current_cancel.lock() = Some(internal.clone());
        let scope = CancelScope::new(internal, cancel);

        scope.check()?;
        for sequence in sequences {
            scope.check()?;
            for interaction in sequence.interactions() {
                scope.check()?;
                self.dispatch(sequence.source(), interaction, &scope).await?;
            }
        }
        Ok(())
    }

    async fn reset_input_state(&self, _cancel: CancellationToken) -> Result<()> {
        debug!("Resetting input state");

        if let Some(token) = self.current_cancel.lock().as_ref() {
            token.cancel();
        }
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Resolves the pointer kind of a sequence's device.
fn pointer_kind(source: InputSource) -> Result<PointerKind> {
    source.pointer_kind().ok_or_else(|| {
        Error::unsupported("pointer interaction on a non-pointer input source")
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use crate::primitives::KeyEventSink;
    use crate::protocol::KeyEvent;

    // ------------------------------------------------------------------
    // Recording mocks
    // ------------------------------------------------------------------

    /// One primitive call observed by the mocks.
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        MouseDown(Point),
        MouseUp(Point),
        MouseMove(Point),
        ContextClick(Point),
        TouchDown(i64, i64),
        TouchUp(i64, i64),
        TouchMove(i64, i64),
        KeyEvent(KeyEvent),
        Location(ElementId),
        ClickableLocation(ElementId),
    }

    /// Shared call log preserving cross-device ordering.
    #[derive(Default)]
    struct CallLog {
        calls: Mutex<Vec<Call>>,
    }

    impl CallLog {
        fn push(&self, call: Call) {
            self.calls.lock().push(call);
        }

        fn snapshot(&self) -> Vec<Call> {
            self.calls.lock().clone()
        }
    }

    struct MockMouse(Arc<CallLog>);

    #[async_trait]
    impl Mouse for MockMouse {
        async fn mouse_down(&self, point: Point, _cancel: &CancelScope) -> Result<()> {
            self.0.push(Call::MouseDown(point));
            Ok(())
        }

        async fn mouse_up(&self, point: Point, _cancel: &CancelScope) -> Result<()> {
            self.0.push(Call::MouseUp(point));
            Ok(())
        }

        async fn mouse_move(&self, point: Point, _cancel: &CancelScope) -> Result<()> {
            self.0.push(Call::MouseMove(point));
            Ok(())
        }

        async fn context_click(&self, point: Point, _cancel: &CancelScope) -> Result<()> {
            self.0.push(Call::ContextClick(point));
            Ok(())
        }
    }

    struct MockTouch(Arc<CallLog>);

    #[async_trait]
    impl TouchScreen for MockTouch {
        async fn touch_down(&self, x: i64, y: i64, _cancel: &CancelScope) -> Result<()> {
            self.0.push(Call::TouchDown(x, y));
            Ok(())
        }

        async fn touch_up(&self, x: i64, y: i64, _cancel: &CancelScope) -> Result<()> {
            self.0.push(Call::TouchUp(x, y));
            Ok(())
        }

        async fn touch_move(&self, x: i64, y: i64, _cancel: &CancelScope) -> Result<()> {
            self.0.push(Call::TouchMove(x, y));
            Ok(())
        }
    }

    struct MockLocator {
        log: Arc<CallLog>,
        location: Option<Point>,
        clickable: Option<Point>,
    }

    #[async_trait]
    impl ElementLocator for MockLocator {
        async fn location(
            &self,
            element: &ElementId,
            _cancel: &CancelScope,
        ) -> Result<Option<Point>> {
            self.log.push(Call::Location(element.clone()));
            Ok(self.location)
        }

        async fn clickable_location(
            &self,
            element: &ElementId,
            _cancel: &CancelScope,
        ) -> Result<Option<Point>> {
            self.log.push(Call::ClickableLocation(element.clone()));
            Ok(self.clickable)
        }
    }

    struct MockSink(Arc<CallLog>);

    #[async_trait]
    impl KeyEventSink for MockSink {
        async fn dispatch_key_event(&self, event: KeyEvent) -> Result<()> {
            self.0.push(Call::KeyEvent(event));
            Ok(())
        }
    }

    // ------------------------------------------------------------------
    // Harness
    // ------------------------------------------------------------------

    struct Harness {
        log: Arc<CallLog>,
        session: Arc<SessionState>,
        engine: Arc<ActionEngine>,
    }

    fn harness_with_locator(location: Option<Point>, clickable: Option<Point>) -> Harness {
        let log = Arc::new(CallLog::default());
        let session = Arc::new(SessionState::new());
        let engine = Arc::new(ActionEngine::new(
            Arc::new(MockMouse(log.clone())),
            Arc::new(MockTouch(log.clone())),
            Arc::new(MockLocator {
                log: log.clone(),
                location,
                clickable,
            }),
            Keyboard::new(Arc::new(MockSink(log.clone()))),
            session.clone(),
        ));
        Harness {
            log,
            session,
            engine,
        }
    }

    fn harness() -> Harness {
        harness_with_locator(Some(Point::new(100, 200)), Some(Point::new(105, 210)))
    }

    fn mouse_seq(interactions: Vec<Interaction>) -> ActionSequence {
        ActionSequence::with_interactions(
            InputSource::Pointer(PointerKind::Mouse),
            interactions,
        )
    }

    fn touch_seq(interactions: Vec<Interaction>) -> ActionSequence {
        ActionSequence::with_interactions(
            InputSource::Pointer(PointerKind::Touch),
            interactions,
        )
    }

    // ------------------------------------------------------------------
    // Tests
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_empty_sequences_succeed_with_no_calls() {
        let h = harness();

        h.engine
            .perform_actions(&[], CancellationToken::new())
            .await
            .expect("empty call");

        assert!(h.log.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_is_action_executor() {
        let h = harness();
        assert!(h.engine.is_action_executor().await);
    }

    #[tokio::test]
    async fn test_left_click_uses_session_position() {
        let h = harness();
        h.session.set_mouse_position(Point::new(5, 6));

        let sequences = [mouse_seq(vec![
            Interaction::PointerDown {
                button: MouseButton::Left,
            },
            Interaction::PointerUp {
                button: MouseButton::Left,
            },
        ])];

        h.engine
            .perform_actions(&sequences, CancellationToken::new())
            .await
            .expect("click");

        assert_eq!(
            h.log.snapshot(),
            [
                Call::MouseDown(Point::new(5, 6)),
                Call::MouseUp(Point::new(5, 6)),
            ]
        );
    }

    #[tokio::test]
    async fn test_right_button_dispatches_context_click() {
        let h = harness();

        let sequences = [mouse_seq(vec![
            Interaction::PointerDown {
                button: MouseButton::Right,
            },
            Interaction::PointerUp {
                button: MouseButton::Right,
            },
        ])];

        h.engine
            .perform_actions(&sequences, CancellationToken::new())
            .await
            .expect("context click");

        assert_eq!(
            h.log.snapshot(),
            [
                Call::ContextClick(Point::new(0, 0)),
                Call::ContextClick(Point::new(0, 0)),
            ]
        );
    }

    #[tokio::test]
    async fn test_middle_button_is_capability_failure() {
        let h = harness();

        let sequences = [mouse_seq(vec![Interaction::PointerDown {
            button: MouseButton::Middle,
        }])];

        let result = h
            .engine
            .perform_actions(&sequences, CancellationToken::new())
            .await;

        assert!(matches!(result, Err(Error::UnsupportedCapability { .. })));
        assert!(h.log.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_failure_aborts_remaining_interactions() {
        let h = harness();

        let sequences = [mouse_seq(vec![
            Interaction::PointerDown {
                button: MouseButton::Left,
            },
            Interaction::PointerDown {
                button: MouseButton::Middle,
            },
            Interaction::PointerUp {
                button: MouseButton::Left,
            },
        ])];

        let result = h
            .engine
            .perform_actions(&sequences, CancellationToken::new())
            .await;

        assert!(result.is_err());
        // Only the interaction before the failing one ran.
        assert_eq!(h.log.snapshot(), [Call::MouseDown(Point::new(0, 0))]);
    }

    #[tokio::test]
    async fn test_move_with_zero_offset_uses_clickable_location() {
        let h = harness();
        let element = ElementId::new("e-1");

        let sequences = [mouse_seq(vec![Interaction::PointerMove {
            target: Some(element.clone()),
            x: 0,
            y: 0,
        }])];

        h.engine
            .perform_actions(&sequences, CancellationToken::new())
            .await
            .expect("move");

        assert_eq!(
            h.log.snapshot(),
            [
                Call::ClickableLocation(element),
                Call::MouseMove(Point::new(105, 210)),
            ]
        );
        assert_eq!(h.session.mouse_position(), Point::new(105, 210));
    }

    #[tokio::test]
    async fn test_move_with_offset_uses_raw_location_plus_offset() {
        let h = harness();
        let element = ElementId::new("e-2");

        let sequences = [mouse_seq(vec![Interaction::PointerMove {
            target: Some(element.clone()),
            x: 10,
            y: -20,
        }])];

        h.engine
            .perform_actions(&sequences, CancellationToken::new())
            .await
            .expect("move");

        assert_eq!(
            h.log.snapshot(),
            [
                Call::Location(element),
                Call::MouseMove(Point::new(110, 180)),
            ]
        );
        assert_eq!(h.session.mouse_position(), Point::new(110, 180));
    }

    #[tokio::test]
    async fn test_move_without_target_offsets_session_position() {
        let h = harness();
        h.session.set_mouse_position(Point::new(50, 50));

        let sequences = [mouse_seq(vec![Interaction::PointerMove {
            target: None,
            x: 7,
            y: 3,
        }])];

        h.engine
            .perform_actions(&sequences, CancellationToken::new())
            .await
            .expect("move");

        assert_eq!(h.log.snapshot(), [Call::MouseMove(Point::new(57, 53))]);
        assert_eq!(h.session.mouse_position(), Point::new(57, 53));
    }

    #[tokio::test]
    async fn test_mouse_move_to_absent_location_fails() {
        let h = harness_with_locator(None, None);

        let sequences = [mouse_seq(vec![Interaction::PointerMove {
            target: Some(ElementId::new("gone")),
            x: 0,
            y: 0,
        }])];

        let result = h
            .engine
            .perform_actions(&sequences, CancellationToken::new())
            .await;

        assert!(matches!(result, Err(Error::ElementLocation { .. })));
    }

    #[tokio::test]
    async fn test_touch_move_to_absent_location_skips_silently() {
        let h = harness_with_locator(None, None);

        let sequences = [touch_seq(vec![Interaction::PointerMove {
            target: Some(ElementId::new("gone")),
            x: 0,
            y: 0,
        }])];

        h.engine
            .perform_actions(&sequences, CancellationToken::new())
            .await
            .expect("skipped move");

        assert_eq!(
            h.log.snapshot(),
            [Call::ClickableLocation(ElementId::new("gone"))]
        );
        // Skipped move leaves the session position untouched.
        assert_eq!(h.session.mouse_position(), Point::new(0, 0));
    }

    #[tokio::test]
    async fn test_touch_tap_uses_touch_primitives() {
        let h = harness();
        h.session.set_mouse_position(Point::new(30, 40));

        let sequences = [touch_seq(vec![
            Interaction::PointerDown {
                button: MouseButton::Left,
            },
            Interaction::PointerUp {
                button: MouseButton::Left,
            },
        ])];

        h.engine
            .perform_actions(&sequences, CancellationToken::new())
            .await
            .expect("tap");

        assert_eq!(
            h.log.snapshot(),
            [Call::TouchDown(30, 40), Call::TouchUp(30, 40)]
        );
    }

    #[tokio::test]
    async fn test_touch_right_down_is_capability_failure() {
        let h = harness();

        let sequences = [touch_seq(vec![Interaction::PointerDown {
            button: MouseButton::Right,
        }])];

        let result = h
            .engine
            .perform_actions(&sequences, CancellationToken::new())
            .await;

        assert!(matches!(result, Err(Error::UnsupportedCapability { .. })));
        assert!(h.log.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_touch_right_up_dispatches_context_click() {
        let h = harness();

        let sequences = [touch_seq(vec![Interaction::PointerUp {
            button: MouseButton::Right,
        }])];

        h.engine
            .perform_actions(&sequences, CancellationToken::new())
            .await
            .expect("touch right up");

        assert_eq!(h.log.snapshot(), [Call::ContextClick(Point::new(0, 0))]);
    }

    #[tokio::test]
    async fn test_pen_interactions_are_not_implemented() {
        let h = harness();
        let pen = InputSource::Pointer(PointerKind::Pen);

        for interaction in [
            Interaction::PointerDown {
                button: MouseButton::Left,
            },
            Interaction::PointerUp {
                button: MouseButton::Left,
            },
            Interaction::PointerMove {
                target: None,
                x: 1,
                y: 1,
            },
        ] {
            let sequences =
                [ActionSequence::with_interactions(pen, vec![interaction])];
            let result = h
                .engine
                .perform_actions(&sequences, CancellationToken::new())
                .await;

            assert!(matches!(result, Err(Error::NotImplemented { .. })));
        }
        assert!(h.log.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_pointer_cancel_is_noop() {
        let h = harness();

        let sequences = [mouse_seq(vec![Interaction::PointerCancel])];

        h.engine
            .perform_actions(&sequences, CancellationToken::new())
            .await
            .expect("cancel interaction");

        assert!(h.log.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_key_interactions_forward_to_keyboard() {
        let h = harness();

        let sequences = [ActionSequence::with_interactions(
            InputSource::Key,
            vec![
                Interaction::KeyDown { value: 'a' },
                Interaction::KeyUp { value: 'a' },
            ],
        )];

        h.engine
            .perform_actions(&sequences, CancellationToken::new())
            .await
            .expect("key sequence");

        assert_eq!(
            h.log.snapshot(),
            [
                Call::KeyEvent(KeyEvent::key_down_text('a')),
                Call::KeyEvent(KeyEvent::key_up_text('a')),
            ]
        );
    }

    #[tokio::test]
    async fn test_pointer_interaction_on_key_source_fails() {
        let h = harness();

        let sequences = [ActionSequence::with_interactions(
            InputSource::Key,
            vec![Interaction::PointerDown {
                button: MouseButton::Left,
            }],
        )];

        let result = h
            .engine
            .perform_actions(&sequences, CancellationToken::new())
            .await;

        assert!(matches!(result, Err(Error::UnsupportedCapability { .. })));
    }

    #[tokio::test]
    async fn test_sequences_execute_in_submission_order() {
        let h = harness();

        let sequences = [
            touch_seq(vec![Interaction::PointerDown {
                button: MouseButton::Left,
            }]),
            mouse_seq(vec![Interaction::PointerDown {
                button: MouseButton::Left,
            }]),
        ];

        h.engine
            .perform_actions(&sequences, CancellationToken::new())
            .await
            .expect("two sequences");

        assert_eq!(
            h.log.snapshot(),
            [
                Call::TouchDown(0, 0),
                Call::MouseDown(Point::new(0, 0)),
            ]
        );
    }

    #[tokio::test]
    async fn test_pre_cancelled_caller_token_aborts_before_any_call() {
        let h = harness();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let sequences = [mouse_seq(vec![Interaction::PointerDown {
            button: MouseButton::Left,
        }])];

        let result = h.engine.perform_actions(&sequences, cancel).await;

        assert!(matches!(result, Err(Error::Cancelled)));
        assert!(h.log.snapshot().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_then_continue() {
        let h = harness();

        let sequences = [mouse_seq(vec![
            Interaction::Pause {
                duration: Duration::from_millis(250),
            },
            Interaction::PointerDown {
                button: MouseButton::Left,
            },
        ])];

        h.engine
            .perform_actions(&sequences, CancellationToken::new())
            .await
            .expect("pause then click");

        assert_eq!(h.log.snapshot(), [Call::MouseDown(Point::new(0, 0))]);
    }

    #[tokio::test]
    async fn test_reset_input_state_cancels_in_flight_call() {
        let h = harness();
        let engine = h.engine.clone();

        let sequences = vec![mouse_seq(vec![
            Interaction::Pause {
                duration: Duration::from_secs(60),
            },
            Interaction::PointerDown {
                button: MouseButton::Left,
            },
        ])];

        let task = tokio::spawn(async move {
            engine
                .perform_actions(&sequences, CancellationToken::new())
                .await
        });

        // Let the call reach its pause before resetting.
        tokio::time::sleep(Duration::from_millis(20)).await;
        h.engine
            .reset_input_state(CancellationToken::new())
            .await
            .expect("reset never fails");

        let result = task.await.expect("task join");
        assert!(matches!(result, Err(Error::Cancelled)));
        assert!(h.log.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_reset_with_no_call_in_flight_succeeds() {
        let h = harness();

        h.engine
            .reset_input_state(CancellationToken::new())
            .await
            .expect("reset with nothing running");
    }
}
