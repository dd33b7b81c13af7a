//! Press/click gesture state machine
//!
//! [`GestureCore`] turns the raw begin/move/end/cancel stream of a single
//! touch into the press/click contract shared by every button-like control:
//!
//! - A touch that starts on an enabled control presses it.
//! - Moving further than the tolerance margin outside the control's bounds
//!   cancels the session; lifting the finger afterwards never activates.
//! - Lifting the finger while still inside the tolerance zone activates the
//!   control exactly once.
//!
//! The state machine has no platform dependency: adapters feed it points in
//! the control's local coordinate space and read back a [`GestureResponse`].

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::trace;

use crate::constants::DEFAULT_TOLERANCE_MARGIN_PX;

/// Lifecycle phase of a touch session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// No gesture in progress
    Idle,
    /// Finger is down and still within the tolerance zone
    Active,
    /// Gesture left the tolerance zone or was interrupted
    Cancelled,
    /// Finger lifted inside the tolerance zone
    Ended,
}

/// One physical gesture on one control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchSession {
    origin: Point,
    current: Point,
    phase: TouchPhase,
}

impl TouchSession {
    fn start(origin: Point) -> Self {
        Self {
            origin,
            current: origin,
            phase: TouchPhase::Active,
        }
    }

    /// Where the finger first touched the control
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Last location accepted inside the tolerance zone
    pub fn current(&self) -> Point {
        self.current
    }

    pub fn phase(&self) -> TouchPhase {
        self.phase
    }
}

/// Transition produced by a single gesture operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureResponse {
    /// Input had no effect (disabled, no session, or a session already running)
    Ignored,
    /// A new session started; the press flag went up
    Pressed,
    /// The finger moved but stayed inside the tolerance zone
    Tracking,
    /// The session was cancelled; the press flag went down without activation
    Cancelled,
    /// The finger lifted after a cancellation; nothing fires
    Released,
    /// The finger lifted inside the tolerance zone; fire the bound action
    Activated,
}

impl GestureResponse {
    /// Whether the press flag changed with this transition
    pub fn changes_press(&self) -> bool {
        matches!(
            self,
            GestureResponse::Pressed | GestureResponse::Cancelled | GestureResponse::Activated
        )
    }
}

/// Press/click state machine owned by one control
#[derive(Debug, Clone)]
pub struct GestureCore {
    bounds: Rectangle,
    tolerance_margin: u32,
    enabled: bool,
    session: Option<TouchSession>,
    /// How the last session finished; reported by `phase` once it is gone
    finished: TouchPhase,
}

impl GestureCore {
    /// Create a gesture core for a control occupying `bounds`, using the
    /// default tolerance margin.
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            tolerance_margin: DEFAULT_TOLERANCE_MARGIN_PX,
            enabled: true,
            session: None,
            finished: TouchPhase::Idle,
        }
    }

    pub fn with_tolerance_margin(mut self, margin: u32) -> Self {
        self.tolerance_margin = margin;
        self
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    pub fn tolerance_margin(&self) -> u32 {
        self.tolerance_margin
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the control.
    ///
    /// Disabling drops any session in progress so the press flag can never
    /// stay raised on a disabled control.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled && self.session.take().is_some() {
            self.finished = TouchPhase::Cancelled;
            trace!("gesture: session dropped by disable");
        }
    }

    /// Press flag: true only while a session is active
    pub fn is_pressed(&self) -> bool {
        matches!(
            self.session,
            Some(TouchSession {
                phase: TouchPhase::Active,
                ..
            })
        )
    }

    /// Phase of the open session, or how the last one finished.
    ///
    /// `Ended` and `Cancelled` stay visible after the session is destroyed,
    /// until the next `begin`. `Idle` before the first session.
    pub fn phase(&self) -> TouchPhase {
        self.session.map_or(self.finished, |s| s.phase)
    }

    pub fn session(&self) -> Option<&TouchSession> {
        self.session.as_ref()
    }

    /// Whether `point` lies inside the bounds expanded by the tolerance margin.
    ///
    /// Edges of the expanded area count as inside.
    pub fn within_tolerance(&self, point: Point) -> bool {
        let margin = i64::from(self.tolerance_margin);
        let left = i64::from(self.bounds.top_left.x) - margin;
        let top = i64::from(self.bounds.top_left.y) - margin;
        let right = i64::from(self.bounds.top_left.x) + i64::from(self.bounds.size.width) + margin;
        let bottom =
            i64::from(self.bounds.top_left.y) + i64::from(self.bounds.size.height) + margin;

        let x = i64::from(point.x);
        let y = i64::from(point.y);
        (left..=right).contains(&x) && (top..=bottom).contains(&y)
    }

    /// Start a session at `at`.
    ///
    /// Ignored while disabled or while another session is still open.
    pub fn begin(&mut self, at: Point) -> GestureResponse {
        if !self.enabled {
            trace!("gesture: begin ignored, control disabled");
            return GestureResponse::Ignored;
        }
        if self.session.is_some() {
            trace!("gesture: begin ignored, session already open");
            return GestureResponse::Ignored;
        }

        self.session = Some(TouchSession::start(at));
        trace!("gesture: pressed at ({}, {})", at.x, at.y);
        GestureResponse::Pressed
    }

    /// Track the finger to `to`, cancelling once it leaves the tolerance zone.
    pub fn move_to(&mut self, to: Point) -> GestureResponse {
        let inside = self.within_tolerance(to);
        let Some(session) = self.session.as_mut() else {
            return GestureResponse::Ignored;
        };
        if session.phase != TouchPhase::Active {
            return GestureResponse::Ignored;
        }

        if inside {
            session.current = to;
            GestureResponse::Tracking
        } else {
            session.phase = TouchPhase::Cancelled;
            trace!("gesture: cancelled, left tolerance zone at ({}, {})", to.x, to.y);
            GestureResponse::Cancelled
        }
    }

    /// Finish the session with the finger lifted at `at`.
    ///
    /// The release point is checked against the tolerance zone like a final
    /// move, so lifting outside the zone never activates.
    pub fn end(&mut self, at: Point) -> GestureResponse {
        let inside = self.within_tolerance(at);
        let Some(session) = self.session.take() else {
            return GestureResponse::Ignored;
        };

        match session.phase {
            TouchPhase::Active if inside => {
                self.finished = TouchPhase::Ended;
                trace!("gesture: activated at ({}, {})", at.x, at.y);
                GestureResponse::Activated
            }
            TouchPhase::Active => {
                self.finished = TouchPhase::Cancelled;
                trace!("gesture: released outside tolerance zone");
                GestureResponse::Cancelled
            }
            _ => {
                self.finished = TouchPhase::Cancelled;
                GestureResponse::Released
            }
        }
    }

    /// System interruption: drop the session without activation.
    pub fn cancel(&mut self) -> GestureResponse {
        let Some(session) = self.session.take() else {
            return GestureResponse::Ignored;
        };
        self.finished = TouchPhase::Cancelled;

        match session.phase {
            TouchPhase::Active => {
                trace!("gesture: cancelled by system");
                GestureResponse::Cancelled
            }
            _ => GestureResponse::Released,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core_40() -> GestureCore {
        GestureCore::new(Rectangle::new(Point::zero(), Size::new(40, 40))).with_tolerance_margin(20)
    }

    #[test]
    fn test_click_inside_activates_once() {
        let mut core = core_40();

        assert_eq!(core.begin(Point::new(5, 5)), GestureResponse::Pressed);
        assert!(core.is_pressed());
        assert_eq!(core.move_to(Point::new(10, 12)), GestureResponse::Tracking);
        assert_eq!(core.end(Point::new(10, 12)), GestureResponse::Activated);
        assert!(!core.is_pressed());

        assert_eq!(core.phase(), TouchPhase::Ended);
        assert!(core.session().is_none());

        // A stray second release must not fire again
        assert_eq!(core.end(Point::new(10, 12)), GestureResponse::Ignored);
        assert_eq!(core.phase(), TouchPhase::Ended);
    }

    #[test]
    fn test_finished_phase_visible_until_next_begin() {
        let mut core = core_40();
        assert_eq!(core.phase(), TouchPhase::Idle);

        core.begin(Point::new(5, 5));
        core.end(Point::new(100, 5));
        assert_eq!(core.phase(), TouchPhase::Cancelled);

        core.begin(Point::new(5, 5));
        assert_eq!(core.phase(), TouchPhase::Active);
        core.end(Point::new(5, 5));
        assert_eq!(core.phase(), TouchPhase::Ended);

        core.begin(Point::new(5, 5));
        core.cancel();
        assert_eq!(core.phase(), TouchPhase::Cancelled);
    }

    #[test]
    fn test_tolerance_boundary_scenario() {
        let mut core = core_40();

        core.begin(Point::new(5, 5));
        assert_eq!(core.move_to(Point::new(55, 5)), GestureResponse::Tracking);
        assert!(core.is_pressed());
        assert_eq!(core.session().unwrap().current(), Point::new(55, 5));

        assert_eq!(core.move_to(Point::new(65, 5)), GestureResponse::Cancelled);
        assert!(!core.is_pressed());
        assert_eq!(core.phase(), TouchPhase::Cancelled);

        assert_eq!(core.end(Point::new(65, 5)), GestureResponse::Released);
        assert!(!core.is_pressed());
    }

    #[test]
    fn test_expanded_edge_is_inside() {
        let core = core_40();
        assert!(core.within_tolerance(Point::new(60, 60)));
        assert!(core.within_tolerance(Point::new(-20, -20)));
        assert!(!core.within_tolerance(Point::new(61, 0)));
        assert!(!core.within_tolerance(Point::new(0, -21)));
    }

    #[test]
    fn test_points_outside_tolerance_never_activate() {
        let outside = [
            Point::new(61, 10),
            Point::new(-21, 10),
            Point::new(10, 61),
            Point::new(10, -21),
            Point::new(200, 200),
            Point::new(i32::MIN, i32::MAX),
        ];

        for p in outside {
            let mut core = core_40();
            core.begin(Point::new(20, 20));
            core.move_to(p);
            assert_ne!(core.end(p), GestureResponse::Activated, "activated at {:?}", p);
            assert!(!core.is_pressed());
        }
    }

    #[test]
    fn test_release_outside_without_move_does_not_activate() {
        let mut core = core_40();
        core.begin(Point::new(5, 5));
        assert_eq!(core.end(Point::new(100, 5)), GestureResponse::Cancelled);
        assert!(!core.is_pressed());
    }

    #[test]
    fn test_return_after_cancel_stays_cancelled() {
        let mut core = core_40();
        core.begin(Point::new(5, 5));
        core.move_to(Point::new(100, 5));
        assert_eq!(core.move_to(Point::new(5, 5)), GestureResponse::Ignored);
        assert!(!core.is_pressed());
        assert_eq!(core.end(Point::new(5, 5)), GestureResponse::Released);
    }

    #[test]
    fn test_reentrant_begin_is_ignored() {
        let mut core = core_40();
        core.begin(Point::new(5, 5));
        assert_eq!(core.begin(Point::new(30, 30)), GestureResponse::Ignored);
        assert_eq!(core.session().unwrap().origin(), Point::new(5, 5));

        // Still ignored after a tolerance cancel until the finger lifts
        core.move_to(Point::new(100, 100));
        assert_eq!(core.begin(Point::new(30, 30)), GestureResponse::Ignored);
        core.end(Point::new(100, 100));
        assert_eq!(core.begin(Point::new(30, 30)), GestureResponse::Pressed);
    }

    #[test]
    fn test_system_cancel_clears_press() {
        let mut core = core_40();
        core.begin(Point::new(5, 5));
        assert_eq!(core.cancel(), GestureResponse::Cancelled);
        assert!(!core.is_pressed());
        assert_eq!(core.end(Point::new(5, 5)), GestureResponse::Ignored);
        assert_eq!(core.cancel(), GestureResponse::Ignored);
    }

    #[test]
    fn test_disabled_ignores_begin() {
        let mut core = core_40();
        core.set_enabled(false);

        assert_eq!(core.begin(Point::new(5, 5)), GestureResponse::Ignored);
        assert_eq!(core.move_to(Point::new(6, 6)), GestureResponse::Ignored);
        assert_eq!(core.end(Point::new(6, 6)), GestureResponse::Ignored);
        assert!(!core.is_pressed());
    }

    #[test]
    fn test_disable_during_session_drops_press() {
        let mut core = core_40();
        core.begin(Point::new(5, 5));
        core.set_enabled(false);

        assert!(!core.is_pressed());
        assert_eq!(core.end(Point::new(5, 5)), GestureResponse::Ignored);
    }

    #[test]
    fn test_activation_at_most_once_per_session() {
        let mut core = core_40();
        let script = [
            Point::new(1, 1),
            Point::new(50, 2),
            Point::new(-10, 30),
            Point::new(39, 39),
        ];

        core.begin(Point::new(0, 0));
        let mut activations = 0;
        for p in script {
            if core.move_to(p) == GestureResponse::Activated {
                activations += 1;
            }
        }
        for _ in 0..3 {
            if core.end(Point::new(1, 1)) == GestureResponse::Activated {
                activations += 1;
            }
        }
        assert_eq!(activations, 1);
    }

    #[test]
    fn test_changes_press() {
        assert!(GestureResponse::Pressed.changes_press());
        assert!(GestureResponse::Activated.changes_press());
        assert!(GestureResponse::Cancelled.changes_press());
        assert!(!GestureResponse::Tracking.changes_press());
        assert!(!GestureResponse::Released.changes_press());
    }
}
