//! Touch-gesture recognition for the mobile easter-egg reveal.
//!
//! The recognizer is fed raw touch phases (start/move/end with coordinates and
//! timestamps) by the page shell and classifies them against the single
//! currently active gesture. Only the active gesture can complete; the shell
//! rotates to a new random one after each completion. No browser types here so
//! the whole module tests natively.

use rand::Rng;

/// Minimum travel for a swipe.
pub const SWIPE_MIN_DISTANCE: f64 = 50.0;
/// A swipe must finish within this long.
pub const SWIPE_MAX_DURATION_MS: f64 = 300.0;
/// Movement beyond this aborts a long-press and disqualifies a tap.
pub const DRIFT_TOLERANCE: f64 = 10.0;
/// Hold duration for a long-press.
pub const LONG_PRESS_MS: f64 = 2000.0;
/// Taps needed for a multi-tap.
pub const MULTI_TAP_COUNT: u32 = 3;
/// Max gap between consecutive taps.
pub const MULTI_TAP_WINDOW_MS: f64 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    SwipeUp,
    SwipeDown,
    SwipeLeft,
    SwipeRight,
    LongPress,
    MultiTap,
}

/// Gestures the page actually arms for the easter-egg reveal.
pub static REVEAL_GESTURES: &[GestureKind] = &[
    GestureKind::SwipeUp,
    GestureKind::SwipeDown,
    GestureKind::LongPress,
    GestureKind::MultiTap,
];

pub struct GestureRecognizer {
    active: Option<GestureKind>,
    suspended: bool, // true while a modal is open
    touching: bool,
    start_x: f64,
    start_y: f64,
    start_ms: f64,
    drifted: bool,
    tap_count: u32,
    last_tap_ms: f64,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self {
            active: None,
            suspended: false,
            touching: false,
            start_x: 0.0,
            start_y: 0.0,
            start_ms: 0.0,
            drifted: false,
            tap_count: 0,
            last_tap_ms: 0.0,
        }
    }

    pub fn active(&self) -> Option<GestureKind> {
        self.active
    }

    pub fn set_active(&mut self, gesture: GestureKind) {
        self.active = Some(gesture);
        self.reset_touch();
        self.tap_count = 0;
    }

    /// Arm a random gesture from `pool`.
    pub fn set_random_active(&mut self, pool: &[GestureKind], rng: &mut impl Rng) {
        if pool.is_empty() {
            return;
        }
        let gesture = *crate::phrases::pick(pool, rng);
        self.set_active(gesture);
    }

    /// Suspend while a modal is open so modal taps don't complete gestures.
    pub fn set_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
        if suspended {
            self.reset_touch();
            self.tap_count = 0;
        }
    }

    pub fn touch_start(&mut self, x: f64, y: f64, now_ms: f64) {
        if self.suspended || self.active.is_none() {
            return;
        }
        self.touching = true;
        self.start_x = x;
        self.start_y = y;
        self.start_ms = now_ms;
        self.drifted = false;
    }

    pub fn touch_move(&mut self, x: f64, y: f64) {
        if !self.touching {
            return;
        }
        let dx = x - self.start_x;
        let dy = y - self.start_y;
        if (dx * dx + dy * dy).sqrt() > DRIFT_TOLERANCE {
            self.drifted = true;
        }
    }

    /// Classify the finished touch. Returns the completed gesture, if any.
    pub fn touch_end(&mut self, x: f64, y: f64, now_ms: f64) -> Option<GestureKind> {
        if self.suspended || !self.touching {
            return None;
        }
        self.touching = false;

        let active = self.active?;
        let dx = x - self.start_x;
        let dy = y - self.start_y;
        let distance = (dx * dx + dy * dy).sqrt();
        let elapsed = now_ms - self.start_ms;

        match active {
            GestureKind::LongPress => {
                (elapsed >= LONG_PRESS_MS && !self.drifted).then_some(active)
            }
            GestureKind::MultiTap => {
                if distance > DRIFT_TOLERANCE || elapsed >= MULTI_TAP_WINDOW_MS {
                    self.tap_count = 0;
                    return None;
                }
                if self.tap_count > 0 && now_ms - self.last_tap_ms <= MULTI_TAP_WINDOW_MS {
                    self.tap_count += 1;
                } else {
                    self.tap_count = 1;
                }
                self.last_tap_ms = now_ms;
                if self.tap_count >= MULTI_TAP_COUNT {
                    self.tap_count = 0;
                    Some(active)
                } else {
                    None
                }
            }
            swipe => {
                if distance <= SWIPE_MIN_DISTANCE || elapsed >= SWIPE_MAX_DURATION_MS {
                    return None;
                }
                let direction = if dx.abs() > dy.abs() {
                    if dx > 0.0 { GestureKind::SwipeRight } else { GestureKind::SwipeLeft }
                } else if dy > 0.0 {
                    GestureKind::SwipeDown
                } else {
                    GestureKind::SwipeUp
                };
                (direction == swipe).then_some(swipe)
            }
        }
    }

    /// Abandon the in-flight touch (touchcancel).
    pub fn cancel_touch(&mut self) {
        self.reset_touch();
        self.tap_count = 0;
    }

    fn reset_touch(&mut self) {
        self.touching = false;
        self.drifted = false;
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
