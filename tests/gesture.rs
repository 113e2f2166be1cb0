// Touch gesture classification (native).

use holding_page::gesture::{
    DRIFT_TOLERANCE, GestureKind, GestureRecognizer, LONG_PRESS_MS, REVEAL_GESTURES,
    SWIPE_MIN_DISTANCE,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn tap(recognizer: &mut GestureRecognizer, at_ms: f64) -> Option<GestureKind> {
    recognizer.touch_start(100.0, 100.0, at_ms);
    recognizer.touch_end(100.0, 100.0, at_ms + 50.0)
}

#[test]
fn a_fast_upward_swipe_completes_swipe_up() {
    let mut recognizer = GestureRecognizer::new();
    recognizer.set_active(GestureKind::SwipeUp);
    recognizer.touch_start(100.0, 500.0, 0.0);
    assert_eq!(recognizer.touch_end(100.0, 300.0, 150.0), Some(GestureKind::SwipeUp));
}

#[test]
fn the_wrong_direction_does_not_complete() {
    let mut recognizer = GestureRecognizer::new();
    recognizer.set_active(GestureKind::SwipeUp);
    recognizer.touch_start(100.0, 300.0, 0.0);
    assert_eq!(recognizer.touch_end(100.0, 500.0, 150.0), None);
}

#[test]
fn horizontal_dominance_wins_over_vertical() {
    let mut recognizer = GestureRecognizer::new();
    recognizer.set_active(GestureKind::SwipeRight);
    // Moves both right and slightly up; the bigger axis decides.
    recognizer.touch_start(100.0, 300.0, 0.0);
    assert_eq!(recognizer.touch_end(300.0, 260.0, 150.0), Some(GestureKind::SwipeRight));
}

#[test]
fn slow_or_short_swipes_are_rejected() {
    let mut recognizer = GestureRecognizer::new();
    recognizer.set_active(GestureKind::SwipeUp);

    // Too slow.
    recognizer.touch_start(100.0, 500.0, 0.0);
    assert_eq!(recognizer.touch_end(100.0, 300.0, 400.0), None);

    // Too short.
    recognizer.touch_start(100.0, 500.0, 1_000.0);
    let end_y = 500.0 - (SWIPE_MIN_DISTANCE - 1.0);
    assert_eq!(recognizer.touch_end(100.0, end_y, 1_150.0), None);
}

#[test]
fn long_press_requires_holding_still() {
    let mut recognizer = GestureRecognizer::new();
    recognizer.set_active(GestureKind::LongPress);

    recognizer.touch_start(100.0, 100.0, 0.0);
    assert_eq!(
        recognizer.touch_end(100.0, 100.0, LONG_PRESS_MS + 100.0),
        Some(GestureKind::LongPress)
    );

    // Released too early.
    recognizer.touch_start(100.0, 100.0, 10_000.0);
    assert_eq!(recognizer.touch_end(100.0, 100.0, 10_500.0), None);

    // Drifted mid-hold.
    recognizer.touch_start(100.0, 100.0, 20_000.0);
    recognizer.touch_move(100.0 + DRIFT_TOLERANCE * 2.0, 100.0);
    assert_eq!(recognizer.touch_end(100.0, 100.0, 20_000.0 + LONG_PRESS_MS + 100.0), None);
}

#[test]
fn three_quick_taps_complete_multi_tap() {
    let mut recognizer = GestureRecognizer::new();
    recognizer.set_active(GestureKind::MultiTap);

    assert_eq!(tap(&mut recognizer, 0.0), None);
    assert_eq!(tap(&mut recognizer, 300.0), None);
    assert_eq!(tap(&mut recognizer, 600.0), Some(GestureKind::MultiTap));

    // The counter resets after completion.
    assert_eq!(tap(&mut recognizer, 900.0), None);
}

#[test]
fn a_pause_between_taps_resets_the_count() {
    let mut recognizer = GestureRecognizer::new();
    recognizer.set_active(GestureKind::MultiTap);

    assert_eq!(tap(&mut recognizer, 0.0), None);
    assert_eq!(tap(&mut recognizer, 300.0), None);
    // Long gap; this tap starts a new run of three.
    assert_eq!(tap(&mut recognizer, 2_000.0), None);
    assert_eq!(tap(&mut recognizer, 2_300.0), None);
    assert_eq!(tap(&mut recognizer, 2_600.0), Some(GestureKind::MultiTap));
}

#[test]
fn suspension_swallows_touches() {
    let mut recognizer = GestureRecognizer::new();
    recognizer.set_active(GestureKind::SwipeUp);
    recognizer.set_suspended(true);

    recognizer.touch_start(100.0, 500.0, 0.0);
    assert_eq!(recognizer.touch_end(100.0, 300.0, 150.0), None);

    recognizer.set_suspended(false);
    recognizer.touch_start(100.0, 500.0, 1_000.0);
    assert_eq!(recognizer.touch_end(100.0, 300.0, 1_150.0), Some(GestureKind::SwipeUp));
}

#[test]
fn nothing_completes_without_an_active_gesture() {
    let mut recognizer = GestureRecognizer::new();
    recognizer.touch_start(100.0, 500.0, 0.0);
    assert_eq!(recognizer.touch_end(100.0, 300.0, 150.0), None);
}

#[test]
fn cancelling_abandons_the_touch() {
    let mut recognizer = GestureRecognizer::new();
    recognizer.set_active(GestureKind::SwipeUp);
    recognizer.touch_start(100.0, 500.0, 0.0);
    recognizer.cancel_touch();
    assert_eq!(recognizer.touch_end(100.0, 300.0, 150.0), None);
}

#[test]
fn random_arming_picks_from_the_reveal_pool() {
    let mut recognizer = GestureRecognizer::new();
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        recognizer.set_random_active(REVEAL_GESTURES, &mut rng);
        let active = recognizer.active().unwrap();
        assert!(REVEAL_GESTURES.contains(&active));
    }
}
