// Stats tracker persistence, session accounting and formatting (native).

use std::cell::RefCell;
use std::rc::Rc;

use holding_page::captcha::Difficulty;
use holding_page::stats::{
    CURRENT_VERSION, LoadError, MemoryStore, StatsStore, StatsTracker, StoreError, UserStats,
    format_duration, format_percent, load_stats,
};

/// Store that survives the tracker owning it, so a second tracker can reload
/// what the first one wrote.
#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<Option<String>>>);

impl StatsStore for SharedStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.0.borrow().clone())
    }

    fn save(&mut self, payload: &str) -> Result<(), StoreError> {
        *self.0.borrow_mut() = Some(payload.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        *self.0.borrow_mut() = None;
        Ok(())
    }
}

#[test]
fn fresh_tracker_reports_a_missing_record() {
    let (tracker, err) = StatsTracker::new(Box::new(MemoryStore::default()), 1_000.0);
    assert!(matches!(err, Some(LoadError::Missing)));
    assert_eq!(tracker.stats().version, CURRENT_VERSION);
    assert_eq!(tracker.stats().lifetime.total_sessions, 1);
    assert_eq!(tracker.stats().quirky_stats.patience_score, 100);
}

#[test]
fn lifetime_survives_a_reload_but_the_session_does_not() {
    let store = SharedStore::default();

    let (mut first, _) = StatsTracker::new(Box::new(store.clone()), 1_000.0);
    first.track_button_swap();
    first.tick(4_000.0);
    first.flush(5_000.0);

    let (second, err) = StatsTracker::new(Box::new(store.clone()), 10_000.0);
    assert!(err.is_none());
    let record = second.stats();
    assert_eq!(record.lifetime.total_sessions, 2);
    assert_eq!(record.lifetime.total_time_spent, 4_000);
    assert_eq!(record.quirky_stats.button_swaps_witnessed, 1);
    assert_eq!(record.session.total_duration, 0);
    assert_eq!(record.session.start_time, 10_000.0);
}

#[test]
fn version_mismatch_falls_back_to_defaults() {
    let mut seeded = UserStats::new(500.0);
    seeded.version = "0.9.0".to_owned();
    let mut store = SharedStore::default();
    store.save(&serde_json::to_string(&seeded).unwrap()).unwrap();

    assert!(matches!(
        load_stats(&store),
        Err(LoadError::VersionMismatch { found }) if found == "0.9.0"
    ));

    let (tracker, err) = StatsTracker::new(Box::new(store), 2_000.0);
    assert!(matches!(err, Some(LoadError::VersionMismatch { .. })));
    assert_eq!(tracker.stats().created, 2_000.0);
}

#[test]
fn garbage_payload_is_a_parse_error() {
    let mut store = SharedStore::default();
    store.save("{not json").unwrap();
    assert!(matches!(load_stats(&store), Err(LoadError::Parse(_))));
}

#[test]
fn ticking_accumulates_only_while_visible() {
    let (mut tracker, _) = StatsTracker::new(Box::new(MemoryStore::default()), 1_000.0);

    tracker.tick(2_000.0);
    assert_eq!(tracker.stats().session.total_duration, 1_000);

    tracker.set_visible(false, 3_000.0);
    assert_eq!(tracker.stats().session.total_duration, 2_000);

    // Hidden time is not counted.
    tracker.tick(60_000.0);
    assert_eq!(tracker.stats().session.total_duration, 2_000);

    tracker.set_visible(true, 60_000.0);
    tracker.tick(61_000.0);
    assert_eq!(tracker.stats().session.total_duration, 3_000);
    assert_eq!(tracker.stats().lifetime.total_time_spent, 3_000);
    assert_eq!(tracker.stats().quirky_stats.most_persistent_session, 3_000);
}

#[test]
fn captcha_rates_are_recomputed_from_counters() {
    let (mut tracker, _) = StatsTracker::new(Box::new(MemoryStore::default()), 1_000.0);

    tracker.track_captcha_shown("q1", Difficulty::Simple);
    tracker.track_captcha_shown("q2", Difficulty::Elaborate);
    tracker.track_captcha_attempt("q1", Difficulty::Simple, false, 1);
    tracker.track_captcha_attempt("q1", Difficulty::Simple, true, 2);

    let captcha = &tracker.stats().captcha;
    assert_eq!(captcha.overall.shown, 2);
    assert_eq!(captcha.overall.attempts, 2);
    assert_eq!(captcha.overall.successful, 1);
    assert_eq!(captcha.overall.failed, 1);
    assert!((captcha.overall.success_rate - 50.0).abs() < 1e-9);
    assert!((captcha.overall.average_attempts - 1.0).abs() < 1e-9);
    assert_eq!(captcha.by_difficulty.simple.attempts, 2);
    assert_eq!(captcha.by_difficulty.elaborate.shown, 1);
    // A failed attempt adds its attempt count as frustration.
    assert_eq!(tracker.stats().quirky_stats.total_frustration_points, 1);
}

#[test]
fn refreshing_a_captcha_costs_frustration() {
    let (mut tracker, _) = StatsTracker::new(Box::new(MemoryStore::default()), 1_000.0);
    tracker.track_captcha_refresh("q1");
    assert_eq!(tracker.stats().captcha.overall.refreshes, 1);
    assert_eq!(tracker.stats().quirky_stats.total_frustration_points, 2);
}

#[test]
fn patience_score_never_underflows() {
    let (mut tracker, _) = StatsTracker::new(Box::new(MemoryStore::default()), 1_000.0);
    for _ in 0..60 {
        tracker.track_dodging_period(false);
    }
    assert_eq!(tracker.stats().quirky_stats.patience_score, 0);

    tracker.track_dodging_period(true);
    assert_eq!(tracker.stats().quirky_stats.patience_score, 5);
    assert_eq!(tracker.stats().interactions.desktop.patience_shown, 1);
    assert_eq!(tracker.stats().interactions.desktop.dodging_periods, 61);
}

#[test]
fn unknown_platforms_only_count_in_the_overall_buckets() {
    let (mut tracker, _) = StatsTracker::new(Box::new(MemoryStore::default()), 1_000.0);
    tracker.track_social_navigation_attempt("myspace");
    let social = &tracker.stats().social_navigation;
    assert_eq!(social.overall.attempts, 1);
    assert!(!social.by_platform.contains_key("myspace"));
}

#[test]
fn reset_discards_everything() {
    let store = SharedStore::default();
    let (mut tracker, _) = StatsTracker::new(Box::new(store.clone()), 1_000.0);
    tracker.track_button_swap();
    tracker.track_easter_egg("console-sing");

    tracker.reset_stats(9_000.0);
    let record = tracker.stats();
    assert_eq!(record.quirky_stats.button_swaps_witnessed, 0);
    assert_eq!(record.quirky_stats.console_sings_used, 0);
    assert_eq!(record.created, 9_000.0);
    // The fresh record starts its own session.
    assert_eq!(record.lifetime.total_sessions, 1);
}

#[test]
fn formatted_snapshot_matches_the_record() {
    let (mut tracker, _) = StatsTracker::new(Box::new(MemoryStore::default()), 1_000.0);
    tracker.tick(63_000.0);
    tracker.track_social_navigation_attempt("github");
    tracker.track_social_navigation_success("github", 4, 8_000);

    let formatted = tracker.get_formatted_stats();
    assert_eq!(formatted.session.duration, "1m 2s");
    assert_eq!(formatted.social.overall.success_rate, "100.0%");
    assert_eq!(formatted.social.by_platform.len(), 4);
    let github = formatted
        .social
        .by_platform
        .iter()
        .find(|p| p.platform == "github")
        .unwrap();
    assert_eq!(github.attempts, 1);
    assert_eq!(github.fastest_time, "8s");
}

#[test]
fn durations_format_with_the_largest_relevant_unit() {
    assert_eq!(format_duration(0), "0s");
    assert_eq!(format_duration(999), "0s");
    assert_eq!(format_duration(3_000), "3s");
    assert_eq!(format_duration(123_000), "2m 3s");
    assert_eq!(format_duration(3_723_000), "1h 2m 3s");
}

#[test]
fn percentages_format_with_one_decimal() {
    assert_eq!(format_percent(0.0), "0.0%");
    assert_eq!(format_percent(33.333), "33.3%");
    assert_eq!(format_percent(100.0), "100.0%");
}

#[test]
fn persisted_json_uses_camel_case_keys() {
    let record = UserStats::new(1_000.0);
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"lastUpdated\""));
    assert!(json.contains("\"totalTimeSpent\""));
    assert!(json.contains("\"byPlatform\""));
    assert!(json.contains("\"quirkyStats\""));
    assert!(!json.contains("\"last_updated\""));
}
