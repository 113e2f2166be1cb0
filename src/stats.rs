//! Local interaction statistics.
//!
//! One versioned [`UserStats`] record is kept in memory and persisted as JSON
//! (camelCase, same shape as the page has always written) through a
//! [`StatsStore`] after every mutating call. Persistence is best effort: a
//! failed save is logged by the store and never propagated, a failed load
//! surfaces as a [`LoadError`] and the caller falls back to defaults.
//!
//! Derived fields (`successRate`, `average*`, `completionRate`) are pure
//! functions of their counters and are recomputed after each mutation; they are
//! never an independent source of truth.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::captcha::Difficulty;
use crate::gesture::GestureKind;

/// localStorage key of the persisted record.
pub const STORAGE_KEY: &str = "holding-page-stats";
/// Schema version; any other persisted version is treated as absent.
pub const CURRENT_VERSION: &str = "1.0.0";

/// Platforms that get their own stats bucket. Anything else is counted in the
/// overall/session buckets only.
pub const KNOWN_PLATFORMS: &[&str] = &["linkedin", "github", "facebook", "instagram"];

// --- Persisted record --------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub start_time: f64, // epoch ms
    pub total_duration: u64,
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifetimeInfo {
    pub total_time_spent: u64,
    pub total_sessions: u64,
    pub first_visit: f64, // epoch ms
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptchaCounters {
    pub shown: u64,
    pub attempts: u64,
    pub successful: u64,
    pub failed: u64,
    pub refreshes: u64,
    pub average_attempts: f64,
    pub success_rate: f64,
}

impl CaptchaCounters {
    fn recompute(&mut self) {
        self.average_attempts = if self.shown > 0 {
            self.attempts as f64 / self.shown as f64
        } else {
            0.0
        };
        self.success_rate = if self.attempts > 0 {
            self.successful as f64 / self.attempts as f64 * 100.0
        } else {
            0.0
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyBuckets {
    pub simple: CaptchaCounters,
    pub elaborate: CaptchaCounters,
}

impl DifficultyBuckets {
    fn bucket_mut(&mut self, difficulty: Difficulty) -> &mut CaptchaCounters {
        match difficulty {
            Difficulty::Simple => &mut self.simple,
            Difficulty::Elaborate => &mut self.elaborate,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptchaSection {
    pub overall: CaptchaCounters,
    pub session: CaptchaCounters,
    pub by_difficulty: DifficultyBuckets,
    pub favorite_challenge: Option<String>,
    pub worst_challenge: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalPromptCounters {
    pub shown: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub completion_rate: f64,
}

impl ModalPromptCounters {
    fn recompute(&mut self) {
        self.completion_rate = if self.shown > 0 {
            self.completed as f64 / self.shown as f64 * 100.0
        } else {
            0.0
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptTypeCounters {
    pub shown: u64,
    pub correctly_navigated: u64,
    pub success_rate: f64,
}

impl PromptTypeCounters {
    fn recompute(&mut self) {
        self.success_rate = if self.shown > 0 {
            self.correctly_navigated as f64 / self.shown as f64 * 100.0
        } else {
            0.0
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalPromptSection {
    pub overall: ModalPromptCounters,
    pub session: ModalPromptCounters,
    pub double_negatives: PromptTypeCounters,
    pub triple_negatives: PromptTypeCounters,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialNavCounters {
    pub attempts: u64,
    pub successful: u64,
    pub cancelled: u64,
    pub success_rate: f64,
    pub average_modal_steps: f64,
}

impl SocialNavCounters {
    fn recompute(&mut self) {
        self.success_rate = if self.attempts > 0 {
            self.successful as f64 / self.attempts as f64 * 100.0
        } else {
            0.0
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub attempts: u64,
    pub successful: u64,
    pub cancelled: u64,
    pub modals_cancelled: u64,
    pub captchas_failed: u64,
    pub total_time_to_complete: u64,
    pub average_time_to_complete: f64,
    pub fastest_completion: u64, // 0 = no completion yet
    pub success_rate: f64,
}

impl PlatformStats {
    fn recompute(&mut self) {
        self.success_rate = if self.attempts > 0 {
            self.successful as f64 / self.attempts as f64 * 100.0
        } else {
            0.0
        };
        self.average_time_to_complete = if self.successful > 0 {
            self.total_time_to_complete as f64 / self.successful as f64
        } else {
            0.0
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialNavigationSection {
    pub overall: SocialNavCounters,
    pub session: SocialNavCounters,
    pub by_platform: BTreeMap<String, PlatformStats>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopInteractionStats {
    pub button_dodges: u64,
    pub dodging_periods: u64,
    pub average_dodges_per_period: f64,
    pub patience_shown: u64,
}

impl DesktopInteractionStats {
    fn recompute(&mut self) {
        self.average_dodges_per_period = if self.dodging_periods > 0 {
            self.button_dodges as f64 / self.dodging_periods as f64
        } else {
            0.0
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileInteractionStats {
    pub gestures_completed: u64,
    pub swipe_up: u64,
    pub swipe_down: u64,
    pub long_press: u64,
    pub multi_tap: u64,
    pub easter_eggs_triggered: u64,
    pub subtitle_changes: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionSection {
    pub desktop: DesktopInteractionStats,
    pub mobile: MobileInteractionStats,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuirkyStats {
    pub easter_eggs_found: u64,
    pub console_sings_used: u64,
    pub button_swaps_witnessed: u64,
    pub confetti_celebrations: u64,
    pub gestures_completed: u64,
    pub total_frustration_points: u64,
    pub patience_score: u64,
    pub most_persistent_session: u64,
}

impl Default for QuirkyStats {
    fn default() -> Self {
        Self {
            easter_eggs_found: 0,
            console_sings_used: 0,
            button_swaps_witnessed: 0,
            confetti_celebrations: 0,
            gestures_completed: 0,
            total_frustration_points: 0,
            patience_score: 100, // everyone starts out patient
            most_persistent_session: 0,
        }
    }
}

/// The whole persisted aggregate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub version: String,
    pub created: f64,
    pub last_updated: f64,
    pub session: SessionInfo,
    pub lifetime: LifetimeInfo,
    pub captcha: CaptchaSection,
    pub modal_prompts: ModalPromptSection,
    pub social_navigation: SocialNavigationSection,
    pub interactions: InteractionSection,
    pub quirky_stats: QuirkyStats,
}

impl UserStats {
    /// Default-initialized record stamped with `now_ms`.
    pub fn new(now_ms: f64) -> Self {
        let mut by_platform = BTreeMap::new();
        for platform in KNOWN_PLATFORMS {
            by_platform.insert((*platform).to_owned(), PlatformStats::default());
        }
        Self {
            version: CURRENT_VERSION.to_owned(),
            created: now_ms,
            last_updated: now_ms,
            session: SessionInfo { start_time: now_ms, total_duration: 0, is_active: true },
            lifetime: LifetimeInfo {
                total_time_spent: 0,
                total_sessions: 0,
                first_visit: now_ms,
            },
            captcha: CaptchaSection::default(),
            modal_prompts: ModalPromptSection::default(),
            social_navigation: SocialNavigationSection {
                overall: SocialNavCounters::default(),
                session: SocialNavCounters::default(),
                by_platform,
            },
            interactions: InteractionSection::default(),
            quirky_stats: QuirkyStats::default(),
        }
    }

    /// Zero the session-scoped subtrees; lifetime trees are untouched.
    pub fn reset_session(&mut self, now_ms: f64) {
        self.session = SessionInfo { start_time: now_ms, total_duration: 0, is_active: true };
        self.captcha.session = CaptchaCounters::default();
        self.modal_prompts.session = ModalPromptCounters::default();
        self.social_navigation.session = SocialNavCounters::default();
    }
}

// --- Storage -----------------------------------------------------------------

/// Opaque storage failure. Store implementations log the underlying cause.
#[derive(Debug, Error)]
#[error("stats store error: {0}")]
pub struct StoreError(pub String);

/// Where the serialized record lives. The page uses localStorage; tests and
/// storage-less browsers use [`MemoryStore`].
pub trait StatsStore {
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn save(&mut self, payload: &str) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// In-memory fallback store; never fails.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl StatsStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, payload: &str) -> Result<(), StoreError> {
        self.slot = Some(payload.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.slot = None;
        Ok(())
    }
}

/// Why a persisted record could not be used.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no persisted stats record")]
    Missing,
    #[error("persisted stats version {found} does not match {CURRENT_VERSION}")]
    VersionMismatch { found: String },
    #[error("failed to parse persisted stats: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Load and validate the persisted record. The caller decides what to do with
/// an error; defaulting is the only sensible choice on this page.
pub fn load_stats(store: &dyn StatsStore) -> Result<UserStats, LoadError> {
    let raw = store.load()?.ok_or(LoadError::Missing)?;
    let stats: UserStats = serde_json::from_str(&raw)?;
    if stats.version != CURRENT_VERSION {
        return Err(LoadError::VersionMismatch { found: stats.version });
    }
    Ok(stats)
}

// --- Tracker -----------------------------------------------------------------

/// Owns the in-memory record, ticks session time and persists after every
/// mutating call.
pub struct StatsTracker {
    stats: UserStats,
    store: Box<dyn StatsStore>,
    last_tick_ms: f64,
}

impl StatsTracker {
    /// Load (or default) the record, reset session subtrees and start a new
    /// session. Any load error is returned alongside so the caller can log it.
    pub fn new(store: Box<dyn StatsStore>, now_ms: f64) -> (Self, Option<LoadError>) {
        let (stats, err) = match load_stats(store.as_ref()) {
            Ok(mut stats) => {
                stats.reset_session(now_ms);
                (stats, None)
            }
            Err(err) => (UserStats::new(now_ms), Some(err)),
        };
        let mut tracker = Self { stats, store, last_tick_ms: now_ms };
        tracker.start_session(now_ms);
        (tracker, err)
    }

    fn start_session(&mut self, now_ms: f64) {
        self.stats.lifetime.total_sessions += 1;
        self.stats.session.start_time = now_ms;
        self.stats.session.is_active = true;
        self.save();
    }

    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    /// Accumulate visible wall-clock time. Called on a 1-second timer; does
    /// not persist on its own (events and `flush` do).
    pub fn tick(&mut self, now_ms: f64) {
        if !self.stats.session.is_active {
            return;
        }
        let elapsed = (now_ms - self.last_tick_ms).max(0.0) as u64;
        self.stats.session.total_duration += elapsed;
        self.stats.lifetime.total_time_spent += elapsed;
        if self.stats.session.total_duration > self.stats.quirky_stats.most_persistent_session {
            self.stats.quirky_stats.most_persistent_session = self.stats.session.total_duration;
        }
        self.last_tick_ms = now_ms;
        self.stats.last_updated = now_ms;
    }

    /// Pause/resume time accumulation on visibility changes so backgrounded
    /// time is not counted.
    pub fn set_visible(&mut self, visible: bool, now_ms: f64) {
        if visible {
            self.stats.session.is_active = true;
            self.last_tick_ms = now_ms;
        } else {
            self.tick(now_ms);
            self.stats.session.is_active = false;
        }
    }

    /// Final tick + save; used on page unload.
    pub fn flush(&mut self, now_ms: f64) {
        self.tick(now_ms);
        self.save();
    }

    // --- CAPTCHA -------------------------------------------------------------

    pub fn track_captcha_shown(&mut self, _challenge_id: &str, difficulty: Difficulty) {
        self.stats.captcha.overall.shown += 1;
        self.stats.captcha.session.shown += 1;
        self.stats.captcha.by_difficulty.bucket_mut(difficulty).shown += 1;
        self.save();
    }

    pub fn track_captcha_attempt(
        &mut self,
        _challenge_id: &str,
        difficulty: Difficulty,
        success: bool,
        attempts: u32,
    ) {
        self.stats.captcha.overall.attempts += 1;
        self.stats.captcha.session.attempts += 1;
        self.stats.captcha.by_difficulty.bucket_mut(difficulty).attempts += 1;

        if success {
            self.stats.captcha.overall.successful += 1;
            self.stats.captcha.session.successful += 1;
            self.stats.captcha.by_difficulty.bucket_mut(difficulty).successful += 1;
        } else {
            self.stats.captcha.overall.failed += 1;
            self.stats.captcha.session.failed += 1;
            self.stats.captcha.by_difficulty.bucket_mut(difficulty).failed += 1;
            self.stats.quirky_stats.total_frustration_points += u64::from(attempts);
        }

        self.recompute_captcha();
        self.save();
    }

    pub fn track_captcha_refresh(&mut self, _challenge_id: &str) {
        self.stats.captcha.overall.refreshes += 1;
        self.stats.captcha.session.refreshes += 1;
        self.stats.quirky_stats.total_frustration_points += 2;
        self.save();
    }

    // --- Modal prompts -------------------------------------------------------

    pub fn track_modal_prompt_shown(&mut self, step: u8, is_triple_negative: Option<bool>) {
        self.stats.modal_prompts.overall.shown += 1;
        self.stats.modal_prompts.session.shown += 1;

        if step == 1 {
            if is_triple_negative == Some(true) {
                self.stats.modal_prompts.triple_negatives.shown += 1;
            } else {
                self.stats.modal_prompts.double_negatives.shown += 1;
            }
        }

        self.save();
    }

    pub fn track_modal_prompt_result(
        &mut self,
        step: u8,
        completed: bool,
        is_triple_negative: Option<bool>,
        navigated_correctly: Option<bool>,
    ) {
        if completed {
            self.stats.modal_prompts.overall.completed += 1;
            self.stats.modal_prompts.session.completed += 1;
        } else {
            self.stats.modal_prompts.overall.cancelled += 1;
            self.stats.modal_prompts.session.cancelled += 1;
            self.stats.quirky_stats.total_frustration_points += 5;
        }

        if step == 1 && navigated_correctly == Some(true) {
            if is_triple_negative == Some(true) {
                self.stats.modal_prompts.triple_negatives.correctly_navigated += 1;
            } else {
                self.stats.modal_prompts.double_negatives.correctly_navigated += 1;
            }
        }

        self.recompute_modal_prompts();
        self.save();
    }

    // --- Social navigation ---------------------------------------------------

    pub fn track_social_navigation_attempt(&mut self, platform: &str) {
        self.stats.social_navigation.overall.attempts += 1;
        self.stats.social_navigation.session.attempts += 1;
        if let Some(bucket) = self.stats.social_navigation.by_platform.get_mut(platform) {
            bucket.attempts += 1;
        }
        self.save();
    }

    pub fn track_social_navigation_success(
        &mut self,
        platform: &str,
        _modal_steps: u32,
        time_to_complete_ms: u64,
    ) {
        self.stats.social_navigation.overall.successful += 1;
        self.stats.social_navigation.session.successful += 1;
        self.stats.quirky_stats.confetti_celebrations += 1;

        if let Some(bucket) = self.stats.social_navigation.by_platform.get_mut(platform) {
            bucket.successful += 1;
            bucket.total_time_to_complete += time_to_complete_ms;
            if bucket.fastest_completion == 0 || time_to_complete_ms < bucket.fastest_completion {
                bucket.fastest_completion = time_to_complete_ms;
            }
        }

        self.recompute_social_navigation();
        self.save();
    }

    pub fn track_social_navigation_cancel(&mut self, platform: &str) {
        self.stats.social_navigation.overall.cancelled += 1;
        self.stats.social_navigation.session.cancelled += 1;

        if let Some(bucket) = self.stats.social_navigation.by_platform.get_mut(platform) {
            bucket.cancelled += 1;
            bucket.modals_cancelled += 1;
        }

        self.recompute_social_navigation();
        self.save();
    }

    // --- Desktop / mobile interactions ---------------------------------------

    pub fn track_button_dodge(&mut self, _platform: &str) {
        self.stats.interactions.desktop.button_dodges += 1;
        self.save();
    }

    pub fn track_dodging_period(&mut self, patience_shown: bool) {
        self.stats.interactions.desktop.dodging_periods += 1;

        if patience_shown {
            self.stats.interactions.desktop.patience_shown += 1;
            self.stats.quirky_stats.patience_score += 5;
        } else {
            self.stats.quirky_stats.patience_score =
                self.stats.quirky_stats.patience_score.saturating_sub(2);
        }

        self.stats.interactions.desktop.recompute();
        self.save();
    }

    pub fn track_mobile_gesture(&mut self, gesture: GestureKind) {
        self.stats.interactions.mobile.gestures_completed += 1;
        self.stats.quirky_stats.gestures_completed += 1;

        match gesture {
            GestureKind::SwipeUp => self.stats.interactions.mobile.swipe_up += 1,
            GestureKind::SwipeDown => {
                self.stats.interactions.mobile.swipe_down += 1;
                self.stats.interactions.mobile.subtitle_changes += 1;
            }
            GestureKind::LongPress => {
                self.stats.interactions.mobile.long_press += 1;
                self.stats.interactions.mobile.easter_eggs_triggered += 1;
                self.stats.quirky_stats.easter_eggs_found += 1;
            }
            GestureKind::MultiTap => self.stats.interactions.mobile.multi_tap += 1,
            GestureKind::SwipeLeft | GestureKind::SwipeRight => {}
        }

        self.save();
    }

    pub fn track_easter_egg(&mut self, kind: &str) {
        self.stats.quirky_stats.easter_eggs_found += 1;
        if kind == "console-sing" {
            self.stats.quirky_stats.console_sings_used += 1;
        }
        self.save();
    }

    pub fn track_button_swap(&mut self) {
        self.stats.quirky_stats.button_swaps_witnessed += 1;
        self.save();
    }

    // --- Derived recomputes --------------------------------------------------

    fn recompute_captcha(&mut self) {
        self.stats.captcha.overall.recompute();
        self.stats.captcha.session.recompute();
        self.stats.captcha.by_difficulty.simple.recompute();
        self.stats.captcha.by_difficulty.elaborate.recompute();
    }

    fn recompute_modal_prompts(&mut self) {
        self.stats.modal_prompts.overall.recompute();
        self.stats.modal_prompts.session.recompute();
        self.stats.modal_prompts.double_negatives.recompute();
        self.stats.modal_prompts.triple_negatives.recompute();
    }

    fn recompute_social_navigation(&mut self) {
        self.stats.social_navigation.overall.recompute();
        self.stats.social_navigation.session.recompute();
        for bucket in self.stats.social_navigation.by_platform.values_mut() {
            bucket.recompute();
        }
    }

    // --- Persistence ---------------------------------------------------------

    fn save(&mut self) {
        if let Ok(payload) = serde_json::to_string(&self.stats) {
            // Save failures are logged by the store; stats are best effort.
            let _ = self.store.save(&payload);
        }
    }

    /// Discard the persisted record and start over with defaults.
    pub fn reset_stats(&mut self, now_ms: f64) {
        let _ = self.store.clear();
        self.stats = UserStats::new(now_ms);
        self.last_tick_ms = now_ms;
        self.start_session(now_ms);
    }

    /// Read-only formatted snapshot of the current record.
    pub fn get_formatted_stats(&self) -> FormattedStats {
        FormattedStats::from_stats(&self.stats)
    }
}

// --- Formatted snapshot ------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub duration: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifetimeView {
    pub total_time: String,
    pub sessions: u64,
    pub first_visit_ms: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptchaOverallView {
    pub shown: u64,
    pub success_rate: String,
    pub average_attempts: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptchaSessionView {
    pub shown: u64,
    pub success_rate: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptchaView {
    pub overall: CaptchaOverallView,
    pub session: CaptchaSessionView,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialOverallView {
    pub attempts: u64,
    pub successful: u64,
    pub success_rate: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformView {
    pub platform: String,
    pub attempts: u64,
    pub successful: u64,
    pub success_rate: String,
    pub average_time: String,
    pub fastest_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialView {
    pub overall: SocialOverallView,
    pub by_platform: Vec<PlatformView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopView {
    pub total_dodges: u64,
    pub dodging_periods: u64,
    pub average_dodges: String,
    pub patience_shown: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileView {
    pub total_gestures: u64,
    pub swipe_up: u64,
    pub swipe_down: u64,
    pub long_press: u64,
    pub multi_tap: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionsView {
    pub desktop: DesktopView,
    pub mobile: MobileView,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuirkyView {
    pub easter_eggs: u64,
    pub confetti: u64,
    pub frustration: u64,
    pub patience: u64,
    pub longest_session: String,
}

/// Human-formatted snapshot, one struct per display tab.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedStats {
    pub session: SessionView,
    pub lifetime: LifetimeView,
    pub captcha: CaptchaView,
    pub social: SocialView,
    pub interactions: InteractionsView,
    pub quirky: QuirkyView,
}

impl FormattedStats {
    pub fn from_stats(stats: &UserStats) -> Self {
        Self {
            session: SessionView {
                duration: format_duration(stats.session.total_duration),
                active: stats.session.is_active,
            },
            lifetime: LifetimeView {
                total_time: format_duration(stats.lifetime.total_time_spent),
                sessions: stats.lifetime.total_sessions,
                first_visit_ms: stats.lifetime.first_visit,
            },
            captcha: CaptchaView {
                overall: CaptchaOverallView {
                    shown: stats.captcha.overall.shown,
                    success_rate: format_percent(stats.captcha.overall.success_rate),
                    average_attempts: format!("{:.1}", stats.captcha.overall.average_attempts),
                },
                session: CaptchaSessionView {
                    shown: stats.captcha.session.shown,
                    success_rate: format_percent(stats.captcha.session.success_rate),
                },
            },
            social: SocialView {
                overall: SocialOverallView {
                    attempts: stats.social_navigation.overall.attempts,
                    successful: stats.social_navigation.overall.successful,
                    success_rate: format_percent(stats.social_navigation.overall.success_rate),
                },
                by_platform: stats
                    .social_navigation
                    .by_platform
                    .iter()
                    .map(|(platform, data)| PlatformView {
                        platform: platform.clone(),
                        attempts: data.attempts,
                        successful: data.successful,
                        success_rate: format_percent(data.success_rate),
                        average_time: format_duration(data.average_time_to_complete as u64),
                        fastest_time: format_duration(data.fastest_completion),
                    })
                    .collect(),
            },
            interactions: InteractionsView {
                desktop: DesktopView {
                    total_dodges: stats.interactions.desktop.button_dodges,
                    dodging_periods: stats.interactions.desktop.dodging_periods,
                    average_dodges: format!(
                        "{:.1}",
                        stats.interactions.desktop.average_dodges_per_period
                    ),
                    patience_shown: stats.interactions.desktop.patience_shown,
                },
                mobile: MobileView {
                    total_gestures: stats.interactions.mobile.gestures_completed,
                    swipe_up: stats.interactions.mobile.swipe_up,
                    swipe_down: stats.interactions.mobile.swipe_down,
                    long_press: stats.interactions.mobile.long_press,
                    multi_tap: stats.interactions.mobile.multi_tap,
                },
            },
            quirky: QuirkyView {
                easter_eggs: stats.quirky_stats.easter_eggs_found,
                confetti: stats.quirky_stats.confetti_celebrations,
                frustration: stats.quirky_stats.total_frustration_points,
                patience: stats.quirky_stats.patience_score,
                longest_session: format_duration(stats.quirky_stats.most_persistent_session),
            },
        }
    }
}

/// `"1h 2m 3s"`, dropping leading zero units.
pub fn format_duration(milliseconds: u64) -> String {
    let seconds = milliseconds / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{seconds}s")
    }
}

/// Percentage with one decimal, e.g. `"33.3%"`.
pub fn format_percent(rate: f64) -> String {
    format!("{rate:.1}%")
}
