//! The four-step confirmation gauntlet.
//!
//! `Ask -> Negate -> Verify -> Celebrate -> navigate`, with cancellation
//! reachable from every non-terminal step. The flow owns the per-attempt
//! state (platform, step, the triple-negative coin flip) and pushes a stats
//! call on every transition; rendering and the CAPTCHA widget itself belong
//! to the page shell.
//!
//! The signature feature is the confusing button assignment: which text pair
//! is used, which side the affirmative lands on and which side looks primary
//! are three independent coin flips, so none of them ever predicts which
//! button actually continues the flow.

use rand::Rng;

use crate::phrases::{self, buttons, prompts};
use crate::stats::StatsTracker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowStep {
    Ask,
    Negate,
    Verify,
    Celebrate,
}

impl FlowStep {
    /// Step index as persisted in the stats record (0..=3).
    pub fn index(self) -> u8 {
        match self {
            FlowStep::Ask => 0,
            FlowStep::Negate => 1,
            FlowStep::Verify => 2,
            FlowStep::Celebrate => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonSide {
    Left,
    Right,
}

/// Ephemeral per-render button configuration. Exactly one side continues.
#[derive(Clone, Copy, Debug)]
pub struct ButtonAssignment {
    pub left_label: &'static str,
    pub right_label: &'static str,
    pub left_continues: bool,
    pub right_continues: bool,
    pub left_primary: bool,
    pub right_primary: bool,
}

impl ButtonAssignment {
    pub fn continues(&self, side: ButtonSide) -> bool {
        match side {
            ButtonSide::Left => self.left_continues,
            ButtonSide::Right => self.right_continues,
        }
    }
}

/// Roll a fresh confusing button pair. `affirmative_continues` is false only
/// on the triple-negative Negate step, where saying "No" is how you proceed.
pub fn confusing_buttons(affirmative_continues: bool, rng: &mut impl Rng) -> ButtonAssignment {
    let (yes, no) = *phrases::pick(buttons::BUTTON_TEXT_PAIRS, rng);
    let affirmative_left = rng.gen_bool(0.5);
    let primary_left = rng.gen_bool(0.5);

    let (left_label, right_label) = if affirmative_left { (yes, no) } else { (no, yes) };
    let left_continues = if affirmative_left {
        affirmative_continues
    } else {
        !affirmative_continues
    };

    ButtonAssignment {
        left_label,
        right_label,
        left_continues,
        right_continues: !left_continues,
        left_primary: primary_left,
        right_primary: !primary_left,
    }
}

/// What the modal shows for the current step.
#[derive(Clone, Debug)]
pub enum ButtonLayout {
    /// Two confusing buttons.
    Pair(ButtonAssignment),
    /// One unambiguous button (celebrate step).
    Single(&'static str),
    /// The CAPTCHA widget; the shell renders it from the engine.
    Captcha,
}

#[derive(Clone, Debug)]
pub struct StepRender {
    pub message: String,
    pub buttons: ButtonLayout,
}

/// Result of a flow operation the shell must act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowSignal {
    Advanced(FlowStep),
    /// Entered the Verify step; generate and show a challenge.
    ShowCaptcha,
    Cancelled,
    /// Terminal: open the platform profile.
    Navigate { platform: String },
}

pub struct ConfirmationFlow {
    mobile: bool,
    platform: Option<String>,
    step: FlowStep,
    uses_triple_negative: Option<bool>,
    started_at_ms: f64,
}

impl ConfirmationFlow {
    pub fn new(mobile: bool) -> Self {
        Self {
            mobile,
            platform: None,
            step: FlowStep::Ask,
            uses_triple_negative: None,
            started_at_ms: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.platform.is_some()
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn step(&self) -> Option<FlowStep> {
        self.platform.as_ref().map(|_| self.step)
    }

    /// The per-attempt negation coin flip; `None` until Ask has been passed.
    pub fn uses_triple_negative(&self) -> Option<bool> {
        self.uses_triple_negative
    }

    /// Begin a fresh attempt at Ask. Counts a social-navigation attempt and
    /// the step-0 prompt immediately (cancelling later still leaves the
    /// attempt counted).
    pub fn start(&mut self, platform: &str, now_ms: f64, stats: &mut StatsTracker) {
        self.platform = Some(platform.to_owned());
        self.step = FlowStep::Ask;
        self.uses_triple_negative = None;
        self.started_at_ms = now_ms;
        stats.track_social_navigation_attempt(platform);
        stats.track_modal_prompt_shown(0, None);
    }

    /// Render the current step. Buttons are re-randomized on every call but
    /// the negation flavor of the Negate step stays whatever the Ask->Negate
    /// transition decided.
    pub fn render(&self, rng: &mut impl Rng) -> Option<StepRender> {
        let platform = self.platform.as_deref()?;
        let render = match self.step {
            FlowStep::Ask => {
                let pool = if self.mobile { prompts::ASK_MOBILE } else { prompts::ASK_DESKTOP };
                StepRender {
                    message: phrases::pick_filled(pool, platform, rng),
                    buttons: ButtonLayout::Pair(confusing_buttons(true, rng)),
                }
            }
            FlowStep::Negate => {
                let triple = self.uses_triple_negative.unwrap_or(false);
                let pool = if triple {
                    prompts::TRIPLE_NEGATIVES
                } else {
                    prompts::DOUBLE_NEGATIVES
                };
                StepRender {
                    message: phrases::pick_filled(pool, platform, rng),
                    // Triple-negative: the "No" button is the one that agrees.
                    buttons: ButtonLayout::Pair(confusing_buttons(!triple, rng)),
                }
            }
            FlowStep::Verify => StepRender {
                message: String::new(),
                buttons: ButtonLayout::Captcha,
            },
            FlowStep::Celebrate => StepRender {
                message: phrases::pick_filled(prompts::CELEBRATIONS, platform, rng),
                buttons: ButtonLayout::Single(buttons::CELEBRATE_LABEL),
            },
        };
        Some(render)
    }

    /// Handle a two-button press against the assignment that was rendered.
    pub fn choose(
        &mut self,
        side: ButtonSide,
        rendered: &ButtonAssignment,
        rng: &mut impl Rng,
        now_ms: f64,
        stats: &mut StatsTracker,
    ) -> Option<FlowSignal> {
        if !self.is_active() {
            return None;
        }
        if rendered.continues(side) {
            self.advance(rng, now_ms, stats)
        } else {
            self.cancel(stats)
        }
    }

    /// Move past the current step: continuing button pressed at Ask/Negate,
    /// CAPTCHA solved (or bypassed after exhausting attempts) at Verify, the
    /// single button pressed at Celebrate.
    pub fn advance(
        &mut self,
        rng: &mut impl Rng,
        now_ms: f64,
        stats: &mut StatsTracker,
    ) -> Option<FlowSignal> {
        self.platform.as_ref()?;
        match self.step {
            FlowStep::Ask => {
                // The one authoritative negation flip for this attempt.
                let triple = rng.gen_bool(0.5);
                self.uses_triple_negative = Some(triple);
                self.step = FlowStep::Negate;
                stats.track_modal_prompt_result(0, true, None, None);
                stats.track_modal_prompt_shown(1, Some(triple));
                Some(FlowSignal::Advanced(FlowStep::Negate))
            }
            FlowStep::Negate => {
                self.step = FlowStep::Verify;
                stats.track_modal_prompt_result(1, true, self.uses_triple_negative, Some(true));
                stats.track_modal_prompt_shown(2, None);
                Some(FlowSignal::ShowCaptcha)
            }
            FlowStep::Verify => {
                self.step = FlowStep::Celebrate;
                stats.track_modal_prompt_result(2, true, None, None);
                stats.track_modal_prompt_shown(3, None);
                Some(FlowSignal::Advanced(FlowStep::Celebrate))
            }
            FlowStep::Celebrate => {
                let platform = self.platform.take().unwrap_or_default();
                let elapsed = (now_ms - self.started_at_ms).max(0.0) as u64;
                stats.track_modal_prompt_result(3, true, None, None);
                stats.track_social_navigation_success(&platform, 4, elapsed);
                self.reset();
                Some(FlowSignal::Navigate { platform })
            }
        }
    }

    /// Cancel from any non-terminal step. The platform is not blacklisted;
    /// the user may immediately start over.
    pub fn cancel(&mut self, stats: &mut StatsTracker) -> Option<FlowSignal> {
        let platform = self.platform.take()?;
        let navigated_correctly =
            (self.step == FlowStep::Negate).then_some(false);
        stats.track_modal_prompt_result(
            self.step.index(),
            false,
            self.uses_triple_negative,
            navigated_correctly,
        );
        stats.track_social_navigation_cancel(&platform);
        self.reset();
        Some(FlowSignal::Cancelled)
    }

    fn reset(&mut self) {
        self.platform = None;
        self.step = FlowStep::Ask;
        self.uses_triple_negative = None;
        self.started_at_ms = 0.0;
    }
}
