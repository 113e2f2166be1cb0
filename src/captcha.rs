//! Joke CAPTCHA engine.
//!
//! Holds at most one active [`Challenge`] picked uniformly from the static
//! pool, validates answers with kind-specific rules and enforces the
//! three-attempt cutoff. The engine never blocks: once attempts run out the
//! caller is expected to offer the user a bypass instead of a dead end.

use rand::Rng;

pub mod pool;

/// Attempt cutoff after which `has_attempts_remaining` reports false.
pub const MAX_ATTEMPTS: u32 = 3;

/// How a challenge validates its answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeKind {
    /// One of the listed options is flagged correct; the answer is an option id.
    ChoiceSelection,
    /// A (nonsense) arithmetic question with a loose-matched expected answer.
    Arithmetic,
    /// "What do you see" style question, loose-matched.
    Visual,
    /// Free text, loose-matched.
    FreeText,
    /// No input is ever correct. The options exist purely to taunt.
    Unsolvable,
}

/// Stats bucketing for challenges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Simple,
    Elaborate,
}

/// One selectable option of a choice challenge.
#[derive(Clone, Copy, Debug)]
pub struct AnswerOption {
    pub id: &'static str,
    pub label: &'static str,
    pub is_correct: bool,
}

/// The answer a challenge expects, when it expects one at all.
#[derive(Clone, Copy, Debug)]
pub enum Expected {
    Text(&'static str),
    Number(f64),
}

/// One immutable CAPTCHA puzzle instance.
#[derive(Clone, Copy, Debug)]
pub struct Challenge {
    pub id: &'static str,
    pub kind: ChallengeKind,
    pub prompt: &'static str,
    pub instruction: &'static str,
    pub options: &'static [AnswerOption],
    pub expected: Option<Expected>,
    pub difficulty: Difficulty,
}

/// What the user typed or picked.
#[derive(Clone, Debug)]
pub enum Answer {
    Text(String),
    Number(f64),
}

impl Answer {
    pub fn text(s: impl Into<String>) -> Self {
        Answer::Text(s.into())
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_owned())
    }
}

/// Outcome of a validation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptchaResult {
    pub success: bool,
    pub attempts: u32,
}

/// Loose equality in the spirit of a dynamically typed comparison: numbers and
/// numeric strings compare equal, text compares trimmed and case-folded.
fn loose_eq(answer: &Answer, expected: &Expected) -> bool {
    match (answer, expected) {
        (Answer::Number(a), Expected::Number(e)) => (a - e).abs() < f64::EPSILON,
        (Answer::Text(t), Expected::Number(e)) => {
            t.trim().parse::<f64>().is_ok_and(|n| (n - e).abs() < f64::EPSILON)
        }
        (Answer::Number(a), Expected::Text(e)) => {
            e.trim().parse::<f64>().is_ok_and(|n| (n - a).abs() < f64::EPSILON)
        }
        (Answer::Text(t), Expected::Text(e)) => {
            t.trim().to_lowercase() == e.trim().to_lowercase()
        }
    }
}

/// Owns the single active challenge and its attempt counter.
pub struct CaptchaEngine {
    active: Option<&'static Challenge>,
    attempts: u32,
}

impl CaptchaEngine {
    pub fn new() -> Self {
        Self { active: None, attempts: 0 }
    }

    /// Pick a fresh challenge uniformly from the pool. Replaces any active
    /// challenge and zeroes the attempt counter.
    pub fn generate_challenge(&mut self, rng: &mut impl Rng) -> &'static Challenge {
        let challenge = crate::phrases::pick(pool::CHALLENGES, rng);
        self.activate(challenge);
        challenge
    }

    /// Install a specific challenge as active (attempt counter reset).
    pub fn activate(&mut self, challenge: &'static Challenge) {
        self.active = Some(challenge);
        self.attempts = 0;
    }

    pub fn active(&self) -> Option<&'static Challenge> {
        self.active
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Validate an answer against the active challenge. The attempt counter is
    /// bumped first, so even a call with no active challenge counts as one.
    pub fn validate_answer(&mut self, answer: &Answer) -> CaptchaResult {
        self.attempts += 1;

        let Some(challenge) = self.active else {
            return CaptchaResult { success: false, attempts: self.attempts };
        };

        let success = match challenge.kind {
            ChallengeKind::Unsolvable => false,
            ChallengeKind::ChoiceSelection => match answer {
                Answer::Text(id) => challenge
                    .options
                    .iter()
                    .find(|opt| opt.id == id.as_str())
                    .is_some_and(|opt| opt.is_correct),
                Answer::Number(_) => false,
            },
            _ => challenge
                .expected
                .as_ref()
                .is_some_and(|expected| loose_eq(answer, expected)),
        };

        CaptchaResult { success, attempts: self.attempts }
    }

    pub fn has_attempts_remaining(&self) -> bool {
        self.attempts < MAX_ATTEMPTS
    }
}

impl Default for CaptchaEngine {
    fn default() -> Self {
        Self::new()
    }
}
