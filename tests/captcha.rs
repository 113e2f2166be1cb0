// CAPTCHA engine behavior (native, no browser APIs).

use holding_page::captcha::{
    Answer, AnswerOption, CaptchaEngine, Challenge, ChallengeKind, Difficulty, Expected,
    MAX_ATTEMPTS, pool,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

static CHOICE: Challenge = Challenge {
    id: "test-choice",
    kind: ChallengeKind::ChoiceSelection,
    prompt: "Pick the right one",
    instruction: "There is exactly one right one",
    options: &[
        AnswerOption { id: "a", label: "Wrong", is_correct: false },
        AnswerOption { id: "b", label: "Right", is_correct: true },
    ],
    expected: None,
    difficulty: Difficulty::Simple,
};

static FREE_TEXT: Challenge = Challenge {
    id: "test-text",
    kind: ChallengeKind::FreeText,
    prompt: "What color is the sky?",
    instruction: "One word",
    options: &[],
    expected: Some(Expected::Text("Blue")),
    difficulty: Difficulty::Elaborate,
};

static ARITHMETIC: Challenge = Challenge {
    id: "test-math",
    kind: ChallengeKind::Arithmetic,
    prompt: "2 + 2?",
    instruction: "A number",
    options: &[],
    expected: Some(Expected::Number(4.0)),
    difficulty: Difficulty::Simple,
};

#[test]
fn correct_option_succeeds_on_first_attempt() {
    let mut engine = CaptchaEngine::new();
    engine.activate(&CHOICE);
    let result = engine.validate_answer(&Answer::text("b"));
    assert!(result.success);
    assert_eq!(result.attempts, 1);
}

#[test]
fn wrong_option_fails_and_counts_the_attempt() {
    let mut engine = CaptchaEngine::new();
    engine.activate(&CHOICE);
    let result = engine.validate_answer(&Answer::text("a"));
    assert!(!result.success);
    assert_eq!(result.attempts, 1);
    assert!(engine.has_attempts_remaining());
}

#[test]
fn attempts_exhaust_after_the_cutoff() {
    let mut engine = CaptchaEngine::new();
    engine.activate(&CHOICE);
    for expected_attempts in 1..=MAX_ATTEMPTS {
        let result = engine.validate_answer(&Answer::text("a"));
        assert!(!result.success);
        assert_eq!(result.attempts, expected_attempts);
    }
    assert!(!engine.has_attempts_remaining());
}

#[test]
fn free_text_matches_loosely() {
    let mut engine = CaptchaEngine::new();
    engine.activate(&FREE_TEXT);
    assert!(engine.validate_answer(&Answer::text("  bLuE  ")).success);

    engine.activate(&FREE_TEXT);
    assert!(!engine.validate_answer(&Answer::text("green")).success);
}

#[test]
fn arithmetic_accepts_numeric_strings() {
    let mut engine = CaptchaEngine::new();
    engine.activate(&ARITHMETIC);
    assert!(engine.validate_answer(&Answer::text(" 4 ")).success);

    engine.activate(&ARITHMETIC);
    assert!(engine.validate_answer(&Answer::Number(4.0)).success);

    engine.activate(&ARITHMETIC);
    assert!(!engine.validate_answer(&Answer::text("4.5")).success);
    assert!(!engine.validate_answer(&Answer::text("four")).success);
}

#[test]
fn unsolvable_challenges_reject_every_listed_option() {
    let unsolvable: Vec<&Challenge> = pool::CHALLENGES
        .iter()
        .filter(|c| c.kind == ChallengeKind::Unsolvable)
        .collect();
    assert!(!unsolvable.is_empty(), "pool should contain unsolvable challenges");

    for challenge in unsolvable {
        let mut engine = CaptchaEngine::new();
        for option in challenge.options {
            engine.activate(challenge);
            let result = engine.validate_answer(&Answer::text(option.id));
            assert!(!result.success, "unsolvable '{}' accepted '{}'", challenge.id, option.id);
        }
    }
}

#[test]
fn validating_without_an_active_challenge_still_counts() {
    let mut engine = CaptchaEngine::new();
    let result = engine.validate_answer(&Answer::text("anything"));
    assert!(!result.success);
    assert_eq!(result.attempts, 1);
}

#[test]
fn generate_draws_from_the_pool_and_resets_attempts() {
    let mut engine = CaptchaEngine::new();
    engine.activate(&CHOICE);
    engine.validate_answer(&Answer::text("a"));
    engine.validate_answer(&Answer::text("a"));

    let mut rng = StdRng::seed_from_u64(7);
    let challenge = engine.generate_challenge(&mut rng);
    assert!(pool::CHALLENGES.iter().any(|c| c.id == challenge.id));
    assert_eq!(engine.attempts(), 0);
    assert!(engine.has_attempts_remaining());
}

#[test]
fn pool_challenge_ids_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for challenge in pool::CHALLENGES {
        assert!(seen.insert(challenge.id), "duplicate challenge id '{}'", challenge.id);
        assert!(!challenge.prompt.is_empty());
        if challenge.kind == ChallengeKind::ChoiceSelection {
            let correct = challenge.options.iter().filter(|o| o.is_correct).count();
            assert_eq!(correct, 1, "choice challenge '{}' needs one correct option", challenge.id);
        }
    }
}
