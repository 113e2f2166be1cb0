// The fixed challenge pool. All of these are jokes; a few are unsolvable on
// purpose and the caller grants a bypass once attempts run out.
use super::{AnswerOption, Challenge, ChallengeKind, Difficulty, Expected};

const fn opt(id: &'static str, label: &'static str, is_correct: bool) -> AnswerOption {
    AnswerOption { id, label, is_correct }
}

pub static CHALLENGES: &[Challenge] = &[
    Challenge {
        id: "missing-button-3",
        kind: ChallengeKind::Unsolvable,
        prompt: "Please click the button with the number 3 on it",
        instruction: "Select the correct button to continue",
        options: &[
            opt("btn1", "1", false),
            opt("btn2", "2", false),
            opt("btn4", "4", false),
            opt("btn5", "5", false),
        ],
        expected: None,
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "quantum-captcha",
        kind: ChallengeKind::Unsolvable,
        prompt: "Click the button that exists only when you're not looking at it",
        instruction: "Good luck with Schrödinger's button",
        options: &[
            opt("btn1", "👁️ I see it", false),
            opt("btn2", "🙈 Not looking", false),
            opt("btn3", "🤔 Maybe?", false),
            opt("btn4", "❓ Uncertain", false),
        ],
        expected: None,
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "existential-dread",
        kind: ChallengeKind::FreeText,
        prompt: "What is the meaning of life, the universe, and everything?",
        instruction: "Enter the numerical answer (Douglas Adams fans will know)",
        options: &[],
        expected: Some(Expected::Text("42")),
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "backwards-day",
        kind: ChallengeKind::Arithmetic,
        prompt: "What is 01 - 01?",
        instruction: "Think backwards... the answer is definitely not 0",
        options: &[],
        expected: Some(Expected::Number(0.0)),
        difficulty: Difficulty::Simple,
    },
    Challenge {
        id: "emotional-support",
        kind: ChallengeKind::FreeText,
        prompt: "How are you feeling right now?",
        instruction: "Type your current emotional state (hint: frustrated works)",
        options: &[],
        expected: Some(Expected::Text("frustrated")),
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "time-travel",
        kind: ChallengeKind::FreeText,
        prompt: "What year is it in the past?",
        instruction: "Enter any year before 2024",
        options: &[],
        expected: Some(Expected::Text("1999")),
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "parallel-universe",
        kind: ChallengeKind::ChoiceSelection,
        prompt: "In which universe is this the correct answer?",
        instruction: "Choose from alternate realities",
        options: &[
            opt("universe-a", "Universe A (where cats rule)", false),
            opt("universe-b", "Universe B (where pizza is currency)", true),
            opt("universe-c", "Universe C (where gravity is optional)", false),
            opt("universe-d", "Universe D (where this makes sense)", false),
        ],
        expected: None,
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "impossible-math",
        kind: ChallengeKind::Arithmetic,
        prompt: "What is the square root of -1 in real numbers?",
        instruction: "Enter a real number (spoiler: it doesn't exist)",
        options: &[],
        expected: Some(Expected::Text("impossible")),
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "recursive-captcha",
        kind: ChallengeKind::FreeText,
        prompt: "To solve this CAPTCHA, you must first solve this CAPTCHA",
        instruction: "Type \"CAPTCHA\" to solve the CAPTCHA about solving CAPTCHAs",
        options: &[],
        expected: Some(Expected::Text("captcha")),
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "invisible-text",
        kind: ChallengeKind::Visual,
        prompt: "What does this invisible text say: ⠀⠀⠀⠀⠀⠀⠀",
        instruction: "Type what you see (hint: nothing)",
        options: &[],
        expected: Some(Expected::Text("nothing")),
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "paradox-selection",
        kind: ChallengeKind::ChoiceSelection,
        prompt: "This statement is false",
        instruction: "Select the truth value",
        options: &[
            opt("true", "True", false),
            opt("false", "False", false),
            opt("paradox", "Paradox", true),
            opt("error", "System Error", false),
        ],
        expected: None,
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "ai-consciousness",
        kind: ChallengeKind::FreeText,
        prompt: "Are you a robot?",
        instruction: "Answer honestly (robots always lie)",
        options: &[],
        expected: Some(Expected::Text("yes")),
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "multidimensional-counting",
        kind: ChallengeKind::Arithmetic,
        prompt: "Count these emojis across all dimensions: 🌀🔄🌀🔃🌀↩️🌀",
        instruction: "Include interdimensional duplicates",
        options: &[],
        expected: Some(Expected::Text("infinity")),
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "broken-keyboard",
        kind: ChallengeKind::FreeText,
        prompt: "Type \"hello\" but your \"l\" key is broken",
        instruction: "Use creative alternatives",
        options: &[],
        expected: Some(Expected::Text("he110")),
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "time-zone-nightmare",
        kind: ChallengeKind::FreeText,
        prompt: "What time is it on Mars during a solar eclipse viewed from Jupiter?",
        instruction: "Format: Martian Standard Time",
        options: &[],
        expected: Some(Expected::Text("undefined")),
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "emotional-buttons",
        kind: ChallengeKind::Unsolvable,
        prompt: "Click the button that represents your will to continue",
        instruction: "Choose based on your current mental state",
        options: &[
            opt("despair", "😩 Mild Despair", false),
            opt("confusion", "🤯 Pure Confusion", false),
            opt("determination", "😤 Stubborn Determination", false),
            opt("regret", "😭 Deep Regret", false),
        ],
        expected: None,
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "fourth-wall",
        kind: ChallengeKind::FreeText,
        prompt: "What is the name of the developer who created this ridiculous CAPTCHA?",
        instruction: "Check the page source for clues",
        options: &[],
        expected: Some(Expected::Text("michael")),
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "inception-captcha",
        kind: ChallengeKind::ChoiceSelection,
        prompt: "You are currently solving a CAPTCHA within a CAPTCHA. Which level are you on?",
        instruction: "Choose your reality layer",
        options: &[
            opt("level1", "Level 1 (Surface Web)", false),
            opt("level2", "Level 2 (This CAPTCHA)", true),
            opt("level3", "Level 3 (CAPTCHA Dreams)", false),
            opt("level4", "Level 4 (CAPTCHA Limbo)", false),
        ],
        expected: None,
        difficulty: Difficulty::Elaborate,
    },
    Challenge {
        id: "nihilistic-math",
        kind: ChallengeKind::Arithmetic,
        prompt: "If nothing matters, what is 5 × 0?",
        instruction: "Consider the philosophical implications",
        options: &[],
        expected: Some(Expected::Number(0.0)),
        difficulty: Difficulty::Simple,
    },
    Challenge {
        id: "language-confusion",
        kind: ChallengeKind::FreeText,
        prompt: "Translate \"captcha\" into binary and then to emoji",
        instruction: "Final answer should be emoji only",
        options: &[],
        expected: Some(Expected::Text("🤖")),
        difficulty: Difficulty::Elaborate,
    },
];
