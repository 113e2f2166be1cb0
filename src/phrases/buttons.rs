// Button text pairs used by the confusing-button generator.
// Each pair is (affirmative, negative); which side of the modal each one lands
// on and which one is styled as primary are decided independently at render
// time.

pub static BUTTON_TEXT_PAIRS: &[(&str, &str)] = &[
    ("Yes", "No"),
    ("Confirm", "Deny"),
    ("Proceed", "Cancel"),
    ("Accept", "Decline"),
    ("Continue", "Stop"),
    ("Absolutely", "Never"),
    ("Of course", "Obviously not"),
    ("Certainly", "Probably not"),
    ("Agree", "Disagree"),
    ("Approve", "Reject"),
    ("Okay", "Nope"),
    ("Sure", "No way"),
    ("Yep", "Nah"),
    ("Affirmative", "Negative"),
    ("Roger that", "I refuse"),
    ("Let's go", "Hold on"),
    ("Why not", "Because no"),
    ("Fine", "Not fine"),
    ("I suppose", "I doubt it"),
    ("Seems right", "Seems wrong"),
    ("Makes sense", "No sense"),
    ("Good idea", "Bad idea"),
    ("Let's do it", "Let's not"),
    ("I'm in", "I'm out"),
    ("Count me in", "Count me out"),
    ("Why not?", "Because!"),
];

/// The single unambiguous label shown on the celebration step.
pub static CELEBRATE_LABEL: &str = "Take me there!";

/// Returns true if `label` is one of the affirmative halves of the pairs.
pub fn is_affirmative(label: &str) -> bool {
    BUTTON_TEXT_PAIRS.iter().any(|(yes, _)| *yes == label)
}

/// Returns true if `label` is one of the negative halves of the pairs.
pub fn is_negative(label: &str) -> bool {
    BUTTON_TEXT_PAIRS.iter().any(|(_, no)| *no == label)
}
