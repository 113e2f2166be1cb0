// Confirmation flow transitions and confusing-button invariants (native).

use holding_page::flow::{
    ButtonAssignment, ButtonLayout, ButtonSide, ConfirmationFlow, FlowSignal, FlowStep,
    confusing_buttons,
};
use holding_page::phrases::{self, buttons, prompts};
use holding_page::stats::{MemoryStore, StatsTracker};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn tracker() -> StatsTracker {
    StatsTracker::new(Box::new(MemoryStore::default()), 1_000.0).0
}

fn continuing_label(assignment: &ButtonAssignment) -> &'static str {
    if assignment.left_continues { assignment.left_label } else { assignment.right_label }
}

#[test]
fn exactly_one_button_continues() {
    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        for affirmative_continues in [true, false] {
            let assignment = confusing_buttons(affirmative_continues, &mut rng);
            assert_ne!(assignment.left_continues, assignment.right_continues);
            assert_ne!(assignment.left_primary, assignment.right_primary);
            assert_ne!(assignment.left_label, assignment.right_label);
        }
    }
}

#[test]
fn continuing_label_follows_the_negation_mode() {
    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);

        let plain = confusing_buttons(true, &mut rng);
        assert!(buttons::is_affirmative(continuing_label(&plain)));

        let inverted = confusing_buttons(false, &mut rng);
        assert!(buttons::is_negative(continuing_label(&inverted)));
    }
}

#[test]
fn primary_styling_is_independent_of_continuing() {
    // Over enough rolls both (continues, primary) combinations must appear on
    // the left button, otherwise styling would leak the answer.
    let mut rng = StdRng::seed_from_u64(11);
    let mut continues_and_primary = false;
    let mut continues_not_primary = false;
    for _ in 0..256 {
        let assignment = confusing_buttons(true, &mut rng);
        if assignment.left_continues {
            if assignment.left_primary {
                continues_and_primary = true;
            } else {
                continues_not_primary = true;
            }
        }
    }
    assert!(continues_and_primary && continues_not_primary);
}

#[test]
fn starting_makes_the_flow_active_at_ask() {
    let mut stats = tracker();
    let mut flow = ConfirmationFlow::new(false);
    assert!(!flow.is_active());

    flow.start("github", 1_000.0, &mut stats);
    assert!(flow.is_active());
    assert_eq!(flow.platform(), Some("github"));
    assert_eq!(flow.step(), Some(FlowStep::Ask));
    assert_eq!(flow.uses_triple_negative(), None);
    assert_eq!(stats.stats().social_navigation.overall.attempts, 1);
    assert_eq!(stats.stats().modal_prompts.overall.shown, 1);
}

#[test]
fn advancing_walks_every_step_and_navigates() {
    let mut stats = tracker();
    let mut rng = StdRng::seed_from_u64(3);
    let mut flow = ConfirmationFlow::new(false);

    flow.start("linkedin", 1_000.0, &mut stats);
    assert_eq!(
        flow.advance(&mut rng, 2_000.0, &mut stats),
        Some(FlowSignal::Advanced(FlowStep::Negate))
    );
    assert!(flow.uses_triple_negative().is_some());
    assert_eq!(flow.advance(&mut rng, 3_000.0, &mut stats), Some(FlowSignal::ShowCaptcha));
    assert_eq!(
        flow.advance(&mut rng, 4_000.0, &mut stats),
        Some(FlowSignal::Advanced(FlowStep::Celebrate))
    );
    assert_eq!(
        flow.advance(&mut rng, 6_000.0, &mut stats),
        Some(FlowSignal::Navigate { platform: "linkedin".to_owned() })
    );
    assert!(!flow.is_active());

    let record = stats.stats();
    assert_eq!(record.social_navigation.overall.successful, 1);
    assert_eq!(record.quirky_stats.confetti_celebrations, 1);
    let linkedin = &record.social_navigation.by_platform["linkedin"];
    assert_eq!(linkedin.successful, 1);
    assert_eq!(linkedin.fastest_completion, 5_000);
}

#[test]
fn negate_prompt_comes_from_the_chosen_pool() {
    for seed in 0..32 {
        let mut stats = tracker();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut flow = ConfirmationFlow::new(false);
        flow.start("facebook", 1_000.0, &mut stats);
        flow.advance(&mut rng, 2_000.0, &mut stats);

        let triple = flow.uses_triple_negative().unwrap();
        let pool = if triple { prompts::TRIPLE_NEGATIVES } else { prompts::DOUBLE_NEGATIVES };
        let filled: Vec<String> =
            pool.iter().map(|t| phrases::fill_platform(t, "facebook")).collect();

        // Re-rendering re-rolls the buttons but never the negation flavor.
        for _ in 0..4 {
            let render = flow.render(&mut rng).unwrap();
            assert!(filled.contains(&render.message));
            let ButtonLayout::Pair(assignment) = render.buttons else {
                panic!("negate step should render a button pair");
            };
            let label = continuing_label(&assignment);
            if triple {
                assert!(buttons::is_negative(label), "'{}' should be negative", label);
            } else {
                assert!(buttons::is_affirmative(label), "'{}' should be affirmative", label);
            }
        }
    }
}

#[test]
fn verify_and_celebrate_render_their_layouts() {
    let mut stats = tracker();
    let mut rng = StdRng::seed_from_u64(5);
    let mut flow = ConfirmationFlow::new(true);

    flow.start("instagram", 1_000.0, &mut stats);
    flow.advance(&mut rng, 2_000.0, &mut stats);
    flow.advance(&mut rng, 3_000.0, &mut stats);
    assert!(matches!(flow.render(&mut rng).unwrap().buttons, ButtonLayout::Captcha));

    flow.advance(&mut rng, 4_000.0, &mut stats);
    let render = flow.render(&mut rng).unwrap();
    assert!(matches!(render.buttons, ButtonLayout::Single(label) if label == buttons::CELEBRATE_LABEL));
    assert!(!render.message.is_empty());
}

#[test]
fn choosing_the_continuing_side_advances() {
    let mut stats = tracker();
    let mut rng = StdRng::seed_from_u64(9);
    let mut flow = ConfirmationFlow::new(false);
    flow.start("github", 1_000.0, &mut stats);

    let assignment = ButtonAssignment {
        left_label: "Yes",
        right_label: "No",
        left_continues: true,
        right_continues: false,
        left_primary: true,
        right_primary: false,
    };
    let signal = flow.choose(ButtonSide::Left, &assignment, &mut rng, 2_000.0, &mut stats);
    assert_eq!(signal, Some(FlowSignal::Advanced(FlowStep::Negate)));
}

#[test]
fn choosing_the_other_side_cancels() {
    let mut stats = tracker();
    let mut rng = StdRng::seed_from_u64(9);
    let mut flow = ConfirmationFlow::new(false);
    flow.start("github", 1_000.0, &mut stats);

    let assignment = ButtonAssignment {
        left_label: "Yes",
        right_label: "No",
        left_continues: true,
        right_continues: false,
        left_primary: true,
        right_primary: false,
    };
    let signal = flow.choose(ButtonSide::Right, &assignment, &mut rng, 2_000.0, &mut stats);
    assert_eq!(signal, Some(FlowSignal::Cancelled));
    assert!(!flow.is_active());

    let record = stats.stats();
    assert_eq!(record.social_navigation.overall.attempts, 1);
    assert_eq!(record.social_navigation.overall.cancelled, 1);
    assert_eq!(record.modal_prompts.overall.cancelled, 1);
    assert_eq!(record.quirky_stats.total_frustration_points, 5);
}

#[test]
fn cancelling_does_not_block_a_fresh_attempt() {
    let mut stats = tracker();
    let mut rng = StdRng::seed_from_u64(2);
    let mut flow = ConfirmationFlow::new(false);

    flow.start("github", 1_000.0, &mut stats);
    flow.cancel(&mut stats);
    assert!(!flow.is_active());

    flow.start("github", 2_000.0, &mut stats);
    assert!(flow.is_active());
    assert_eq!(
        flow.advance(&mut rng, 3_000.0, &mut stats),
        Some(FlowSignal::Advanced(FlowStep::Negate))
    );
    assert_eq!(stats.stats().social_navigation.by_platform["github"].attempts, 2);
}

#[test]
fn operations_on_an_inactive_flow_are_noops() {
    let mut stats = tracker();
    let mut rng = StdRng::seed_from_u64(1);
    let mut flow = ConfirmationFlow::new(false);

    assert!(flow.render(&mut rng).is_none());
    assert_eq!(flow.advance(&mut rng, 1_000.0, &mut stats), None);
    assert_eq!(flow.cancel(&mut stats), None);
}
