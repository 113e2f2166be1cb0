//! Browser shell: rendering, event wiring, timers.
//!
//! Everything DOM-flavored lives here. One [`PageState`] is constructed by
//! `start_page()` and parked in a thread-local cell; event closures re-enter
//! it through [`with_state`]. The core managers inside (flow, captcha engine,
//! stats tracker, gesture recognizer) are plain structs that never touch the
//! DOM themselves.

use std::cell::RefCell;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, window};

use crate::analytics;
use crate::captcha::{Answer, CaptchaEngine, Challenge, ChallengeKind};
use crate::easter_egg;
use crate::flow::{
    ButtonAssignment, ButtonLayout, ButtonSide, ConfirmationFlow, FlowSignal, FlowStep,
};
use crate::gesture::{GestureKind, GestureRecognizer, REVEAL_GESTURES};
use crate::phrases::{self, prompts};
use crate::stats::{
    KNOWN_PLATFORMS, LoadError, MemoryStore, STORAGE_KEY, StatsStore, StatsTracker, StoreError,
};

/// How long buttons keep dodging before they give up and hold still.
const DODGE_TIMEOUT_MS: i32 = 10_000;
/// Margin kept between a dodged button and the viewport edge.
const DODGE_MARGIN_PX: f64 = 40.0;
/// Chasing at least this many dodges in one period counts as patience.
const PATIENCE_DODGE_THRESHOLD: u32 = 3;
/// CAPTCHA error message expiry.
const CAPTCHA_ERROR_MS: i32 = 2_500;
/// Delay before the social buttons quietly reshuffle after a modal closes.
const SHUFFLE_DELAY_MS: i32 = 300;
/// Viewport width below which the page behaves as mobile.
const MOBILE_MAX_WIDTH: f64 = 768.0;

static PLATFORM_URLS: &[(&str, &str)] = &[
    ("linkedin", "https://www.linkedin.com/in/michael-carey-8b117944"),
    ("github", "https://github.com/mickcarey"),
    ("facebook", "https://www.facebook.com/careym86"),
    ("instagram", "https://www.instagram.com/mick_carey/"),
];

// --- Page state --------------------------------------------------------------

/// Handle of the pending CAPTCHA error-expiry timeout. Re-rendering the widget
/// or posting a fresh error must cancel the stale timer, otherwise it wipes
/// the newer message early.
#[derive(Debug, Default, PartialEq, Eq)]
struct PendingTimer(Option<i32>);

impl PendingTimer {
    /// Install a new handle, handing back the stale one to clear.
    fn replace(&mut self, handle: i32) -> Option<i32> {
        self.0.replace(handle)
    }

    fn take(&mut self) -> Option<i32> {
        self.0.take()
    }
}

struct PageState {
    document: Document,
    mobile: bool,
    rng: SmallRng,
    stats: StatsTracker,
    captcha: CaptchaEngine,
    flow: ConfirmationFlow,
    gestures: GestureRecognizer,
    dodging: bool,
    dodging_complete: bool,
    dodges_this_period: u32,
    rendered_buttons: Option<ButtonAssignment>,
    error_timer: PendingTimer,
}

thread_local! {
    static PAGE_STATE: RefCell<Option<PageState>> = const { RefCell::new(None) };
}

fn with_state<R>(f: impl FnOnce(&mut PageState) -> R) -> Option<R> {
    PAGE_STATE.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn warn_on_err(result: Result<(), JsValue>) {
    if let Err(err) = result {
        web_sys::console::warn_1(&err);
    }
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

// --- Entry -------------------------------------------------------------------

pub fn start_page() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let now = now_ms();

    let store: Box<dyn StatsStore> = match LocalStorageStore::open() {
        Some(store) => Box::new(store),
        None => Box::new(MemoryStore::default()),
    };
    let (stats, load_err) = StatsTracker::new(store, now);
    match load_err {
        None | Some(LoadError::Missing) => {}
        Some(err) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "stats: falling back to defaults: {err}"
            )));
        }
    }

    let mobile = detect_mobile(&win);
    let mut rng = SmallRng::from_entropy();
    let mut gestures = GestureRecognizer::new();
    if mobile {
        gestures.set_random_active(REVEAL_GESTURES, &mut rng);
    }

    let state = PageState {
        document: doc.clone(),
        mobile,
        rng,
        stats,
        captcha: CaptchaEngine::new(),
        flow: ConfirmationFlow::new(mobile),
        gestures,
        dodging: false,
        dodging_complete: false,
        dodges_this_period: 0,
        rendered_buttons: None,
        error_timer: PendingTimer::default(),
    };
    PAGE_STATE.with(|cell| cell.replace(Some(state)));

    with_state(render_shell).transpose()?;

    setup_session_tick(&win)?;
    setup_visibility_handler(&doc)?;
    setup_unload_handler(&win)?;
    setup_console_easter_egg(&win)?;
    if mobile {
        setup_touch_listeners(&doc)?;
    }
    Ok(())
}

fn detect_mobile(win: &web_sys::Window) -> bool {
    let narrow = win
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .is_some_and(|w| w < MOBILE_MAX_WIDTH);
    let agent = win.navigator().user_agent().unwrap_or_default();
    let mobile_agent = ["Android", "iPhone", "iPad", "iPod", "BlackBerry", "IEMobile", "Opera Mini"]
        .iter()
        .any(|token| agent.contains(token));
    narrow || mobile_agent
}

// --- Shell rendering ---------------------------------------------------------

fn capitalize(platform: &str) -> String {
    let mut chars = platform.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn social_buttons_html(order: &[&str]) -> String {
    order
        .iter()
        .map(|platform| {
            format!(
                r#"<button id="{platform}-btn" class="social-btn" data-platform="{platform}">{}</button>"#,
                capitalize(platform)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_shell(state: &mut PageState) -> Result<(), JsValue> {
    let greeting = *phrases::pick(prompts::GREETINGS, &mut state.rng);
    let cooking = *phrases::pick(prompts::COOKING_ACTIONS, &mut state.rng);
    let hint = *phrases::pick(prompts::HINT_MESSAGES, &mut state.rng);
    let buttons = social_buttons_html(KNOWN_PLATFORMS);

    let app = state
        .document
        .get_element_by_id("app")
        .ok_or_else(|| JsValue::from_str("no #app element"))?;
    app.set_inner_html(&format!(
        r#"<div class="holding-container">
  <h1 class="title">Coming Soon</h1>
  <p id="greeting" class="greeting">{greeting}</p>
  <p id="subtitle" class="subtitle">Currently {cooking}</p>
  <p id="hint" class="hint">{hint}</p>
  <div class="social-links">{buttons}</div>
  <div id="modal-overlay" class="modal-overlay hidden"></div>
  <div id="modal" class="modal hidden"></div>
</div>"#
    ));

    wire_social_buttons(state)
}

fn wire_social_buttons(state: &PageState) -> Result<(), JsValue> {
    for platform in KNOWN_PLATFORMS {
        let Some(button) = state.document.get_element_by_id(&format!("{platform}-btn")) else {
            continue;
        };
        if state.mobile {
            add_listener(&button, "click", move || handle_platform_activated(platform))?;
        } else {
            add_listener(&button, "mouseenter", move || handle_dodge(platform))?;
            add_listener(&button, "click", move || handle_desktop_click(platform))?;
        }
    }
    Ok(())
}

fn shuffle_social_buttons(state: &mut PageState) -> Result<(), JsValue> {
    let mut order: Vec<&str> = KNOWN_PLATFORMS.to_vec();
    order.shuffle(&mut state.rng);

    let Some(container) = state
        .document
        .query_selector(".social-links")
        .ok()
        .flatten()
    else {
        return Ok(());
    };
    container.set_inner_html(&social_buttons_html(&order));
    state.stats.track_button_swap();
    wire_social_buttons(state)
}

// --- Dodge behavior (desktop) ------------------------------------------------

fn handle_dodge(platform: &'static str) {
    with_state(|state| warn_on_err(dodge_button(state, platform)));
}

fn dodge_button(state: &mut PageState, platform: &'static str) -> Result<(), JsValue> {
    if state.dodging_complete {
        return Ok(());
    }
    let Some(button) = state
        .document
        .get_element_by_id(&format!("{platform}-btn"))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    if !state.dodging {
        state.dodging = true;
        state.dodges_this_period = 0;
        analytics::track_event("Button Dodging", "Started", Some(platform));
        set_timeout(move || handle_dodging_over(platform), DODGE_TIMEOUT_MS)?;
    }

    state.dodges_this_period += 1;
    state.stats.track_button_dodge(platform);
    analytics::track_event("Button Dodging", "Dodge", Some(platform));

    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let viewport_w = win.inner_width()?.as_f64().unwrap_or(0.0);
    let viewport_h = win.inner_height()?.as_f64().unwrap_or(0.0);
    let max_x = (viewport_w - f64::from(button.offset_width()) - DODGE_MARGIN_PX).max(0.0);
    let max_y = (viewport_h - f64::from(button.offset_height()) - DODGE_MARGIN_PX).max(0.0);
    let new_x = state.rng.gen_range(0.0..=max_x);
    let new_y = state.rng.gen_range(0.0..=max_y);

    let style = button.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", &format!("{new_x}px"))?;
    style.set_property("top", &format!("{new_y}px"))?;
    style.set_property("transition", "all 0.3s ease")?;
    Ok(())
}

fn handle_dodging_over(platform: &'static str) {
    with_state(|state| {
        state.dodging = false;
        state.dodging_complete = true;
        let patient = state.dodges_this_period >= PATIENCE_DODGE_THRESHOLD;
        state.stats.track_dodging_period(patient);
        analytics::track_event("Button Dodging", "Completed", Some(platform));
        warn_on_err(settle_buttons(state));
    });
}

fn settle_buttons(state: &PageState) -> Result<(), JsValue> {
    for platform in KNOWN_PLATFORMS {
        if let Some(button) = state
            .document
            .get_element_by_id(&format!("{platform}-btn"))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let style = button.style();
            style.set_property("position", "static")?;
            style.set_property("transition", "none")?;
        }
    }
    Ok(())
}

fn handle_desktop_click(platform: &'static str) {
    with_state(|state| {
        if !state.dodging_complete {
            return;
        }
        analytics::track_event("Social Button", "Click", Some(&format!("{platform} - Desktop")));
        start_flow(state, platform);
    });
}

fn handle_platform_activated(platform: &'static str) {
    with_state(|state| {
        analytics::track_event("Social Button", "Tap", Some(&format!("{platform} - Mobile")));
        start_flow(state, platform);
    });
}

fn start_flow(state: &mut PageState, platform: &str) {
    state.flow.start(platform, now_ms(), &mut state.stats);
    state.gestures.set_suspended(true);
    warn_on_err(show_modal(state));
}

// --- Modal -------------------------------------------------------------------

fn step_label(step: FlowStep) -> &'static str {
    match step {
        FlowStep::Ask => "Initial",
        FlowStep::Negate => "Second Confirmation",
        FlowStep::Verify => "Captcha Check",
        FlowStep::Celebrate => "Final Decision",
    }
}

fn show_modal(state: &mut PageState) -> Result<(), JsValue> {
    let Some(render) = state.flow.render(&mut state.rng) else {
        return Ok(());
    };
    let platform = state.flow.platform().unwrap_or_default().to_owned();
    if let Some(step) = state.flow.step() {
        analytics::track_event(
            "Confirmation Modal",
            "Step Shown",
            Some(&format!("{platform} - {}", step_label(step))),
        );
    }

    let doc = state.document.clone();
    set_hidden(&doc, "modal-overlay", false)?;
    set_hidden(&doc, "modal", false)?;
    let modal = doc
        .get_element_by_id("modal")
        .ok_or_else(|| JsValue::from_str("no #modal element"))?;

    match render.buttons {
        ButtonLayout::Pair(assignment) => {
            state.rendered_buttons = Some(assignment);
            let left_class = if assignment.left_primary { "primary" } else { "secondary" };
            let right_class = if assignment.right_primary { "primary" } else { "secondary" };
            modal.set_inner_html(&format!(
                r#"<div class="modal-content">
  <p>{}</p>
  <div class="modal-buttons">
    <button id="modal-btn-1" class="modal-btn {left_class}">{}</button>
    <button id="modal-btn-2" class="modal-btn {right_class}">{}</button>
  </div>
</div>"#,
                render.message, assignment.left_label, assignment.right_label
            ));
            wire_modal_button(&doc, "modal-btn-1", ButtonSide::Left)?;
            wire_modal_button(&doc, "modal-btn-2", ButtonSide::Right)?;
        }
        ButtonLayout::Single(label) => {
            state.rendered_buttons = None;
            modal.set_inner_html(&format!(
                r#"<div class="modal-content">
  <p>{}</p>
  <div class="modal-buttons">
    <button id="modal-btn-continue" class="modal-btn primary">{label}</button>
  </div>
</div>"#,
                render.message
            ));
            if let Some(button) = doc.get_element_by_id("modal-btn-continue") {
                add_listener(&button, "click", handle_celebrate_continue)?;
            }
        }
        ButtonLayout::Captcha => {
            state.rendered_buttons = None;
            render_captcha(state, &modal)?;
        }
    }
    Ok(())
}

fn wire_modal_button(doc: &Document, id: &str, side: ButtonSide) -> Result<(), JsValue> {
    if let Some(button) = doc.get_element_by_id(id) {
        add_listener(&button, "click", move || handle_modal_press(side))?;
    }
    Ok(())
}

fn handle_modal_press(side: ButtonSide) {
    with_state(|state| {
        let Some(assignment) = state.rendered_buttons else {
            return;
        };
        let platform = state.flow.platform().unwrap_or_default().to_owned();
        let step = state.flow.step().map_or(0, FlowStep::index);
        let action = if assignment.continues(side) { "Continue" } else { "Cancelled" };
        analytics::track_event(
            "Confirmation Modal",
            action,
            Some(&format!("{platform} - Step {}", step + 1)),
        );

        let now = now_ms();
        let signal = {
            let PageState { flow, rng, stats, .. } = state;
            flow.choose(side, &assignment, rng, now, stats)
        };
        warn_on_err(apply_flow_signal(state, signal));
    });
}

fn handle_celebrate_continue() {
    with_state(|state| {
        let now = now_ms();
        let signal = {
            let PageState { flow, rng, stats, .. } = state;
            flow.advance(rng, now, stats)
        };
        warn_on_err(apply_flow_signal(state, signal));
    });
}

fn apply_flow_signal(state: &mut PageState, signal: Option<FlowSignal>) -> Result<(), JsValue> {
    match signal {
        Some(FlowSignal::Advanced(_)) => show_modal(state),
        Some(FlowSignal::ShowCaptcha) => {
            let challenge = state.captcha.generate_challenge(&mut state.rng);
            state.stats.track_captcha_shown(challenge.id, challenge.difficulty);
            show_modal(state)
        }
        Some(FlowSignal::Cancelled) => close_modal(state),
        Some(FlowSignal::Navigate { platform }) => {
            close_modal(state)?;
            analytics::track_goal("Social Navigation Success", &platform);
            navigate_to(&platform)
        }
        None => Ok(()),
    }
}

fn close_modal(state: &mut PageState) -> Result<(), JsValue> {
    let doc = state.document.clone();
    set_hidden(&doc, "modal-overlay", true)?;
    set_hidden(&doc, "modal", true)?;
    state.rendered_buttons = None;
    state.gestures.set_suspended(false);
    clear_error_timer(state);
    // Quietly reshuffle the social buttons once the close animation is done.
    set_timeout(
        || {
            with_state(|state| warn_on_err(shuffle_social_buttons(state)));
        },
        SHUFFLE_DELAY_MS,
    )?;
    Ok(())
}

fn navigate_to(platform: &str) -> Result<(), JsValue> {
    let Some((_, url)) = PLATFORM_URLS.iter().find(|(name, _)| *name == platform) else {
        return Ok(());
    };
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let _ = win.open_with_url_and_target(url, "_blank")?;
    Ok(())
}

// --- CAPTCHA widget ----------------------------------------------------------

fn captcha_html(challenge: &Challenge) -> String {
    let body = match challenge.kind {
        ChallengeKind::ChoiceSelection | ChallengeKind::Unsolvable => {
            let options = challenge
                .options
                .iter()
                .enumerate()
                .map(|(idx, option)| {
                    format!(
                        r#"<button id="captcha-opt-{idx}" class="captcha-option-btn" data-option-id="{}">{}</button>"#,
                        option.id, option.label
                    )
                })
                .collect::<Vec<_>>()
                .join("");
            format!(r#"<div class="captcha-options">{options}</div>"#)
        }
        _ => r#"<div class="captcha-input-group">
  <input type="text" id="captcha-answer" class="captcha-input" placeholder="Your answer">
  <button id="captcha-submit" class="captcha-submit-btn">Submit</button>
</div>"#
            .to_owned(),
    };
    format!(
        r#"<div class="captcha-container">
  <p class="captcha-question">{}</p>
  <p class="captcha-instruction">{}</p>
  {body}
  <p id="captcha-error" class="captcha-error"></p>
  <div class="captcha-footer">
    <button id="captcha-refresh" class="captcha-refresh-btn">Different puzzle</button>
    <button id="captcha-cancel" class="captcha-cancel-btn">Give up</button>
  </div>
</div>"#,
        challenge.prompt, challenge.instruction
    )
}

fn render_captcha(state: &mut PageState, modal: &Element) -> Result<(), JsValue> {
    clear_error_timer(state);
    let Some(challenge) = state.captcha.active() else {
        return Ok(());
    };
    modal.set_inner_html(&captcha_html(challenge));

    let doc = state.document.clone();
    for (idx, option) in challenge.options.iter().enumerate() {
        if let Some(button) = doc.get_element_by_id(&format!("captcha-opt-{idx}")) {
            let option_id = option.id;
            add_listener(&button, "click", move || handle_captcha_option(option_id))?;
        }
    }
    if let Some(button) = doc.get_element_by_id("captcha-submit") {
        add_listener(&button, "click", handle_captcha_submit)?;
    }
    if let Some(button) = doc.get_element_by_id("captcha-refresh") {
        add_listener(&button, "click", handle_captcha_refresh)?;
    }
    if let Some(button) = doc.get_element_by_id("captcha-cancel") {
        add_listener(&button, "click", handle_captcha_cancel)?;
    }
    Ok(())
}

fn handle_captcha_option(option_id: &'static str) {
    with_state(|state| warn_on_err(apply_captcha_answer(state, Answer::text(option_id))));
}

fn handle_captcha_submit() {
    with_state(|state| {
        let answer = state
            .document
            .get_element_by_id("captcha-answer")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        warn_on_err(apply_captcha_answer(state, Answer::text(answer)));
    });
}

fn apply_captcha_answer(state: &mut PageState, answer: Answer) -> Result<(), JsValue> {
    let Some(challenge) = state.captcha.active() else {
        return Ok(());
    };
    let result = state.captcha.validate_answer(&answer);
    state
        .stats
        .track_captcha_attempt(challenge.id, challenge.difficulty, result.success, result.attempts);
    analytics::track_event(
        "Captcha",
        if result.success { "Solved" } else { "Failed" },
        Some(challenge.id),
    );

    if result.success {
        let now = now_ms();
        let signal = {
            let PageState { flow, rng, stats, .. } = state;
            flow.advance(rng, now, stats)
        };
        apply_flow_signal(state, signal)
    } else if !state.captcha.has_attempts_remaining() {
        render_captcha_bypass(state)
    } else {
        show_captcha_error(state, result.attempts)
    }
}

fn show_captcha_error(state: &mut PageState, attempts: u32) -> Result<(), JsValue> {
    let remaining = crate::captcha::MAX_ATTEMPTS.saturating_sub(attempts);
    if let Some(el) = state.document.get_element_by_id("captcha-error") {
        el.set_text_content(Some(&format!(
            "Nope. {remaining} attempt{} left.",
            if remaining == 1 { "" } else { "s" }
        )));
    }
    let handle = set_timeout(
        || {
            with_state(|state| {
                let _ = state.error_timer.take();
                if let Some(el) = state.document.get_element_by_id("captcha-error") {
                    el.set_text_content(None);
                }
            });
        },
        CAPTCHA_ERROR_MS,
    )?;
    // A newer error supersedes the expiry of the previous one.
    if let Some(stale) = state.error_timer.replace(handle) {
        clear_timeout(stale);
    }
    Ok(())
}

fn clear_error_timer(state: &mut PageState) {
    if let Some(stale) = state.error_timer.take() {
        clear_timeout(stale);
    }
}

fn render_captcha_bypass(state: &mut PageState) -> Result<(), JsValue> {
    let Some(modal) = state.document.get_element_by_id("modal") else {
        return Ok(());
    };
    modal.set_inner_html(
        r#"<div class="modal-content">
  <p>The CAPTCHA admits defeat. You were never going to get that one anyway.</p>
  <div class="modal-buttons">
    <button id="captcha-bypass" class="modal-btn primary">Just let me through</button>
  </div>
</div>"#,
    );
    if let Some(button) = state.document.get_element_by_id("captcha-bypass") {
        add_listener(&button, "click", handle_captcha_bypass)?;
    }
    Ok(())
}

fn handle_captcha_bypass() {
    with_state(|state| {
        analytics::track_event("Captcha", "Bypassed", state.flow.platform());
        let now = now_ms();
        let signal = {
            let PageState { flow, rng, stats, .. } = state;
            flow.advance(rng, now, stats)
        };
        warn_on_err(apply_flow_signal(state, signal));
    });
}

fn handle_captcha_refresh() {
    with_state(|state| {
        if let Some(challenge) = state.captcha.active() {
            state.stats.track_captcha_refresh(challenge.id);
            analytics::track_event("Captcha", "Refreshed", Some(challenge.id));
        }
        let challenge = state.captcha.generate_challenge(&mut state.rng);
        state.stats.track_captcha_shown(challenge.id, challenge.difficulty);
        warn_on_err(show_modal(state));
    });
}

fn handle_captcha_cancel() {
    with_state(|state| {
        analytics::track_event("Captcha", "Cancelled", state.flow.platform());
        state.flow.cancel(&mut state.stats);
        warn_on_err(close_modal(state));
    });
}

// --- Touch gestures (mobile) -------------------------------------------------

fn setup_touch_listeners(doc: &Document) -> Result<(), JsValue> {
    add_touch_listener(doc, "touchstart", |event| {
        with_state(|state| {
            if let Some(touch) = event.touches().get(0) {
                state.gestures.touch_start(
                    f64::from(touch.client_x()),
                    f64::from(touch.client_y()),
                    now_ms(),
                );
            }
        });
    })?;
    add_touch_listener(doc, "touchmove", |event| {
        with_state(|state| {
            if let Some(touch) = event.touches().get(0) {
                state
                    .gestures
                    .touch_move(f64::from(touch.client_x()), f64::from(touch.client_y()));
            }
        });
    })?;
    add_touch_listener(doc, "touchend", |event| {
        with_state(|state| {
            if let Some(touch) = event.changed_touches().get(0) {
                let completed = state.gestures.touch_end(
                    f64::from(touch.client_x()),
                    f64::from(touch.client_y()),
                    now_ms(),
                );
                if let Some(gesture) = completed {
                    warn_on_err(complete_gesture(state, gesture));
                }
            }
        });
    })?;
    add_touch_listener(doc, "touchcancel", |_event| {
        with_state(|state| state.gestures.cancel_touch());
    })?;
    Ok(())
}

fn gesture_name(gesture: GestureKind) -> &'static str {
    match gesture {
        GestureKind::SwipeUp => "swipe-up",
        GestureKind::SwipeDown => "swipe-down",
        GestureKind::SwipeLeft => "swipe-left",
        GestureKind::SwipeRight => "swipe-right",
        GestureKind::LongPress => "long-press",
        GestureKind::MultiTap => "multi-tap",
    }
}

fn complete_gesture(state: &mut PageState, gesture: GestureKind) -> Result<(), JsValue> {
    state.stats.track_mobile_gesture(gesture);
    analytics::track_event("Mobile Gesture", "Completed", Some(gesture_name(gesture)));

    match gesture {
        GestureKind::SwipeDown => {
            let cooking = *phrases::pick(prompts::COOKING_ACTIONS, &mut state.rng);
            if let Some(el) = state.document.get_element_by_id("subtitle") {
                el.set_text_content(Some(&format!("Currently {cooking}")));
            }
        }
        GestureKind::LongPress => {
            if let Some(el) = state.document.get_element_by_id("hint") {
                el.set_text_content(Some("🥚 You found a hidden gesture. The buttons are proud of you."));
            }
        }
        _ => {}
    }

    let PageState { gestures, rng, .. } = state;
    gestures.set_random_active(REVEAL_GESTURES, rng);
    Ok(())
}

// --- Timers, visibility, console egg -----------------------------------------

fn setup_session_tick(win: &web_sys::Window) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(|| {
        with_state(|state| state.stats.tick(now_ms()));
    }) as Box<dyn FnMut()>);
    win.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        1_000,
    )?;
    closure.forget();
    Ok(())
}

fn setup_visibility_handler(doc: &Document) -> Result<(), JsValue> {
    add_listener(doc, "visibilitychange", || {
        with_state(|state| {
            let hidden = state.document.hidden();
            state.stats.set_visible(!hidden, now_ms());
        });
    })
}

fn setup_unload_handler(win: &web_sys::Window) -> Result<(), JsValue> {
    add_listener(win, "beforeunload", || {
        with_state(|state| state.stats.flush(now_ms()));
    })
}

fn setup_console_easter_egg(win: &web_sys::Window) -> Result<(), JsValue> {
    set_timeout(
        || {
            for line in [
                easter_egg::SHOWER_ART,
                easter_egg::SHOWER_DIALOGUE,
                easter_egg::SHOWER_OFFER,
                easter_egg::SING_HINT,
            ] {
                web_sys::console::log_1(&JsValue::from_str(line));
            }
        },
        1_000,
    )?;

    let sing = Closure::wrap(Box::new(|| {
        with_state(|state| {
            state.stats.track_easter_egg("console-sing");
            analytics::track_event(
                "Console Easter Egg",
                "singAlong Executed",
                Some("Musical Performance"),
            );
            web_sys::console::log_1(&JsValue::from_str(easter_egg::SING_INTRO));
            let set = easter_egg::pick_lyric_set(&mut state.rng);
            for (idx, line) in set.iter().enumerate() {
                let text = easter_egg::decode_lyric(line);
                let delayed = move || {
                    web_sys::console::log_1(&JsValue::from_str(&text));
                };
                warn_on_err(set_timeout(delayed, (idx as i32) * 1_000).map(|_| ()));
            }
        });
    }) as Box<dyn FnMut()>);
    js_sys::Reflect::set(win.as_ref(), &JsValue::from_str("singAlong"), sing.as_ref())?;
    sing.forget();
    Ok(())
}

// --- Storage -----------------------------------------------------------------

/// localStorage-backed [`StatsStore`]. Failures are logged here and surfaced
/// as opaque [`StoreError`]s; the tracker treats them as best-effort.
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    pub fn open() -> Option<Self> {
        let storage = window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

fn store_err(context: &str, err: &JsValue) -> StoreError {
    let message = format!("{context}: {err:?}");
    web_sys::console::warn_1(&JsValue::from_str(&message));
    StoreError(message)
}

impl StatsStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(STORAGE_KEY)
            .map_err(|err| store_err("stats load failed", &err))
    }

    fn save(&mut self, payload: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(STORAGE_KEY, payload)
            .map_err(|err| store_err("stats save failed", &err))
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.storage
            .remove_item(STORAGE_KEY)
            .map_err(|err| store_err("stats clear failed", &err))
    }
}

// --- Small DOM helpers -------------------------------------------------------

fn add_listener(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listener lives for the lifetime of the page.
    closure.forget();
    Ok(())
}

fn add_touch_listener(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::TouchEvent) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::TouchEvent)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn set_timeout(handler: impl FnMut() + 'static, timeout_ms: i32) -> Result<i32, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let handle = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timeout_ms,
    )?;
    closure.forget();
    Ok(handle)
}

fn clear_timeout(handle: i32) {
    if let Some(win) = window() {
        win.clear_timeout_with_handle(handle);
    }
}

fn set_hidden(doc: &Document, id: &str, hidden: bool) -> Result<(), JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        if hidden {
            el.class_list().add_1("hidden")?;
        } else {
            el.class_list().remove_1("hidden")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::PendingTimer;

    #[test]
    fn replacing_a_pending_timer_hands_back_the_stale_handle() {
        let mut timer = PendingTimer::default();
        assert_eq!(timer.replace(7), None);
        assert_eq!(timer.replace(8), Some(7));
        assert_eq!(timer.take(), Some(8));
        assert_eq!(timer.take(), None);
    }
}
