//! Application state (Model in TEA pattern)

use std::sync::Arc;
use std::time::Duration;

use askout_core::prelude::*;
use askout_core::{Background, DateOption, FlowStep, HeaderContent, DATE_OPTIONS};

use crate::config::Settings;
use crate::effects::EffectsState;
use crate::message::Message;
use crate::timers::CelebrationTimers;

/// Where the card is in the ask → pick → confirm/reject flow.
///
/// The step, the selection and the confirm dialog flag live in one enum so
/// that a selection only exists once confirmed and the dialog can only be
/// open on the opening question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Initial { confirm_dialog: bool },
    DateOptions,
    Confirmed { selection: &'static DateOption },
    Rejected,
}

impl Default for Flow {
    fn default() -> Self {
        Flow::Initial {
            confirm_dialog: false,
        }
    }
}

impl Flow {
    pub fn step(&self) -> FlowStep {
        match self {
            Flow::Initial { .. } => FlowStep::Initial,
            Flow::DateOptions => FlowStep::DateOptions,
            Flow::Confirmed { .. } => FlowStep::Confirmed,
            Flow::Rejected => FlowStep::Rejected,
        }
    }

    /// The picked date option, only present once confirmed
    pub fn selection(&self) -> Option<&'static DateOption> {
        match self {
            Flow::Confirmed { selection } => Some(selection),
            _ => None,
        }
    }

    pub fn confirm_dialog_visible(&self) -> bool {
        matches!(
            self,
            Flow::Initial {
                confirm_dialog: true
            }
        )
    }
}

/// Lifecycle of the whole application (not the card flow)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// What a card button does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    AnswerYes,
    AnswerNo,
    CancelRejection,
    ConfirmRejection,
    PickDate(usize),
    AskAgain,
}

impl ButtonAction {
    pub fn message(self) -> Message {
        match self {
            ButtonAction::AnswerYes => Message::AnswerYes,
            ButtonAction::AnswerNo => Message::AnswerNo,
            ButtonAction::CancelRejection => Message::CancelRejection,
            ButtonAction::ConfirmRejection => Message::ConfirmRejection,
            ButtonAction::PickDate(index) => Message::PickDate(index),
            ButtonAction::AskAgain => Message::AskAgain,
        }
    }
}

/// A focusable button of the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    /// Leading glyph (date options, dialog check/cross)
    pub glyph: Option<&'static str>,
    /// Shortcut key shown next to the label
    pub key: &'static str,
    pub action: ButtonAction,
}

impl Button {
    const fn new(label: &'static str, key: &'static str, action: ButtonAction) -> Self {
        Self {
            label,
            glyph: None,
            key,
            action,
        }
    }

    const fn with_glyph(mut self, glyph: &'static str) -> Self {
        self.glyph = Some(glyph);
        self
    }
}

const DIGIT_KEYS: [&str; 3] = ["1", "2", "3"];

/// Longest frame time fed into the animations
pub const MAX_FRAME: Duration = Duration::from_millis(250);

/// Buttons of the view for `flow`, in focus order.
///
/// While the confirm dialog is open only its two buttons are reachable.
pub fn buttons_for(flow: &Flow) -> Vec<Button> {
    match flow {
        Flow::Initial {
            confirm_dialog: false,
        } => vec![
            Button::new("Yes", "y", ButtonAction::AnswerYes),
            Button::new("No", "n", ButtonAction::AnswerNo),
        ],
        Flow::Initial {
            confirm_dialog: true,
        } => vec![
            Button::new("I changed my mind", "m", ButtonAction::CancelRejection).with_glyph("✓"),
            Button::new("Yes, I'm sure", "y", ButtonAction::ConfirmRejection).with_glyph("✗"),
        ],
        Flow::DateOptions => DATE_OPTIONS
            .iter()
            .enumerate()
            .map(|(i, opt)| {
                Button::new(opt.label, DIGIT_KEYS[i], ButtonAction::PickDate(i))
                    .with_glyph(opt.glyph)
            })
            .collect(),
        Flow::Confirmed { .. } => Vec::new(),
        Flow::Rejected => vec![Button::new("Ask me again?", "a", ButtonAction::AskAgain)],
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub flow: Flow,

    /// Card background (cosmetic)
    pub background: Background,

    /// Confetti shown for a fixed window after confirming
    pub confetti_visible: bool,

    /// Focused button index within [`AppState::buttons`]
    pub focus: usize,

    pub phase: AppPhase,

    pub settings: Settings,

    /// Animation state derived from the flow
    pub effects: EffectsState,

    /// Most recent user-facing error (unknown date option), cleared on the
    /// next transition
    pub last_error: Option<String>,

    /// Number of errors reported so far; lets observers spot repeats
    pub error_count: u64,

    /// Generation of the current celebration. Survives remounts so that timer
    /// messages from an earlier celebration are always recognizably stale.
    celebration_id: u64,

    celebration_timers: Option<Arc<CelebrationTimers>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            flow: Flow::default(),
            background: Background::Default,
            confetti_visible: false,
            focus: 0,
            phase: AppPhase::Running,
            settings,
            effects: EffectsState::default(),
            last_error: None,
            error_count: 0,
            celebration_id: 0,
            celebration_timers: None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────

    pub fn step(&self) -> FlowStep {
        self.flow.step()
    }

    pub fn selection(&self) -> Option<&'static DateOption> {
        self.flow.selection()
    }

    pub fn confirm_dialog_visible(&self) -> bool {
        self.flow.confirm_dialog_visible()
    }

    pub fn header(&self) -> HeaderContent {
        HeaderContent::for_step(self.step())
    }

    pub fn buttons(&self) -> Vec<Button> {
        buttons_for(&self.flow)
    }

    pub fn focused_button(&self) -> Option<Button> {
        self.buttons().get(self.focus).copied()
    }

    pub fn celebration_id(&self) -> u64 {
        self.celebration_id
    }

    /// Whether timers of the current celebration are held
    pub fn has_celebration_timers(&self) -> bool {
        self.celebration_timers.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Flow transitions
    //
    // Each returns whether it applied; a trigger that does not belong to
    // the current state leaves everything untouched.
    // ─────────────────────────────────────────────────────────

    /// initial → dateOptions, background reset
    pub fn answer_yes(&mut self) -> bool {
        if self.flow != Flow::default() {
            return false;
        }
        self.background = Background::Default;
        self.transition_to(Flow::DateOptions);
        true
    }

    /// initial → initial with the confirm dialog open, background alert
    pub fn answer_no(&mut self) -> bool {
        if self.flow != Flow::default() {
            return false;
        }
        self.background = Background::Alert;
        self.transition_to(Flow::Initial {
            confirm_dialog: true,
        });
        true
    }

    /// Close the confirm dialog. The alert background stays.
    pub fn cancel_rejection(&mut self) -> bool {
        if !self.flow.confirm_dialog_visible() {
            return false;
        }
        self.transition_to(Flow::default());
        true
    }

    /// Confirm dialog → rejected, background reset
    pub fn confirm_rejection(&mut self) -> bool {
        if !self.flow.confirm_dialog_visible() {
            return false;
        }
        self.background = Background::Default;
        self.transition_to(Flow::Rejected);
        true
    }

    /// dateOptions → confirmed with `option` selected.
    ///
    /// Turns the confetti on and returns the id of the new celebration, whose
    /// timers the caller is expected to start.
    pub fn confirm_date(&mut self, option: &'static DateOption) -> Option<u64> {
        if self.flow != Flow::DateOptions {
            return None;
        }
        self.celebration_id += 1;
        self.transition_to(Flow::Confirmed { selection: option });
        self.confetti_visible = true;
        let particles = self.settings.ui.confetti_particles();
        self.effects.start_confetti(particles, &mut rand::thread_rng());
        Some(self.celebration_id)
    }

    /// rejected → initial
    pub fn ask_again(&mut self) -> bool {
        if self.flow != Flow::Rejected {
            return false;
        }
        self.transition_to(Flow::default());
        true
    }

    /// Remount: leave `confirmed` and reset the card to its mount-time values.
    pub fn start_over(&mut self) -> bool {
        if self.flow.step() != FlowStep::Confirmed {
            return false;
        }
        self.transition_to(Flow::default());
        self.background = Background::Default;
        self.effects = EffectsState::default();
        true
    }

    // ─────────────────────────────────────────────────────────
    // Celebration timers
    // ─────────────────────────────────────────────────────────

    /// Take ownership of freshly spawned timers.
    ///
    /// Timers for a celebration that is no longer current are cancelled
    /// straight away.
    pub fn attach_celebration_timers(
        &mut self,
        celebration_id: u64,
        timers: Arc<CelebrationTimers>,
    ) -> bool {
        let current = celebration_id == self.celebration_id
            && self.step() == FlowStep::Confirmed
            && self.celebration_timers.is_none();
        if !current {
            timers.cancel();
            return false;
        }
        self.celebration_timers = Some(timers);
        true
    }

    /// The confetti window of `celebration_id` ended
    pub fn expire_confetti(&mut self, celebration_id: u64) -> bool {
        if !self.is_current_celebration(celebration_id) || !self.confetti_visible {
            return false;
        }
        self.confetti_visible = false;
        self.effects.stop_confetti();
        true
    }

    /// The background randomizer of `celebration_id` picked a new hue
    pub fn randomize_background(&mut self, celebration_id: u64, hue: f32) -> bool {
        if !self.is_current_celebration(celebration_id) {
            return false;
        }
        self.background = Background::pastel(hue);
        true
    }

    fn is_current_celebration(&self, celebration_id: u64) -> bool {
        celebration_id == self.celebration_id && self.step() == FlowStep::Confirmed
    }

    /// Abort the current celebration's timers, if any
    fn release_celebration(&mut self) {
        if let Some(timers) = self.celebration_timers.take() {
            timers.cancel();
        }
    }

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────

    pub fn focus_next(&mut self) {
        let count = self.buttons().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_previous(&mut self) {
        let count = self.buttons().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Misc
    // ─────────────────────────────────────────────────────────

    /// Advance animations by the measured frame time.
    ///
    /// Long gaps (suspended terminal) count as [`MAX_FRAME`].
    pub fn tick(&mut self, elapsed: Duration) {
        self.effects.advance(elapsed.min(MAX_FRAME));
    }

    pub fn record_error(&mut self, err: &Error) {
        self.last_error = Some(err.to_string());
        self.error_count += 1;
    }

    /// Release every held resource and mark the app for exit
    pub fn teardown(&mut self) {
        self.release_celebration();
        self.phase = AppPhase::Quitting;
    }

    /// Switch flow, running exit actions of the old state and entry actions
    /// of the new one.
    fn transition_to(&mut self, next: Flow) {
        let prev = self.flow;
        if prev.step() == FlowStep::Confirmed && next.step() != FlowStep::Confirmed {
            self.release_celebration();
            self.confetti_visible = false;
            self.effects.stop_confetti();
        }

        self.flow = next;
        self.focus = 0;
        self.last_error = None;

        if prev.step() != next.step() {
            debug!("Flow {} -> {}", prev.step(), next.step());
            self.effects.enter_step(next.step(), &mut rand::thread_rng());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_matches_mount_values() {
        let state = AppState::new();
        assert_eq!(state.step(), FlowStep::Initial);
        assert_eq!(state.selection(), None);
        assert!(!state.confirm_dialog_visible());
        assert_eq!(state.background, Background::Default);
        assert!(!state.confetti_visible);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_flow_step_projection() {
        assert_eq!(Flow::default().step(), FlowStep::Initial);
        assert_eq!(
            Flow::Initial {
                confirm_dialog: true
            }
            .step(),
            FlowStep::Initial
        );
        assert_eq!(
            Flow::Confirmed {
                selection: &DATE_OPTIONS[0]
            }
            .selection()
            .map(|o| o.label),
            Some("Coffee Date")
        );
        assert_eq!(Flow::Rejected.selection(), None);
    }

    #[test]
    fn test_buttons_per_view() {
        let labels = |flow: Flow| -> Vec<&str> {
            buttons_for(&flow).iter().map(|b| b.label).collect()
        };
        assert_eq!(labels(Flow::default()), ["Yes", "No"]);
        assert_eq!(
            labels(Flow::Initial {
                confirm_dialog: true
            }),
            ["I changed my mind", "Yes, I'm sure"]
        );
        assert_eq!(
            labels(Flow::DateOptions),
            ["Coffee Date", "Pizza Night", "Movie Time"]
        );
        assert!(labels(Flow::Confirmed {
            selection: &DATE_OPTIONS[2]
        })
        .is_empty());
        assert_eq!(labels(Flow::Rejected), ["Ask me again?"]);
    }

    #[test]
    fn test_focus_wraps() {
        let mut state = AppState::new();
        state.focus_next();
        assert_eq!(state.focus, 1);
        state.focus_next();
        assert_eq!(state.focus, 0);
        state.focus_previous();
        assert_eq!(state.focus, 1);
    }

    #[test]
    fn test_focus_resets_on_dialog_change() {
        let mut state = AppState::new();
        state.focus_next();
        assert!(state.answer_no());
        assert_eq!(state.focus, 0);
        assert_eq!(
            state.focused_button().map(|b| b.action),
            Some(ButtonAction::CancelRejection)
        );
    }

    #[test]
    fn test_focus_noop_without_buttons() {
        let mut state = AppState::new();
        state.answer_yes();
        state.confirm_date(&DATE_OPTIONS[0]);
        state.focus_next();
        state.focus_previous();
        assert_eq!(state.focus, 0);
        assert_eq!(state.focused_button(), None);
    }

    #[test]
    fn test_confirm_date_bumps_celebration() {
        let mut state = AppState::new();
        assert_eq!(state.confirm_date(&DATE_OPTIONS[0]), None);
        state.answer_yes();
        assert_eq!(state.confirm_date(&DATE_OPTIONS[1]), Some(1));
        assert!(state.confetti_visible);
        assert!(state.effects.confetti.is_some());
        assert_eq!(state.confirm_date(&DATE_OPTIONS[1]), None);
    }

    #[test]
    fn test_start_over_resets_everything() {
        let mut state = AppState::new();
        state.answer_yes();
        state.confirm_date(&DATE_OPTIONS[2]);
        state.randomize_background(1, 120.0);

        assert!(state.start_over());
        assert_eq!(state.flow, Flow::default());
        assert_eq!(state.background, Background::Default);
        assert!(!state.confetti_visible);
        assert!(state.effects.confetti.is_none());
        // Generation is kept so late timer messages stay stale
        assert_eq!(state.celebration_id(), 1);
    }

    #[test]
    fn test_tick_advances_effects_clock() {
        let mut state = AppState::new();
        state.tick(Duration::from_millis(40));
        state.tick(Duration::from_millis(60));
        assert_eq!(state.effects.step_elapsed, Duration::from_millis(100));
    }

    #[test]
    fn test_tick_caps_long_gaps() {
        let mut state = AppState::new();
        state.tick(Duration::from_secs(30));
        assert_eq!(state.effects.step_elapsed, MAX_FRAME);
    }

    #[test]
    fn test_record_error() {
        let mut state = AppState::new();
        state.record_error(&Error::unknown_date_option("Picnic"));
        assert_eq!(state.error_count, 1);
        assert!(state.last_error.as_deref().unwrap().contains("Picnic"));
    }

    #[test]
    fn test_teardown_marks_quitting() {
        let mut state = AppState::new();
        state.teardown();
        assert!(state.should_quit());
    }
}
