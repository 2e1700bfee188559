//! Navigation controller: current screen, selections and fade sequencing.
//!
//! All mutation goes through the controller's operations. Time-dependent
//! operations take `now` explicitly; the UI calls [`NavigationController::tick`]
//! once per frame to let fades progress.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::catalog::{GoalId, StageId, COACH_GREETING};
use super::screen::{Intent, Screen};
use super::selection::SelectionState;
use super::transition::{FadeEvent, FadeTimings, FadeTransition, TransitionPhase};

/// What a modal dialog does when acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DialogKind {
    /// Onboarding summary; acknowledging moves to the dashboard.
    SetupComplete,
    /// Static coach greeting; acknowledging just closes it.
    CoachTip,
}

/// A message surfaced to the user that needs acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
    pub action: String,
}

impl Dialog {
    fn setup_complete(selection: &SelectionState) -> Self {
        let stage = selection
            .stage()
            .map(|s| s.as_str())
            .unwrap_or("not selected");
        Self {
            kind: DialogKind::SetupComplete,
            title: "Setup Complete! 🎉".to_string(),
            message: format!(
                "Stage: {}\nGoals: {} selected",
                stage,
                selection.goal_count()
            ),
            action: "Continue to Dashboard".to_string(),
        }
    }

    fn coach_tip() -> Self {
        Self {
            kind: DialogKind::CoachTip,
            title: "AI Coach".to_string(),
            message: COACH_GREETING.to_string(),
            action: "OK".to_string(),
        }
    }
}

/// Result of [`NavigationController::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    /// A fade towards the intent's target has started.
    Transitioning,
    /// A confirmation dialog is waiting for acknowledgment.
    AwaitingConfirmation,
    /// The intent is not offered here or its guard is false.
    Blocked,
    /// A transition is already running.
    Busy,
}

/// Serializable view of the controller at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationSnapshot {
    pub screen: Screen,
    pub phase: TransitionPhase,
    pub opacity: f64,
    pub selection: SelectionState,
    pub dialog: Option<Dialog>,
}

/// Finite-state navigation over the onboarding funnel.
#[derive(Debug, Clone)]
pub struct NavigationController {
    screen: Screen,
    selection: SelectionState,
    fade: FadeTransition,
    pending: Option<Screen>,
    dialog: Option<Dialog>,
}

impl NavigationController {
    /// Start on the welcome screen and run the entrance fade from `now`.
    ///
    /// The entrance fade counts as a `FadingIn` phase, so transitions are
    /// ignored until it finishes.
    pub fn new(timings: FadeTimings, now: Instant) -> Self {
        let mut fade = FadeTransition::new(timings);
        fade.begin_entrance(now);
        Self {
            screen: Screen::Welcome,
            selection: SelectionState::new(),
            fade,
            pending: None,
            dialog: None,
        }
    }

    /// Currently shown screen.
    pub fn current_screen(&self) -> Screen {
        self.screen
    }

    /// Stage and goal picks.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Current fade phase.
    pub fn phase(&self) -> TransitionPhase {
        self.fade.phase()
    }

    /// Whether a transition request would be accepted.
    pub fn is_idle(&self) -> bool {
        self.fade.is_idle()
    }

    /// Screen being faded towards, while fading out.
    pub fn pending_target(&self) -> Option<Screen> {
        self.pending
    }

    /// Instant at which the running fade sequence ends, if one is running.
    pub fn idle_at(&self) -> Option<Instant> {
        self.fade.idle_at()
    }

    /// Live opacity for the rendering layer.
    pub fn opacity(&self, now: Instant) -> f64 {
        self.fade.opacity_at(now)
    }

    /// Fade durations in use.
    pub fn timings(&self) -> &FadeTimings {
        self.fade.timings()
    }

    /// Open dialog, if any.
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Begin a fade towards `target`.
    ///
    /// Any screen may be requested from any screen. Returns false, leaving
    /// everything untouched, while another transition is still running.
    pub fn request_transition(&mut self, target: Screen, now: Instant) -> bool {
        if !self.fade.begin_fade_out(now) {
            debug!(
                from = %self.screen,
                to = %target,
                phase = ?self.fade.phase(),
                "ignoring transition request while another is running"
            );
            return false;
        }

        debug!(from = %self.screen, to = %target, "transition started");
        self.pending = Some(target);
        self.dialog = None;
        true
    }

    /// Advance running fades to `now`, swapping the screen at the midpoint.
    pub fn tick(&mut self, now: Instant) {
        while let Some(event) = self.fade.advance(now) {
            match event {
                FadeEvent::FadedOut => {
                    if let Some(target) = self.pending.take() {
                        info!(from = %self.screen, to = %target, "screen changed");
                        self.screen = target;
                    }
                }
                FadeEvent::FadedIn => {
                    debug!(screen = %self.screen, "transition complete");
                }
            }
        }
    }

    /// Record the user's stage, replacing any earlier pick.
    pub fn select_stage(&mut self, stage: StageId) {
        debug!(%stage, "stage selected");
        self.selection.set_stage(stage);
    }

    /// Add `goal` if absent, remove it if present. Returns true if now selected.
    pub fn toggle_goal(&mut self, goal: GoalId) -> bool {
        let selected = self.selection.toggle_goal(goal);
        debug!(%goal, selected, "goal toggled");
        selected
    }

    /// Whether a stage has been picked.
    pub fn can_advance_from_stage(&self) -> bool {
        self.selection.stage().is_some()
    }

    /// Whether at least one goal has been picked.
    pub fn can_advance_from_goals(&self) -> bool {
        self.selection.goal_count() > 0
    }

    /// Surface the setup summary for confirmation.
    ///
    /// Returns `None` unless the goal screen is showing with no fade running
    /// and at least one goal selected. Nothing changes screens until
    /// [`acknowledge_dialog`](Self::acknowledge_dialog) is called.
    pub fn complete_setup(&mut self) -> Option<&Dialog> {
        if self.screen != Screen::GoalSelect || !self.is_idle() {
            debug!(screen = %self.screen, phase = ?self.phase(), "setup completion not offered");
            return None;
        }
        if !self.can_advance_from_goals() {
            debug!("setup completion blocked: no goals selected");
            return None;
        }
        let dialog = Dialog::setup_complete(&self.selection);
        info!(summary = %dialog.message, "setup confirmation shown");
        self.dialog = Some(dialog);
        self.dialog.as_ref()
    }

    /// Open the coach greeting. Only available on the dashboard once its
    /// fade has settled.
    pub fn show_coach_message(&mut self) -> Option<&Dialog> {
        if self.screen != Screen::Dashboard || !self.is_idle() {
            return None;
        }
        self.dialog = Some(Dialog::coach_tip());
        self.dialog.as_ref()
    }

    /// Accept the open dialog and perform its action.
    ///
    /// For the setup summary this requests the dashboard transition; if a
    /// transition is still running the dialog stays open and false is
    /// returned.
    pub fn acknowledge_dialog(&mut self, now: Instant) -> bool {
        let Some(kind) = self.dialog.as_ref().map(|d| d.kind) else {
            return false;
        };

        match kind {
            DialogKind::SetupComplete => self.request_transition(Screen::Dashboard, now),
            DialogKind::CoachTip => {
                self.dialog = None;
                true
            }
        }
    }

    /// Close the open dialog without acting on it.
    pub fn dismiss_dialog(&mut self) -> bool {
        self.dialog.take().is_some()
    }

    /// Follow a funnel edge, applying its guard.
    pub fn dispatch(&mut self, intent: Intent, now: Instant) -> IntentOutcome {
        if intent.source() != self.screen {
            debug!(?intent, screen = %self.screen, "intent not offered on this screen");
            return IntentOutcome::Blocked;
        }
        if !self.is_idle() {
            return IntentOutcome::Busy;
        }

        match intent {
            Intent::Continue if !self.can_advance_from_stage() => IntentOutcome::Blocked,
            Intent::CompleteSetup => match self.complete_setup() {
                Some(_) => IntentOutcome::AwaitingConfirmation,
                None => IntentOutcome::Blocked,
            },
            _ => {
                if self.request_transition(intent.target(), now) {
                    IntentOutcome::Transitioning
                } else {
                    IntentOutcome::Busy
                }
            }
        }
    }

    /// Capture the render-facing state at `now`.
    pub fn snapshot(&self, now: Instant) -> NavigationSnapshot {
        NavigationSnapshot {
            screen: self.screen,
            phase: self.phase(),
            opacity: self.opacity(now),
            selection: self.selection.clone(),
            dialog: self.dialog.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    /// Controller past its entrance fade, plus the instant it became idle.
    fn ready() -> (NavigationController, Instant) {
        let start = Instant::now();
        let mut controller = NavigationController::new(FadeTimings::default(), start);
        let now = start + Duration::from_millis(800);
        controller.tick(now);
        (controller, now)
    }

    fn settle(controller: &mut NavigationController, now: Instant) -> Instant {
        let done = controller.idle_at().unwrap_or(now);
        controller.tick(done);
        done
    }

    /// Idle controller showing the goal screen.
    fn on_goals() -> (NavigationController, Instant) {
        let (mut controller, now) = ready();
        controller.request_transition(Screen::GoalSelect, now);
        let now = settle(&mut controller, now);
        (controller, now)
    }

    #[test]
    fn test_starts_on_welcome_with_entrance_fade() {
        let start = Instant::now();
        let controller = NavigationController::new(FadeTimings::default(), start);
        assert_eq!(controller.current_screen(), Screen::Welcome);
        assert_eq!(controller.phase(), TransitionPhase::FadingIn);
        assert!(controller.opacity(start).abs() < 0.001);
    }

    #[test]
    fn test_entrance_fade_blocks_transitions() {
        let start = Instant::now();
        let mut controller = NavigationController::new(FadeTimings::default(), start);
        assert!(!controller.request_transition(Screen::StageSelect, start));
        controller.tick(start + Duration::from_millis(800));
        assert!(controller.is_idle());
        assert!(controller.request_transition(Screen::StageSelect, start + Duration::from_millis(800)));
    }

    #[test]
    fn test_screen_swaps_only_after_fade_out() {
        let (mut controller, now) = ready();
        assert!(controller.request_transition(Screen::StageSelect, now));
        assert_eq!(controller.pending_target(), Some(Screen::StageSelect));

        controller.tick(now + Duration::from_millis(299));
        assert_eq!(controller.current_screen(), Screen::Welcome);
        assert_eq!(controller.phase(), TransitionPhase::FadingOut);

        controller.tick(now + Duration::from_millis(300));
        assert_eq!(controller.current_screen(), Screen::StageSelect);
        assert_eq!(controller.phase(), TransitionPhase::FadingIn);
        assert_eq!(controller.pending_target(), None);

        controller.tick(now + Duration::from_millis(600));
        assert!(controller.is_idle());
    }

    #[test]
    fn test_reentrant_request_is_ignored() {
        let (mut controller, now) = ready();
        controller.request_transition(Screen::StageSelect, now);
        assert!(!controller.request_transition(Screen::Dashboard, now + Duration::from_millis(100)));

        settle(&mut controller, now);
        assert_eq!(controller.current_screen(), Screen::StageSelect);
    }

    #[test]
    fn test_opacity_dips_to_zero_and_recovers() {
        let (mut controller, now) = ready();
        assert!((controller.opacity(now) - 1.0).abs() < 0.001);
        controller.request_transition(Screen::Dashboard, now);

        let mid_out = now + Duration::from_millis(150);
        let value = controller.opacity(mid_out);
        assert!(value > 0.0 && value < 1.0);

        controller.tick(now + Duration::from_millis(300));
        assert!(controller.opacity(now + Duration::from_millis(300)).abs() < 0.001);

        let done = settle(&mut controller, now);
        assert!((controller.opacity(done) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_dispatch_respects_source_screen_and_guards() {
        let (mut controller, now) = ready();
        assert_eq!(controller.dispatch(Intent::Continue, now), IntentOutcome::Blocked);
        assert_eq!(controller.dispatch(Intent::Start, now), IntentOutcome::Transitioning);
        assert_eq!(
            controller.dispatch(Intent::Skip, now + Duration::from_millis(10)),
            IntentOutcome::Busy
        );
        let now = settle(&mut controller, now);

        assert_eq!(controller.dispatch(Intent::Continue, now), IntentOutcome::Blocked);
        controller.select_stage(StageId::Perimenopause);
        assert_eq!(controller.dispatch(Intent::Continue, now), IntentOutcome::Transitioning);
        let now = settle(&mut controller, now);

        assert_eq!(controller.dispatch(Intent::CompleteSetup, now), IntentOutcome::Blocked);
        controller.toggle_goal(GoalId::Fitness);
        assert_eq!(
            controller.dispatch(Intent::CompleteSetup, now),
            IntentOutcome::AwaitingConfirmation
        );
        assert_eq!(controller.current_screen(), Screen::GoalSelect);
        assert!(controller.is_idle());
    }

    #[test]
    fn test_setup_dialog_summarises_selection() {
        let (mut controller, _) = on_goals();
        controller.select_stage(StageId::Postmenopause);
        controller.toggle_goal(GoalId::Sleep);
        controller.toggle_goal(GoalId::Community);

        let dialog = controller.complete_setup().unwrap();
        assert_eq!(dialog.kind, DialogKind::SetupComplete);
        assert_eq!(dialog.message, "Stage: postmenopause\nGoals: 2 selected");
    }

    #[test]
    fn test_complete_setup_without_goals_shows_nothing() {
        let (mut controller, _) = on_goals();
        controller.select_stage(StageId::Menopause);
        assert!(controller.complete_setup().is_none());
        assert!(controller.dialog().is_none());
    }

    #[test]
    fn test_dismissed_setup_dialog_does_not_navigate() {
        let (mut controller, now) = on_goals();
        controller.toggle_goal(GoalId::Mood);
        controller.complete_setup();
        assert!(controller.dismiss_dialog());
        assert!(!controller.acknowledge_dialog(now));
        assert!(controller.is_idle());
        assert_eq!(controller.current_screen(), Screen::GoalSelect);
    }

    #[test]
    fn test_complete_setup_only_on_goal_screen() {
        let (mut controller, _) = ready();
        controller.toggle_goal(GoalId::Mood);
        assert!(controller.complete_setup().is_none());
        assert!(controller.dialog().is_none());
    }

    #[test]
    fn test_complete_setup_refused_while_leaving_goal_screen() {
        let (mut controller, now) = on_goals();
        controller.toggle_goal(GoalId::Mood);
        controller.request_transition(Screen::Dashboard, now);

        assert!(controller.complete_setup().is_none());
        settle(&mut controller, now);
        assert_eq!(controller.current_screen(), Screen::Dashboard);
        assert!(controller.dialog().is_none());
    }

    #[test]
    fn test_coach_message_only_on_dashboard() {
        let (mut controller, now) = ready();
        assert!(controller.show_coach_message().is_none());

        controller.dispatch(Intent::Skip, now);
        let now = settle(&mut controller, now);
        assert_eq!(controller.current_screen(), Screen::Dashboard);

        let dialog = controller.show_coach_message().unwrap();
        assert_eq!(dialog.kind, DialogKind::CoachTip);
        assert!(controller.acknowledge_dialog(now));
        assert!(controller.dialog().is_none());
        assert!(controller.is_idle());
    }

    #[test]
    fn test_coach_message_refused_during_restart_fade() {
        let (mut controller, now) = ready();
        controller.dispatch(Intent::Skip, now);
        let now = settle(&mut controller, now);

        assert_eq!(controller.dispatch(Intent::Restart, now), IntentOutcome::Transitioning);
        assert_eq!(controller.current_screen(), Screen::Dashboard);
        assert!(controller.show_coach_message().is_none());

        settle(&mut controller, now);
        assert_eq!(controller.current_screen(), Screen::Welcome);
        assert!(controller.dialog().is_none());
    }

    #[test]
    fn test_coach_message_waits_for_dashboard_fade_in() {
        let (mut controller, now) = ready();
        controller.dispatch(Intent::Skip, now);
        controller.tick(now + Duration::from_millis(300));
        assert_eq!(controller.current_screen(), Screen::Dashboard);
        assert!(controller.show_coach_message().is_none());

        settle(&mut controller, now);
        assert!(controller.show_coach_message().is_some());
    }

    #[test]
    fn test_snapshot_serializes() {
        let (mut controller, now) = ready();
        controller.select_stage(StageId::Menopause);
        controller.toggle_goal(GoalId::Sleep);
        let snapshot = controller.snapshot(now);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["screen"], "welcome");
        assert_eq!(json["phase"], "idle");
        assert_eq!(json["selection"]["stage"], "menopause");
        assert_eq!(json["selection"]["goals"][0], "sleep");
        assert!(json["dialog"].is_null());
    }
}
