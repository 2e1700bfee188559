//! Two-phase fade animator bracketing every screen change.
//!
//! The animator knows nothing about screens. It reports when the fade-out
//! has finished (the moment to swap screens) and when the fade-in has
//! finished (the moment new transitions may be accepted again).

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::animation::{Easing, Tween};

/// Durations and curve for the fades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTimings {
    /// Opacity 1 -> 0 before a screen swap
    pub fade_out: Duration,
    /// Opacity 0 -> 1 after a screen swap
    pub fade_in: Duration,
    /// Opacity 0 -> 1 when the controller is first shown
    pub entrance: Duration,
    /// Curve applied to every fade
    pub easing: Easing,
}

impl Default for FadeTimings {
    fn default() -> Self {
        Self {
            fade_out: Duration::from_millis(300),
            fade_in: Duration::from_millis(300),
            entrance: Duration::from_millis(800),
            easing: Easing::EaseInOut,
        }
    }
}

impl FadeTimings {
    /// Every fade completes on the first tick.
    pub fn instant() -> Self {
        Self {
            fade_out: Duration::ZERO,
            fade_in: Duration::ZERO,
            entrance: Duration::ZERO,
            easing: Easing::Linear,
        }
    }
}

/// Where the animator is in a fade sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionPhase {
    /// No fade running; transitions are accepted
    #[default]
    Idle,
    /// Old screen fading away
    FadingOut,
    /// New screen fading in
    FadingIn,
}

/// Milestones reported by [`FadeTransition::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeEvent {
    /// Opacity reached 0; the fade-in has already been started.
    FadedOut,
    /// Opacity reached 1; the animator is idle.
    FadedIn,
}

/// Fade-out / fade-in sequencer.
#[derive(Debug, Clone)]
pub struct FadeTransition {
    timings: FadeTimings,
    phase: TransitionPhase,
    tween: Option<Tween<f64>>,
}

impl FadeTransition {
    /// Idle animator at full opacity.
    pub fn new(timings: FadeTimings) -> Self {
        Self {
            timings,
            phase: TransitionPhase::Idle,
            tween: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Whether no fade is running.
    pub fn is_idle(&self) -> bool {
        self.phase == TransitionPhase::Idle
    }

    /// Configured timings.
    pub fn timings(&self) -> &FadeTimings {
        &self.timings
    }

    /// Run the initial 0 -> 1 fade using the entrance duration.
    ///
    /// Returns false if a fade is already running.
    pub fn begin_entrance(&mut self, now: Instant) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.start(TransitionPhase::FadingIn, 0.0, 1.0, self.timings.entrance, now);
        true
    }

    /// Start a fade-out. Returns false if a fade is already running.
    pub fn begin_fade_out(&mut self, now: Instant) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.start(TransitionPhase::FadingOut, 1.0, 0.0, self.timings.fade_out, now);
        true
    }

    /// Step the sequence to `now`, returning at most one milestone.
    ///
    /// Call repeatedly until it returns `None`: a late tick may cross both
    /// the fade-out and the fade-in.
    pub fn advance(&mut self, now: Instant) -> Option<FadeEvent> {
        let tween = self.tween.as_ref()?;
        if !tween.is_complete_at(now) {
            return None;
        }
        let finished_at = tween.finishes_at().unwrap_or(now);

        match self.phase {
            TransitionPhase::FadingOut => {
                self.start(
                    TransitionPhase::FadingIn,
                    0.0,
                    1.0,
                    self.timings.fade_in,
                    finished_at,
                );
                Some(FadeEvent::FadedOut)
            }
            TransitionPhase::FadingIn => {
                self.phase = TransitionPhase::Idle;
                self.tween = None;
                Some(FadeEvent::FadedIn)
            }
            TransitionPhase::Idle => None,
        }
    }

    /// Instant at which the running sequence will be idle, if one is running.
    pub fn idle_at(&self) -> Option<Instant> {
        let finishes_at = self.tween.as_ref()?.finishes_at()?;
        match self.phase {
            TransitionPhase::FadingOut => Some(finishes_at + self.timings.fade_in),
            TransitionPhase::FadingIn => Some(finishes_at),
            TransitionPhase::Idle => None,
        }
    }

    /// Opacity to render at `now`, in 0.0..=1.0.
    pub fn opacity_at(&self, now: Instant) -> f64 {
        match &self.tween {
            Some(tween) => tween.value_at(now).clamp(0.0, 1.0),
            None => 1.0,
        }
    }

    fn start(&mut self, phase: TransitionPhase, from: f64, to: f64, duration: Duration, at: Instant) {
        let mut tween = Tween::new(from, to, duration, self.timings.easing);
        tween.start_at(at);
        self.tween = Some(tween);
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear() -> FadeTimings {
        FadeTimings {
            easing: Easing::Linear,
            ..FadeTimings::default()
        }
    }

    #[test]
    fn test_new_animator_is_idle_and_opaque() {
        let fade = FadeTransition::new(FadeTimings::default());
        assert!(fade.is_idle());
        assert!((fade.opacity_at(Instant::now()) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_fade_out_then_in() {
        let start = Instant::now();
        let mut fade = FadeTransition::new(linear());
        assert!(fade.begin_fade_out(start));
        assert_eq!(fade.phase(), TransitionPhase::FadingOut);

        let mid = start + Duration::from_millis(150);
        assert_eq!(fade.advance(mid), None);
        assert!((fade.opacity_at(mid) - 0.5).abs() < 0.01);

        let swapped = start + Duration::from_millis(300);
        assert_eq!(fade.advance(swapped), Some(FadeEvent::FadedOut));
        assert_eq!(fade.phase(), TransitionPhase::FadingIn);
        assert!(fade.opacity_at(swapped).abs() < 0.01);

        let done = start + Duration::from_millis(600);
        assert_eq!(fade.advance(done), Some(FadeEvent::FadedIn));
        assert!(fade.is_idle());
        assert!((fade.opacity_at(done) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_busy_animator_rejects_new_fade() {
        let start = Instant::now();
        let mut fade = FadeTransition::new(linear());
        assert!(fade.begin_fade_out(start));
        assert!(!fade.begin_fade_out(start + Duration::from_millis(10)));
        assert!(!fade.begin_entrance(start + Duration::from_millis(10)));
    }

    #[test]
    fn test_late_tick_crosses_both_phases() {
        let start = Instant::now();
        let mut fade = FadeTransition::new(linear());
        fade.begin_fade_out(start);

        let late = start + Duration::from_secs(2);
        assert_eq!(fade.advance(late), Some(FadeEvent::FadedOut));
        assert_eq!(fade.advance(late), Some(FadeEvent::FadedIn));
        assert_eq!(fade.advance(late), None);
    }

    #[test]
    fn test_fade_in_is_anchored_to_fade_out_end() {
        let start = Instant::now();
        let mut fade = FadeTransition::new(linear());
        fade.begin_fade_out(start);

        // Tick 100ms late; the fade-in still started at 300ms.
        fade.advance(start + Duration::from_millis(400));
        let opacity = fade.opacity_at(start + Duration::from_millis(450));
        assert!((opacity - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_entrance_uses_entrance_duration() {
        let start = Instant::now();
        let mut fade = FadeTransition::new(linear());
        assert!(fade.begin_entrance(start));
        assert_eq!(fade.phase(), TransitionPhase::FadingIn);
        assert_eq!(fade.advance(start + Duration::from_millis(300)), None);
        assert_eq!(
            fade.advance(start + Duration::from_millis(800)),
            Some(FadeEvent::FadedIn)
        );
    }

    #[test]
    fn test_idle_at_covers_remaining_phases() {
        let start = Instant::now();
        let mut fade = FadeTransition::new(linear());
        assert_eq!(fade.idle_at(), None);

        fade.begin_fade_out(start);
        assert_eq!(fade.idle_at(), Some(start + Duration::from_millis(600)));

        fade.advance(start + Duration::from_millis(300));
        assert_eq!(fade.idle_at(), Some(start + Duration::from_millis(600)));
    }

    #[test]
    fn test_instant_timings() {
        let start = Instant::now();
        let mut fade = FadeTransition::new(FadeTimings::instant());
        fade.begin_fade_out(start);
        assert_eq!(fade.advance(start), Some(FadeEvent::FadedOut));
        assert_eq!(fade.advance(start), Some(FadeEvent::FadedIn));
    }
}
