//! Easing curves and tweens for the screen fades.
//!
//! Tweens take the current instant as an argument instead of reading the
//! clock, so a fade can be stepped with a simulated clock.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Easing functions for smooth animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Quadratic ease-in (slow start)
    EaseIn,
    /// Quadratic ease-out (slow end)
    EaseOut,
    /// Quadratic ease-in-out (slow start and end)
    #[default]
    EaseInOut,
    /// Cubic ease-in-out
    CubicInOut,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let t = t - 1.0;
                    1.0 + 4.0 * t * t * t
                }
            }
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::CubicInOut => "cubic-in-out",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Linear,
            Self::EaseIn,
            Self::EaseOut,
            Self::EaseInOut,
            Self::CubicInOut,
        ]
        .into_iter()
        .find(|easing| easing.as_str() == s)
        .ok_or_else(|| format!("unknown easing '{}'", s))
    }
}

/// Trait for values that can be tweened.
pub trait Tweenable: Clone {
    /// Interpolate between two values.
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Tweenable for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Tweenable for u8 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        let from = *self as f64;
        let to = *other as f64;
        (from + (to - from) * t).round() as u8
    }
}

impl Tweenable for (u8, u8, u8) {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        (
            self.0.lerp(&other.0, t),
            self.1.lerp(&other.1, t),
            self.2.lerp(&other.2, t),
        )
    }
}

/// A tween for animating between two values.
#[derive(Debug, Clone)]
pub struct Tween<T: Tweenable> {
    from: T,
    to: T,
    duration: Duration,
    easing: Easing,
    started_at: Option<Instant>,
}

impl<T: Tweenable> Tween<T> {
    /// Create a new, unstarted tween.
    pub fn new(from: T, to: T, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            started_at: None,
        }
    }

    /// Start the animation at `now`.
    pub fn start_at(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Instant at which the tween reaches its end value.
    pub fn finishes_at(&self) -> Option<Instant> {
        self.started_at.map(|start| start + self.duration)
    }

    /// Whether the tween has reached its end value at `now`.
    pub fn is_complete_at(&self, now: Instant) -> bool {
        match self.started_at {
            Some(start) => now.saturating_duration_since(start) >= self.duration,
            None => false,
        }
    }

    /// Value of the tween at `now`.
    pub fn value_at(&self, now: Instant) -> T {
        let Some(started_at) = self.started_at else {
            return self.from.clone();
        };

        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            return self.to.clone();
        }

        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = self.easing.apply(progress);
        self.from.lerp(&self.to, eased)
    }
}
