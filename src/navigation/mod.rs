//! Headless onboarding navigation.
//!
//! This module holds everything the screens need to decide what to show:
//! - Static stage, goal and dashboard content
//! - The selection state (stage + goals)
//! - The screen state machine and its guarded funnel edges
//! - The fade-out / fade-in animator bracketing each transition
//!
//! No terminal or file I/O happens here.

pub mod animation;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod screen;
pub mod selection;
pub mod transition;

pub use animation::{Easing, Tween, Tweenable};
pub use catalog::{GoalId, StageId};
pub use controller::{Dialog, DialogKind, IntentOutcome, NavigationController, NavigationSnapshot};
pub use error::ParseIdError;
pub use screen::{Intent, Screen};
pub use selection::SelectionState;
pub use transition::{FadeEvent, FadeTimings, FadeTransition, TransitionPhase};
