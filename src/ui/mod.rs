//! Terminal front end for the onboarding flow.
//!
//! Two presentations share the same widgets: the interactive full-screen
//! TUI and a headless walkthrough that prints each step.

pub mod colors;
pub mod keyboard;
pub mod tui;
pub mod walkthrough;

pub use colors::Theme;
pub use keyboard::{KeyBindings, UiAction};
pub use walkthrough::{run_walkthrough, WalkthroughError, WalkthroughOptions};
