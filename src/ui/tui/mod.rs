//! Ratatui-based full-screen onboarding.
//!
//! Provides:
//! - Screen widgets with fade-aware colours
//! - The application state and tokio event loop

pub mod app;
pub mod screens;

pub use app::{run, App, AppState};
pub use screens::{
    DashboardWidget, DialogWidget, GoalSelectWidget, StageSelectWidget, WelcomeWidget,
};
