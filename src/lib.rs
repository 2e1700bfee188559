//! Amazora - menopause fitness & wellness onboarding
//!
//! This library exposes the onboarding navigation core and its terminal
//! front end for integration testing and embedding.

pub mod config;
pub mod logging;
pub mod navigation;
pub mod ui;
