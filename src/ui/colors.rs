//! Colour tokens for the onboarding screens.
//!
//! The TUI works with raw RGB triples so the fade can blend every
//! foreground towards the background; plain output uses [`Theme`].

use owo_colors::Rgb;
use ratatui::style::Color;

use crate::navigation::catalog::HealthCardKind;
use crate::navigation::{GoalId, StageId, Tweenable};

/// An 8-bit RGB triple.
pub type Rgb8 = (u8, u8, u8);

/// Brand purple (#6B46C1)
pub const PRIMARY: Rgb8 = (107, 70, 193);
/// Lighter brand purple (#8B5CF6)
pub const PRIMARY_LIGHT: Rgb8 = (139, 92, 246);
pub const WHITE: Rgb8 = (255, 255, 255);
/// Screen background (#1F2937)
pub const DARK: Rgb8 = (31, 41, 55);
/// Secondary text (#9CA3AF)
pub const GRAY: Rgb8 = (156, 163, 175);
/// Borders (#E5E7EB)
pub const LIGHT_GRAY: Rgb8 = (229, 231, 235);
/// Selection marks (#10B981)
pub const SUCCESS: Rgb8 = (16, 185, 129);

/// Card tint for a stage.
pub fn stage_color(stage: StageId) -> Rgb8 {
    match stage {
        StageId::Perimenopause => (243, 232, 255),
        StageId::Menopause => (237, 233, 254),
        StageId::Postmenopause => (221, 214, 254),
    }
}

/// Card tint for a goal.
pub fn goal_color(goal: GoalId) -> Rgb8 {
    match goal {
        GoalId::Symptoms => health_card_color(HealthCardKind::Symptoms),
        GoalId::Fitness => health_card_color(HealthCardKind::Exercise),
        GoalId::Weight => health_card_color(HealthCardKind::Nutrition),
        GoalId::Sleep => (240, 249, 255),
        GoalId::Mood => health_card_color(HealthCardKind::Stress),
        GoalId::Community => (254, 243, 199),
    }
}

/// Tint for a dashboard tile.
pub fn health_card_color(kind: HealthCardKind) -> Rgb8 {
    match kind {
        HealthCardKind::Symptoms => (254, 226, 226),
        HealthCardKind::Stress => (220, 252, 231),
        HealthCardKind::Nutrition => (207, 250, 254),
        HealthCardKind::Exercise => (224, 231, 255),
    }
}

/// `color` seen at `opacity` over the dark background.
pub fn faded(color: Rgb8, opacity: f64) -> Color {
    let (r, g, b) = DARK.lerp(&color, opacity.clamp(0.0, 1.0));
    Color::Rgb(r, g, b)
}

/// 24-bit colours for the plain-text walkthrough.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Headings and step banners
    pub brand: Rgb,
    /// Selected items
    pub success: Rgb,
    /// Secondary text
    pub muted: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            brand: Rgb(PRIMARY_LIGHT.0, PRIMARY_LIGHT.1, PRIMARY_LIGHT.2),
            success: Rgb(SUCCESS.0, SUCCESS.1, SUCCESS.2),
            muted: Rgb(GRAY.0, GRAY.1, GRAY.2),
        }
    }
}
