//! Errors raised when turning text into navigation identifiers.

use thiserror::Error;

/// A textual identifier did not name a known screen, stage or goal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIdError {
    /// Not one of `welcome`, `stage`, `goals`, `dashboard`.
    #[error("unknown screen '{0}' (expected welcome, stage, goals or dashboard)")]
    UnknownScreen(String),

    /// Not one of the menopause stage ids.
    #[error("unknown menopause stage '{0}' (expected perimenopause, menopause or postmenopause)")]
    UnknownStage(String),

    /// Not one of the health goal ids.
    #[error("unknown goal '{0}' (expected symptoms, fitness, weight, sleep, mood or community)")]
    UnknownGoal(String),
}
