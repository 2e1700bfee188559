//! Static content tables for the onboarding funnel and dashboard.
//!
//! Everything here is read-only reference data. The controller only stores
//! identifiers; screens look the rest up from these tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseIdError;

/// Application name shown on the welcome screen.
pub const APP_NAME: &str = "Amazora";

/// Tagline under the logo.
pub const TAGLINE: &str = "Your Menopause Journey Starts Here";

/// Self-reported menopause phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageId {
    Perimenopause,
    Menopause,
    Postmenopause,
}

impl StageId {
    /// All stages in display order.
    pub const ALL: [StageId; 3] = [
        StageId::Perimenopause,
        StageId::Menopause,
        StageId::Postmenopause,
    ];

    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Perimenopause => "perimenopause",
            Self::Menopause => "menopause",
            Self::Postmenopause => "postmenopause",
        }
    }

    /// Position in [`StageId::ALL`] and [`STAGES`].
    pub fn index(&self) -> usize {
        match self {
            Self::Perimenopause => 0,
            Self::Menopause => 1,
            Self::Postmenopause => 2,
        }
    }

    /// Display content for this stage.
    pub fn info(&self) -> &'static StageInfo {
        &STAGES[self.index()]
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StageId::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| ParseIdError::UnknownStage(s.to_string()))
    }
}

/// A wellness objective the user can pick (multi-select).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalId {
    Symptoms,
    Fitness,
    Weight,
    Sleep,
    Mood,
    Community,
}

impl GoalId {
    /// All goals in display order.
    pub const ALL: [GoalId; 6] = [
        GoalId::Symptoms,
        GoalId::Fitness,
        GoalId::Weight,
        GoalId::Sleep,
        GoalId::Mood,
        GoalId::Community,
    ];

    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Symptoms => "symptoms",
            Self::Fitness => "fitness",
            Self::Weight => "weight",
            Self::Sleep => "sleep",
            Self::Mood => "mood",
            Self::Community => "community",
        }
    }

    /// Position in [`GoalId::ALL`] and [`GOALS`].
    pub fn index(&self) -> usize {
        match self {
            Self::Symptoms => 0,
            Self::Fitness => 1,
            Self::Weight => 2,
            Self::Sleep => 3,
            Self::Mood => 4,
            Self::Community => 5,
        }
    }

    /// Display content for this goal.
    pub fn info(&self) -> &'static GoalInfo {
        &GOALS[self.index()]
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalId::ALL
            .into_iter()
            .find(|goal| goal.as_str() == s)
            .ok_or_else(|| ParseIdError::UnknownGoal(s.to_string()))
    }
}

/// Stage card content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageInfo {
    pub id: StageId,
    pub title: &'static str,
    pub description: &'static str,
    pub age_range: &'static str,
}

/// Goal card content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalInfo {
    pub id: GoalId,
    pub title: &'static str,
    pub icon: &'static str,
}

/// Stage cards, in display order.
pub const STAGES: [StageInfo; 3] = [
    StageInfo {
        id: StageId::Perimenopause,
        title: "Perimenopause",
        description: "Irregular periods, mood changes, hot flashes beginning",
        age_range: "Usually 40-51",
    },
    StageInfo {
        id: StageId::Menopause,
        title: "Menopause",
        description: "12 months without a period, full hormonal changes",
        age_range: "Usually 51+",
    },
    StageInfo {
        id: StageId::Postmenopause,
        title: "Post-Menopause",
        description: "Years after menopause, focus on long-term health",
        age_range: "55+",
    },
];

/// Goal cards, in display order.
pub const GOALS: [GoalInfo; 6] = [
    GoalInfo {
        id: GoalId::Symptoms,
        title: "Manage Symptoms",
        icon: "🌡️",
    },
    GoalInfo {
        id: GoalId::Fitness,
        title: "Stay Active",
        icon: "💪",
    },
    GoalInfo {
        id: GoalId::Weight,
        title: "Healthy Weight",
        icon: "⚖️",
    },
    GoalInfo {
        id: GoalId::Sleep,
        title: "Better Sleep",
        icon: "😴",
    },
    GoalInfo {
        id: GoalId::Mood,
        title: "Mood Balance",
        icon: "🧘",
    },
    GoalInfo {
        id: GoalId::Community,
        title: "Find Support",
        icon: "👥",
    },
];

/// Welcome card heading and body.
pub const WELCOME_CARD: (&str, &str) = (
    "Designed for Women 40+",
    "Track symptoms, discover workouts, connect with others, \
     and get AI-powered guidance through your menopause journey.",
);

/// Feature badges on the welcome screen as (icon, label).
pub const FEATURES: [(&str, &str); 4] = [
    ("🤖", "AI Coach"),
    ("📊", "Symptom Tracking"),
    ("💪", "Fitness Library"),
    ("👥", "Community"),
];

/// Which dashboard tile a health card occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthCardKind {
    Symptoms,
    Stress,
    Nutrition,
    Exercise,
}

/// A static dashboard tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthCard {
    pub kind: HealthCardKind,
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub subtext: &'static str,
}

/// Mock "Your Health Today" tiles.
pub const HEALTH_CARDS: [HealthCard; 4] = [
    HealthCard {
        kind: HealthCardKind::Symptoms,
        icon: "🌡️",
        label: "Symptoms",
        value: "2",
        subtext: "New today",
    },
    HealthCard {
        kind: HealthCardKind::Stress,
        icon: "😌",
        label: "Stress",
        value: "Low",
        subtext: "Better than yesterday",
    },
    HealthCard {
        kind: HealthCardKind::Nutrition,
        icon: "🍽️",
        label: "Nutrition",
        value: "Good",
        subtext: "1892 calories today",
    },
    HealthCard {
        kind: HealthCardKind::Exercise,
        icon: "💪",
        label: "Exercise",
        value: "30 min",
        subtext: "1 workout today",
    },
];

/// Daily insight shown in the dashboard body.
pub const COACH_INSIGHT: &str = "Your digestive symptoms appear 2 hours after meals. \
     Consider smaller, more frequent meals for better comfort.";

/// Message behind the floating coach bubble.
pub const COACH_GREETING: &str = "Hi! I'm your menopause companion. I notice you're exploring \
     the dashboard. Great job starting your journey! 💜";
