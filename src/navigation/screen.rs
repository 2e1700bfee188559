//! Screens of the onboarding funnel and the intents that move between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseIdError;

/// One of the four mutually exclusive views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Logo, feature list and the entry buttons
    #[default]
    Welcome,
    /// Menopause stage picker
    #[serde(rename = "stage")]
    StageSelect,
    /// Wellness goal picker
    #[serde(rename = "goals")]
    GoalSelect,
    /// Static health dashboard mock
    Dashboard,
}

impl Screen {
    /// All screens in funnel order.
    pub const ALL: [Screen; 4] = [
        Screen::Welcome,
        Screen::StageSelect,
        Screen::GoalSelect,
        Screen::Dashboard,
    ];

    /// Short identifier used in logs, snapshots and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::StageSelect => "stage",
            Self::GoalSelect => "goals",
            Self::Dashboard => "dashboard",
        }
    }

    /// Intents offered on this screen, in the order the UI lists them.
    pub fn intents(&self) -> &'static [Intent] {
        match self {
            Self::Welcome => &[Intent::Start, Intent::Skip],
            Self::StageSelect => &[Intent::Continue],
            Self::GoalSelect => &[Intent::CompleteSetup],
            Self::Dashboard => &[Intent::Restart],
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| ParseIdError::UnknownScreen(s.to_string()))
    }
}

/// A funnel edge the UI can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Welcome -> StageSelect
    Start,
    /// Welcome -> Dashboard, for returning users
    Skip,
    /// StageSelect -> GoalSelect, requires a stage
    Continue,
    /// GoalSelect -> Dashboard, requires a goal and a confirmation
    CompleteSetup,
    /// Dashboard -> Welcome
    Restart,
}

impl Intent {
    /// The (from, to) pair this intent travels.
    pub fn edge(&self) -> (Screen, Screen) {
        match self {
            Self::Start => (Screen::Welcome, Screen::StageSelect),
            Self::Skip => (Screen::Welcome, Screen::Dashboard),
            Self::Continue => (Screen::StageSelect, Screen::GoalSelect),
            Self::CompleteSetup => (Screen::GoalSelect, Screen::Dashboard),
            Self::Restart => (Screen::Dashboard, Screen::Welcome),
        }
    }

    /// Screen this intent is offered on.
    pub fn source(&self) -> Screen {
        self.edge().0
    }

    /// Screen this intent leads to.
    pub fn target(&self) -> Screen {
        self.edge().1
    }

    /// Button label the UI shows for this intent.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "Start Your Journey",
            Self::Skip => "I already have an account",
            Self::Continue => "Continue",
            Self::CompleteSetup => "Complete Setup",
            Self::Restart => "← Back to Welcome",
        }
    }
}
