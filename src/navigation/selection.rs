//! The user's onboarding picks.

use serde::{Deserialize, Serialize};

use super::catalog::{GoalId, StageId};

/// Stage and goals chosen so far.
///
/// Goals behave as a set but remember insertion order, which the
/// confirmation summary and the JSON snapshot use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    stage: Option<StageId>,
    goals: Vec<GoalId>,
}

impl SelectionState {
    /// Empty selection: no stage, no goals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected stage, if any.
    pub fn stage(&self) -> Option<StageId> {
        self.stage
    }

    /// Selected goals in the order they were picked.
    pub fn goals(&self) -> &[GoalId] {
        &self.goals
    }

    /// Whether `goal` is currently selected.
    pub fn contains_goal(&self, goal: GoalId) -> bool {
        self.goals.contains(&goal)
    }

    /// Number of selected goals.
    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }

    /// Overwrite the stage.
    pub(crate) fn set_stage(&mut self, stage: StageId) {
        self.stage = Some(stage);
    }

    /// Flip membership of `goal`. Returns true if it is now selected.
    pub(crate) fn toggle_goal(&mut self, goal: GoalId) -> bool {
        if let Some(pos) = self.goals.iter().position(|g| *g == goal) {
            self.goals.remove(pos);
            false
        } else {
            self.goals.push(goal);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selection_is_empty() {
        let selection = SelectionState::new();
        assert_eq!(selection.stage(), None);
        assert!(selection.goals().is_empty());
    }

    #[test]
    fn test_set_stage_overwrites() {
        let mut selection = SelectionState::new();
        selection.set_stage(StageId::Perimenopause);
        selection.set_stage(StageId::Postmenopause);
        assert_eq!(selection.stage(), Some(StageId::Postmenopause));
    }

    #[test]
    fn test_toggle_goal_keeps_insertion_order() {
        let mut selection = SelectionState::new();
        assert!(selection.toggle_goal(GoalId::Sleep));
        assert!(selection.toggle_goal(GoalId::Fitness));
        assert!(selection.toggle_goal(GoalId::Mood));
        assert!(!selection.toggle_goal(GoalId::Fitness));
        assert_eq!(selection.goals(), &[GoalId::Sleep, GoalId::Mood]);
        assert_eq!(selection.goal_count(), 2);
        assert!(!selection.contains_goal(GoalId::Fitness));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut selection = SelectionState::new();
        selection.set_stage(StageId::Menopause);
        selection.toggle_goal(GoalId::Mood);
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "stage": "menopause", "goals": ["mood"] })
        );
    }
}
