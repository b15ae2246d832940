//! Goal-set edits that happen outside decision crediting.

use std::collections::HashSet;

use buybye_domain::Goal;
use tracing::info;

use crate::{validation::non_negative, CoreError};

pub struct GoalService;

impl GoalService {
    /// Validates a full replacement goal list. Goal stores replace the whole
    /// list rather than patching fields, so the result is the new list as-is.
    pub fn replace_all(goals: Vec<Goal>) -> Result<Vec<Goal>, CoreError> {
        Self::validate(&goals)?;
        info!(count = goals.len(), "goal set replaced");
        Ok(goals)
    }

    fn validate(goals: &[Goal]) -> Result<(), CoreError> {
        let mut seen = HashSet::with_capacity(goals.len());
        for goal in goals {
            if goal.id.trim().is_empty() {
                return Err(CoreError::InvalidInput(format!(
                    "goal `{}` has an empty id",
                    goal.title
                )));
            }
            if !seen.insert(goal.id.as_str()) {
                return Err(CoreError::DuplicateGoalId(goal.id.clone()));
            }
            if let Some(target) = goal.target_amount {
                non_negative(target, "target amount")?;
            }
            non_negative(goal.saved_amount, "saved amount")?;
        }
        Ok(())
    }

    /// Overwrites a goal's saved amount after a manual user edit.
    pub fn set_saved_amount(goals: &mut [Goal], goal_id: &str, amount: f64) -> Result<(), CoreError> {
        let amount = non_negative(amount, "saved amount")?;
        let goal = Self::goal_mut(goals, goal_id)?;
        goal.saved_amount = amount;
        Ok(())
    }

    pub fn set_selected(goals: &mut [Goal], goal_id: &str, selected: bool) -> Result<(), CoreError> {
        Self::goal_mut(goals, goal_id)?.selected = selected;
        Ok(())
    }

    pub fn selected(goals: &[Goal]) -> impl Iterator<Item = &Goal> {
        goals.iter().filter(|goal| goal.selected)
    }

    /// Sum of saved amounts across every goal, selected or not.
    pub fn total_saved(goals: &[Goal]) -> f64 {
        goals.iter().map(|goal| goal.saved_amount).sum()
    }

    fn goal_mut<'a>(goals: &'a mut [Goal], goal_id: &str) -> Result<&'a mut Goal, CoreError> {
        goals
            .iter_mut()
            .find(|goal| goal.id == goal_id)
            .ok_or_else(|| CoreError::GoalNotFound(goal_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_rejects_duplicate_ids() {
        let a = Goal::new("Travel", "plane");
        let mut b = Goal::new("Decor", "lamp");
        b.id = a.id.clone();
        let err = GoalService::replace_all(vec![a.clone(), b]).unwrap_err();
        assert_eq!(err, CoreError::DuplicateGoalId(a.id));
    }

    #[test]
    fn replace_rejects_negative_amounts() {
        let goal = Goal::new("Travel", "plane").with_target(-5.0);
        assert!(matches!(
            GoalService::replace_all(vec![goal]),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn saved_amount_edit_targets_one_goal() {
        let mut goals = vec![Goal::new("Travel", "plane"), Goal::new("Decor", "lamp")];
        let id = goals[1].id.clone();
        GoalService::set_saved_amount(&mut goals, &id, 42.0).unwrap();
        assert_eq!(goals[1].saved_amount, 42.0);
        assert_eq!(goals[0].saved_amount, 0.0);
        assert_eq!(
            GoalService::set_saved_amount(&mut goals, "missing", 1.0),
            Err(CoreError::GoalNotFound("missing".into()))
        );
    }

    #[test]
    fn selection_filters_goals() {
        let mut goals = vec![Goal::new("Travel", "plane"), Goal::new("Decor", "lamp")];
        let id = goals[0].id.clone();
        GoalService::set_selected(&mut goals, &id, false).unwrap();
        let titles: Vec<_> = GoalService::selected(&goals).map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Decor"]);
    }
}
