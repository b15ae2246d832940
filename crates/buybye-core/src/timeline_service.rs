//! Spreads goal targets evenly across a one, two or three year horizon.

use buybye_domain::{Goal, Horizon};
use tracing::debug;

/// Yearly savings target and progress for one goal or for the selected set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineFigures {
    pub target: f64,
    pub saved: f64,
    /// `round(target / horizon)`; independent of what is already saved.
    pub yearly_target: f64,
    /// `saved / target × 100` clamped to `[0, 100]`; zero when there is no target.
    pub progress_percent: f64,
}

impl TimelineFigures {
    pub fn compute(target: f64, saved: f64, horizon: Horizon) -> Self {
        let target = finite_or_zero(target);
        let saved = finite_or_zero(saved);
        let yearly_target = (target / f64::from(horizon.years())).round();
        let progress_percent = if target > 0.0 {
            (saved / target * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            target,
            saved,
            yearly_target,
            progress_percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalTimeline {
    pub goal_id: String,
    pub title: String,
    pub figures: TimelineFigures,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineReport {
    pub horizon: Horizon,
    pub total: TimelineFigures,
    pub goals: Vec<GoalTimeline>,
}

pub struct TimelineAllocator;

impl TimelineAllocator {
    /// Builds per-goal and aggregate figures over the selected goals in `goals`.
    /// Unselected goals are ignored; an absent target counts as zero.
    pub fn allocate(goals: &[Goal], horizon: Horizon) -> TimelineReport {
        let selected: Vec<&Goal> = goals.iter().filter(|goal| goal.selected).collect();
        let total_target: f64 = selected.iter().map(|goal| goal.target_or_zero()).sum();
        let total_saved: f64 = selected.iter().map(|goal| goal.saved_amount).sum();

        let per_goal = selected
            .iter()
            .map(|goal| GoalTimeline {
                goal_id: goal.id.clone(),
                title: goal.title.clone(),
                figures: TimelineFigures::compute(goal.target_or_zero(), goal.saved_amount, horizon),
            })
            .collect();

        let total = TimelineFigures::compute(total_target, total_saved, horizon);
        debug!(
            horizon = horizon.years(),
            goals = selected.len(),
            yearly_target = total.yearly_target,
            "timeline allocated"
        );
        TimelineReport {
            horizon,
            total,
            goals: per_goal,
        }
    }

    /// Reports for every supported horizon, shortest first.
    pub fn allocate_all(goals: &[Goal]) -> Vec<TimelineReport> {
        Horizon::ALL
            .iter()
            .map(|horizon| Self::allocate(goals, *horizon))
            .collect()
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
