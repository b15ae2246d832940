//! Category to goal matching strategies.

use buybye_domain::Goal;

/// Picks the goal a declined purchase should be credited to.
pub trait GoalMatcher: Send + Sync {
    /// Returns the index of the matching goal in `goals`, if any. An index
    /// past the end of `goals` is treated as no match.
    fn find_match(&self, category: &str, goals: &[Goal]) -> Option<usize>;

    fn match_goal<'a>(&self, category: &str, goals: &'a [Goal]) -> Option<&'a Goal> {
        self.find_match(category, goals).and_then(|idx| goals.get(idx))
    }
}

/// Loose heuristic: a goal matches when its title contains the category or the
/// category contains its title, ignoring case. First match in list order wins.
/// Goals with a blank title never match.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstringMatcher;

impl GoalMatcher for SubstringMatcher {
    fn find_match(&self, category: &str, goals: &[Goal]) -> Option<usize> {
        let category = category.trim().to_lowercase();
        if category.is_empty() {
            return None;
        }
        goals.iter().position(|goal| {
            let title = goal.title.trim().to_lowercase();
            !title.is_empty() && (title.contains(&category) || category.contains(&title))
        })
    }
}

/// Matches only when the title equals the category, ignoring case and
/// surrounding whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactTitleMatcher;

impl GoalMatcher for ExactTitleMatcher {
    fn find_match(&self, category: &str, goals: &[Goal]) -> Option<usize> {
        let category = category.trim();
        if category.is_empty() {
            return None;
        }
        goals
            .iter()
            .position(|goal| goal.title.trim().eq_ignore_ascii_case(category))
    }
}
