use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Goal not found: {0}")]
    GoalNotFound(String),
    #[error("Duplicate goal id: {0}")]
    DuplicateGoalId(String),
}
