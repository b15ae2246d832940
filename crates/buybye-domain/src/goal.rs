//! Domain types representing user savings goals.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-defined savings target with an optional monetary cap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    /// Free text; also used to match purchase categories.
    pub title: String,
    /// Display token, opaque to the engine.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub selected: bool,
    /// `None` means the goal is unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,
    #[serde(default)]
    pub saved_amount: f64,
}

impl Goal {
    pub fn new(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            icon: icon.into(),
            selected: true,
            target_amount: None,
            saved_amount: 0.0,
        }
    }

    pub fn with_target(mut self, target: f64) -> Self {
        self.target_amount = Some(target);
        self
    }

    pub fn with_saved(mut self, saved: f64) -> Self {
        self.saved_amount = saved;
        self
    }

    pub fn deselected(mut self) -> Self {
        self.selected = false;
        self
    }

    /// Target used in sums; an absent target counts as zero.
    pub fn target_or_zero(&self) -> f64 {
        self.target_amount.unwrap_or(0.0)
    }
}
