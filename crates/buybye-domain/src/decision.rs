//! Purchase decisions handed to the engine by the upstream classifier flow.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::ReminderDelay;

/// Identifies a decision event so it is credited at most once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DecisionId(pub Uuid);

impl DecisionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DecisionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DecisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The user's resolved choice about a priced item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PurchaseOutcome {
    Buy,
    DontBuy,
    #[serde(rename_all = "camelCase")]
    Unsure {
        remind_in: ReminderDelay,
    },
}

impl PurchaseOutcome {
    /// Only declined purchases are credited to goals and totals.
    pub fn is_saving(&self) -> bool {
        matches!(self, PurchaseOutcome::DontBuy)
    }
}

impl fmt::Display for PurchaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseOutcome::Buy => f.write_str("buy"),
            PurchaseOutcome::DontBuy => f.write_str("don't buy"),
            PurchaseOutcome::Unsure { remind_in } => write!(f, "unsure (remind in {remind_in})"),
        }
    }
}

/// Ephemeral decision event; never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDecision {
    pub id: DecisionId,
    pub product_name: String,
    pub estimated_price: f64,
    pub category: String,
    pub outcome: PurchaseOutcome,
}

impl PurchaseDecision {
    pub fn new(
        product_name: impl Into<String>,
        estimated_price: f64,
        category: impl Into<String>,
        outcome: PurchaseOutcome,
    ) -> Self {
        Self {
            id: DecisionId::new(),
            product_name: product_name.into(),
            estimated_price,
            category: category.into(),
            outcome,
        }
    }

    /// Shorthand for a declined purchase.
    pub fn declined(
        product_name: impl Into<String>,
        estimated_price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self::new(
            product_name,
            estimated_price,
            category,
            PurchaseOutcome::DontBuy,
        )
    }

    pub fn with_id(mut self, id: DecisionId) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_tags_match_wire_names() {
        let json = serde_json::to_value(PurchaseOutcome::DontBuy).unwrap();
        assert_eq!(json["type"], "dontBuy");

        let unsure: PurchaseOutcome =
            serde_json::from_str(r#"{"type":"unsure","remindIn":48}"#).unwrap();
        assert_eq!(
            unsure,
            PurchaseOutcome::Unsure {
                remind_in: ReminderDelay(48)
            }
        );
    }

    #[test]
    fn only_dont_buy_counts_as_saving() {
        assert!(PurchaseOutcome::DontBuy.is_saving());
        assert!(!PurchaseOutcome::Buy.is_saving());
        assert!(!PurchaseOutcome::Unsure {
            remind_in: ReminderDelay::default()
        }
        .is_saving());
    }

    #[test]
    fn fresh_decisions_get_distinct_ids() {
        let a = PurchaseDecision::declined("Headphones", 120.0, "Electronics");
        let b = PurchaseDecision::declined("Headphones", 120.0, "Electronics");
        assert_ne!(a.id, b.id);
        assert_eq!(a.clone().with_id(b.id).id, b.id);
    }
}
