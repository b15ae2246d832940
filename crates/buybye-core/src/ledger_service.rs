//! Exactly-once crediting of declined purchases to goals and running totals.

use std::collections::BTreeSet;

use buybye_domain::{DecisionId, Goal, PurchaseDecision, PurchaseOutcome, SavingsAggregate, WorkTime};
use tracing::{debug, info, warn};

use crate::{
    goal_matcher::{GoalMatcher, SubstringMatcher},
    investment_service::InvestmentProjector,
    validation::positive,
    work_time_service::WorkTimeConverter,
    CoreError,
};

/// Goals and totals as owned by the engine's caller, plus the ids of every
/// decision already credited against them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerState {
    pub goals: Vec<Goal>,
    pub aggregate: SavingsAggregate,
    credited: BTreeSet<DecisionId>,
}

impl LedgerState {
    pub fn new(goals: Vec<Goal>, aggregate: SavingsAggregate) -> Self {
        Self {
            goals,
            aggregate,
            credited: BTreeSet::new(),
        }
    }

    pub fn was_credited(&self, id: DecisionId) -> bool {
        self.credited.contains(&id)
    }

    pub fn credited_count(&self) -> usize {
        self.credited.len()
    }
}

/// Wage and return rate in force when a decision is projected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreditTerms {
    pub hourly_rate: f64,
    pub annual_return_percent: f64,
}

/// Work-time and investment equivalents of a price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchaseProjection {
    pub price: f64,
    pub hourly_rate: f64,
    pub work_time: WorkTime,
    pub investment_value: f64,
    pub horizon_years: u32,
}

impl PurchaseProjection {
    pub fn compute(
        price: f64,
        terms: CreditTerms,
        projector: &InvestmentProjector,
    ) -> Result<Self, CoreError> {
        let price = positive(price, "estimated price")?;
        let work_time = WorkTimeConverter::convert(price, terms.hourly_rate);
        let investment_value = projector.value_if_invested(price, terms.annual_return_percent)?;
        Ok(Self {
            price,
            hourly_rate: terms.hourly_rate,
            work_time,
            investment_value,
            horizon_years: projector.horizon_years(),
        })
    }
}

/// What a credit attempt did.
#[derive(Debug, Clone, PartialEq)]
pub enum CreditStatus {
    Credited {
        projection: PurchaseProjection,
        goal_id: Option<String>,
    },
    /// The decision id was already credited; state is unchanged.
    Duplicate,
    /// The outcome was not a declined purchase; state is unchanged.
    NotSaving(PurchaseOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreditResult {
    pub state: LedgerState,
    pub status: CreditStatus,
}

impl CreditResult {
    pub fn is_credited(&self) -> bool {
        matches!(self.status, CreditStatus::Credited { .. })
    }
}

/// Applies declined purchases to goals and totals. The only mutating operation
/// of the engine; it never touches `state` in place, so a failed or rejected
/// credit leaves the caller's copy untouched.
pub struct GoalLedger {
    matcher: Box<dyn GoalMatcher>,
    projector: InvestmentProjector,
}

impl Default for GoalLedger {
    fn default() -> Self {
        Self::new(InvestmentProjector::default())
    }
}

impl GoalLedger {
    pub fn new(projector: InvestmentProjector) -> Self {
        Self::with_matcher(projector, Box::new(SubstringMatcher))
    }

    pub fn with_matcher(projector: InvestmentProjector, matcher: Box<dyn GoalMatcher>) -> Self {
        Self { matcher, projector }
    }

    pub fn projector(&self) -> &InvestmentProjector {
        &self.projector
    }

    /// Credits `decision` against `state` and returns the resulting state.
    ///
    /// Only `DontBuy` outcomes change anything. Replaying an already credited
    /// decision id returns the state unchanged with [`CreditStatus::Duplicate`].
    pub fn credit_decision(
        &self,
        state: &LedgerState,
        decision: &PurchaseDecision,
        terms: CreditTerms,
    ) -> Result<CreditResult, CoreError> {
        validate_decision(decision)?;

        if !decision.outcome.is_saving() {
            debug!(decision = %decision.id, outcome = %decision.outcome, "decision not credited");
            return Ok(CreditResult {
                state: state.clone(),
                status: CreditStatus::NotSaving(decision.outcome),
            });
        }
        if state.was_credited(decision.id) {
            warn!(decision = %decision.id, "decision already credited; ignoring replay");
            return Ok(CreditResult {
                state: state.clone(),
                status: CreditStatus::Duplicate,
            });
        }

        let projection = PurchaseProjection::compute(decision.estimated_price, terms, &self.projector)?;

        let mut next = state.clone();
        next.aggregate.money_saved += projection.price;
        next.aggregate.work_time_saved = next.aggregate.work_time_saved + projection.work_time;
        next.aggregate.investment_potential += projection.investment_value;

        let matched = self
            .matcher
            .find_match(&decision.category, &next.goals)
            .and_then(|idx| next.goals.get_mut(idx));
        let goal_id = match matched {
            Some(goal) => {
                goal.saved_amount += projection.price;
                Some(goal.id.clone())
            }
            None => None,
        };
        next.credited.insert(decision.id);

        info!(
            decision = %decision.id,
            amount = projection.price,
            goal = goal_id.as_deref().unwrap_or("-"),
            "decision credited"
        );
        Ok(CreditResult {
            state: next,
            status: CreditStatus::Credited {
                projection,
                goal_id,
            },
        })
    }
}

fn validate_decision(decision: &PurchaseDecision) -> Result<(), CoreError> {
    if let Err(err) = positive(decision.estimated_price, "estimated price") {
        warn!(decision = %decision.id, %err, "rejected decision");
        return Err(err);
    }
    if decision.category.trim().is_empty() {
        warn!(decision = %decision.id, "rejected decision with blank category");
        return Err(CoreError::InvalidInput("category must not be blank".into()));
    }
    Ok(())
}
