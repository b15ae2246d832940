//! Single-writer façade over the projection services and the goal ledger.
//!
//! The engine owns goals, savings totals and the set of credited decision ids
//! behind one mutex. Credits compute a new state from a snapshot and swap it in
//! while the lock is held, so concurrent submissions are serialized and a
//! half-applied credit is never visible. Projections work on cloned snapshots.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use buybye_config::EngineConfig;
use buybye_core::{
    format_amount, Clock, CoreError, CreditResult, CreditStatus, CreditTerms, GoalLedger,
    GoalMatcher, GoalService, InvestmentProjector, LedgerState, PurchaseProjection, RateResolver,
    RetirementProjection, RetirementProjector, SettingsService, TimelineAllocator, TimelineReport,
};
use buybye_domain::{
    Goal, Horizon, PurchaseDecision, PurchaseOutcome, ReminderDelay, SavingsAggregate,
    UserSettings,
};

use crate::{clock::SystemClock, errors::EngineError};

/// Result of submitting a purchase decision.
#[derive(Debug, Clone, PartialEq)]
pub enum DecisionReceipt {
    /// The declined purchase was credited; `aggregate` is the new running total.
    Saved {
        projection: PurchaseProjection,
        goal_id: Option<String>,
        aggregate: SavingsAggregate,
    },
    /// The decision id had been credited before; nothing changed.
    AlreadyCredited,
    /// The user bought the item; nothing changed.
    Purchased,
    /// The user is unsure; they should be reminded at `remind_at`.
    Deferred {
        delay: ReminderDelay,
        remind_at: DateTime<Utc>,
    },
}

pub struct PurchaseEngine {
    config: EngineConfig,
    rates: RateResolver,
    settings_service: SettingsService,
    ledger: GoalLedger,
    clock: Arc<dyn Clock>,
    state: Mutex<LedgerState>,
}

impl PurchaseEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            rates: RateResolver::new(config.annual_work_hours),
            settings_service: SettingsService::new(config.annual_work_hours),
            ledger: GoalLedger::new(InvestmentProjector::new(config.investment_horizon_years)),
            clock: Arc::new(SystemClock),
            state: Mutex::new(LedgerState::default()),
            config,
        })
    }

    /// Seeds the engine with goals and totals loaded by the caller.
    pub fn with_state(
        self,
        goals: Vec<Goal>,
        aggregate: SavingsAggregate,
    ) -> Result<Self, EngineError> {
        let goals = GoalService::replace_all(goals)?;
        Ok(Self {
            state: Mutex::new(LedgerState::new(goals, aggregate)),
            ..self
        })
    }

    pub fn with_matcher(mut self, matcher: Box<dyn GoalMatcher>) -> Self {
        let projector = InvestmentProjector::new(self.config.investment_horizon_years);
        self.ledger = GoalLedger::with_matcher(projector, matcher);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn settings_service(&self) -> &SettingsService {
        &self.settings_service
    }

    /// Work-time and investment equivalents of `price`, shown before the user
    /// picks an outcome. Does not touch state.
    pub fn evaluate(
        &self,
        settings: &UserSettings,
        price: f64,
    ) -> Result<PurchaseProjection, EngineError> {
        let terms = self.terms(settings)?;
        let projection = PurchaseProjection::compute(price, terms, self.ledger.projector())?;
        debug!(price, hours = projection.work_time.hours, "purchase evaluated");
        Ok(projection)
    }

    /// Applies a resolved decision. Only `DontBuy` changes state, and a
    /// replayed decision id is acknowledged without crediting it again.
    pub fn submit(
        &self,
        settings: &UserSettings,
        decision: &PurchaseDecision,
    ) -> Result<DecisionReceipt, EngineError> {
        let terms = self.terms(settings)?;
        if let PurchaseOutcome::Unsure { remind_in } = decision.outcome {
            if !self.config.allows_reminder(remind_in.hours()) {
                warn!(decision = %decision.id, hours = remind_in.hours(), "unsupported reminder delay");
                return Err(CoreError::InvalidInput(format!(
                    "reminder delay of {remind_in} is not offered (allowed: {:?} hours)",
                    self.config.reminder_delays_hours
                ))
                .into());
            }
        }

        let mut state = self.lock()?;
        let CreditResult { state: next, status } =
            self.ledger.credit_decision(&state, decision, terms)?;

        let receipt = match status {
            CreditStatus::Credited {
                projection,
                goal_id,
            } => {
                *state = next;
                DecisionReceipt::Saved {
                    projection,
                    goal_id,
                    aggregate: state.aggregate.clone(),
                }
            }
            CreditStatus::Duplicate => DecisionReceipt::AlreadyCredited,
            CreditStatus::NotSaving(PurchaseOutcome::Unsure { remind_in }) => {
                let remind_at = self.clock.hours_from_now(remind_in.hours());
                info!(decision = %decision.id, %remind_at, "reminder scheduled");
                DecisionReceipt::Deferred {
                    delay: remind_in,
                    remind_at,
                }
            }
            CreditStatus::NotSaving(_) => DecisionReceipt::Purchased,
        };
        Ok(receipt)
    }

    /// Clones the current goals, totals and credited ids.
    pub fn snapshot(&self) -> Result<LedgerState, EngineError> {
        Ok(self.lock()?.clone())
    }

    pub fn goals(&self) -> Result<Vec<Goal>, EngineError> {
        Ok(self.lock()?.goals.clone())
    }

    pub fn aggregate(&self) -> Result<SavingsAggregate, EngineError> {
        Ok(self.lock()?.aggregate.clone())
    }

    /// Replaces the whole goal list. Totals and credited ids are kept.
    pub fn replace_goals(&self, goals: Vec<Goal>) -> Result<(), EngineError> {
        let goals = GoalService::replace_all(goals)?;
        self.lock()?.goals = goals;
        Ok(())
    }

    pub fn set_goal_saved_amount(&self, goal_id: &str, amount: f64) -> Result<(), EngineError> {
        let mut state = self.lock()?;
        GoalService::set_saved_amount(&mut state.goals, goal_id, amount)?;
        Ok(())
    }

    pub fn set_goal_selected(&self, goal_id: &str, selected: bool) -> Result<(), EngineError> {
        let mut state = self.lock()?;
        GoalService::set_selected(&mut state.goals, goal_id, selected)?;
        Ok(())
    }

    pub fn timeline(&self, horizon: Horizon) -> Result<TimelineReport, EngineError> {
        let goals = self.goals()?;
        Ok(TimelineAllocator::allocate(&goals, horizon))
    }

    pub fn timelines(&self) -> Result<Vec<TimelineReport>, EngineError> {
        let goals = self.goals()?;
        Ok(TimelineAllocator::allocate_all(&goals))
    }

    /// Retirement projection using the saved total of the selected goals.
    pub fn retirement(&self, settings: &UserSettings) -> Result<RetirementProjection, EngineError> {
        let goals = self.goals()?;
        let total_saved: f64 = GoalService::selected(&goals)
            .map(|goal| goal.saved_amount)
            .sum();
        Ok(RetirementProjector::project(
            total_saved,
            settings,
            self.clock.today(),
        )?)
    }

    /// Clears goals, totals and credited ids, as on logout or account deletion.
    pub fn reset(&self) -> Result<(), EngineError> {
        *self.lock()? = LedgerState::default();
        info!("engine state reset");
        Ok(())
    }

    /// One-line summary of what a price means, e.g. for a confirmation prompt.
    pub fn describe(&self, settings: &UserSettings, projection: &PurchaseProjection) -> String {
        format!(
            "{} costs {} of work; invested for {} years at {}% it could grow to {}",
            format_amount(projection.price, &settings.currency),
            projection.work_time,
            projection.horizon_years,
            settings.investment_return_rate,
            format_amount(projection.investment_value, &settings.currency),
        )
    }

    fn terms(&self, settings: &UserSettings) -> Result<CreditTerms, EngineError> {
        self.settings_service.validate(settings)?;
        Ok(CreditTerms {
            hourly_rate: self.rates.hourly_rate(settings),
            annual_return_percent: settings.investment_return_rate,
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, LedgerState>, EngineError> {
        self.state.lock().map_err(|_| EngineError::StatePoisoned)
    }
}
