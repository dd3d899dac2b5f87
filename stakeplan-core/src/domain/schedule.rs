//! StakingPlan — an immutable schedule plus funding totals.

use serde::{Deserialize, Serialize};

use super::params::PlanParams;
use super::trade::TradeRecord;

/// A complete staking schedule: one [`TradeRecord`] per trade, in order,
/// plus the daily and weekly funding requirements.
///
/// Built once by the generator and immutable afterwards — fields are
/// private and exposed through accessors only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakingPlan {
    params: PlanParams,
    records: Vec<TradeRecord>,
    daily_required: f64,
    weekly_required: f64,
}

impl StakingPlan {
    pub(crate) fn new(
        params: PlanParams,
        records: Vec<TradeRecord>,
        daily_required: f64,
        weekly_required: f64,
    ) -> Self {
        Self {
            params,
            records,
            daily_required,
            weekly_required,
        }
    }

    /// The parameters this plan was generated from.
    pub fn params(&self) -> &PlanParams {
        &self.params
    }

    /// Schedule rows, ordered by trade number.
    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    /// Capital needed to fund one full day of the schedule.
    ///
    /// Sums the rounded wagers so the total matches the printed rows
    /// exactly (round-then-sum, never sum-then-round).
    pub fn daily_required(&self) -> f64 {
        self.daily_required
    }

    /// `daily_required * 7`.
    pub fn weekly_required(&self) -> f64 {
        self.weekly_required
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
