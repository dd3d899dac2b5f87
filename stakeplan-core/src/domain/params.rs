//! PlanParams — validated inputs for schedule generation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected plan parameters.
///
/// Validation is fail-fast: every variant is caught before any computation
/// runs, so a caller never sees a partial schedule or NaN/infinity
/// propagated through the records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("num_trades must be at least 1")]
    ZeroTrades,

    #[error("profit_pct must be a finite number greater than 0, got {0}")]
    NonPositiveProfitPct(f64),

    #[error("desired_profit must be a finite number greater than 0, got {0}")]
    NonPositiveTarget(f64),
}

/// Inputs for a single staking plan, immutable for the run.
///
/// `profit_pct` is in percent units (2.0 = 2%); `desired_profit` is in
/// currency units. Construct via [`PlanParams::new`] for validation;
/// deserialized values must pass through [`PlanParams::validate`] before
/// reaching the generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanParams {
    pub num_trades: u32,
    pub profit_pct: f64,
    pub desired_profit: f64,
}

impl PlanParams {
    pub fn new(num_trades: u32, profit_pct: f64, desired_profit: f64) -> Result<Self, ParamError> {
        let params = Self {
            num_trades,
            profit_pct,
            desired_profit,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check all three inputs, first failure wins.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.num_trades == 0 {
            return Err(ParamError::ZeroTrades);
        }
        if !self.profit_pct.is_finite() || self.profit_pct <= 0.0 {
            return Err(ParamError::NonPositiveProfitPct(self.profit_pct));
        }
        if !self.desired_profit.is_finite() || self.desired_profit <= 0.0 {
            return Err(ParamError::NonPositiveTarget(self.desired_profit));
        }
        Ok(())
    }

    /// Per-trade return rate as a fraction (2.0% → 0.02).
    pub fn rate(&self) -> f64 {
        self.profit_pct / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_params_pass() {
        let params = PlanParams::new(10, 2.0, 50.0).unwrap();
        assert_eq!(params.num_trades, 10);
        assert_eq!(params.rate(), 0.02);
    }

    #[test]
    fn zero_trades_rejected() {
        assert_eq!(
            PlanParams::new(0, 2.0, 50.0).unwrap_err(),
            ParamError::ZeroTrades
        );
    }

    #[test]
    fn zero_profit_pct_rejected() {
        // Would divide by zero in the wager formula.
        assert_eq!(
            PlanParams::new(5, 0.0, 50.0).unwrap_err(),
            ParamError::NonPositiveProfitPct(0.0)
        );
    }

    #[test]
    fn negative_profit_pct_rejected() {
        assert_eq!(
            PlanParams::new(5, -2.0, 50.0).unwrap_err(),
            ParamError::NonPositiveProfitPct(-2.0)
        );
    }

    #[test]
    fn non_finite_inputs_rejected() {
        assert!(matches!(
            PlanParams::new(5, f64::NAN, 50.0).unwrap_err(),
            ParamError::NonPositiveProfitPct(_)
        ));
        assert!(matches!(
            PlanParams::new(5, 2.0, f64::INFINITY).unwrap_err(),
            ParamError::NonPositiveTarget(_)
        ));
    }

    #[test]
    fn non_positive_target_rejected() {
        assert_eq!(
            PlanParams::new(5, 2.0, 0.0).unwrap_err(),
            ParamError::NonPositiveTarget(0.0)
        );
        assert_eq!(
            PlanParams::new(5, 2.0, -10.0).unwrap_err(),
            ParamError::NonPositiveTarget(-10.0)
        );
    }
}
